//! Client side of an external comment-sentiment service.
//!
//! [`scrape`] picks comment-like text out of a saved page; [`client`] posts it
//! as `{"comments": [...]}` and reads back `{positive, negative, neutral}`.
//! No classification happens locally.

pub mod client;
pub mod scrape;
