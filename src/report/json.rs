use anyhow::Result;
use serde::Serialize;

use crate::models::AnalysisRecord;
use crate::session::Session;

/// Input that was rejected during a run, with the message shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedInput {
    pub input: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct SessionDocument<'a> {
    current: Option<&'a AnalysisRecord>,
    history: &'a [AnalysisRecord],
    errors: &'a [RejectedInput],
}

/// Serialize a finished session as `{ current, history, errors }`.
pub fn session_document(session: &Session, errors: &[RejectedInput]) -> Result<String> {
    let doc = SessionDocument {
        current: session.current.as_ref(),
        history: session.history.entries(),
        errors,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
