use sattuner_types::{Envelope, RunStatus};

/// Envelope emitted when an operation dies on an internal error. The
/// boundary never shows a raw error chain as a crash; it becomes a regular
/// error envelope with an empty payload.
pub fn runtime_error_envelope(message: &str) -> Envelope {
    Envelope::error(message, serde_json::json!({}))
}

/// Map envelope status to exit code: 0 = success, 1 = error.
///
/// The host agent this replaces left the process exit at 0 for business
/// errors; callers that scripted around it should switch to the exit code.
pub fn status_exit_code(status: RunStatus) -> i32 {
    match status {
        RunStatus::Success => 0,
        RunStatus::Error => 1,
    }
}
