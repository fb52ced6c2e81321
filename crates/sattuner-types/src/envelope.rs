use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of one invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

/// The single structured object every operation writes to stdout.
///
/// Keeping this generic allows each operation to embed its own payload while
/// still enforcing a stable outer shape: `{status, message, data}` and
/// nothing else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Envelope<TData = serde_json::Value> {
    pub status: RunStatus,
    pub message: String,
    pub data: TData,
}

impl<TData> Envelope<TData> {
    pub fn success(message: impl Into<String>, data: TData) -> Self {
        Self {
            status: RunStatus::Success,
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>, data: TData) -> Self {
        Self {
            status: RunStatus::Error,
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_has_exactly_three_fields() {
        let env = Envelope::success("done", serde_json::json!({}));
        let value = serde_json::to_value(&env).expect("serialize envelope");
        let obj = value.as_object().expect("object");
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["status"], "success");
        assert_eq!(obj["message"], "done");
        assert!(obj["data"].is_object());
    }

    #[test]
    fn error_status_serializes_lowercase() {
        let env: Envelope = Envelope::error("boom", serde_json::json!({}));
        let value = serde_json::to_value(&env).expect("serialize envelope");
        assert_eq!(value["status"], "error");
    }
}
