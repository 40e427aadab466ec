use async_trait::async_trait;
use gloo_net::http::Request;
use log::{debug, info, warn};
use serde::Deserialize;

use super::submission::FormSubmission;
use crate::config;
use crate::error::TransportError;

/// JSON body the relay sends back. Informational; delivery is judged by
/// the HTTP status alone.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct RelayReply {
    #[serde(default, deserialize_with = "flag")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

// The relay sends `"success": "true"` as a string
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Primary delivery path for a submission.
#[async_trait(?Send)]
pub trait Relay {
    async fn post(&self, submission: &FormSubmission) -> Result<(), TransportError>;
}

/// Posts to the hosted form relay. One attempt, default browser timeout.
pub struct FormRelay {
    url: String,
}

impl Default for FormRelay {
    fn default() -> Self {
        Self {
            url: config::get_relay_url(),
        }
    }
}

#[async_trait(?Send)]
impl Relay for FormRelay {
    async fn post(&self, submission: &FormSubmission) -> Result<(), TransportError> {
        info!("Posting {:?} form to relay", submission.kind);
        let response = Request::post(&self.url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(submission.encode_body())
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        match response.json::<RelayReply>().await {
            Ok(reply) if reply.success => debug!("Relay accepted: {}", reply.message),
            Ok(reply) => warn!("Relay returned 2xx without success flag: {}", reply.message),
            Err(e) => debug!("Relay reply was not JSON: {}", e),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_with_string_flag() {
        let reply: RelayReply = serde_json::from_str(
            r#"{"success":"true","message":"The form was submitted successfully."}"#,
        )
        .unwrap();
        assert!(reply.success);
        assert_eq!(reply.message, "The form was submitted successfully.");
    }

    #[test]
    fn test_reply_with_missing_fields() {
        let reply: RelayReply = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(reply, RelayReply::default());

        let reply: RelayReply = serde_json::from_str("{}").unwrap();
        assert!(!reply.success);
    }
}
