use serde_json::Value;
use thiserror::Error;

use crate::models::wire_number;

/// Text shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "Erreur inconnue";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The service answered with something other than 200.
    ///
    /// `body` is the response body serialized as JSON.
    #[error("Erreur {status}: {body}")]
    Status {
        status: u16,
        body: String,
        headers: Vec<(String, String)>,
    },

    /// The request went out but no response came back.
    #[error("no response received: {0}")]
    NoResponse(String),

    /// The request could not be built or sent.
    #[error("{0}")]
    Setup(String),

    /// A 200 response without a usable `predicted_price`.
    #[error("invalid prediction response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Builds a [`GatewayError::Status`] from the raw response body text.
    pub fn from_status(
        status: u16,
        raw_body: &str,
        headers: Vec<(String, String)>,
    ) -> Self {
        Self::Status {
            status,
            body: serialize_body(raw_body),
            headers,
        }
    }

    /// Message for the blocking alert raised on a failed submission.
    pub fn alert_text(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            format!("Erreur: {UNKNOWN_ERROR}")
        } else {
            format!("Erreur: {message}")
        }
    }
}

/// Serializes a response body for error messages.
///
/// JSON bodies are re-encoded compactly, with integral numbers written
/// without a fraction (`1`, not `1.0`); any other text is encoded as a JSON
/// string literal.
pub fn serialize_body(raw_body: &str) -> String {
    serde_json::from_str::<Value>(raw_body)
        .map(integral_numbers)
        .unwrap_or_else(|_| Value::String(raw_body.to_string()))
        .to_string()
}

fn integral_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) => wire_number(f),
            None => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(integral_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, integral_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}
