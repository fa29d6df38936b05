use avocado_core::GatewayError;
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predicted_price: f64,
}

/// Turns a received response into a prediction or an error.
///
/// Only status 200 counts as success. Every other status becomes
/// [`GatewayError::Status`] carrying the serialized body.
pub fn interpret_response(
    status: u16,
    body: &str,
    headers: Vec<(String, String)>,
) -> Result<f64, GatewayError> {
    if status != 200 {
        error!(status, body, ?headers, "prediction service returned an error status");
        return Err(GatewayError::from_status(status, body, headers));
    }

    serde_json::from_str::<PredictResponse>(body)
        .map(|response| response.predicted_price)
        .map_err(|e| {
            error!(body, error = %e, "prediction response has no usable predicted_price");
            GatewayError::InvalidResponse(e.to_string())
        })
}
