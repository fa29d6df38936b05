use async_trait::async_trait;
use avocado_core::{
    ConfigError, DraftRecord, GatewayConfig, GatewayError, PredictionGateway, to_wire_payload,
};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use tracing::{debug, error};

use crate::response::interpret_response;

/// [`PredictionGateway`] backed by a `reqwest` client.
///
/// Sends one `POST {api_url}/predict` per prediction. No timeout is set and
/// nothing is retried. Non-2xx responses are never turned into transport
/// errors; their status, body and headers reach [`interpret_response`].
///
/// A missing service location or an HTTP client that failed to initialize
/// does not stop the gateway from being built. Every call to `predict` then
/// fails with [`GatewayError::Setup`], which the form reports as an alert.
///
/// ```rust,no_run
/// use avocado_core::GatewayConfig;
/// use avocado_gateway_http::HttpPredictionGateway;
///
/// let gateway = HttpPredictionGateway::new(GatewayConfig::from_env());
/// ```
#[derive(Debug, Clone)]
pub struct HttpPredictionGateway {
    http: Result<reqwest::Client, GatewayError>,
    config: Result<GatewayConfig, ConfigError>,
}

impl HttpPredictionGateway {
    /// Builds a gateway with a fresh HTTP client.
    pub fn new(config: Result<GatewayConfig, ConfigError>) -> Self {
        let http = reqwest::Client::builder().build().map_err(|e| {
            error!(error = ?e, "failed to initialize HTTP client");
            GatewayError::Setup(e.to_string())
        });
        if let Err(e) = &config {
            error!(error = %e, "prediction service is not configured");
        }
        Self { http, config }
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn predict(
        &self,
        record: &DraftRecord,
    ) -> Result<f64, GatewayError> {
        let config = self.config.as_ref().map_err(|e| {
            error!(error = %e, "prediction request not sent: no service configured");
            GatewayError::Setup(e.to_string())
        })?;
        let http = self.http.as_ref().map_err(|e| e.clone())?;

        let url = config.predict_url();
        let payload = to_wire_payload(record);
        debug!(%url, payload = ?payload, "sending prediction request");

        let response = http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| send_error(&url, e))?;

        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());
        let body = response.text().await.map_err(|e| {
            error!(%url, status, error = ?e, "response body could not be read");
            GatewayError::NoResponse(format!("response body could not be read: {e}"))
        })?;
        debug!(status, %body, ?headers, "prediction response received");

        interpret_response(status, &body, headers)
    }
}

/// Sorts a failed send into "never left" and "left but got no answer".
fn send_error(
    url: &str,
    e: reqwest::Error,
) -> GatewayError {
    if e.is_builder() {
        error!(url, error = ?e, "prediction request could not be built");
        GatewayError::Setup(e.to_string())
    } else {
        error!(url, error = ?e, "prediction request sent but no response received");
        GatewayError::NoResponse(e.to_string())
    }
}

fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}
