pub mod config;
pub mod error;

use async_trait::async_trait;

use crate::models::DraftRecord;

pub use config::{ConfigError, GatewayConfig};
pub use error::GatewayError;

/// The remote service that turns a draft record into a predicted price.
///
/// Implementations make exactly one call per `predict` and never retry. They
/// impose no limit on concurrent calls; the form decides when a submission
/// may start.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    async fn predict(
        &self,
        record: &DraftRecord,
    ) -> Result<f64, GatewayError>;
}
