pub mod form;
pub mod gateway;
pub mod models;

pub use form::{FormError, FormObserver, PredictionForm, SubmitOutcome};
pub use gateway::{ConfigError, GatewayConfig, GatewayError, PredictionGateway};
pub use models::*;
