//! HTTP implementation of [`avocado_core::PredictionGateway`].

mod gateway;
mod response;

pub use gateway::HttpPredictionGateway;
pub use response::interpret_response;
