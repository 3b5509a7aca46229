//! # Paygate REST
//!
//! Axum adapter for the gateway's response layer: turns the shared
//! envelopes and error classifications from `paygate-types` into HTTP
//! responses. Handlers live with the routing layer elsewhere; this
//! crate only renders.

pub mod error;
pub mod respond;

pub use error::ApiError;
pub use respond::{ApiCreated, ApiOk, ApiPage};
