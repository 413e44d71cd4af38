//! aliasd API library
//!
//! This crate contains the HTTP server components for the aliasd
//! email-alias service.

pub mod alias;
pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
