//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - Upstream inference server client (reqwest)
//! - Interaction log storage (JSON file, in-memory)
//! - HTTP API surface (axum)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::{api_router, Container, ContainerConfig};
