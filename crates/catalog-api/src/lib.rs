//! # catalog-api
//!
//! HTTP API layer for partner-catalog-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Partner login issuing bearer tokens
//! - Bearer-token gate in front of the product endpoints
//! - Environment profiles for configuration
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/auth/login` | Exchange partner credentials for a token |
//! | GET | `/produtos` | List products |
//! | POST | `/produtos` | Create product |
//! | GET | `/produtos/count` | Product count |
//! | GET | `/produtos/search?name=` | Search by name |
//! | GET | `/produtos/{id}` | Get product |
//! | PUT/PATCH | `/produtos/{id}` | Merge-update product |
//! | DELETE | `/produtos/{id}` | Delete product |

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError, Environment};
pub use response::{ApiError, ApiResponse, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
