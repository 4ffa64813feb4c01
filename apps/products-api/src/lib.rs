//! Products API - REST server for the product catalogue
//!
//! ## Modules
//!
//! - `app`: Router assembly ([`build_app`])
//! - `api`: Route groups (API root, products, readiness)
//! - `config`: Environment configuration
//! - `db`: Lazy pool construction and background schema sync

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod openapi;
pub mod state;

pub use app::build_app;
pub use config::Config;
pub use state::AppState;
