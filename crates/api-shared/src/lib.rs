//! # API Shared
//!
//! Response types and shared services for the studio REST API.
//!
//! Contains:
//! - JSON response bodies (`HealthRes`, `ViewListRes`, `ViewRes`, `NavigationRes`)
//! - `HealthService`
//!
//! Kept free of `studio-core` so clients can depend on the wire types alone.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
