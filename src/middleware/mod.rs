//! Middleware del sistema
//!
//! Autenticación, control de acceso por rol y CORS.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
