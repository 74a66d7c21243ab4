//! Controladores
//!
//! Reglas de negocio entre las rutas y los repositorios.

pub mod admin_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod car_controller;
pub mod contact_controller;
pub mod host_controller;
