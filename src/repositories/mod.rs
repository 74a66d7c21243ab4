//! Acceso a datos
//!
//! Repositorios con queries runtime de SQLx; nunca interpolación de strings.

pub mod booking_repository;
pub mod car_repository;
pub mod message_repository;
pub mod user_repository;
