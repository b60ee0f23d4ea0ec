//! Repositorios de acceso a datos
//!
//! Cada repositorio envuelve el pool y ejecuta exclusivamente queries
//! parametrizadas contra su tabla.

pub mod bill_repository;
pub mod driver_repository;
pub mod trip_repository;
