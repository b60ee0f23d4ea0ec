//! Controllers del sistema
//!
//! Validan la entrada, orquestan los repositorios y arman los DTOs de
//! respuesta. Los handlers de routes/ delegan acá.

pub mod bill_controller;
pub mod driver_controller;
pub mod trip_controller;
