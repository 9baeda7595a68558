//! Modelos de datos del sistema
//!
//! Este módulo contiene la entidad Habitacion y los tipos asociados
//! al formulario.

pub mod habitacion;

pub use habitacion::*;
