//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del cliente leída del entorno.

pub mod environment;

pub use environment::*;
