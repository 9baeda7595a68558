//! Sistema de manejo de errores
//!
//! Este módulo define los errores del transporte HTTP y de la edición
//! de campos del formulario.

use reqwest::StatusCode;
use thiserror::Error;

/// Errores del cliente de habitaciones
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Status HTTP devuelto por el servidor, si lo hubo
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// El servidor rechazó la petición (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status().map_or(false, |s| s.is_client_error())
    }

    /// El servidor falló al procesar la petición (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status().map_or(false, |s| s.is_server_error())
    }
}

/// Errores al editar un campo del formulario
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Campo desconocido: {0}")]
    UnknownField(String),

    #[error("Valor numérico inválido para {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Resultado tipado para operaciones del transporte
pub type ClientResult<T> = Result<T, ClientError>;

/// Función helper para crear errores de configuración
pub fn config_error(variable: &str, value: &str) -> ClientError {
    ClientError::Config(format!("{} has an invalid value '{}'", variable, value))
}
