//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del cliente: URL base de la API,
//! timeout de las peticiones y nivel de logging.

use std::env;
use std::time::Duration;

use tracing::Level;

use crate::utils::errors::{config_error, ClientResult};

/// URL base por defecto del recurso de habitaciones
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/habitaciones";

/// Timeout por defecto de cada petición, en segundos
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub log_level: Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("HABITACIONES_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let timeout = match lookup("HABITACIONES_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| config_error("HABITACIONES_TIMEOUT_SECS", &raw))?;
                if secs == 0 {
                    return Err(config_error("HABITACIONES_TIMEOUT_SECS", &raw));
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let log_level = match lookup("RUST_LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .map_err(|_| config_error("RUST_LOG_LEVEL", &raw))?,
            None => defaults.log_level,
        };

        Ok(Self {
            api_url,
            timeout,
            log_level,
        })
    }
}
