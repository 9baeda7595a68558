//! Cliente HTTP para la API de habitaciones
//!
//! Este módulo contiene el trait de transporte que usa el formulario y su
//! implementación con reqwest contra `/api/habitaciones`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::environment::EnvironmentConfig;
use crate::models::habitacion::Habitacion;
use crate::utils::errors::{ClientError, ClientResult};

/// Resultado de buscar una habitación por id
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(Habitacion),
    NotFound,
}

/// Operaciones CRUD sobre el recurso de habitaciones
#[async_trait]
pub trait RoomTransport: Send + Sync {
    /// GET `{base}/{id}`; un 404 no es un error sino `NotFound`
    async fn fetch_by_id(&self, id: i64) -> ClientResult<FetchOutcome>;

    /// POST `{base}` con la habitación completa, sin id
    async fn create(&self, habitacion: &Habitacion) -> ClientResult<Habitacion>;

    /// PUT `{base}/{id}` con la habitación completa
    async fn update(&self, id: i64, habitacion: &Habitacion) -> ClientResult<Habitacion>;

    /// DELETE `{base}/{id}`
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// Cliente HTTP para `/api/habitaciones`
#[derive(Debug, Clone)]
pub struct HabitacionesClient {
    client: Client,
    base_url: String,
}

impl HabitacionesClient {
    /// Crear nuevo cliente HTTP con URL base y timeout configurables
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Crear el cliente a partir de la configuración del entorno
    pub fn from_config(config: &EnvironmentConfig) -> ClientResult<Self> {
        Self::new(&config.api_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Convertir un status no exitoso en error, conservando el cuerpo para el log
    async fn ensure_success(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status { status, body })
    }

    async fn decode(response: Response) -> ClientResult<Habitacion> {
        let body = response.text().await?;
        let habitacion: Habitacion = serde_json::from_str(&body)?;
        Ok(habitacion)
    }
}

#[async_trait]
impl RoomTransport for HabitacionesClient {
    async fn fetch_by_id(&self, id: i64) -> ClientResult<FetchOutcome> {
        let url = self.item_url(id);
        debug!("🌐 GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            info!("🔍 Habitación {} no existe en el servidor", id);
            return Ok(FetchOutcome::NotFound);
        }

        let response = Self::ensure_success(response).await?;
        Ok(FetchOutcome::Found(Self::decode(response).await?))
    }

    async fn create(&self, habitacion: &Habitacion) -> ClientResult<Habitacion> {
        debug!("🌐 POST {}", self.base_url);

        let response = self
            .client
            .post(&self.base_url)
            .json(habitacion)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Self::decode(response).await
    }

    async fn update(&self, id: i64, habitacion: &Habitacion) -> ClientResult<Habitacion> {
        let url = self.item_url(id);
        debug!("🌐 PUT {}", url);

        let response = self.client.put(&url).json(habitacion).send().await?;

        let response = Self::ensure_success(response).await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let url = self.item_url(id);
        debug!("🌐 DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
