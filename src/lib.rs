//! Cliente del recurso REST `/api/habitaciones`
//!
//! Formulario CRUD de habitaciones: búsqueda por id, alta, modificación y
//! baja contra la API del hotel.

pub mod clients;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;
pub mod view;

pub use clients::{FetchOutcome, HabitacionesClient, RoomTransport};
pub use config::EnvironmentConfig;
pub use models::{FormMode, Habitacion, RoomField};
pub use services::{FormState, Prompt, RoomForm};
pub use utils::errors::{ClientError, ClientResult, FieldError};
pub use view::{Action, FormView};
