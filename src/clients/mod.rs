//! Clients - HTTP Clients for External APIs
//!
//! This module contains the HTTP client for the rooms REST resource.

pub mod habitaciones_client;

// Re-export main types for convenience
pub use habitaciones_client::{FetchOutcome, HabitacionesClient, RoomTransport};
