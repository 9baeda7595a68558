//! Servicios del formulario
//!
//! Este módulo contiene el estado del formulario y los handlers que lo
//! actualizan a partir de las respuestas de la API.

pub mod form_state;
pub mod room_form;

pub use form_state::FormState;
pub use room_form::{Prompt, RoomForm};
