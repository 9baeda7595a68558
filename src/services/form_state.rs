//! Estado del formulario de habitaciones

use crate::models::habitacion::{FormMode, Habitacion, RoomField};
use crate::utils::errors::FieldError;

/// Habitación en edición más los indicadores transitorios de la UI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub habitacion: Habitacion,
    pub search_id: String,
    pub loading: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    /// Aviso del último campo editado con un valor no convertible
    pub field_error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.habitacion.mode()
    }

    /// Marcar el inicio de una petición: loading activo y banners limpios
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
        self.message = None;
        self.field_error = None;
    }

    pub fn finish_request(&mut self) {
        self.loading = false;
    }

    pub fn set_search_id(&mut self, value: &str) {
        self.search_id = value.to_string();
    }

    /// Editar un campo; el aviso de campo refleja siempre la última edición
    pub fn edit_field(&mut self, field: RoomField, raw: &str) -> Result<(), FieldError> {
        let result = self.habitacion.set_field(field, raw);
        self.field_error = result.as_ref().err().map(|e| e.to_string());
        result
    }

    pub fn reset_habitacion(&mut self) {
        self.habitacion = Habitacion::blank();
    }
}
