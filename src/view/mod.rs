//! Vista del formulario de habitaciones
//!
//! `FormView` se deriva del `FormState` en cada render: qué inputs se
//! muestran, qué botón de envío corresponde al modo actual y si los
//! controles están deshabilitados. Las interacciones del usuario llegan al
//! formulario como `Action`.

pub mod terminal;

use crate::models::habitacion::{FormMode, RoomField};
use crate::services::form_state::FormState;

pub const LABEL_CREAR: &str = "Crear (POST)";
pub const LABEL_ACTUALIZAR: &str = "Actualizar (PUT)";
pub const LABEL_ELIMINAR: &str = "Eliminar (DELETE)";
pub const LABEL_CARGANDO: &str = "Cargando...";

/// Interacción del usuario con el formulario
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSearchId(String),
    Edit(RoomField, String),
    Buscar,
    Submit,
    Eliminar,
}

/// Fila del formulario: un input ligado a un campo de la habitación
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub read_only: bool,
}

/// Modelo de render del formulario
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub search_id: String,
    pub error: Option<String>,
    pub message: Option<String>,
    pub field_error: Option<String>,
    pub rows: Vec<FieldRow>,
    pub submit_label: &'static str,
    pub show_delete: bool,
    pub disabled: bool,
}

impl FormView {
    pub fn from_state(state: &FormState) -> Self {
        let mode = state.mode();

        let id_row = FieldRow {
            name: "id",
            label: "ID",
            value: match mode {
                FormMode::Existing(id) => id.to_string(),
                FormMode::New => String::new(),
            },
            read_only: true,
        };
        let rows = std::iter::once(id_row)
            .chain(RoomField::ALL.iter().map(|field| FieldRow {
                name: field.name(),
                label: field.label(),
                value: state.habitacion.field_value(*field),
                read_only: false,
            }))
            .collect();

        let (submit_label, show_delete) = match mode {
            FormMode::New => (LABEL_CREAR, false),
            FormMode::Existing(_) => (LABEL_ACTUALIZAR, true),
        };

        Self {
            search_id: state.search_id.clone(),
            error: state.error.clone(),
            message: state.message.clone(),
            field_error: state.field_error.clone(),
            rows,
            submit_label,
            show_delete,
            disabled: state.loading,
        }
    }
}
