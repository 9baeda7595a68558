//! Modelo de Habitacion
//!
//! Este módulo contiene el struct Habitacion tal como viaja por la API REST,
//! el modo del formulario (crear o actualizar) y la edición campo a campo.
//! Los nombres JSON deben coincidir exactamente con los del servidor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::utils::errors::FieldError;
use crate::utils::validation::{
    parse_decimal, parse_integer, validate_non_negative, validate_not_empty,
};

/// Habitación - mapea exactamente al JSON de `/api/habitaciones`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Habitacion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(custom = "validate_not_empty")]
    pub codigo: String,

    #[validate(custom = "validate_not_empty")]
    pub descripcion: String,

    #[validate(range(min = 1))]
    pub cuartos: i32,

    #[serde(rename = "baños")]
    #[validate(range(min = 1))]
    pub banos: i32,

    #[validate(range(min = 1))]
    pub capacidad: i32,

    #[validate(custom = "validate_not_empty")]
    pub estado: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "validate_non_negative")]
    pub precio_base: Decimal,
}

/// Habitación en blanco: estado inicial del formulario
impl Default for Habitacion {
    fn default() -> Self {
        Self {
            id: None,
            codigo: String::new(),
            descripcion: String::new(),
            cuartos: 1,
            banos: 1,
            capacidad: 1,
            estado: String::new(),
            precio_base: Decimal::ZERO,
        }
    }
}

/// Modo del formulario según la habitación cargada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Existing(i64),
}

impl Habitacion {
    /// Habitación en blanco
    pub fn blank() -> Self {
        Self::default()
    }

    /// `New` mientras la habitación no tenga un id asignado por el servidor.
    /// Un id 0 cuenta como ausente.
    pub fn mode(&self) -> FormMode {
        match self.id {
            Some(id) if id != 0 => FormMode::Existing(id),
            _ => FormMode::New,
        }
    }

    /// Valor actual de un campo, como texto para el input
    pub fn field_value(&self, field: RoomField) -> String {
        match field {
            RoomField::Codigo => self.codigo.clone(),
            RoomField::Descripcion => self.descripcion.clone(),
            RoomField::Cuartos => self.cuartos.to_string(),
            RoomField::Banos => self.banos.to_string(),
            RoomField::Capacidad => self.capacidad.to_string(),
            RoomField::Estado => self.estado.clone(),
            RoomField::PrecioBase => self.precio_base.to_string(),
        }
    }

    /// Asignar un campo desde el texto del input
    ///
    /// Los campos numéricos se convierten; si la conversión falla la
    /// habitación queda intacta.
    pub fn set_field(&mut self, field: RoomField, raw: &str) -> Result<(), FieldError> {
        let invalid = || FieldError::InvalidNumber {
            field: field.name(),
            value: raw.to_string(),
        };

        match field {
            RoomField::Codigo => self.codigo = raw.to_string(),
            RoomField::Descripcion => self.descripcion = raw.to_string(),
            RoomField::Estado => self.estado = raw.to_string(),
            RoomField::Cuartos => self.cuartos = parse_integer(raw).ok_or_else(invalid)?,
            RoomField::Banos => self.banos = parse_integer(raw).ok_or_else(invalid)?,
            RoomField::Capacidad => self.capacidad = parse_integer(raw).ok_or_else(invalid)?,
            RoomField::PrecioBase => self.precio_base = parse_decimal(raw).ok_or_else(invalid)?,
        }
        Ok(())
    }
}

/// Campos editables del formulario (el id es de solo lectura)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomField {
    Codigo,
    Descripcion,
    Cuartos,
    Banos,
    Capacidad,
    Estado,
    PrecioBase,
}

impl RoomField {
    pub const ALL: [RoomField; 7] = [
        RoomField::Codigo,
        RoomField::Descripcion,
        RoomField::Cuartos,
        RoomField::Banos,
        RoomField::Capacidad,
        RoomField::Estado,
        RoomField::PrecioBase,
    ];

    /// Nombre del campo en el JSON
    pub fn name(self) -> &'static str {
        match self {
            RoomField::Codigo => "codigo",
            RoomField::Descripcion => "descripcion",
            RoomField::Cuartos => "cuartos",
            RoomField::Banos => "baños",
            RoomField::Capacidad => "capacidad",
            RoomField::Estado => "estado",
            RoomField::PrecioBase => "precio_base",
        }
    }

    /// Etiqueta visible en el formulario
    pub fn label(self) -> &'static str {
        match self {
            RoomField::Codigo => "Código",
            RoomField::Descripcion => "Descripción",
            RoomField::Cuartos => "Cuartos",
            RoomField::Banos => "Baños",
            RoomField::Capacidad => "Capacidad",
            RoomField::Estado => "Estado",
            RoomField::PrecioBase => "Precio Base",
        }
    }
}

impl fmt::Display for RoomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoomField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "codigo" => Ok(RoomField::Codigo),
            "descripcion" => Ok(RoomField::Descripcion),
            "cuartos" => Ok(RoomField::Cuartos),
            "baños" | "banos" => Ok(RoomField::Banos),
            "capacidad" => Ok(RoomField::Capacidad),
            "estado" => Ok(RoomField::Estado),
            "precio_base" => Ok(RoomField::PrecioBase),
            other => Err(FieldError::UnknownField(other.to_string())),
        }
    }
}
