//! Formulario CRUD de habitaciones
//!
//! `RoomForm` es dueño del `FormState` y ejecuta las cuatro operaciones
//! (buscar, crear, actualizar, eliminar) contra un `RoomTransport`.
//! Los diálogos bloqueantes se inyectan con el trait `Prompt`, de modo que
//! la lógica no depende de ninguna interfaz concreta.

use tracing::{error, info, warn};
use validator::Validate;

use crate::clients::habitaciones_client::{FetchOutcome, RoomTransport};
use crate::models::habitacion::FormMode;
use crate::services::form_state::FormState;
use crate::utils::errors::ClientError;
use crate::utils::validation::parse_search_id;
use crate::view::Action;

pub const MSG_ID_INVALIDO: &str = "Introduce un ID válido para buscar";
pub const MSG_SIN_HABITACION_ACTUALIZAR: &str = "No hay habitación cargada para actualizar";
pub const MSG_SIN_HABITACION_ELIMINAR: &str = "No hay habitación cargada para eliminar";
pub const MSG_CONFIRMAR_ELIMINAR: &str = "¿Seguro que quieres eliminar esta habitación?";

pub const ERR_NO_ENCONTRADA: &str = "Habitación no encontrada";
pub const ERR_BUSCAR: &str = "Error al buscar habitación";
pub const ERR_CREAR: &str = "Error al crear habitación";
pub const ERR_ACTUALIZAR: &str = "Error al actualizar habitación";
pub const ERR_ELIMINAR: &str = "Error al eliminar habitación";

pub const OK_CARGADA: &str = "Habitación cargada correctamente";
pub const OK_CREADA: &str = "Habitación creada con éxito";
pub const OK_ACTUALIZADA: &str = "Habitación actualizada con éxito";
pub const OK_ELIMINADA: &str = "Habitación eliminada con éxito";

/// Diálogos bloqueantes del formulario
pub trait Prompt {
    /// Aviso que el usuario debe cerrar
    fn alert(&self, message: &str);

    /// Pregunta sí/no; `true` si el usuario acepta
    fn confirm(&self, message: &str) -> bool;
}

/// Formulario de habitaciones
pub struct RoomForm<T, P> {
    state: FormState,
    transport: T,
    prompt: P,
}

impl<T: RoomTransport, P: Prompt> RoomForm<T, P> {
    pub fn new(transport: T, prompt: P) -> Self {
        Self {
            state: FormState::new(),
            transport,
            prompt,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Ejecutar una acción del usuario
    ///
    /// Mientras hay una petición en curso los controles están deshabilitados
    /// y cualquier acción se ignora.
    pub async fn dispatch(&mut self, action: Action) {
        if self.state.loading {
            warn!("⏳ Acción ignorada, hay una petición en curso: {:?}", action);
            return;
        }

        match action {
            Action::SetSearchId(value) => self.state.set_search_id(&value),
            Action::Edit(field, raw) => {
                if let Err(e) = self.state.edit_field(field, &raw) {
                    warn!("⚠️ {}", e);
                }
            }
            Action::Buscar => self.buscar().await,
            Action::Submit => self.submit().await,
            Action::Eliminar => self.eliminar().await,
        }
    }

    /// Enviar el formulario: crea o actualiza según el modo
    pub async fn submit(&mut self) {
        match self.state.mode() {
            FormMode::New => self.crear().await,
            FormMode::Existing(_) => self.actualizar().await,
        }
    }

    /// Buscar habitación por id (GET)
    pub async fn buscar(&mut self) {
        let Some(id) = parse_search_id(&self.state.search_id) else {
            self.prompt.alert(MSG_ID_INVALIDO);
            return;
        };

        info!("🔍 Buscando habitación {}", id);
        self.state.begin_request();
        let result = self.transport.fetch_by_id(id).await;
        match result {
            Ok(FetchOutcome::Found(habitacion)) => {
                info!("✅ Habitación {} cargada", id);
                self.state.habitacion = habitacion;
                self.state.message = Some(OK_CARGADA.to_string());
            }
            Ok(FetchOutcome::NotFound) => {
                self.state.error = Some(ERR_NO_ENCONTRADA.to_string());
                self.state.reset_habitacion();
            }
            Err(e) => self.fail("buscar", ERR_BUSCAR, &e),
        }
        self.state.finish_request();
    }

    /// Crear nueva habitación (POST)
    pub async fn crear(&mut self) {
        if !self.check_constraints() {
            return;
        }

        info!("📝 Creando habitación {}", self.state.habitacion.codigo);
        self.state.begin_request();
        let result = self.transport.create(&self.state.habitacion).await;
        match result {
            Ok(habitacion) => {
                info!("✅ Habitación creada con id {:?}", habitacion.id);
                self.state.habitacion = habitacion;
                self.state.message = Some(OK_CREADA.to_string());
            }
            Err(e) => self.fail("crear", ERR_CREAR, &e),
        }
        self.state.finish_request();
    }

    /// Actualizar habitación (PUT)
    pub async fn actualizar(&mut self) {
        let FormMode::Existing(id) = self.state.mode() else {
            self.prompt.alert(MSG_SIN_HABITACION_ACTUALIZAR);
            return;
        };
        if !self.check_constraints() {
            return;
        }

        info!("📝 Actualizando habitación {}", id);
        self.state.begin_request();
        let result = self.transport.update(id, &self.state.habitacion).await;
        match result {
            Ok(habitacion) => {
                info!("✅ Habitación {} actualizada", id);
                self.state.habitacion = habitacion;
                self.state.message = Some(OK_ACTUALIZADA.to_string());
            }
            Err(e) => self.fail("actualizar", ERR_ACTUALIZAR, &e),
        }
        self.state.finish_request();
    }

    /// Eliminar habitación (DELETE), previa confirmación
    pub async fn eliminar(&mut self) {
        let FormMode::Existing(id) = self.state.mode() else {
            self.prompt.alert(MSG_SIN_HABITACION_ELIMINAR);
            return;
        };
        if !self.prompt.confirm(MSG_CONFIRMAR_ELIMINAR) {
            info!("↩️ Eliminación de la habitación {} cancelada", id);
            return;
        }

        info!("🗑️ Eliminando habitación {}", id);
        self.state.begin_request();
        let result = self.transport.delete(id).await;
        match result {
            Ok(()) => {
                info!("✅ Habitación {} eliminada", id);
                self.state.reset_habitacion();
                self.state.message = Some(OK_ELIMINADA.to_string());
            }
            Err(e) => self.fail("eliminar", ERR_ELIMINAR, &e),
        }
        self.state.finish_request();
    }

    /// Restricciones del formulario (required / min) antes de enviar
    fn check_constraints(&self) -> bool {
        match self.state.habitacion.validate() {
            Ok(()) => true,
            Err(errors) => {
                let mut campos: Vec<&str> = errors.field_errors().keys().copied().collect();
                campos.sort_unstable();
                let aviso = format!("Revisa los campos del formulario: {}", campos.join(", "));
                warn!("⚠️ {}", aviso);
                self.prompt.alert(&aviso);
                false
            }
        }
    }

    fn fail(&mut self, operation: &str, message: &str, e: &ClientError) {
        if e.is_client_error() {
            warn!("⚠️ Petición rechazada al {}: {}", operation, e);
        } else if e.is_server_error() {
            error!("❌ Error del servidor al {}: {}", operation, e);
        } else {
            error!("❌ Error de transporte al {}: {}", operation, e);
        }
        self.state.error = Some(message.to_string());
    }
}
