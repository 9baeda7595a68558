use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use habitaciones_client::services::room_form::{
    ERR_BUSCAR, ERR_NO_ENCONTRADA, OK_CARGADA, OK_CREADA, OK_ELIMINADA,
};
use habitaciones_client::{
    Action, ClientError, FetchOutcome, FormMode, Habitacion, HabitacionesClient, Prompt,
    RoomField, RoomForm, RoomTransport,
};

// Servidor en memoria que imita `/api/habitaciones`
#[derive(Clone, Default)]
struct Store {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    rooms: HashMap<i64, Value>,
    next_id: i64,
    requests: Vec<String>,
    fail_with: Option<StatusCode>,
}

impl Store {
    fn record(&self, line: String) -> Option<StatusCode> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(line);
        inner.fail_with
    }

    fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    fn insert(&self, id: i64, room: Value) {
        self.inner.lock().unwrap().rooms.insert(id, room);
    }

    fn fail_with(&self, status: StatusCode) {
        self.inner.lock().unwrap().fail_with = Some(status);
    }
}

async fn get_room(
    State(store): State<Store>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    if let Some(status) = store.record(format!("GET /{}", id)) {
        return Err(status);
    }
    let inner = store.inner.lock().unwrap();
    inner
        .rooms
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_room(
    State(store): State<Store>,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if let Some(status) = store.record(format!("POST / {}", body)) {
        return Err(status);
    }
    let mut inner = store.inner.lock().unwrap();
    // Los ids asignados empiezan en 9
    inner.next_id = inner.next_id.max(8) + 1;
    let id = inner.next_id;
    body["id"] = json!(id);
    inner.rooms.insert(id, body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn update_room(
    State(store): State<Store>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if let Some(status) = store.record(format!("PUT /{}", id)) {
        return Err(status);
    }
    let mut inner = store.inner.lock().unwrap();
    if !inner.rooms.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    body["id"] = json!(id);
    inner.rooms.insert(id, body.clone());
    Ok(Json(body))
}

async fn delete_room(State(store): State<Store>, Path(id): Path<i64>) -> StatusCode {
    if let Some(status) = store.record(format!("DELETE /{}", id)) {
        return status;
    }
    match store.inner.lock().unwrap().rooms.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

// Levantar el servidor en un puerto libre y devolver la URL base
async fn spawn_server(store: Store) -> String {
    let app = Router::new()
        .route("/api/habitaciones", post(create_room))
        .route(
            "/api/habitaciones/:id",
            get(get_room).put(update_room).delete(delete_room),
        )
        .with_state(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api/habitaciones", addr)
}

fn client(base_url: &str) -> HabitacionesClient {
    HabitacionesClient::new(base_url, Duration::from_secs(5)).unwrap()
}

struct AutoPrompt {
    answer: bool,
    alerts: Mutex<Vec<String>>,
}

impl AutoPrompt {
    fn answering(answer: bool) -> Self {
        Self {
            answer,
            alerts: Mutex::new(Vec::new()),
        }
    }
}

impl Prompt for AutoPrompt {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }
}

fn room_a1() -> Value {
    json!({
        "id": 5,
        "codigo": "A1",
        "descripcion": "Individual interior",
        "cuartos": 1,
        "baños": 1,
        "capacidad": 1,
        "estado": "libre",
        "precio_base": 45.0
    })
}

#[tokio::test]
async fn test_client_fetch_found_and_not_found() {
    let store = Store::default();
    store.insert(5, room_a1());
    let client = client(&spawn_server(store.clone()).await);

    let found = client.fetch_by_id(5).await.unwrap();
    let expected: Habitacion = serde_json::from_value(room_a1()).unwrap();
    assert_eq!(found, FetchOutcome::Found(expected));

    let missing = client.fetch_by_id(6).await.unwrap();
    assert_eq!(missing, FetchOutcome::NotFound);

    assert_eq!(store.requests(), vec!["GET /5", "GET /6"]);
}

#[tokio::test]
async fn test_client_surfaces_status_errors() {
    let store = Store::default();
    store.fail_with(StatusCode::INTERNAL_SERVER_ERROR);
    let client = client(&spawn_server(store.clone()).await);

    let err = client.fetch_by_id(5).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { .. }));
    assert!(err.is_server_error());

    let err = client.delete(5).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_client_network_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{}/api/habitaciones", addr));
    let err = client.fetch_by_id(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(!err.is_client_error());
    assert!(!err.is_server_error());
}

#[tokio::test]
async fn test_form_hung_request_times_out() {
    async fn slow_room(Path(_id): Path<i64>) -> Json<Value> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Json(room_a1())
    }

    let app = Router::new().route("/api/habitaciones/:id", get(slow_room));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = HabitacionesClient::new(
        &format!("http://{}/api/habitaciones", addr),
        Duration::from_millis(300),
    )
    .unwrap();
    let mut form = RoomForm::new(client, AutoPrompt::answering(true));

    form.dispatch(Action::SetSearchId("5".to_string())).await;
    form.dispatch(Action::Buscar).await;

    assert!(!form.state().loading);
    assert_eq!(form.state().error.as_deref(), Some(ERR_BUSCAR));
    assert_eq!(form.state().habitacion, Habitacion::blank());
}

#[tokio::test]
async fn test_form_create_then_update_round_trip() {
    let store = Store::default();
    let base = spawn_server(store.clone()).await;
    let mut form = RoomForm::new(client(&base), AutoPrompt::answering(true));

    let edits = [
        (RoomField::Codigo, "B2"),
        (RoomField::Descripcion, "x"),
        (RoomField::Cuartos, "2"),
        (RoomField::Banos, "1"),
        (RoomField::Capacidad, "3"),
        (RoomField::Estado, "libre"),
        (RoomField::PrecioBase, "50.5"),
    ];
    for (field, value) in edits {
        form.dispatch(Action::Edit(field, value.to_string())).await;
    }
    form.dispatch(Action::Submit).await;

    let echoed: Habitacion = serde_json::from_value(json!({
        "id": 9,
        "codigo": "B2",
        "descripcion": "x",
        "cuartos": 2,
        "baños": 1,
        "capacidad": 3,
        "estado": "libre",
        "precio_base": 50.5
    }))
    .unwrap();
    assert_eq!(form.state().habitacion, echoed);
    assert_eq!(form.state().mode(), FormMode::Existing(9));
    assert_eq!(form.state().message.as_deref(), Some(OK_CREADA));
    assert!(!form.state().loading);

    form.dispatch(Action::Edit(RoomField::Estado, "ocupada".to_string()))
        .await;
    form.dispatch(Action::Submit).await;

    let requests = store.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].starts_with("POST / "));
    assert!(!requests[0].contains("\"id\""));
    assert!(requests[0].contains("\"baños\":1"));
    assert_eq!(requests[1], "PUT /9");
    assert_eq!(form.state().habitacion.estado, "ocupada");
}

#[tokio::test]
async fn test_form_search_then_delete() {
    let store = Store::default();
    store.insert(5, room_a1());
    let base = spawn_server(store.clone()).await;
    let mut form = RoomForm::new(client(&base), AutoPrompt::answering(true));

    form.dispatch(Action::SetSearchId("5".to_string())).await;
    form.dispatch(Action::Buscar).await;
    let expected: Habitacion = serde_json::from_value(room_a1()).unwrap();
    assert_eq!(form.state().habitacion, expected);
    assert_eq!(form.state().error, None);
    assert_eq!(form.state().message.as_deref(), Some(OK_CARGADA));

    form.dispatch(Action::Eliminar).await;
    assert_eq!(form.state().habitacion, Habitacion::blank());
    assert_eq!(form.state().message.as_deref(), Some(OK_ELIMINADA));

    form.dispatch(Action::Buscar).await;
    assert_eq!(form.state().habitacion, Habitacion::blank());
    assert_eq!(form.state().error.as_deref(), Some(ERR_NO_ENCONTRADA));
    assert_eq!(form.state().message, None);

    assert_eq!(store.requests(), vec!["GET /5", "DELETE /5", "GET /5"]);
}

#[tokio::test]
async fn test_form_server_error_keeps_room() {
    let store = Store::default();
    store.insert(5, room_a1());
    let base = spawn_server(store.clone()).await;
    let mut form = RoomForm::new(client(&base), AutoPrompt::answering(true));

    form.dispatch(Action::SetSearchId("5".to_string())).await;
    form.dispatch(Action::Buscar).await;
    let loaded = form.state().habitacion.clone();

    store.fail_with(StatusCode::SERVICE_UNAVAILABLE);
    form.dispatch(Action::Buscar).await;

    assert_eq!(form.state().habitacion, loaded);
    assert_eq!(form.state().error.as_deref(), Some(ERR_BUSCAR));
    assert!(!form.state().loading);
}

#[tokio::test]
async fn test_form_delete_without_room_sends_nothing() {
    let store = Store::default();
    let base = spawn_server(store.clone()).await;
    let mut form = RoomForm::new(client(&base), AutoPrompt::answering(true));

    form.dispatch(Action::Eliminar).await;

    assert!(store.requests().is_empty());
    assert_eq!(form.prompt().alerts.lock().unwrap().len(), 1);
    assert_eq!(form.state().habitacion, Habitacion::blank());
}
