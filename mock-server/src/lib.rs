use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Full-record overwrite body for PUT. All fields required; an `id` field in
/// the body is ignored in favor of the path id.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Fixed payload for the message feed endpoint the demo pages consume.
pub const MESSAGES: [&str; 3] = [
    "Hello from the server",
    "Second message endpoint is alive",
    "Content served over the REST API",
];

#[derive(Default)]
pub struct Store {
    employees: HashMap<i64, Employee>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/secondMessages", get(list_messages))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Employee>> {
    let store = db.read().await;
    let mut employees: Vec<Employee> = store.employees.values().cloned().collect();
    employees.sort_by_key(|e| e.id);
    Json(employees)
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<CreateEmployee>,
) -> (StatusCode, Json<Employee>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let employee = Employee {
        id: store.next_id,
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
    };
    store.employees.insert(employee.id, employee.clone());
    (StatusCode::CREATED, Json(employee))
}

async fn get_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, StatusCode> {
    let store = db.read().await;
    store.employees.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateEmployee>,
) -> Result<Json<Employee>, StatusCode> {
    let mut store = db.write().await;
    let employee = store.employees.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    employee.first_name = input.first_name;
    employee.last_name = input.last_name;
    employee.email = input.email;
    Ok(Json(employee.clone()))
}

async fn delete_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.employees.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn list_messages() -> Json<Vec<String>> {
    Json(MESSAGES.iter().map(|m| m.to_string()).collect())
}
