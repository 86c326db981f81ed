#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE},
};
use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    di::DependenciesInjectDeps,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    handler::AppRouter,
    model::product::Product as ProductModel,
    state::AppState,
};
use serde_json::Value;
use shared::errors::RepositoryError;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};
use tower::ServiceExt;

/// How the next `update_product` call misbehaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFault {
    /// Another request deletes the row between read and write.
    RowVanishes,
    /// Another writer modified the row; it still exists.
    ConcurrentWriter,
}

#[derive(Default)]
struct StoreState {
    rows: BTreeMap<i32, ProductModel>,
    last_id: i32,
    update_fault: Option<UpdateFault>,
}

/// Store backed by a map, with the same observable semantics as the
/// Postgres repositories.
///
/// Keep it in step with the SQL in `src/repository`: `find_by_name` returns
/// the lowest id among equal names (`ORDER BY id LIMIT 1`, here the `BTreeMap`
/// key order) and `delete_products` counts only ids that matched a row
/// (`id = ANY($1)`). `tests/postgres_repository.rs` pins the SQL side.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, name: &str) -> ProductModel {
        let mut state = self.state.lock().unwrap();
        insert(&mut state, name, None, 0)
    }

    pub fn get(&self, id: i32) -> Option<ProductModel> {
        self.state.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn ids(&self) -> Vec<i32> {
        self.state.lock().unwrap().rows.keys().copied().collect()
    }

    pub fn fail_next_update(&self, fault: UpdateFault) {
        self.state.lock().unwrap().update_fault = Some(fault);
    }
}

fn insert(
    state: &mut StoreState,
    name: &str,
    description: Option<String>,
    price: i64,
) -> ProductModel {
    state.last_id += 1;
    let row = ProductModel {
        id: state.last_id,
        name: name.to_string(),
        description,
        price,
    };
    state.rows.insert(row.id, row.clone());
    row
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductStore {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        Ok(self.state.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ProductModel>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .values()
            .find(|row| row.name == name)
            .cloned())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.state.lock().unwrap().rows.contains_key(&id))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductStore {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        Ok(insert(
            &mut state,
            &req.name,
            req.description.clone(),
            req.price,
        ))
    }

    async fn create_products(
        &self,
        reqs: &[CreateProductRequest],
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        Ok(reqs
            .iter()
            .map(|req| insert(&mut state, &req.name, req.description.clone(), req.price))
            .collect())
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut state = self.state.lock().unwrap();

        match state.update_fault.take() {
            Some(UpdateFault::RowVanishes) => {
                state.rows.remove(&req.id);
                return Err(RepositoryError::Conflict("row was deleted".into()));
            }
            Some(UpdateFault::ConcurrentWriter) => {
                return Err(RepositoryError::Conflict("could not serialize access".into()));
            }
            None => {}
        }

        let row = state
            .rows
            .get_mut(&req.id)
            .ok_or(RepositoryError::NotFound)?;
        row.name = req.name.clone();
        row.description = req.description.clone();
        row.price = req.price;
        Ok(row.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.state.lock().unwrap().rows.remove(&id).is_some())
    }

    async fn delete_products(&self, ids: &[i32]) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .filter(|id| state.rows.remove(*id).is_some())
            .count() as u64)
    }
}

pub fn app(store: &InMemoryProductStore) -> Router {
    let deps = DependenciesInjectDeps {
        query: Arc::new(store.clone()),
        command: Arc::new(store.clone()),
    };
    AppRouter::build(Arc::new(AppState::new(deps)))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
