//! Reference data endpoints of the remote API.

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;
use async_trait::async_trait;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_client::Client;
use contracts::domain::a003_machine::Machine;
use contracts::domain::a004_responsible::Responsible;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Source of the shared reference datasets.
#[async_trait(?Send)]
pub trait ReferenceApi {
    async fn products(&self) -> Result<Vec<Product>, ApiError>;
    async fn clients(&self) -> Result<Vec<Client>, ApiError>;
    async fn machines(&self) -> Result<Vec<Machine>, ApiError>;
    async fn responsibles(&self) -> Result<Vec<Responsible>, ApiError>;
}

/// `gloo-net` client authenticated with the stored access token.
#[derive(Debug, Default, Clone)]
pub struct HttpReferenceApi;

impl HttpReferenceApi {
    pub fn new() -> Self {
        Self
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let mut request = Request::get(&api_url(path)).header("Accept", "application/json");
        if let Some(token) = storage::get_access_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ReferenceApi for HttpReferenceApi {
    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_list("/api/productos").await
    }

    async fn clients(&self) -> Result<Vec<Client>, ApiError> {
        self.get_list("/api/clientes").await
    }

    async fn machines(&self) -> Result<Vec<Machine>, ApiError> {
        self.get_list("/api/maquinas").await
    }

    async fn responsibles(&self) -> Result<Vec<Responsible>, ApiError> {
        self.get_list("/api/responsables").await
    }
}
