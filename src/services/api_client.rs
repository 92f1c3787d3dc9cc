// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Sin lógica de negocio: construye requests, adjunta el token de sesión
// como `Authorization: Bearer` y traduce respuestas a `ApiError`.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::models::{
    Business, BusinessPayload, ErrorBody, ListResponse, LoginRequest, LoginResponse, Sale,
    SalePayload, SignupRequest,
};
use crate::utils::constants::{BUSINESS_PATH, LOGIN_PATH, SALES_PATH, SIGNUP_PATH};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Http { status: u16, message: Option<String> },
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// `message` enviado por el servidor, si lo hubo
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Texto para el usuario: mensaje del servidor o el genérico
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Operaciones del backend que usa el dashboard
#[async_trait(?Send)]
pub trait AdminApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;
    async fn list_businesses(&self) -> Result<Vec<Business>, ApiError>;
    async fn create_business(&self, payload: &BusinessPayload) -> Result<(), ApiError>;
    async fn update_business(&self, id: i64, payload: &BusinessPayload) -> Result<(), ApiError>;
    async fn list_sales(&self) -> Result<Vec<Sale>, ApiError>;
    async fn create_sale(&self, payload: &SalePayload) -> Result<(), ApiError>;
}

/// Cliente HTTP (gloo-net). Stateless salvo base URL y token.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Mismo cliente, autenticado con el token de la sesión actual
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization_header() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::ensure_ok(response).await
    }

    async fn send_json<B: Serialize>(&self, builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::ensure_ok(response).await
    }

    async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status,
            message: ErrorBody::message_from(&body),
        })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response = self.send(Request::get(&self.url(path))).await?;
        let list = Self::parse::<ListResponse<T>>(response).await?;
        Ok(list.data)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AdminApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 POST {} ({})", LOGIN_PATH, request.email);
        let response = self
            .send_json(Request::post(&self.url(LOGIN_PATH)), request)
            .await?;
        Self::parse::<LoginResponse>(response).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        log::info!("📝 POST {} ({})", SIGNUP_PATH, request.email);
        let response = self
            .send_json(Request::post(&self.url(SIGNUP_PATH)), request)
            .await?;
        match response.status() {
            200 | 201 => Ok(()),
            status => Err(ApiError::Http { status, message: None }),
        }
    }

    async fn list_businesses(&self) -> Result<Vec<Business>, ApiError> {
        let businesses = self.fetch_list::<Business>(BUSINESS_PATH).await?;
        log::info!("📋 {} businesses obtenidos", businesses.len());
        Ok(businesses)
    }

    async fn create_business(&self, payload: &BusinessPayload) -> Result<(), ApiError> {
        log::info!("🏢 Creando business: {}", payload.business_name);
        self.send_json(Request::post(&self.url(BUSINESS_PATH)), payload)
            .await
            .map(|_| ())
    }

    async fn update_business(&self, id: i64, payload: &BusinessPayload) -> Result<(), ApiError> {
        log::info!("🏢 Actualizando business {}", id);
        let url = self.url(&format!("{}/{}", BUSINESS_PATH, id));
        self.send_json(Request::put(&url), payload).await.map(|_| ())
    }

    async fn list_sales(&self) -> Result<Vec<Sale>, ApiError> {
        let sales = self.fetch_list::<Sale>(SALES_PATH).await?;
        log::info!("📋 {} sales obtenidas", sales.len());
        Ok(sales)
    }

    async fn create_sale(&self, payload: &SalePayload) -> Result<(), ApiError> {
        log::info!("💰 Creando sale: {}", payload.invoice_number);
        self.send_json(Request::post(&self.url(SALES_PATH)), payload)
            .await
            .map(|_| ())
    }
}
