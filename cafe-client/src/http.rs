//! HTTP client for the hosted backend
//!
//! `CloudClient` is the single shared handle every repository and the
//! session provider borrow. Failed responses are decoded into the typed
//! [`ClientError`] via the backend's `ErrorBody` JSON; a body that fails
//! to parse falls back to status-code mapping.

use std::sync::RwLock;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::error::ErrorBody;
use shared::models::{
    ContactInquiry, ContactInquiryCreate, GalleryItem, MenuItem, NewsletterSubscriber,
    PlanWithFeatures, Reservation, ReservationCreate, ReservationStatus, StatusChange,
    SubscribeRequest, Testimonial,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Session payload returned by the login endpoint
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    /// Unix timestamp (seconds) the token expires at
    pub expires_at: i64,
}

/// Session introspection payload
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MeResponse {
    pub email: String,
    pub expires_at: i64,
}

#[derive(serde::Deserialize)]
struct UploadResponse {
    url: String,
}

/// HTTP client for making requests to cafe-cloud
#[derive(Debug)]
pub struct CloudClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl CloudClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(config.token.clone()),
        })
    }

    /// Replace the bearer token (set on sign-in, cleared on sign-out)
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    fn auth_header(&self) -> Option<String> {
        self.token
            .read()
            .ok()
            .and_then(|t| t.as_ref().map(|t| format!("Bearer {t}")))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.authorize(self.client.get(self.url(path))).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .authorize(self.client.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .authorize(self.client.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self
            .authorize(self.client.delete(self.url(path)))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Upload bytes as a multipart file field; returns the public URL
    pub async fn upload(
        &self,
        bucket: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ClientResult<String> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("upload")
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .authorize(
                self.client
                    .post(self.url(&format!("api/admin/uploads/{bucket}")))
                    .multipart(form),
            )
            .send()
            .await?;
        let upload: UploadResponse = Self::handle_response(response).await?;
        Ok(upload.url)
    }

    /// Decode the response, mapping failures to typed errors
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
                return Err(body.into());
            }
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.post("api/admin/login", &LoginRequest { email, password })
            .await
    }

    /// Introspect the current session
    pub async fn me(&self) -> ClientResult<MeResponse> {
        self.get("api/admin/me").await
    }

    // ========== Public site API ==========

    pub async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("api/menu").await
    }

    pub async fn fetch_menu_highlights(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("api/menu/highlights").await
    }

    pub async fn fetch_gallery(&self) -> ClientResult<Vec<GalleryItem>> {
        self.get("api/gallery").await
    }

    pub async fn fetch_testimonials(&self) -> ClientResult<Vec<Testimonial>> {
        self.get("api/testimonials").await
    }

    pub async fn fetch_plans(&self) -> ClientResult<Vec<PlanWithFeatures>> {
        self.get("api/plans").await
    }

    pub async fn submit_reservation(&self, data: &ReservationCreate) -> ClientResult<Reservation> {
        self.post("api/reservations", data).await
    }

    pub async fn submit_contact(&self, data: &ContactInquiryCreate) -> ClientResult<ContactInquiry> {
        self.post("api/contact", data).await
    }

    pub async fn subscribe_newsletter(&self, email: &str) -> ClientResult<NewsletterSubscriber> {
        self.post(
            "api/newsletter",
            &SubscribeRequest {
                email: email.to_string(),
            },
        )
        .await
    }

    // ========== Admin reservation actions ==========

    pub async fn set_reservation_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> ClientResult<Reservation> {
        self.post(
            &format!("api/admin/reservations/{id}/status"),
            &StatusChange { status },
        )
        .await
    }
}
