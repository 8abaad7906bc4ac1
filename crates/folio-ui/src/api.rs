//! API client for the remote auth / production-record service
//!
//! Uses web-sys fetch for WASM, reqwest for native. Both transports hand back a
//! [`RawResponse`]; turning that into a typed result (or a human-readable
//! error) is shared, so it is tested without a network.

use folio_types::{
    ApiErrorBody, AuthResponse, LoginRequest, NewProductionRecord, ProductionRecord,
    RegisterRequest, User,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced inline next to the form that triggered the call.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Could not reach the server ({0}). Please try again.")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Your session has expired. Please log in again.")]
    Unauthorized,

    #[error("Unexpected response from the server ({0}).")]
    Decode(String),

    #[error("Please log in first.")]
    NotLoggedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Status and body as received, before interpretation
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Map a non-2xx response to the error the user sees.
///
/// A 401 only means an expired session when a token was sent; on login and
/// register it is a rejected credential and the server's text is kept.
fn status_error(response: &RawResponse, authenticated: bool) -> ApiError {
    if authenticated && response.status == 401 {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<ApiErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.text().map(str::to_string))
        .unwrap_or_else(|| format!("Request failed with status {}", response.status));
    ApiError::Status {
        status: response.status,
        message,
    }
}

/// Decode a JSON body from a successful response
pub fn interpret<T: DeserializeOwned>(
    response: RawResponse,
    authenticated: bool,
) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(status_error(&response, authenticated));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check a response whose body is ignored
pub fn interpret_empty(response: RawResponse, authenticated: bool) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(status_error(&response, authenticated))
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Copy of this client that sends the given bearer token
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, authenticated: bool) -> Result<Option<String>, ApiError> {
        if !authenticated {
            return Ok(None);
        }
        self.token
            .as_ref()
            .map(|t| Some(format!("Bearer {t}")))
            .ok_or(ApiError::NotLoggedIn)
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    #[cfg(target_arch = "wasm32")]
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        authenticated: bool,
    ) -> Result<RawResponse, ApiError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let bearer = self.bearer(authenticated)?;
        let url = self.url(path);

        let headers = Headers::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let _ = headers.set("Accept", "application/json");
        if body.is_some() {
            let _ = headers.set("Content-Type", "application/json");
        }
        if let Some(bearer) = bearer {
            let _ = headers.set("Authorization", &bearer);
        }

        let opts = RequestInit::new();
        opts.set_method(method.as_str());
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&headers);
        if let Some(body) = body {
            opts.set_body(&wasm_bindgen::JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| ApiError::Network(format!("request error: {:?}", e)))?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Decode("response is not a Response".into()))?;

        let text_promise = resp
            .text()
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

        Ok(RawResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        authenticated: bool,
    ) -> Result<RawResponse, ApiError> {
        let bearer = self.bearer(authenticated)?;
        let url = self.url(path);

        let client = reqwest::Client::new();
        let mut request = match method {
            Method::Get => client.get(&url),
            Method::Post => client.post(&url),
            Method::Put => client.put(&url),
            Method::Delete => client.delete(&url),
        }
        .header("Accept", "application/json");

        if let Some(bearer) = bearer {
            request = request.header("Authorization", bearer);
        }
        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(RawResponse { status, body })
    }

    async fn call<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        authenticated: bool,
    ) -> Result<T, ApiError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self.send(method, path, body, authenticated).await?;
        interpret(response, authenticated)
    }

    async fn call_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        interpret_empty(self.send(method, path, None, true).await?, true)
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.call(Method::Post, "/auth/login", Some(request), false)
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.call(Method::Post, "/auth/register", Some(request), false)
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.call_empty(Method::Post, "/auth/logout").await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.call::<User, ()>(Method::Get, "/auth/me", None, true)
            .await
    }

    // =========================================================================
    // PRODUCTION RECORDS
    // =========================================================================

    pub async fn list_records(&self) -> Result<Vec<ProductionRecord>, ApiError> {
        self.call::<_, ()>(Method::Get, "/production", None, true)
            .await
    }

    pub async fn get_record(&self, id: &str) -> Result<ProductionRecord, ApiError> {
        let path = format!("/production/{}", urlencoding::encode(id));
        self.call::<_, ()>(Method::Get, &path, None, true).await
    }

    pub async fn create_record(
        &self,
        record: &NewProductionRecord,
    ) -> Result<ProductionRecord, ApiError> {
        self.call(Method::Post, "/production", Some(record), true)
            .await
    }

    pub async fn update_record(
        &self,
        id: &str,
        record: &NewProductionRecord,
    ) -> Result<ProductionRecord, ApiError> {
        let path = format!("/production/{}", urlencoding::encode(id));
        self.call(Method::Put, &path, Some(record), true).await
    }

    pub async fn delete_record(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/production/{}", urlencoding::encode(id));
        self.call_empty(Method::Delete, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_interpret_success() {
        let user: User = interpret(raw(200, r#"{"id":1,"name":"Ada","email":"a@x.io"}"#), true).unwrap();
        assert_eq!(user.id, "1");
    }

    #[test]
    fn test_interpret_server_message() {
        let err = interpret::<User>(raw(422, r#"{"message":"Email already registered"}"#), false)
            .unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
        assert!(matches!(err, ApiError::Status { status: 422, .. }));
    }

    #[test]
    fn test_interpret_non_json_error() {
        let err = interpret::<User>(raw(502, "<html>Bad Gateway</html>"), true).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_interpret_unauthorized() {
        let err = interpret::<User>(raw(401, r#"{"message":"jwt expired"}"#), true).unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
    }

    #[test]
    fn test_rejected_login_keeps_server_message() {
        let err = interpret::<AuthResponse>(raw(401, r#"{"message":"Invalid credentials"}"#), false)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(matches!(err, ApiError::Status { status: 401, .. }));

        let err = interpret::<AuthResponse>(raw(401, ""), false).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 401");
    }

    #[test]
    fn test_interpret_decode_error() {
        let err = interpret::<User>(raw(200, "not json"), true).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_interpret_empty() {
        assert!(interpret_empty(raw(204, ""), true).is_ok());
        assert!(interpret_empty(raw(404, r#"{"error":"Record not found"}"#), true).is_err());
        assert_eq!(
            interpret_empty(raw(401, ""), true),
            Err(ApiError::Unauthorized)
        );
    }

    #[test]
    fn test_bearer_requires_token() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(client.url("/auth/me"), "https://api.example.com/auth/me");
        assert_eq!(client.bearer(false), Ok(None));
        assert_eq!(client.bearer(true), Err(ApiError::NotLoggedIn));

        let authed = client.with_token(Some("t0k".to_string()));
        assert_eq!(authed.bearer(true), Ok(Some("Bearer t0k".to_string())));
        assert_eq!(authed.token(), Some("t0k"));
    }
}
