use std::cell::RefCell;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::ApiEnvelope;
use thiserror::Error;
use yew::Callback;

use crate::token;

/// Base path of the remote API. Overridable at compile time for deployments
/// where the SPA is not served behind the same origin as the API.
pub const API_BASE: &str = match option_env!("API_BASE_URL") {
    Some(base) => base,
    None => "/api",
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] gloo_net::Error),
    #[error("server rejected request, status={status}: {message}")]
    Server { status: u16, message: String },
    #[error("session expired")]
    Unauthorized,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// User-displayable message: the server-provided one when present,
    /// otherwise the caller's fallback. Never empty.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Unauthorized => "Session expired. Please login again.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

thread_local! {
    static ON_UNAUTHORIZED: RefCell<Option<Callback<()>>> = const { RefCell::new(None) };
}

/// Registers the single app-wide hook invoked whenever any request comes
/// back with status 401. Registered once at bootstrap; call sites never
/// handle 401 themselves.
pub fn on_unauthorized(callback: Callback<()>) {
    ON_UNAUTHORIZED.with(|hook| {
        *hook.borrow_mut() = Some(callback);
    });
}

fn emit_unauthorized() {
    ON_UNAUTHORIZED.with(|hook| {
        if let Some(callback) = hook.borrow().as_ref() {
            callback.emit(());
        }
    });
}

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match token::get() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

pub fn get(path: &str) -> RequestBuilder {
    with_auth(Request::get(&url(path)))
}

pub fn post(path: &str) -> RequestBuilder {
    with_auth(Request::post(&url(path)))
}

pub fn put(path: &str) -> RequestBuilder {
    with_auth(Request::put(&url(path)))
}

pub fn delete(path: &str) -> RequestBuilder {
    with_auth(Request::delete(&url(path)))
}

/// Fails closed on 401: fires the session-expired hook and surfaces
/// `ApiError::Unauthorized` without touching the body.
pub fn ensure_authorized(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        emit_unauthorized();
        return Err(ApiError::Unauthorized);
    }
    Ok(response)
}

async fn server_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ApiEnvelope<serde_json::Value>>().await {
        Ok(envelope) => envelope.message.unwrap_or_default(),
        Err(_) => String::new(),
    };
    ApiError::Server { status, message }
}

/// Unwraps an `{ success, message, data }` envelope body.
pub async fn expect_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_authorized(response)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    let envelope = response.json::<ApiEnvelope<T>>().await?;
    match envelope.data {
        Some(data) => Ok(data),
        None => Err(ApiError::Server {
            status: 200,
            message: envelope.message.unwrap_or_default(),
        }),
    }
}

/// Decodes a bare (non-enveloped) JSON body.
pub async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_authorized(response)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// For endpoints whose response body carries nothing the client needs.
pub async fn expect_ok(response: Response) -> Result<(), ApiError> {
    let response = ensure_authorized(response)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let error = ApiError::Server {
            status: 400,
            message: "File too large".to_string(),
        };
        assert_eq!(error.user_message("Upload failed"), "File too large");
    }

    #[test]
    fn empty_server_message_falls_back() {
        let error = ApiError::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(error.user_message("Upload failed"), "Upload failed");
    }

    #[test]
    fn transport_error_falls_back() {
        let error = ApiError::Transport(gloo_net::Error::GlooError("offline".to_string()));
        assert_eq!(
            error.user_message("Could not reach the server"),
            "Could not reach the server"
        );
    }

    #[test]
    fn unauthorized_has_a_fixed_message() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert_eq!(
            ApiError::Unauthorized.user_message("ignored"),
            "Session expired. Please login again."
        );
    }
}
