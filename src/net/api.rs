//! REST API client for the platform backend.
//!
//! Browser builds (`csr` feature) issue real HTTP calls via `gloo-net`;
//! native builds get stubs returning [`ApiError::Unavailable`] so the state
//! layer links and tests without a browser.
//!
//! Every call is independent: no retries, no de-duplication, no timeouts.
//! Failures map onto [`ApiError`] and are surfaced to the user as toasts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use crate::net::types::{
    Complaint, ListEnvelope, LoginResponse, MenuItem, MenuItemDraft, ReferralUser,
};
use crate::state::complaints::ComplaintFilter;
use crate::state::menu::MenuFilter;
use crate::state::referrals::ReferralFilter;

/// Uniform failure taxonomy for backend calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; carries the backend's message when the error body
    /// had one.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Toast text: the backend-provided message when there is one, a
    /// generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder, Response};

    use super::ApiError;

    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    /// Attach the session bearer token when one is stored.
    pub fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match crate::util::session::load() {
            Some(session) => builder.header(
                "Authorization",
                &format!("Bearer {}", session.access_token),
            ),
            None => builder,
        }
    }

    /// Send a built request and reject non-2xx responses, pulling the
    /// backend message out of the error body when present.
    pub async fn send_checked(request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        Err(ApiError::Status { status, message })
    }

    pub async fn send_builder(builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_checked(request).await
    }

    pub async fn send_json<B: serde::Serialize>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        send_checked(request).await
    }

    pub async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
pub async fn sign_in(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        use crate::net::types::Envelope;
        let body = serde_json::json!({ "email": email, "password": password });
        let request = gloo_net::http::Request::post("/api/auth/login");
        let response = browser::send_json(request, &body).await?;
        let envelope: Envelope<LoginResponse> = browser::parse(response).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a complaints page via `GET /api/complaints`.
pub async fn list_complaints(
    filter: &ComplaintFilter,
) -> Result<ListEnvelope<Complaint>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = browser::authorized(
            gloo_net::http::Request::get("/api/complaints").query(filter.query_pairs()),
        );
        let response = browser::send_builder(request).await?;
        browser::parse(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = filter;
        Err(ApiError::Unavailable)
    }
}

/// Delete a complaint via `DELETE /api/complaints/{id}`.
pub async fn delete_complaint(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/complaints/{id}");
        let request = browser::authorized(gloo_net::http::Request::delete(&url));
        browser::send_builder(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a menu page via `GET /api/menu`.
pub async fn list_menu(filter: &MenuFilter) -> Result<ListEnvelope<MenuItem>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = browser::authorized(
            gloo_net::http::Request::get("/api/menu").query(filter.query_pairs()),
        );
        let response = browser::send_builder(request).await?;
        browser::parse(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = filter;
        Err(ApiError::Unavailable)
    }
}

/// Create a menu item via `POST /api/menu`.
pub async fn create_menu_item(draft: &MenuItemDraft) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = browser::authorized(gloo_net::http::Request::post("/api/menu"));
        browser::send_json(request, draft).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Update a menu item via `PUT /api/menu/{id}`.
pub async fn update_menu_item(id: &str, draft: &MenuItemDraft) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/menu/{id}");
        let request = browser::authorized(gloo_net::http::Request::put(&url));
        browser::send_json(request, draft).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete a menu item via `DELETE /api/menu/{id}`.
pub async fn delete_menu_item(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/menu/{id}");
        let request = browser::authorized(gloo_net::http::Request::delete(&url));
        browser::send_builder(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Toggle availability via `PATCH /api/menu/{id}/availability`.
pub async fn set_menu_availability(id: &str, available: bool) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/menu/{id}/availability");
        let body = serde_json::json!({ "available": available });
        let request = browser::authorized(gloo_net::http::Request::patch(&url));
        browser::send_json(request, &body).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, available);
        Err(ApiError::Unavailable)
    }
}

/// Send a broadcast push notification via `POST /api/notifications/broadcast`.
pub async fn send_broadcast(title: &str, body: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "title": title, "body": body });
        let request = browser::authorized(gloo_net::http::Request::post(
            "/api/notifications/broadcast",
        ));
        browser::send_json(request, &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (title, body);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a referral-users page via `GET /api/referrals`.
pub async fn list_referrals(
    filter: &ReferralFilter,
) -> Result<ListEnvelope<ReferralUser>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = browser::authorized(
            gloo_net::http::Request::get("/api/referrals").query(filter.query_pairs()),
        );
        let response = browser::send_builder(request).await?;
        browser::parse(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = filter;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single referral user via `GET /api/referrals/{id}`.
///
/// Fallback path for the detail page when the user is not in the cached
/// list (deep link, or the list has moved on).
pub async fn fetch_referral_user(id: &str) -> Result<ReferralUser, ApiError> {
    #[cfg(feature = "csr")]
    {
        use crate::net::types::Envelope;
        let url = format!("/api/referrals/{id}");
        let request = browser::authorized(gloo_net::http::Request::get(&url));
        let response = browser::send_builder(request).await?;
        let envelope: Envelope<ReferralUser> = browser::parse(response).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
