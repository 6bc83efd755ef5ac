//! Inquiry endpoint (axum)
//!
//! | Request | Response |
//! |---------|----------|
//! | `OPTIONS *` | 200, empty body |
//! | `POST <path>` valid | 200 `{"success":true,"message":"Contact form submitted successfully"}` |
//! | `POST <path>` invalid or undecodable | 400 `{"success":false,"message":"Invalid form data"}` |
//! | other method on `<path>` | 405 `{"message":"Method not allowed"}` |
//! | `GET /health` | 200 `healthy` |
//!
//! Every response carries the CORS headers from [`cors`].

pub mod cors;
pub mod handler;
pub mod health;

use crate::config::FileServerConfig;
use axum::Router;
use axum::middleware;
use axum::routing::any;
use coaching_application::AcceptInquiryUseCase;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

/// Errors that can occur while running the endpoint
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Shared, immutable state handed to every request
#[derive(Clone)]
pub struct ServerState {
    pub accept: Arc<AcceptInquiryUseCase>,
}

/// Build the endpoint router with the inquiry route mounted at `path`.
pub fn inquiry_router(path: &str, accept: AcceptInquiryUseCase) -> Router {
    let state = ServerState {
        accept: Arc::new(accept),
    };

    Router::new()
        .route(path, any(handler::contact_handler))
        .with_state(state)
        .merge(health::router())
        .layer(middleware::from_fn(cors::cors_middleware))
}

/// Bind the configured address.
pub async fn bind(config: &FileServerConfig) -> Result<TcpListener, ServerError> {
    let address = config.bind_address();
    TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind { address, source })
}

/// Serve the endpoint on `listener` until ctrl-c.
pub async fn serve(
    listener: TcpListener,
    config: &FileServerConfig,
    accept: AcceptInquiryUseCase,
) -> Result<(), ServerError> {
    let app = inquiry_router(&config.path, accept);

    tracing::info!(
        "inquiry endpoint is up and running on {} at {}",
        listener.local_addr()?,
        config.path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("inquiry endpoint stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use http_body_util::BodyExt; // for `collect`
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const PATH: &str = "/api/contact";

    fn api() -> Router {
        inquiry_router(PATH, AcceptInquiryUseCase::new())
    }

    fn ada() -> Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "message": "I would like to discuss executive coaching."
        })
    }

    async fn send(method: &str, uri: &str, body: Body) -> Response {
        api()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method(method)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET,POST,PUT,DELETE,OPTIONS"
        );
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Authorization"
        );
    }

    #[tokio::test]
    async fn test_valid_inquiry_is_acknowledged() {
        let response = send("POST", PATH, Body::from(ada().to_string())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "message": "Contact form submitted successfully"})
        );
    }

    #[tokio::test]
    async fn test_json_as_text_is_accepted() {
        let double_encoded = serde_json::to_string(&ada().to_string()).unwrap();
        let response = send("POST", PATH, Body::from(double_encoded)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_inquiry_is_rejected() {
        let body = json!({
            "firstName": "",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "message": "too short"
        });
        let response = send("POST", PATH, Body::from(body.to_string())).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Invalid form data"})
        );
    }

    #[tokio::test]
    async fn test_unparsable_body_is_rejected() {
        let response = send("POST", PATH, Body::from("firstName=Ada&lastName=")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Invalid form data"})
        );
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        let response = send("POST", PATH, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_preflight_is_answered_with_empty_body() {
        let response = send("OPTIONS", PATH, Body::empty()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() {
        let response = send("GET", PATH, Body::empty()).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Method not allowed"})
        );
    }

    #[tokio::test]
    async fn test_other_methods_are_not_allowed() {
        for method in ["PUT", "DELETE", "PATCH"] {
            let response = send(method, PATH, Body::from(ada().to_string())).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        }
    }

    #[tokio::test]
    async fn test_health_answers_with_cors_headers() {
        let response = send("GET", health::HEALTH_PATH, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(body_bytes(response).await, b"healthy");
    }

    #[tokio::test]
    async fn test_bind_error_names_address() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = FileServerConfig {
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
            ..FileServerConfig::default()
        };

        let error = bind(&config).await.unwrap_err();
        assert!(matches!(error, ServerError::Bind { .. }));
        assert!(error.to_string().contains(&config.bind_address()));
    }

    #[test]
    fn test_validated_paths_mount_without_panicking() {
        for path in ["/", "/contact", "/api/contact", "/api/v1/contact-form", "/api/contact/"] {
            let mut config = crate::config::FileConfig::default();
            config.server.path = path.to_string();
            assert!(config.validate().is_empty(), "{path:?}");

            inquiry_router(path, AcceptInquiryUseCase::new());
        }
    }
}
