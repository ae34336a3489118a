use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{app, registrations, AppState};

use super::errors::DefaultApiError;

pub fn build(state: AppState) -> Router {
    let envy = state.envy.clone();

    let allow_origin = match envy.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            tracing::warn!(%e, "invalid FRONTEND_URL, allowing any origin");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        // POST / is the page's default form action
        .route(
            "/",
            get(app::controller::get_root).post(registrations::controller::register),
        )
        .route("/register", post(registrations::controller::register))
        // layers
        .layer(DefaultBodyLimit::max(envy.body_limit_bytes()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err, "unhandled middleware error");
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(
                    envy.rate_limit_per_sec(),
                    Duration::from_secs(1),
                )),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{app::env::Envy, registrations::registrar::SimulatedRegistrar};

    use super::*;

    static VALID_FORM: &str = "username=ab&email=a%40b.com&country=US&experience=junior\
                               &message=1234567890&password=password1\
                               &confirmPassword=password1&terms=on";

    fn test_router() -> Router {
        build(AppState {
            envy: Arc::new(Envy::default()),
            registrar: Arc::new(SimulatedRegistrar::new(Duration::ZERO)),
        })
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_root() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_urlencoded_form() {
        let response = test_router()
            .oneshot(form_request("/", VALID_FORM))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Usuario registrado exitosamente");
        assert_eq!(body["form"]["valid"], true);
        assert_eq!(body["form"]["data"]["username"], "ab");
        assert_eq!(body["form"]["data"]["terms"], true);
        assert!(body["form"]["data"].get("password").is_none());
        assert_eq!(body["form"]["errors"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_register_alias_route() {
        let response = test_router()
            .oneshot(form_request("/register", VALID_FORM))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_rejects_mismatched_passwords() {
        let body = VALID_FORM.replace("confirmPassword=password1", "confirmPassword=different1");

        let response = test_router()
            .oneshot(form_request("/", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["form"]["valid"], false);
        assert_eq!(
            body["form"]["errors"],
            serde_json::json!({ "confirmPassword": ["Las contraseñas no coinciden"] })
        );
        assert_eq!(body["form"]["data"]["email"], "a@b.com");
        assert!(body["form"]["data"].get("confirmPassword").is_none());
    }

    #[tokio::test]
    async fn test_register_unchecked_terms() {
        let body = VALID_FORM.replace("&terms=on", "");

        let response = test_router()
            .oneshot(form_request("/", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(
            body["form"]["errors"]["terms"],
            serde_json::json!(["Debes aceptar los términos y condiciones"])
        );
    }

    #[tokio::test]
    async fn test_register_multipart_form() {
        let boundary = "registration-boundary";
        let mut body = String::new();
        for (name, value) in [
            ("username", "ab"),
            ("email", "a@b.com"),
            ("country", "US"),
            ("experience", "junior"),
            ("message", "short"),
            ("password", "password1"),
            ("confirmPassword", "password1"),
            ("terms", "on"),
        ] {
            body.push_str(&format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                boundary, name, value
            ));
        }
        body.push_str(&format!("--{}--\r\n", boundary));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(
            body["form"]["errors"],
            serde_json::json!({ "message": ["El mensaje debe tener al menos 10 caracteres"] })
        );
        assert_eq!(body["form"]["data"]["message"], "short");
    }

    #[tokio::test]
    async fn test_register_unsupported_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from(VALID_FORM))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(json_body(response).await["message"].is_string());
    }
}
