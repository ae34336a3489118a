use axum::{
    async_trait,
    body::{Bytes, HttpBody},
    extract::{FromRequest, Multipart},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    BoxError, Form,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::app::{models::api_error::ApiError, util::multipart};

/// Form extractor accepting both `application/x-www-form-urlencoded` and
/// `multipart/form-data` bodies, rejecting with [`ApiError`].
pub struct FormFromRequest<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for FormFromRequest<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let multipart = Multipart::from_request(req, state).await?;
        let fields = multipart::get_text_fields(multipart).await?;

        match serde_json::from_value::<T>(Value::Object(fields)) {
            Ok(value) => Ok(Self(value)),
            Err(e) => Err(ApiError {
                code: StatusCode::UNPROCESSABLE_ENTITY,
                message: format!("Failed to deserialize form body: {}", e),
            }),
        }
    }
}

fn is_multipart<B>(req: &Request<B>) -> bool {
    let Some(content_type) = req.headers().get(CONTENT_TYPE) else {
        return false;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };
    let Ok(mime) = content_type.parse::<mime::Mime>() else {
        return false;
    };

    mime.type_() == mime::MULTIPART && mime.subtype() == mime::FORM_DATA
}
