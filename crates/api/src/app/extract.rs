//! Validating extractors.
//!
//! Each wrapper parses one request part with the stock axum extractor, then
//! runs the value's [`Validate`] implementation with locations rooted at that
//! part. Parse failures and constraint violations both become
//! [`ApiError::Validation`], so handlers only ever see checked input.

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Query, Request};
use axum::http::{HeaderMap, header, request::Parts};
use axum::{Form, Json, async_trait};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use roster_core::{Report, Validate};

use crate::app::errors::ApiError;

fn check<T: Validate>(root: &str, value: &T) -> Result<(), ApiError> {
    let mut report = Report::at(root);
    value.validate_into(&mut report);
    report.finish().map_err(ApiError::from)
}

/// JSON body.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::rejected("body", e.status(), e.body_text()))?;
        check("body", &value)?;
        Ok(Self(value))
    }
}

pub(crate) fn multipart_error(err: MultipartError) -> ApiError {
    ApiError::rejected("form", err.status(), err.body_text())
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

/// Collect the text parts of a multipart body by name (last one wins) and
/// deserialize them as if they were URL-encoded fields.
async fn multipart_fields<T: DeserializeOwned>(mut multipart: Multipart) -> Result<T, ApiError> {
    let mut fields = Map::new();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let text = field.text().await.map_err(multipart_error)?;
        fields.insert(name, Value::String(text));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| ApiError::invalid(&["form"], e.to_string()))
}

/// Form body, either URL-encoded or `multipart/form-data`.
#[derive(Debug)]
pub struct ValidForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_multipart(req.headers()) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::rejected("form", e.status(), e.body_text()))?;
            multipart_fields(multipart).await?
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::rejected("form", e.status(), e.body_text()))?;
            value
        };
        check("form", &value)?;
        Ok(Self(value))
    }
}

/// Query string.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::rejected("query", e.status(), e.body_text()))?;
        check("query", &value)?;
        Ok(Self(value))
    }
}

/// Path parameters.
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::rejected("path", e.status(), e.body_text()))?;
        check("path", &value)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn detects_multipart_content_type() {
        let mut headers = HeaderMap::new();
        assert!(!is_multipart(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        assert!(!is_multipart(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("Multipart/Form-Data; boundary=xyz"),
        );
        assert!(is_multipart(&headers));
    }
}
