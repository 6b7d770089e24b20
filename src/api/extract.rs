//! Path extractor for resource identifiers.
//!
//! `/{resource}/{id}` only matches canonical UUIDs. Any other segment is
//! treated as a route that does not exist and answers 404 with an empty
//! body, the same as an id with no matching row.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiErrorResponse;

/// Identifier taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath<T>(pub T);

impl<T, State> FromRequestParts<State> for IdPath<T>
where
    T: DeserializeOwned + Send,
    State: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &State,
    ) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!(%rejection, path = %parts.uri.path(), "Unroutable resource id");
                Err(ApiErrorResponse::not_found())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegionId;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::{Router, body::Body};
    use rstest::rstest;
    use tower::ServiceExt;

    async fn echo(IdPath(id): IdPath<RegionId>) -> String {
        id.to_string()
    }

    fn router() -> Router {
        Router::new().route("/regions/{id}", get(echo))
    }

    #[rstest]
    #[tokio::test]
    async fn test_uuid_segment_is_extracted() {
        let id = RegionId::generate();
        let request = Request::builder()
            .uri(format!("/regions/{id}"))
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[case("/regions/abc")]
    #[case("/regions/123")]
    #[case("/regions/not-a-uuid-at-all")]
    #[tokio::test]
    async fn test_non_uuid_segment_is_not_found(#[case] uri: &str) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
