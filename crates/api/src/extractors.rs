//! Request extractors.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tradepost_common::{AppError, PageDefaults, PageParams};

/// JSON body extractor that reports malformed or incomplete bodies as a
/// 400 client error instead of axum's default 422 rejection.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(map_rejection(&rejection)),
        }
    }
}

fn map_rejection(rejection: &JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

/// Raw pagination query parameters. Values stay strings here; the
/// normalizer decides what counts as valid.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Raw `page` query value.
    pub page: Option<String>,
    /// Raw `limit` query value.
    pub limit: Option<String>,
}

impl PageQuery {
    /// Normalize against the endpoint's defaults.
    #[must_use]
    pub fn normalize(&self, defaults: PageDefaults) -> PageParams {
        PageParams::normalize(self.page.as_deref(), self.limit.as_deref(), defaults)
    }
}
