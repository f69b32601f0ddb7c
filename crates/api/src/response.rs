//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tradepost_common::PageParams;

/// Single-record `{data}` envelope with an explicit status code.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    status: StatusCode,
    data: T,
}

#[derive(Serialize)]
struct DataEnvelope<T: Serialize> {
    data: T,
}

#[derive(Serialize)]
struct PagedEnvelope<T: Serialize> {
    data: Vec<T>,
    page: u64,
    limit: u64,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 response wrapping a record.
    pub const fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    /// 201 response wrapping a freshly created record.
    pub const fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(DataEnvelope { data: self.data })).into_response()
    }
}

/// List `{data, page, limit}` envelope echoing the normalized pagination.
#[derive(Debug)]
pub struct PagedResponse<T: Serialize> {
    data: Vec<T>,
    page: u64,
    limit: u64,
}

impl<T: Serialize> PagedResponse<T> {
    /// Wrap one page of records.
    pub const fn new(data: Vec<T>, params: PageParams) -> Self {
        Self {
            data,
            page: params.page,
            limit: params.limit,
        }
    }
}

impl<T: Serialize> IntoResponse for PagedResponse<T> {
    fn into_response(self) -> Response {
        Json(PagedEnvelope {
            data: self.data,
            page: self.page,
            limit: self.limit,
        })
        .into_response()
    }
}

/// Empty 204 response for deletes.
#[must_use]
pub const fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
