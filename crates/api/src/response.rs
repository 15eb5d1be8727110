//! Shared response envelope types for API handlers.
//!
//! The reader expects a `success` flag on most payloads: either next to a
//! `data` field ([`DataResponse`]) or merged into the payload's own fields
//! ([`SuccessResponse`]).

use serde::Serialize;

/// `{ "success": true, "data": T }`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, ...T }` where `T` serializes as a JSON object.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}
