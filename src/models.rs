use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Identifier assigned to an item by the store
///
/// Signed so that any integer a client sends can be looked up; the store
/// only ever assigns ids from 1 upwards.
pub type ItemId = i64;

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub value: i64,
}

/// Request body for create and update
///
/// Missing fields fall back to their zero values. Any `id` in the body is
/// ignored; ids are only ever assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, utoipa::ToSchema)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: i64,
}

impl ItemPayload {
    /// Parse a request body, independent of its declared content type
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(ApiError::InvalidBody)
    }

    /// Field checks applied on create
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() {
            return Err(ApiError::EmptyName);
        }
        if self.value < 0 {
            return Err(ApiError::NegativeValue);
        }
        Ok(())
    }
}

/// Response type for successful POST operations
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateResponse {
    pub id: ItemId,
}

/// Response type for the health check endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub item_count: usize,
}
