pub mod create;
pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use update::update_handler;

use crate::error::ApiError;
use crate::models::ItemId;

/// Parse the `{id}` path segment
///
/// Any integer in range is accepted, including negatives; whether an item
/// exists for it is left to the store. The segment may contain further
/// slashes, which never parse.
pub(crate) fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse::<ItemId>()
        .map_err(|_| ApiError::InvalidItemId(raw.to_string()))
}

/// Fallback for routes that exist but not for the request's method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
