// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/items";
pub const ITEMS_SLASH: &str = "/items/";
pub const ITEM: &str = "/items/{id}";
// Matches every path below /items/ so multi-segment ids reach id parsing
pub const ITEM_ROUTE: &str = "/items/{*id}";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
