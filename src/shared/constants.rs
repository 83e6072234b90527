/// Page number used when the client does not supply one.
pub const DEFAULT_PAGE_NUMBER: i32 = 1;

/// Page size 0 means "return the full filtered set unpaginated".
#[allow(dead_code)]
pub const UNBOUNDED_PAGE_SIZE: i32 = 0;

/// Response header carrying serialized pagination metadata.
pub const X_PAGINATION_HEADER: &str = "x-pagination";

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - may create, update and delete villas and villa numbers
pub const ROLE_ADMIN: &str = "admin";

/// Customer role - read-only access to the villa catalogue
pub const ROLE_CUSTOMER: &str = "customer";

// =============================================================================
// API SURFACE
// =============================================================================

/// Current API version segment used in route paths.
#[allow(dead_code)]
pub const API_VERSION: &str = "v1";

/// Image URL recorded on villas created or updated without an attachment.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400";
