//! Provider constants

/// Registry name of the HTTP provider
pub const HTTP_PROVIDER_NAME: &str = "http";

/// Registration order of the HTTP provider
pub const HTTP_PROVIDER_ORDER: u32 = 10;

/// Registry name of the database provider
pub const DATABASE_PROVIDER_NAME: &str = "database";

/// Registration order of the database provider
pub const DATABASE_PROVIDER_ORDER: u32 = 20;
