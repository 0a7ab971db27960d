/// Table holding contribution rows in the hosted store
pub const CONTRIBUTIONS_TABLE: &str = "contributions";

/// Column used to order contribution listings
pub const CREATED_AT_COLUMN: &str = "created_at";
