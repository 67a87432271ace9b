/// Store primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Identity-provider user ids are opaque UUIDs.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
