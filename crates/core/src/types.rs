/// User primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Tank primary keys are database-generated UUIDs.
pub type TankId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
