/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Publication dates are plain calendar dates with no time component.
pub type Date = chrono::NaiveDate;
