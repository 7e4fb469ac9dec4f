/// Record ids are 24-character lowercase hex strings (see [`crate::object_id`]).
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
