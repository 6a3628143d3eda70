/// Pure person model shared between layers (no serde).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: Option<String>,
    pub bio: Option<String>,
    pub lucky_number: Option<i64>,
}

/// Every field of a person except the store-assigned id.
/// Used for inserts and for full-field updates alike.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: Option<String>,
    pub bio: Option<String>,
    pub lucky_number: Option<i64>,
}

/// One observed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLogEntry {
    pub id: i64,
    pub method: String,
    pub url: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequestLog {
    pub method: String,
    pub url: String,
    pub timestamp: String,
}
