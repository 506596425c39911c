use serde::{Deserialize, Serialize};

/// Body of the create request. The backend assigns the record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
}

/// Body of the edit request. The date is never editable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityUpdate {
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Raw form control values at submit time. Times are 24-hour `HH:MM`.
#[derive(Debug, Clone)]
pub struct FormInput {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
}

/// Replacement values gathered for an edit. Empty strings mean the user
/// cancelled or left the field blank; the flow aborts before any request.
#[derive(Debug, Clone, Default)]
pub struct EditInput {
    pub start_time: String,
    pub end_time: String,
    pub description: String,
}

/// One table row as currently displayed: times in 12-hour text, plus the
/// backend-assigned id carried on the row.
#[derive(Debug, Clone)]
pub struct RowSnapshot {
    pub id: u64,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
}
