use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact form submission. Append-only: never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_channel: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Corporate workshop/program enquiry. Append-only like [`ContactMessage`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateEnquiry {
    pub id: String,
    pub organization_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub requirements: String,
    pub group_size: String,
    pub created_at: DateTime<Utc>,
}
