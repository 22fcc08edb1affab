use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ContactMessage, CorporateEnquiry};
use crate::store::DataStore;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferred_channel: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorporateRequest {
    pub organization_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub requirements: Option<String>,
    pub group_size: Option<String>,
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

pub fn submit_contact(
    store: &dyn DataStore,
    req: ContactRequest,
) -> Result<ContactMessage, AppError> {
    let (name, email, message) = match (
        required(req.name),
        required(req.email),
        required(req.message),
    ) {
        (Some(n), Some(e), Some(m)) => (n, e, m),
        _ => {
            return Err(AppError::Validation(
                "name, email and message are required".to_string(),
            ))
        }
    };

    let contact = ContactMessage {
        id: Uuid::new_v4().to_string(),
        name,
        email,
        phone: req.phone.unwrap_or_default(),
        preferred_channel: req.preferred_channel.unwrap_or_else(|| "email".to_string()),
        message,
        created_at: Utc::now(),
    };

    let mut data = store.load()?;
    data.contacts.push(contact.clone());
    store.save(&data)?;

    tracing::info!(id = %contact.id, "contact message received");
    Ok(contact)
}

pub fn submit_corporate(
    store: &dyn DataStore,
    req: CorporateRequest,
) -> Result<CorporateEnquiry, AppError> {
    let (organization_name, contact_person, email) = match (
        required(req.organization_name),
        required(req.contact_person),
        required(req.email),
    ) {
        (Some(o), Some(c), Some(e)) => (o, c, e),
        _ => {
            return Err(AppError::Validation(
                "organizationName, contactPerson and email are required".to_string(),
            ))
        }
    };

    let enquiry = CorporateEnquiry {
        id: Uuid::new_v4().to_string(),
        organization_name,
        contact_person,
        email,
        phone: req.phone.unwrap_or_default(),
        requirements: req.requirements.unwrap_or_default(),
        group_size: req.group_size.unwrap_or_default(),
        created_at: Utc::now(),
    };

    let mut data = store.load()?;
    data.corporate_requests.push(enquiry.clone());
    store.save(&data)?;

    tracing::info!(id = %enquiry.id, "corporate enquiry received");
    Ok(enquiry)
}
