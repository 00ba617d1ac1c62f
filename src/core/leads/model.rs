//! Lead data model and shape validation
//!
//! A lead only becomes a [`NewLead`] after passing [`LeadFields::to_new_lead`],
//! so anything handed to a store is already trimmed and shape-checked.

use serde::{Deserialize, Serialize};

/// Form fields that make up a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Email,
    Phone,
}

impl LeadField {
    /// Field name as used in form markup and in the remote table
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
        }
    }
}

/// Shape validation errors, caught before any network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or whitespace-only
    EmptyName,
    /// Email is empty or whitespace-only
    EmptyEmail,
    /// Email has no `@` or no domain segment
    InvalidEmail,
    /// Phone is required by this form but was left empty
    EmptyPhone,
}

impl ValidationError {
    /// The field this error should be shown next to
    pub fn field(&self) -> LeadField {
        match self {
            ValidationError::EmptyName => LeadField::Name,
            ValidationError::EmptyEmail | ValidationError::InvalidEmail => LeadField::Email,
            ValidationError::EmptyPhone => LeadField::Phone,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "Name is required"),
            ValidationError::EmptyEmail => write!(f, "Email is required"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email"),
            ValidationError::EmptyPhone => write!(f, "WhatsApp number is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Raw, untrimmed text of a lead form as the user typed it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl LeadFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
        }
    }

    /// True when every field is an empty string
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Trim and validate the fields into a lead ready for insertion.
    ///
    /// When `require_phone` is false the phone field is dropped entirely, matching
    /// the form variant that never renders it.
    pub fn to_new_lead(&self, require_phone: bool) -> Result<NewLead, ValidationError> {
        let phone = if require_phone {
            let phone = self.phone.trim();
            if phone.is_empty() {
                return Err(ValidationError::EmptyPhone);
            }
            Some(phone.to_string())
        } else {
            None
        };

        let lead = NewLead::new(&self.name, &self.email)?;
        Ok(NewLead { phone, ..lead })
    }
}

/// A validated lead that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

impl NewLead {
    /// Build a lead without a phone number from trimmed name and email
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if !is_valid_email_shape(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
        })
    }

    /// Re-check a lead that arrived from outside (e.g. deserialized from a request)
    pub fn revalidate(self) -> Result<Self, ValidationError> {
        let phone = self
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        let lead = Self::new(&self.name, &self.email)?;
        Ok(Self { phone, ..lead })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Identity assigned by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadId::Number(n) => write!(f, "{}", n),
            LeadId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A lead as persisted by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LeadId>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<NewLead> for LeadRecord {
    fn from(lead: NewLead) -> Self {
        Self {
            id: None,
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
        }
    }
}

/// Basic email shape check: `local@domain.tld`, no whitespace.
///
/// Deliverability is not checked.
pub fn is_valid_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
