use serde::{Deserialize, Serialize};

/// The nested company object carried by every user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

impl Company {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A managed user record.
///
/// The id is assigned by the backend: the local store draws it from its
/// sequence counter, the remote store takes whatever the API returns.
/// Absent fields in persisted or remote JSON deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

impl User {
    /// Build a fresh record from a form payload, filling absent fields with
    /// their defaults.
    pub fn new(id: u64, data: &UserData) -> Self {
        let mut user = User {
            id,
            ..User::default()
        };
        user.apply(data);
        user
    }

    /// Shallow merge: overwrite only the fields the payload carries.
    /// The company object is replaced wholesale, never merged field-wise.
    pub fn apply(&mut self, data: &UserData) {
        if let Some(name) = &data.name {
            self.name = name.clone();
        }
        if let Some(username) = &data.username {
            self.username = username.clone();
        }
        if let Some(email) = &data.email {
            self.email = email.clone();
        }
        if let Some(phone) = &data.phone {
            self.phone = phone.clone();
        }
        if let Some(website) = &data.website {
            self.website = website.clone();
        }
        if let Some(company) = &data.company {
            self.company = company.clone();
        }
    }
}

/// A user payload as captured from the edit form.
///
/// Every field is optional so an update can leave fields untouched; the
/// interactive form always submits all of them. Absent fields are omitted
/// from serialized request bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl UserData {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}
