//! Customer - Customer Record Model

use serde::Deserialize;

/// Stable identifier assigned by the records backend
pub type CustomerId = i64;

/// A single customer entry as served by the records endpoint
///
/// Records are immutable once received. A reload replaces the whole
/// collection rather than patching individual entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCustomer")]
pub struct Customer {
    /// Unique ID
    pub id: CustomerId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

/// Wire shape of a customer object
///
/// The companion backend sends the display name as `first_name`; objects may
/// carry both keys, in which case `name` wins.
#[derive(Debug, Deserialize)]
struct RawCustomer {
    id: CustomerId,
    name: Option<String>,
    first_name: Option<String>,
    email: String,
}

impl TryFrom<RawCustomer> for Customer {
    type Error = String;

    fn try_from(raw: RawCustomer) -> Result<Self, Self::Error> {
        let name = raw
            .name
            .or(raw.first_name)
            .ok_or_else(|| format!("customer {} has no `name` or `first_name`", raw.id))?;

        Ok(Self {
            id: raw.id,
            name,
            email: raw.email,
        })
    }
}

impl Customer {
    /// Create a new customer record
    pub fn new(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check whether `query` occurs in the name or the email, ignoring case.
    ///
    /// Both fields are checked independently.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.email.to_lowercase().contains(&needle)
    }

    /// Single-line display form used by the list rows
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.name, self.email)
    }
}
