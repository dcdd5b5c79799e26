//! Admin account records.

use dashboard_seed_core::{AdminId, AdminRole, Email};
use serde::{Deserialize, Serialize};

use super::{SeedRecord, Timestamps};
use crate::db::Collection;

/// A dashboard admin account.
///
/// `phone_number`, names and address are plain strings because the master
/// admin stores the literal `"None"` in them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: AdminId,
    pub username: String,
    pub email: Email,
    pub phone_number: String,
    pub role: AdminRole,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    /// Salted password hash
    pub password: String,
    /// `data:` URL, or null when no avatar is available
    pub profile_picture: Option<String>,
    #[serde(skip)]
    pub timestamps: Timestamps,
}

impl Admin {
    /// `"First Last"`, used for avatar lookups.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn is_master(&self) -> bool {
        self.id.as_str() == AdminId::MASTER
    }
}

impl SeedRecord for Admin {
    const COLLECTION: Collection = Collection::Admins;

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn timestamps(&self) -> Timestamps {
        self.timestamps
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn admin() -> Admin {
        Admin {
            id: AdminId::parse("ADMIN-1234").unwrap(),
            username: "aisyah_tan".to_string(),
            email: Email::parse("aisyah.tan@gmail.com").unwrap(),
            phone_number: "+60121234567".to_string(),
            role: AdminRole::AdminApplicant,
            first_name: "Aisyah".to_string(),
            last_name: "Tan".to_string(),
            address: "12 Jalan Ampang, Kuala Lumpur, Wilayah Persekutuan, 50450".to_string(),
            password: "$2b$04$hash".to_string(),
            profile_picture: None,
            timestamps: Timestamps::now(),
        }
    }

    #[test]
    fn test_to_document_fields() {
        let document = admin().to_document().unwrap();

        assert_eq!(document.id, "ADMIN-1234");
        assert!(!document.fields.contains_key("id"));
        assert!(!document.fields.contains_key("timestamps"));
        assert_eq!(document.fields["username"], "aisyah_tan");
        assert_eq!(document.fields["phone_number"], "+60121234567");
        assert_eq!(document.fields["role"], "Admin Applicant");
        assert_eq!(document.fields["profile_picture"], json!(null));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(admin().display_name(), "Aisyah Tan");
        assert!(!admin().is_master());
    }
}
