//! Role and status enums, serialized with the exact labels the dashboard
//! stores and filters on.

use serde::{Deserialize, Serialize};

/// Admin account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminRole {
    /// Approved admin with dashboard access.
    #[serde(rename = "Current Admin")]
    CurrentAdmin,
    /// Signed up, waiting for approval.
    #[serde(rename = "Admin Applicant")]
    AdminApplicant,
}

impl AdminRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 2] = [Self::CurrentAdmin, Self::AdminApplicant];

    /// Label stored in the `role` field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentAdmin => "Current Admin",
            Self::AdminApplicant => "Admin Applicant",
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("invalid admin role: {s}"))
    }
}

/// Order processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
}

impl OrderStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Processing, Self::Completed];

    /// Label stored in the `status` field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
