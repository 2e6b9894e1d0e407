use serde::{Deserialize, Serialize};

use super::enums::StaffRole;

/// A staff member as shown on the profile page and assignment chips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: String,
    pub name: String,
    pub role: StaffRole,
    pub department: String,
    pub contact: ContactInfo,
    /// Human-readable shift label, e.g. "Day Shift (7AM - 7PM)".
    pub shift: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
}
