use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(CoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Pathway {
    Surgical => "surgical",
    Consultation => "consultation",
    Emergency => "emergency",
});

str_enum!(TaskType {
    Lab => "lab",
    Medication => "medication",
    Procedure => "procedure",
    Assessment => "assessment",
    Discharge => "discharge",
});

str_enum!(TaskStatus {
    Open => "open",
    InProgress => "in-progress",
    Done => "done",
    Cancelled => "cancelled",
});

str_enum!(TaskPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

str_enum!(NotificationType {
    Urgent => "urgent",
    Update => "update",
    Assignment => "assignment",
    Report => "report",
});

str_enum!(StaffRole {
    Doctor => "doctor",
    Nurse => "nurse",
    Pharmacist => "pharmacist",
    Technician => "technician",
    Admin => "admin",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});
