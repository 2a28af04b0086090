use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CoreError;

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Donor,
    Creator,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Donor => "donor",
            UserRole::Creator => "creator",
            UserRole::Admin => "admin",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "donor" => Ok(UserRole::Donor),
            "creator" => Ok(UserRole::Creator),
            "admin" => Ok(UserRole::Admin),
            other => Err(CoreError::InvalidEnumValue {
                field: "user role",
                value: other.to_string(),
            }),
        }
    }
}
