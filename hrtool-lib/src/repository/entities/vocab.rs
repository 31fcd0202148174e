use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    #[default]
    Mare,
    Stallion,
    Foal,
    /// Anything else found in storage. Kept verbatim so it survives a save.
    Other(String),
}

impl Sex {
    /// The values offered by the horse form, in display order.
    pub const CHOICES: [Sex; 3] = [Sex::Mare, Sex::Stallion, Sex::Foal];

    pub fn as_str(&self) -> &str {
        match self {
            Sex::Mare => "Mare",
            Sex::Stallion => "Stallion",
            Sex::Foal => "Foal",
            Sex::Other(s) => s,
        }
    }
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Mare" => Sex::Mare,
            "Stallion" => Sex::Stallion,
            "Foal" => Sex::Foal,
            _ => Sex::Other(value),
        }
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Other(s) => s,
            known => known.as_str().into(),
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Broodmare,
    Stud,
    Sales,
    Other(String),
}

impl Role {
    /// The values offered by the horse form, in display order.
    pub const CHOICES: [Role; 3] = [Role::Broodmare, Role::Stud, Role::Sales];

    pub fn as_str(&self) -> &str {
        match self {
            Role::Broodmare => "Broodmare",
            Role::Stud => "Stud",
            Role::Sales => "Sales",
            Role::Other(s) => s,
        }
    }

    /// Parse a role as typed or stored. Blank text means no role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "Broodmare" => Some(Role::Broodmare),
            "Stud" => Some(Role::Stud),
            "Sales" => Some(Role::Sales),
            other => Some(Role::Other(other.into())),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles are persisted as a plain string where the empty string means "no role".
pub(crate) mod role_string {
    use serde::{Deserializer, Serializer};

    use super::Role;
    use crate::repository::entities::lenient;

    pub fn serialize<S>(role: &Option<Role>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(role.as_ref().map(Role::as_str).unwrap_or_default())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Role::parse(&lenient::text(deserializer)?))
    }
}
