//! Core domain entities for HR Tool.
//!
//! A [`Horse`] is the only persisted element. The vocabularies it draws on
//! ([`Sex`], [`Role`]) are closed enums that still round-trip values written by
//! other tools, and [`Score`] keeps the difference between a missing and an
//! explicitly cleared GP score. Stored fields of the wrong type read as their
//! defaults, so one odd record never costs the rest of the collection.

use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

mod lenient;
mod score;
mod vocab;

pub use score::Score;
pub use vocab::{Role, Sex};

/// Unique identifier of a [`Horse`]. Immutable once assigned.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HorseId(String);

impl HorseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for HorseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HorseId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: HorseId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::sex")]
    pub sex: Sex,
    #[serde(default, deserialize_with = "lenient::text")]
    pub breed: String,
    /// Registry identifier, displayed as `#<life number>`
    #[serde(default, deserialize_with = "lenient::text")]
    pub life_number: String,
    #[serde(default, skip_serializing_if = "Score::is_absent")]
    pub gp_overall: Score,
    #[serde(default, with = "vocab::role_string")]
    pub role: Option<Role>,
    /// Empty means "use the placeholder"
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Horse {
    /// A bare record with the given id and name, every other field left unset.
    pub fn new(id: impl Into<HorseId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sex: Sex::default(),
            breed: String::new(),
            life_number: String::new(),
            gp_overall: Score::Absent,
            role: None,
            image_url: String::new(),
            notes: String::new(),
            updated_at: None,
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn with_life_number(mut self, life_number: impl Into<String>) -> Self {
        self.life_number = life_number.into();
        self
    }

    pub fn with_gp_overall(mut self, score: f64) -> Self {
        self.gp_overall = Score::Value(score);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}
