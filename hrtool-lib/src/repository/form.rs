use chrono::{DateTime, Utc};

use crate::{
    Error, Result,
    repository::{
        entities::{Horse, HorseId, Role, Score, Sex},
        ids::IdGenerator,
    },
};

/// The raw contents of the horse form, including the hidden id of the horse being edited.
///
/// Fields hold text exactly as typed; trimming and parsing happen in [`HorseForm::to_horse`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HorseForm {
    /// Empty when adding a new horse
    pub id: String,
    pub name: String,
    pub sex: Sex,
    pub breed: String,
    pub life_number: String,
    pub gp_overall: String,
    pub role: Option<Role>,
    pub image_url: String,
    pub notes: String,
}

impl HorseForm {
    /// Load an existing horse for editing.
    pub fn edit(horse: &Horse) -> Self {
        Self {
            id: horse.id.to_string(),
            name: horse.name.clone(),
            sex: horse.sex.clone(),
            breed: horse.breed.clone(),
            life_number: horse.life_number.clone(),
            gp_overall: horse.gp_overall.to_string(),
            role: horse.role.clone(),
            image_url: horse.image_url.clone(),
            notes: horse.notes.clone(),
        }
    }

    /// Clear every field back to the "Add Horse" state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Horse"
        } else {
            "Add Horse"
        }
    }

    /// Whether the form would pass validation.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Build the record this form describes. A new id is only allocated when the form isn't
    /// editing an existing horse, and never one for which `taken` holds.
    pub fn to_horse(
        &self,
        ids: &dyn IdGenerator,
        now: DateTime<Utc>,
        taken: impl Fn(&HorseId) -> bool,
    ) -> Result<Horse> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::NameRequired);
        }

        let id = if self.id.is_empty() {
            loop {
                let id = ids.next_id();
                if !taken(&id) {
                    break id;
                }
            }
        } else {
            HorseId::new(self.id.clone())
        };

        Ok(Horse {
            id,
            name: name.into(),
            sex: self.sex.clone(),
            breed: self.breed.trim().into(),
            life_number: self.life_number.trim().into(),
            gp_overall: Score::parse(&self.gp_overall),
            role: self.role.clone(),
            image_url: self.image_url.trim().into(),
            notes: self.notes.trim().into(),
            updated_at: Some(now),
        })
    }
}
