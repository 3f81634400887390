//! Profile data and partial updates

use card_theme::ThemeName;
use serde::{Deserialize, Serialize};

use crate::strengths::{categories_for, recolor, StrengthCategory};

pub const SEED_NAME: &str = "Aria Montgomery";
pub const SEED_TITLE: &str = "Product Designer";
pub const SEED_DESCRIPTION: &str = "Leads the design team for our flagship product, turning user research into intuitive and beautiful interfaces.";

/// Everything shown on the card
///
/// Strength colors always match `palette_for(theme)`; [`ProfileData::merged`]
/// is the only way a theme change enters, and it recolors in the same step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileData {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Avatar as a base64 data URI; empty when unset
    pub image: String,
    pub notes: String,
    pub theme: ThemeName,
    strengths: [StrengthCategory; 4],
}

impl ProfileData {
    /// The profile shown when the card first mounts
    pub fn seed() -> Self {
        let theme = ThemeName::Minimal;
        Self {
            name: SEED_NAME.to_string(),
            title: SEED_TITLE.to_string(),
            description: SEED_DESCRIPTION.to_string(),
            image: String::new(),
            notes: String::new(),
            theme,
            strengths: categories_for(theme),
        }
    }

    pub fn strengths(&self) -> &[StrengthCategory; 4] {
        &self.strengths
    }

    pub fn strength(&self, id: &str) -> Option<&StrengthCategory> {
        self.strengths.iter().find(|s| s.id == id)
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Shallow merge of `update` into a copy of this profile.
    ///
    /// A theme that differs from the current one recolors the merged
    /// strengths; an equal theme leaves them untouched.
    pub fn merged(&self, update: ProfileUpdate) -> ProfileData {
        let mut next = self.clone();
        if let Some(name) = update.name {
            next.name = name;
        }
        if let Some(title) = update.title {
            next.title = title;
        }
        if let Some(description) = update.description {
            next.description = description;
        }
        if let Some(image) = update.image {
            next.image = image;
        }
        if let Some(notes) = update.notes {
            next.notes = notes;
        }
        if let Some(values) = update.strength_values {
            for (strength, value) in next.strengths.iter_mut().zip(values) {
                strength.value = value;
            }
        }
        if let Some(theme) = update.theme {
            if theme != self.theme {
                next.theme = theme;
                next.strengths = recolor(&next.strengths, theme);
            }
        }
        next
    }

    /// Copy with one strength's value replaced. Unknown ids change nothing.
    pub(crate) fn with_strength_value(&self, id: &str, value: i32) -> ProfileData {
        let mut next = self.clone();
        if let Some(strength) = next.strengths.iter_mut().find(|s| s.id == id) {
            strength.value = value;
        }
        next
    }
}

impl Default for ProfileData {
    fn default() -> Self {
        Self::seed()
    }
}

/// A partial profile update; absent fields keep their current value
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub notes: Option<String>,
    pub theme: Option<ThemeName>,
    /// Ratings in catalog order
    pub strength_values: Option<[i32; 4]>,
}

impl ProfileUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn theme(mut self, theme: ThemeName) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn strength_values(mut self, values: [i32; 4]) -> Self {
        self.strength_values = Some(values);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
