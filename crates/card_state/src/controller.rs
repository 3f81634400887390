//! Profile state controller
//!
//! Owns the single [`ProfileData`] and replaces it whole on every edit.
//! Theme changes are reported to an optional listener injected at
//! construction.

use rand::Rng;

use crate::profile::{ProfileData, ProfileUpdate};
use crate::strengths::{MAX_VALUE, MIN_VALUE};

/// Receives `true` when the newly selected theme is dark
pub type ThemeListener = Box<dyn Fn(bool) + Send + Sync>;

pub const SAMPLE_NAMES: [&str; 5] = [
    "Alex Rivera",
    "Jordan Chen",
    "Casey Murphy",
    "Taylor Kim",
    "Morgan Davis",
];

pub const SAMPLE_TITLES: [&str; 5] = [
    "Product Designer",
    "Engineering Lead",
    "Marketing Strategist",
    "Data Scientist",
    "UX Researcher",
];

pub const SAMPLE_DESCRIPTIONS: [&str; 5] = [
    "Passionate about creating user-centered designs that solve real problems.",
    "Leads cross-functional teams to deliver innovative solutions.",
    "Drives growth through data-driven marketing strategies.",
    "Transforms complex data into actionable insights.",
    "Advocates for users through comprehensive research and testing.",
];

pub struct ProfileController {
    profile: ProfileData,
    listener: Option<ThemeListener>,
}

impl ProfileController {
    /// Start from the seed profile
    pub fn new(listener: Option<ThemeListener>) -> Self {
        Self::with_profile(ProfileData::seed(), listener)
    }

    pub fn with_profile(profile: ProfileData, listener: Option<ThemeListener>) -> Self {
        Self { profile, listener }
    }

    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    /// Merge a partial update. Notifies the listener only when the theme
    /// actually changed.
    pub fn update(&mut self, update: ProfileUpdate) -> &ProfileData {
        let previous_theme = self.profile.theme;
        tracing::debug!(?update, "profile update");
        self.profile = self.profile.merged(update);

        if self.profile.theme != previous_theme {
            let dark = self.profile.theme.is_dark();
            tracing::debug!(from = %previous_theme, to = %self.profile.theme, dark, "theme changed");
            if let Some(listener) = &self.listener {
                listener(dark);
            }
        }
        &self.profile
    }

    /// Set one strength rating. The value is stored as given; unknown ids
    /// are ignored.
    pub fn set_strength_value(&mut self, id: &str, value: i32) -> &ProfileData {
        if self.profile.strength(id).is_none() {
            tracing::debug!(id, "ignoring value for unknown strength");
            return &self.profile;
        }
        tracing::debug!(id, value, "strength value");
        self.profile = self.profile.with_strength_value(id, value);
        &self.profile
    }

    /// Fill name, title, description and ratings with random demo data
    pub fn randomize(&mut self) -> &ProfileData {
        self.randomize_with(&mut rand::rng())
    }

    /// [`randomize`](Self::randomize) with a caller-provided generator
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ProfileData {
        let name = pick(rng, &SAMPLE_NAMES);
        let title = pick(rng, &SAMPLE_TITLES);
        let description = pick(rng, &SAMPLE_DESCRIPTIONS);
        let values: [i32; 4] = std::array::from_fn(|_| rng.random_range(MIN_VALUE..=MAX_VALUE));

        tracing::debug!(%name, ?values, "randomized profile");
        self.update(
            ProfileUpdate::default()
                .name(name)
                .title(title)
                .description(description)
                .strength_values(values),
        )
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, list: &[&str]) -> String {
    list[rng.random_range(0..list.len())].to_string()
}

impl Default for ProfileController {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for ProfileController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileController")
            .field("profile", &self.profile)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_theme::{palette_for, ThemeName};
    use std::sync::{Arc, Mutex};

    fn recording() -> (ThemeListener, Arc<Mutex<Vec<bool>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (Box::new(move |dark: bool| sink.lock().unwrap().push(dark)), calls)
    }

    #[test]
    fn test_dark_mode_recolors_and_notifies() {
        let (listener, calls) = recording();
        let mut controller = ProfileController::new(Some(listener));

        let profile = controller.update(ProfileUpdate::default().theme(ThemeName::DarkMode));
        assert_eq!(
            profile.strengths()[0].color,
            palette_for(ThemeName::DarkMode)[0]
        );
        assert_eq!(*calls.lock().unwrap(), vec![true]);

        controller.update(ProfileUpdate::default().theme(ThemeName::Verizon));
        assert_eq!(*calls.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_unchanged_theme_does_not_notify() {
        let (listener, calls) = recording();
        let mut controller = ProfileController::new(Some(listener));

        controller.update(ProfileUpdate::default().theme(ThemeName::Minimal));
        controller.update(ProfileUpdate::default().name("Sam"));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_set_strength_value_accepts_out_of_range() {
        let mut controller = ProfileController::default();
        let profile = controller.set_strength_value("influencing", 9);
        assert_eq!(profile.strength("influencing").map(|s| s.value), Some(9));
    }

    #[test]
    fn test_unknown_strength_is_noop() {
        let mut controller = ProfileController::default();
        let before = controller.profile().clone();
        controller.set_strength_value("nonexistent", 5);
        assert_eq!(controller.profile(), &before);
    }
}
