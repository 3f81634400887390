//! Strength catalog
//!
//! Four fixed categories. Only `value` and `color` ever change; the color is
//! always derived from the active theme's palette by catalog ordinal.

use card_core::Color;
use card_theme::{palette_for, ThemeName};
use serde::{Serialize, Serializer};

pub const EXECUTING: &str = "executing";
pub const INFLUENCING: &str = "influencing";
pub const RELATIONSHIP_BUILDING: &str = "relationship-building";
pub const STRATEGIC_THINKING: &str = "strategic-thinking";

/// Catalog ids in display order
pub const STRENGTH_IDS: [&str; 4] = [
    EXECUTING,
    INFLUENCING,
    RELATIONSHIP_BUILDING,
    STRATEGIC_THINKING,
];

/// Rating bounds used by the slider
pub const MIN_VALUE: i32 = 1;
pub const MAX_VALUE: i32 = 5;

/// Icon shown next to a strength name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthIcon {
    Zap,
    Megaphone,
    Users,
    Lightbulb,
}

/// One rated strength
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StrengthCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub value: i32,
    #[serde(serialize_with = "serialize_color")]
    pub color: Color,
    pub icon: StrengthIcon,
    pub description: &'static str,
}

fn serialize_color<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(color)
}

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    default_value: i32,
    icon: StrengthIcon,
    description: &'static str,
}

const CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        id: EXECUTING,
        name: "Executing",
        default_value: 3,
        icon: StrengthIcon::Zap,
        description: "Gets things done and delivers results",
    },
    CatalogEntry {
        id: INFLUENCING,
        name: "Influencing",
        default_value: 4,
        icon: StrengthIcon::Megaphone,
        description: "Leads and motivates others effectively",
    },
    CatalogEntry {
        id: RELATIONSHIP_BUILDING,
        name: "Relationship Building",
        default_value: 5,
        icon: StrengthIcon::Users,
        description: "Connects and collaborates with others",
    },
    CatalogEntry {
        id: STRATEGIC_THINKING,
        name: "Strategic Thinking",
        default_value: 2,
        icon: StrengthIcon::Lightbulb,
        description: "Thinks ahead and plans strategically",
    },
];

/// The four catalog strengths at their default ratings, colored for `theme`
pub fn categories_for(theme: ThemeName) -> [StrengthCategory; 4] {
    let palette = palette_for(theme);
    std::array::from_fn(|i| {
        let entry = &CATALOG[i];
        StrengthCategory {
            id: entry.id,
            name: entry.name,
            value: entry.default_value,
            color: palette[i],
            icon: entry.icon,
            description: entry.description,
        }
    })
}

/// Same strengths with colors taken from `theme`'s palette
pub fn recolor(strengths: &[StrengthCategory; 4], theme: ThemeName) -> [StrengthCategory; 4] {
    let palette = palette_for(theme);
    std::array::from_fn(|i| StrengthCategory {
        color: palette[i],
        ..strengths[i].clone()
    })
}

/// Catalog ordinal of a strength id
pub fn ordinal_of(id: &str) -> Option<usize> {
    STRENGTH_IDS.iter().position(|known| *known == id)
}
