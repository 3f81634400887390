//! Scenario definition for headless card runs.

use anyhow::{Context, Result};
use card_core::FileHandle;
use card_theme::ThemeName;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Sequence of headless steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file. Relative file paths in the steps resolve
    /// against the scenario's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut scenario =
            Self::from_json(&raw).with_context(|| format!("Failed to parse {}", path.display()))?;
        if let Some(base) = path.parent() {
            scenario.resolve_paths(base);
        }
        Ok(scenario)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for step in &mut self.steps {
            let files: Vec<&mut ScenarioFile> = match step {
                ScenarioStep::DropFiles { files } => files.iter_mut().collect(),
                ScenarioStep::PickFile { file } => vec![file],
                _ => continue,
            };
            for file in files {
                if file.path.is_relative() {
                    file.path = base.join(&file.path);
                }
            }
        }
    }
}

/// A file offered to the card by a scenario
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    pub path: PathBuf,
    pub media_type: String,
}

impl ScenarioFile {
    pub fn handle(&self) -> FileHandle {
        FileHandle::from_path(&self.path, &self.media_type)
    }
}

fn default_tolerance() -> f32 {
    0.01
}

/// Scenario steps: time, input events, and assertions.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Wait { ms: u64 },
    Tick { frames: u32 },
    /// Jump every animation to its resting state
    Settle,

    /// Replace the text of an input
    Edit { id: String, text: String },
    /// Click the center of an element
    Click { id: String },
    SelectTheme { theme: ThemeName },
    SetStrength { id: String, value: i32 },
    DragOver,
    DragLeave,
    DropFiles { files: Vec<ScenarioFile> },
    PickFile { file: ScenarioFile },
    Randomize {
        #[serde(default)]
        seed: Option<u64>,
    },
    Download,

    AssertExists { id: String },
    AssertTextContains { id: String, value: String },
    AssertActive { id: String, active: bool },
    AssertValue {
        id: String,
        value: f32,
        #[serde(default = "default_tolerance")]
        tolerance: f32,
    },
    AssertPageDark { dark: bool },
    AssertExported { filename: String },
}

impl ScenarioStep {
    /// The step's `type` tag
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioStep::Wait { .. } => "wait",
            ScenarioStep::Tick { .. } => "tick",
            ScenarioStep::Settle => "settle",
            ScenarioStep::Edit { .. } => "edit",
            ScenarioStep::Click { .. } => "click",
            ScenarioStep::SelectTheme { .. } => "select_theme",
            ScenarioStep::SetStrength { .. } => "set_strength",
            ScenarioStep::DragOver => "drag_over",
            ScenarioStep::DragLeave => "drag_leave",
            ScenarioStep::DropFiles { .. } => "drop_files",
            ScenarioStep::PickFile { .. } => "pick_file",
            ScenarioStep::Randomize { .. } => "randomize",
            ScenarioStep::Download => "download",
            ScenarioStep::AssertExists { .. } => "assert_exists",
            ScenarioStep::AssertTextContains { .. } => "assert_text_contains",
            ScenarioStep::AssertActive { .. } => "assert_active",
            ScenarioStep::AssertValue { .. } => "assert_value",
            ScenarioStep::AssertPageDark { .. } => "assert_page_dark",
            ScenarioStep::AssertExported { .. } => "assert_exported",
        }
    }

    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            ScenarioStep::AssertExists { .. }
                | ScenarioStep::AssertTextContains { .. }
                | ScenarioStep::AssertActive { .. }
                | ScenarioStep::AssertValue { .. }
                | ScenarioStep::AssertPageDark { .. }
                | ScenarioStep::AssertExported { .. }
        )
    }
}
