//! Assertion helpers for headless scenarios.

use std::collections::HashMap;

use card_cn::{CardScene, Element};
use serde::Serialize;

/// Snapshot of app-observable state used for headless assertions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnosticsSnapshot {
    pub elements: HashMap<String, DiagnosticsElement>,
    /// Whether the host page is in dark mode
    pub page_dark: bool,
    /// Filenames of delivered downloads, oldest first
    pub exports: Vec<String>,
}

impl DiagnosticsSnapshot {
    /// Collect every element of a page scene
    pub fn from_scene(scene: &CardScene) -> Self {
        let elements = scene
            .elements
            .iter()
            .map(|e| (e.id.clone(), DiagnosticsElement::from(e)))
            .collect();
        Self {
            elements,
            ..Self::default()
        }
    }
}

/// Element representation for diagnostics checks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnosticsElement {
    pub text: Option<String>,
    pub value: Option<f32>,
    pub active: bool,
    pub disabled: bool,
}

impl From<&Element> for DiagnosticsElement {
    fn from(element: &Element) -> Self {
        Self {
            text: element.text.clone(),
            value: element.value,
            active: element.active,
            disabled: element.disabled,
        }
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

fn failed(code: &str, message: String) -> AssertionResult {
    AssertionResult::Failed {
        code: code.to_string(),
        message,
    }
}

fn find<'s>(
    id: &str,
    snapshot: &'s DiagnosticsSnapshot,
) -> Result<&'s DiagnosticsElement, AssertionResult> {
    snapshot
        .elements
        .get(id)
        .ok_or_else(|| failed("missing_element", format!("{id}: element not found")))
}

pub fn evaluate_assert_exists(id: &str, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    match find(id, snapshot) {
        Ok(_) => AssertionResult::Passed,
        Err(failure) => failure,
    }
}

pub fn evaluate_assert_text_contains(
    id: &str,
    expected: &str,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let element = match find(id, snapshot) {
        Ok(element) => element,
        Err(failure) => return failure,
    };
    let Some(text) = element.text.as_deref() else {
        return failed("missing_text", format!("{id}: text not available"));
    };
    if text.contains(expected) {
        AssertionResult::Passed
    } else {
        failed(
            "text_mismatch",
            format!("{id}: expected substring '{expected}', got '{text}'"),
        )
    }
}

pub fn evaluate_assert_active(
    id: &str,
    expected: bool,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    match find(id, snapshot) {
        Ok(element) if element.active == expected => AssertionResult::Passed,
        Ok(element) => failed(
            "active_mismatch",
            format!("{id}: expected active={expected}, got {}", element.active),
        ),
        Err(failure) => failure,
    }
}

pub fn evaluate_assert_value(
    id: &str,
    expected: f32,
    tolerance: f32,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let element = match find(id, snapshot) {
        Ok(element) => element,
        Err(failure) => return failure,
    };
    match element.value {
        Some(value) if (value - expected).abs() <= tolerance => AssertionResult::Passed,
        Some(value) => failed(
            "value_mismatch",
            format!("{id}: expected {expected} ± {tolerance}, got {value}"),
        ),
        None => failed("missing_value", format!("{id}: value not available")),
    }
}

pub fn evaluate_assert_page_dark(expected: bool, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.page_dark == expected {
        AssertionResult::Passed
    } else {
        failed(
            "page_mode_mismatch",
            format!("expected page_dark={expected}, got {}", snapshot.page_dark),
        )
    }
}

pub fn evaluate_assert_exported(filename: &str, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.exports.iter().any(|f| f == filename) {
        AssertionResult::Passed
    } else {
        failed(
            "missing_export",
            format!("{filename}: not exported (exports: {:?})", snapshot.exports),
        )
    }
}
