// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Feedback items rendered next to the answer regions of the UI

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a feedback item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
    Warning,
    Hint,
    Info,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
            FeedbackKind::Warning => "warning",
            FeedbackKind::Hint => "hint",
            FeedbackKind::Info => "info",
        }
    }
}

/// UI region a feedback item refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackTarget {
    FinalAnswer,
    ForceDiagram,
    Supports,
    Equations,
    Calculation,
    WaveShape,
    WaveAmplitude,
    WaveWavelength,
    WaveMatch,
    Parameters,
}

impl FeedbackTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackTarget::FinalAnswer => "final-answer",
            FeedbackTarget::ForceDiagram => "force-diagram",
            FeedbackTarget::Supports => "supports",
            FeedbackTarget::Equations => "equations",
            FeedbackTarget::Calculation => "calculation",
            FeedbackTarget::WaveShape => "wave-shape",
            FeedbackTarget::WaveAmplitude => "wave-amplitude",
            FeedbackTarget::WaveWavelength => "wave-wavelength",
            FeedbackTarget::WaveMatch => "wave-match",
            FeedbackTarget::Parameters => "parameters",
        }
    }
}

/// A single feedback message. The `id` is unique within a result and has no
/// meaning across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: String,
    pub kind: FeedbackKind,
    pub target: FeedbackTarget,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl FeedbackItem {
    pub fn new(kind: FeedbackKind, target: FeedbackTarget, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            target,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Same item pointed at another region
    pub fn retarget(mut self, target: FeedbackTarget) -> Self {
        self.target = target;
        self
    }
}

/// Collects feedback items in the order a strategy produces them
#[derive(Debug, Default)]
pub struct FeedbackBuilder {
    items: Vec<FeedbackItem>,
}

impl FeedbackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: FeedbackItem) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = FeedbackItem>) -> &mut Self {
        self.items.extend(items);
        self
    }

    pub fn success(&mut self, target: FeedbackTarget, message: impl Into<String>) -> &mut Self {
        self.push(FeedbackItem::new(FeedbackKind::Success, target, message))
    }

    pub fn error(&mut self, target: FeedbackTarget, message: impl Into<String>) -> &mut Self {
        self.push(FeedbackItem::new(FeedbackKind::Error, target, message))
    }

    pub fn warning(&mut self, target: FeedbackTarget, message: impl Into<String>) -> &mut Self {
        self.push(FeedbackItem::new(FeedbackKind::Warning, target, message))
    }

    pub fn hint(&mut self, target: FeedbackTarget, message: impl Into<String>) -> &mut Self {
        self.push(FeedbackItem::new(FeedbackKind::Hint, target, message))
    }

    pub fn build(self) -> Vec<FeedbackItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let mut fb = FeedbackBuilder::new();
        fb.error(FeedbackTarget::FinalAnswer, "wrong sign")
            .warning(FeedbackTarget::FinalAnswer, "wrong unit");
        let items = fb.build();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, FeedbackKind::Error);
        assert_eq!(items[1].kind, FeedbackKind::Warning);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = FeedbackItem::new(FeedbackKind::Info, FeedbackTarget::Equations, "a");
        let b = FeedbackItem::new(FeedbackKind::Info, FeedbackTarget::Equations, "a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_format() {
        let item = FeedbackItem::new(FeedbackKind::Hint, FeedbackTarget::WaveShape, "smoother")
            .with_suggestion("draw one full period");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["kind"], "hint");
        assert_eq!(value["target"], "wave-shape");
        assert_eq!(value["suggestion"], "draw one full period");
    }
}
