//! Domain value objects: SettingKind, LineRule, ComponentKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity. This
//! file defines the types and their string representations; only
//! `SettingKind` parses from text. Behaviour keyed on a kind is a `match` on the variant.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── SettingKind ──────────────────────────────────────────────────────────────

/// Type of a module setting as declared in the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Bool,
    Str,
    Num,
    Arr,
    Aarr,
    Select,
}

impl SettingKind {
    pub const ALL: [SettingKind; 6] = [
        Self::Bool,
        Self::Str,
        Self::Num,
        Self::Arr,
        Self::Aarr,
        Self::Select,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Num => "num",
            Self::Arr => "arr",
            Self::Aarr => "aarr",
            Self::Select => "select",
        }
    }

    /// Resolve a declared type, falling back to `str` for anything unknown.
    pub fn resolve_or_default(declared: &str) -> Self {
        declared.parse().unwrap_or(Self::Str)
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKind {
    type Err = DomainError;

    /// Exact, case-sensitive match: the descriptor format stores lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSettingType(s.to_string()))
    }
}

// ── LineRule ─────────────────────────────────────────────────────────────────

/// Validation applied to each line of multi-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRule {
    /// There must be something in the line.
    NotEmpty,
    /// The line must be an UpperCamelCase name.
    #[default]
    CamelCase,
}

impl LineRule {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotEmpty => "not_empty",
            Self::CamelCase => "camel_case",
        }
    }
}

impl fmt::Display for LineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ComponentKind ────────────────────────────────────────────────────────────

/// Kind of a generated class, recognised from its path in the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Controller,
    Model,
    List,
    Widget,
}

/// Path markers used to classify descriptor `files` entries.
pub const CONTROLLER_MARKER: &str = "/Application/Controller/";
pub const MODEL_MARKER: &str = "/Application/Model/";
pub const LIST_MARKER: &str = "List.php";
pub const WIDGET_MARKER: &str = "/Application/Component/Widget/";

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [Self::Controller, Self::Model, Self::List, Self::Widget];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Model => "model",
            Self::List => "list",
            Self::Widget => "widget",
        }
    }

    /// Directory (relative to the module root) where classes of this kind live.
    pub const fn directory(&self) -> &'static str {
        match self {
            Self::Controller => "Application/Controller/",
            Self::Model | Self::List => "Application/Model/",
            Self::Widget => "Application/Component/Widget/",
        }
    }

    /// Whether a descriptor file path belongs to this kind.
    ///
    /// Markers match case-insensitively. Models and lists share a directory
    /// and are told apart by the last path segment, so a path is never both.
    pub fn matches_path(&self, path: &str) -> bool {
        match self {
            Self::Controller => contains_ignore_case(path, CONTROLLER_MARKER),
            Self::Widget => contains_ignore_case(path, WIDGET_MARKER),
            Self::Model => contains_ignore_case(path, MODEL_MARKER) && !is_list_file(path),
            Self::List => contains_ignore_case(path, MODEL_MARKER) && is_list_file(path),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

fn is_list_file(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    last_segment
        .to_ascii_lowercase()
        .ends_with(&LIST_MARKER.to_ascii_lowercase())
}
