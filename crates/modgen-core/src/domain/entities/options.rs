use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::block::BlockMap,
    error::DomainError,
    value_objects::{ComponentKind, SettingKind},
};

/// Shop class name to the module-relative directory its extension lives in.
pub type ClassLinks = IndexMap<String, String>;

/// The generation options record.
///
/// Produced by the metadata parser when editing an existing module, or by
/// the validator from a module form. Consumed by the generator. Field names
/// on the wire keep the `a*` keys the module wizard has always used.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(rename = "aExtendClasses", default)]
    pub extend_classes: ClassLinks,

    #[serde(rename = "aNewControllers", default)]
    pub controllers: Vec<String>,

    #[serde(rename = "aNewModels", default)]
    pub models: Vec<String>,

    #[serde(rename = "aNewLists", default)]
    pub lists: Vec<String>,

    #[serde(rename = "aNewWidgets", default)]
    pub widgets: Vec<String>,

    #[serde(rename = "aNewBlocks", default)]
    pub blocks: BlockMap,

    #[serde(rename = "aModuleSettings", default)]
    pub settings: Vec<ModuleSetting>,
}

impl GenerationOptions {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidOptions(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn components(&self, kind: ComponentKind) -> &[String] {
        match kind {
            ComponentKind::Controller => &self.controllers,
            ComponentKind::Model => &self.models,
            ComponentKind::List => &self.lists,
            ComponentKind::Widget => &self.widgets,
        }
    }

    pub fn components_mut(&mut self, kind: ComponentKind) -> &mut Vec<String> {
        match kind {
            ComponentKind::Controller => &mut self.controllers,
            ComponentKind::Model => &mut self.models,
            ComponentKind::List => &mut self.lists,
            ComponentKind::Widget => &mut self.widgets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.extend_classes.is_empty()
            && ComponentKind::ALL
                .iter()
                .all(|kind| self.components(*kind).is_empty())
            && self.blocks.is_empty()
            && self.settings.is_empty()
    }
}

/// One module setting as edited in the form.
///
/// `name` has the module id stripped and `value` is the display text for
/// the setting's type (see [`crate::domain::settings`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSetting {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SettingKind,
    pub value: String,
}

impl ModuleSetting {
    pub fn new(name: impl Into<String>, kind: SettingKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
        }
    }
}
