use serde::Deserialize;

use crate::domain::error::DomainError;

/// Raw module form as a user fills it in: one multi-line text field per
/// option group and free-form setting rows.
///
/// Nothing here is validated yet. See `ModuleValidator::collect_options`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleForm {
    pub extend: String,
    pub controllers: String,
    pub models: String,
    pub lists: String,
    pub widgets: String,
    pub blocks: String,
    pub settings: Vec<SettingRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingRow {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl ModuleForm {
    pub fn from_toml(source: &str) -> Result<Self, DomainError> {
        toml::from_str(source).map_err(|e| DomainError::InvalidForm(e.to_string()))
    }
}
