use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::domain::{
    coerce::value_to_text,
    entities::{module::ModuleInfo, options::GenerationOptions},
    error::DomainError,
    settings::typed_value,
    value_objects::ComponentKind,
};

/// A module descriptor (`metadata.json`): the nested document the platform
/// reads to register a module.
///
/// Stored as an untyped, order preserving JSON object. Descriptors are hand
/// edited, so every accessor tolerates missing or mistyped sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleDescriptor(Map<String, Value>);

impl ModuleDescriptor {
    /// Parse a descriptor document. The top level must be an object.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        match serde_json::from_str(json) {
            Ok(Value::Object(data)) => Ok(Self(data)),
            Ok(other) => Err(DomainError::InvalidDescriptor(format!(
                "expected an object at the top level, found {}",
                json_type(&other)
            ))),
            Err(e) => Err(DomainError::InvalidDescriptor(e.to_string())),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The module id as text, if present and scalar.
    pub fn id(&self) -> Option<String> {
        self.0.get("id").and_then(value_to_text)
    }

    /// A section that must be a mapping (`extend`, `files`). Anything else
    /// reads as absent.
    pub fn mapping(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Entries of a sequence section (`blocks`, `settings`). An object is
    /// read as the sequence of its values.
    pub fn sequence(&self, key: &str) -> Vec<&Value> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(Value::Object(fields)) => fields.values().collect(),
            _ => Vec::new(),
        }
    }

    pub fn id_stripper(&self) -> IdStripper {
        IdStripper::new(self.id())
    }

    /// Build the descriptor for `module` from generation options.
    ///
    /// Parsing the result with the metadata parser yields `options` again,
    /// as long as list names end with `List` and setting values are in
    /// their canonical display form.
    pub fn build(module: &ModuleInfo, options: &GenerationOptions) -> Self {
        let id = module.id();
        let root = module.relative_dir();
        let mut data = Map::new();

        data.insert("id".into(), Value::String(id.clone()));

        let extend: Map<String, Value> = options
            .extend_classes
            .iter()
            .map(|(class, dir)| {
                let path = format!(
                    "{root}{}{id}{}",
                    dir.trim_start_matches('/'),
                    short_class_name(class)
                );
                (class.clone(), Value::String(path))
            })
            .collect();
        data.insert("extend".into(), Value::Object(extend));

        let mut files = Map::new();
        for kind in ComponentKind::ALL {
            for name in options.components(kind) {
                let class = module.prefixed(&component_class_name(kind, name));
                let path = format!("{root}{}{class}.php", kind.directory());
                files.insert(class, Value::String(path));
            }
        }
        data.insert("files".into(), Value::Object(files));

        let blocks = options
            .blocks
            .values()
            .map(|block| {
                json!({
                    "template": block.template,
                    "block": block.block,
                    "file": block.file,
                })
            })
            .collect();
        data.insert("blocks".into(), Value::Array(blocks));

        let settings = options
            .settings
            .iter()
            .map(|setting| {
                let typed = typed_value(setting.kind, &setting.value);
                let mut entry = Map::new();
                entry.insert("name".into(), Value::String(module.prefixed(&setting.name)));
                entry.insert("type".into(), Value::String(setting.kind.to_string()));
                entry.insert("value".into(), typed.value);
                if let Some(constrains) = typed.constrains {
                    entry.insert("constrains".into(), Value::String(constrains));
                }
                Value::Object(entry)
            })
            .collect();
        data.insert("settings".into(), Value::Array(settings));

        Self(data)
    }
}

/// Class name a component of `kind` gets, before the module id prefix.
pub fn component_class_name(kind: ComponentKind, name: &str) -> String {
    if kind == ComponentKind::List && !name.ends_with("List") {
        format!("{name}List")
    } else {
        name.to_string()
    }
}

/// Last segment of a namespaced class name.
pub fn short_class_name(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}

/// Removes the module id from names, ignoring case.
///
/// Without an id every name strips to the empty string.
#[derive(Debug, Clone)]
pub struct IdStripper {
    pattern: Option<Regex>,
    has_id: bool,
}

impl IdStripper {
    pub fn new(id: Option<String>) -> Self {
        let pattern = id.as_deref().filter(|id| !id.is_empty()).and_then(|id| {
            RegexBuilder::new(&regex::escape(id))
                .case_insensitive(true)
                .build()
                .ok()
        });

        Self {
            pattern,
            has_id: id.is_some(),
        }
    }

    pub fn strip(&self, name: &str) -> String {
        match (&self.pattern, self.has_id) {
            (Some(pattern), _) => pattern.replace_all(name, NoExpand("")).into_owned(),
            (None, true) => name.to_string(),
            (None, false) => String::new(),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
