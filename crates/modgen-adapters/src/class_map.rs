//! Shop class map adapter.
//!
//! Answers class questions from a TOML class map exported from the shop:
//!
//! ```toml
//! [classes."OxidEsales\\Eshop\\Application\\Model\\Article"]
//! file = "Application/Model/Article.php"
//!
//! [classes.oxarticle]
//! file = "Core/BackwardCompatibility/oxarticle.php"
//! parent = "OxidEsales\\Eshop\\Application\\Model\\Article"
//! ```
//!
//! Relative `file` entries are resolved against the shop base path.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use modgen_core::{
    application::{ApplicationError, ports::ClassResolver},
    error::ModgenResult,
};
use serde::Deserialize;
use tracing::{debug, instrument};

// ── Manifest types ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassMapFile {
    #[serde(default)]
    classes: IndexMap<String, ClassEntry>,
}

/// One `[classes."Name"]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassEntry {
    pub file: PathBuf,
    #[serde(default)]
    pub parent: Option<String>,
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// [`ClassResolver`] backed by a static class map.
#[derive(Debug, Clone, Default)]
pub struct ClassMapResolver {
    classes: IndexMap<String, ClassEntry>,
}

impl ClassMapResolver {
    /// Create an empty class map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML class map. Relative files are joined to `shop_base`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::ClassMapError`] if the text is not a
    /// valid class map.
    pub fn from_toml(text: &str, shop_base: &Path) -> ModgenResult<Self> {
        let parsed: ClassMapFile =
            toml::from_str(text).map_err(|e| ApplicationError::ClassMapError {
                reason: e.to_string(),
            })?;

        let classes = parsed
            .classes
            .into_iter()
            .map(|(name, mut entry)| {
                if entry.file.is_relative() {
                    entry.file = shop_base.join(&entry.file);
                }
                (name, entry)
            })
            .collect();

        Ok(Self { classes })
    }

    /// Read and parse a class map file.
    #[instrument(skip(shop_base), fields(path = %path.display()))]
    pub fn load(path: &Path, shop_base: &Path) -> ModgenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ApplicationError::ClassMapError {
            reason: format!("failed to read '{}': {e}", path.display()),
        })?;

        let resolver = Self::from_toml(&text, shop_base)?;
        debug!(classes = resolver.len(), "Loaded class map");
        Ok(resolver)
    }

    /// Register a class declared in `file`.
    pub fn with_class(mut self, name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        self.classes.insert(
            name.into(),
            ClassEntry {
                file: file.into(),
                parent: None,
            },
        );
        self
    }

    /// Set the parent of an already registered class.
    pub fn with_parent(mut self, name: &str, parent: impl Into<String>) -> Self {
        if let Some(entry) = self.classes.get_mut(name) {
            entry.parent = Some(parent.into());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassResolver for ClassMapResolver {
    fn class_exists(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    fn class_file(&self, class: &str) -> Option<PathBuf> {
        self.classes.get(class).map(|entry| entry.file.clone())
    }

    fn parent_class(&self, class: &str) -> Option<String> {
        self.classes.get(class).and_then(|entry| entry.parent.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgen_core::error::{ErrorCategory, ModgenError};

    const MAP: &str = r#"
[classes."OxidEsales\\Eshop\\Application\\Model\\Article"]
file = "Application/Model/Article.php"

[classes.oxarticle]
file = "/abs/Core/BackwardCompatibility/oxarticle.php"
parent = "OxidEsales\\Eshop\\Application\\Model\\Article"
"#;

    #[test]
    fn resolves_relative_files_against_the_shop() {
        let map = ClassMapResolver::from_toml(MAP, Path::new("/shop/source")).unwrap();
        let article = r"OxidEsales\Eshop\Application\Model\Article";

        assert_eq!(map.len(), 2);
        assert!(map.class_exists(article));
        assert_eq!(
            map.class_file(article),
            Some(PathBuf::from("/shop/source/Application/Model/Article.php"))
        );
        assert_eq!(map.parent_class(article), None);
    }

    #[test]
    fn keeps_absolute_files_and_parents() {
        let map = ClassMapResolver::from_toml(MAP, Path::new("/shop/source")).unwrap();

        assert_eq!(
            map.class_file("oxarticle"),
            Some(PathBuf::from("/abs/Core/BackwardCompatibility/oxarticle.php"))
        );
        assert_eq!(
            map.parent_class("oxarticle").as_deref(),
            Some(r"OxidEsales\Eshop\Application\Model\Article")
        );
    }

    #[test]
    fn unknown_classes_resolve_to_nothing() {
        let map = ClassMapResolver::new().with_class("Known", "/k.php");

        assert!(!map.class_exists("Unknown"));
        assert_eq!(map.class_file("Unknown"), None);
        assert_eq!(map.parent_class("Unknown"), None);
    }

    #[test]
    fn invalid_toml_is_a_configuration_error() {
        let err = ClassMapResolver::from_toml("[classes.x]\nfile = 3", Path::new("/")).unwrap_err();

        assert!(matches!(
            err,
            ModgenError::Application(ApplicationError::ClassMapError { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn load_reads_from_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("classes.toml");
        std::fs::write(&path, MAP).unwrap();

        let map = ClassMapResolver::load(&path, Path::new("/shop")).unwrap();
        assert_eq!(map.len(), 2);

        assert!(ClassMapResolver::load(&temp.path().join("none.toml"), Path::new("/")).is_err());
    }

    #[test]
    fn builder_sets_parents_on_known_classes_only() {
        let map = ClassMapResolver::new()
            .with_class("child", "/c.php")
            .with_parent("child", "Parent")
            .with_parent("missing", "Parent");

        assert_eq!(map.parent_class("child").as_deref(), Some("Parent"));
        assert!(!map.class_exists("missing"));
    }
}
