//! Placeholder template engine.
//!
//! Skeleton files mark variables as `[{$name}]`. Rendering replaces every
//! assigned variable; unknown placeholders are left as they are.

use std::path::Path;

use indexmap::IndexMap;
use modgen_core::{
    application::ports::{Filesystem, TemplateEngine},
    error::ModgenResult,
};
use tracing::{instrument, trace};

const OPEN: &str = "[{$";
const CLOSE: &str = "}]";

/// Template engine substituting `[{$name}]` placeholders.
pub struct PlaceholderEngine {
    filesystem: Box<dyn Filesystem>,
    variables: IndexMap<String, String>,
}

impl PlaceholderEngine {
    /// Create an engine reading templates through `filesystem`.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            variables: IndexMap::new(),
        }
    }

    /// Render `template` text with the current assignments, in one pass.
    /// Substituted values are copied as they are, placeholders inside them
    /// included.
    pub fn render_str(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after = &rest[start + OPEN.len()..];

            let assigned = after
                .find(CLOSE)
                .and_then(|end| Some((self.variables.get(&after[..end])?, end)));
            match assigned {
                Some((value, end)) => {
                    out.push_str(value);
                    rest = &after[end + CLOSE.len()..];
                }
                None => {
                    out.push_str(OPEN);
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl TemplateEngine for PlaceholderEngine {
    fn assign(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    #[instrument(skip(self), fields(template = %template.display()))]
    fn fetch(&mut self, template: &Path) -> ModgenResult<String> {
        let source = self.filesystem.read_to_string(template)?;
        trace!(variables = self.variables.len(), "Rendering template");
        Ok(self.render_str(&source))
    }

    fn clear_assign(&mut self, name: &str) {
        self.variables.shift_remove(name);
    }
}

impl std::fmt::Debug for PlaceholderEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderEngine")
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}
