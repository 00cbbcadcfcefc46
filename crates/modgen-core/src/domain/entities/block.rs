use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A template block override: the block name, the template it lives in, and
/// the module file that overrides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDefinition {
    pub template: String,
    pub block: String,
    pub file: String,
}

impl BlockDefinition {
    pub fn new(block: impl Into<String>, template: impl Into<String>, module_id: &str) -> Self {
        let block = block.into();
        Self {
            file: Self::file_for(module_id, &block),
            template: template.into(),
            block,
        }
    }

    /// Module file that overrides `block`.
    pub fn file_for(module_id: &str, block: &str) -> String {
        format!("Application/views/blocks/{module_id}_{block}.tpl")
    }

    /// Key used in [`BlockMap`]: the block name prefixed with `_`.
    pub fn key(&self) -> String {
        format!("_{}", self.block)
    }

    /// The `block@template` line this definition was parsed from.
    pub fn definition_line(&self) -> String {
        format!("{}@{}", self.block, self.template)
    }
}

/// Parsed blocks keyed by `_` + block name, in first-seen order.
pub type BlockMap = IndexMap<String, BlockDefinition>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_uses_module_id_and_block() {
        let block = BlockDefinition::new("header", "layout/header.tpl", "abMod");
        assert_eq!(block.file, "Application/views/blocks/abMod_header.tpl");
        assert_eq!(block.key(), "_header");
        assert_eq!(block.definition_line(), "header@layout/header.tpl");
    }
}
