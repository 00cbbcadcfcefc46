//! Parsing of multi-line text input.
//!
//! Every field of the module form is free text with one entry per line.
//! Parsing is a filter: lines that fail the rule are dropped, never reported.

use indexmap::IndexSet;
use tracing::trace;

use crate::domain::{
    entities::{BlockDefinition, BlockMap, ModuleInfo},
    validation::DomainValidator,
    value_objects::LineRule,
};

/// Split `input` into trimmed, unique lines that pass `rule`, in first-seen
/// order.
pub fn parse_multi_line_input(input: &str, rule: LineRule) -> Vec<String> {
    let mut valid = IndexSet::new();

    for line in input.split('\n') {
        let line = line.trim();

        if is_line_valid(line, rule) {
            valid.insert(line.to_string());
        } else if !line.is_empty() {
            trace!(line, %rule, "Dropping line");
        }
    }

    valid.into_iter().collect()
}

/// Parse `block@template` lines into block definitions for the module
/// `vendor_prefix + module_name`.
///
/// Lines missing either side of the `@` are dropped. A block name seen twice
/// keeps its first position but takes the later definition.
pub fn parse_blocks_data(input: &str, vendor_prefix: &str, module_name: &str) -> BlockMap {
    let module_id = ModuleInfo::compose_id(vendor_prefix, module_name);
    let mut blocks = BlockMap::new();

    for line in parse_multi_line_input(input, LineRule::NotEmpty) {
        if let Some(block) = parse_block_definition(&line, &module_id) {
            blocks.insert(block.key(), block);
        }
    }

    blocks
}

/// Parse one `block@template` definition. The split happens at the first `@`.
pub fn parse_block_definition(definition: &str, module_id: &str) -> Option<BlockDefinition> {
    let (block, template) = definition.trim().split_once('@')?;

    if block.is_empty() || template.is_empty() {
        return None;
    }

    Some(BlockDefinition::new(block, template, module_id))
}

fn is_line_valid(line: &str, rule: LineRule) -> bool {
    match rule {
        LineRule::NotEmpty => !line.is_empty(),
        LineRule::CamelCase => DomainValidator::validate_camel_case_name(line),
    }
}
