use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Controls which normalization passes run before a signature is printed.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SignatureConfig {
    /// Drops every operation except the requested one, and the fragments it does not use.
    /// Default: true
    #[serde(default = "default_drop_unused_definitions")]
    pub drop_unused_definitions: bool,

    /// Which literal values are replaced with empty values.
    /// Default: all
    #[serde(default)]
    pub literals: LiteralMasking,

    /// Removes field aliases.
    /// Default: true
    #[serde(default = "default_remove_aliases")]
    pub remove_aliases: bool,

    /// Sorts definitions, selections, variables, arguments and directives.
    /// Default: true
    #[serde(default = "default_sort")]
    pub sort: bool,

    /// A maximum number of signatures kept in the processor cache.
    /// Default: 1000
    #[serde(default = "default_cache_size")]
    pub cache_size: u64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LiteralMasking {
    /// Hides numbers and strings, and empties lists and objects.
    #[default]
    All,
    /// Hides numbers and strings only, lists and objects keep their items.
    StringAndNumeric,
    /// Keeps every literal as written.
    Preserve,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            drop_unused_definitions: default_drop_unused_definitions(),
            literals: LiteralMasking::default(),
            remove_aliases: default_remove_aliases(),
            sort: default_sort(),
            cache_size: default_cache_size(),
        }
    }
}

impl SignatureConfig {
    /// The signature used to identify operations in an operation registry:
    /// aliases are kept, and so are list and object literals.
    pub fn operation_registry(preserve_string_and_numeric_literals: bool) -> Self {
        Self {
            literals: if preserve_string_and_numeric_literals {
                LiteralMasking::Preserve
            } else {
                LiteralMasking::StringAndNumeric
            },
            remove_aliases: false,
            ..Self::default()
        }
    }
}

fn default_drop_unused_definitions() -> bool {
    true
}

fn default_remove_aliases() -> bool {
    true
}

fn default_sort() -> bool {
    true
}

fn default_cache_size() -> u64 {
    1000
}
