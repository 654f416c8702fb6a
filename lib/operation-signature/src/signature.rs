use graphql_parser::query::{Document, Text};

use crate::config::{LiteralMasking, SignatureConfig};
use crate::error::SignatureError;
use crate::pipeline::{
    canonical_sort_mut, mask_literals_mut, mask_string_and_numeric_literals_mut,
    prune_unused_definitions, strip_aliases_mut,
};
use crate::printer::print_compact;

/// A fixed sequence of normalization passes followed by the compact printer.
///
/// Passes always run in the same order: pruning, literal masking, alias removal, sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignaturePipeline {
    drop_unused_definitions: bool,
    literals: LiteralMasking,
    remove_aliases: bool,
    sort: bool,
}

impl From<&SignatureConfig> for SignaturePipeline {
    fn from(config: &SignatureConfig) -> Self {
        Self {
            drop_unused_definitions: config.drop_unused_definitions,
            literals: config.literals,
            remove_aliases: config.remove_aliases,
            sort: config.sort,
        }
    }
}

impl Default for SignaturePipeline {
    fn default() -> Self {
        Self::from(&SignatureConfig::default())
    }
}

impl SignaturePipeline {
    /// Runs the enabled passes, without printing.
    pub fn normalize<'a, T: Text<'a>>(
        &self,
        document: Document<'a, T>,
        operation_name: &str,
    ) -> Document<'a, T> {
        let mut document = if self.drop_unused_definitions {
            prune_unused_definitions(document, operation_name)
        } else {
            document
        };

        match self.literals {
            LiteralMasking::All => mask_literals_mut(&mut document),
            LiteralMasking::StringAndNumeric => {
                mask_string_and_numeric_literals_mut(&mut document)
            }
            LiteralMasking::Preserve => {}
        }

        if self.remove_aliases {
            strip_aliases_mut(&mut document);
        }

        if self.sort {
            canonical_sort_mut(&mut document);
        }

        document
    }

    pub fn signature<'a, T: Text<'a>>(
        &self,
        document: Document<'a, T>,
        operation_name: &str,
    ) -> Result<String, SignatureError> {
        print_compact(self.normalize(document, operation_name))
    }
}

/// The signature used for usage reporting: unused definitions dropped, every
/// literal hidden, aliases removed, everything sorted and printed compactly.
pub fn default_signature<'a, T: Text<'a>>(
    document: Document<'a, T>,
    operation_name: &str,
) -> Result<String, SignatureError> {
    SignaturePipeline::default().signature(document, operation_name)
}

/// The signature used for operation registries. Aliases, lists and objects are
/// kept; string and numeric literals are hidden unless asked to be preserved.
pub fn operation_registry_signature<'a, T: Text<'a>>(
    document: Document<'a, T>,
    operation_name: &str,
    preserve_string_and_numeric_literals: bool,
) -> Result<String, SignatureError> {
    SignaturePipeline::from(&SignatureConfig::operation_registry(
        preserve_string_and_numeric_literals,
    ))
    .signature(document, operation_name)
}
