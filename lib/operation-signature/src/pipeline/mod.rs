mod canonical_sort;
mod mask_literals;
mod prune_unused_definitions;
mod strip_aliases;

pub use canonical_sort::{canonical_sort, canonical_sort_mut};
pub use mask_literals::{
    mask_literals, mask_literals_mut, mask_string_and_numeric_literals,
    mask_string_and_numeric_literals_mut,
};
pub use prune_unused_definitions::prune_unused_definitions;
pub use strip_aliases::{strip_aliases, strip_aliases_mut};
