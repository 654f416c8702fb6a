mod canonical_sort;
mod mask_literals;
mod processor;
