//! Reduction options

/// Options for palette reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceOptions {
    /// Re-run the reduction on the synthesized palette so that the final
    /// palette is sorted and free of duplicate entries
    pub reorder: bool,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self { reorder: true }
    }
}
