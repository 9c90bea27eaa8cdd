//! Conversion options

/// Options controlling how a source document is mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Number of nested collection levels kept as sub-folders below the
    /// document folder. `0` flattens every request into the document folder.
    pub nesting_depth: usize,
    /// Emit every environment variable, not only the referenced ones.
    pub include_environment_variables: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            nesting_depth: 0,
            include_environment_variables: true,
        }
    }
}

impl ConversionOptions {
    /// Sets the number of collection levels kept as folders.
    #[must_use]
    pub const fn with_nesting_depth(mut self, depth: usize) -> Self {
        self.nesting_depth = depth;
        self
    }

    /// Sets whether unreferenced environment variables are emitted.
    #[must_use]
    pub const fn with_environment_variables(mut self, include: bool) -> Self {
        self.include_environment_variables = include;
        self
    }
}
