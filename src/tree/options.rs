use super::exclusion::{ExclusionGroup, ExclusionSet};

/// Default number of levels shown below the root.
pub const DEFAULT_MAX_LEVEL: usize = 2;

/// Configuration options for rendering a directory tree.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Number of levels to list (0 = nothing, 1 = immediate children only)
    pub max_level: usize,

    /// Names that are listed but never expanded
    pub excluded: ExclusionSet,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            excluded: ExclusionSet::default(),
        }
    }
}

impl TreeOptions {
    /// Create a new TreeOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum listing depth
    pub fn with_max_level(mut self, level: usize) -> Self {
        self.max_level = level;
        self
    }

    /// Replace the exclusion set
    pub fn with_excluded(mut self, excluded: ExclusionSet) -> Self {
        self.excluded = excluded;
        self
    }

    /// Merge a preset group into the exclusion set
    pub fn with_group(mut self, group: ExclusionGroup) -> Self {
        tracing::debug!(%group, names = group.names().len(), "Applying exclusion group");
        self.excluded = self.excluded.with_group(group);
        self
    }
}
