use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Preset groups of excluded names.
///
/// The `common` preset has always been advertised as also covering `node_modules`,
/// but the shipped set never contained it. The shipped set is what is used here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ExclusionGroup {
    /// venv, git, __pycache__, idea, migrations
    Common,
    /// __pycache__, .pytest_cache, .mypy_cache
    Python,
}

const COMMON_NAMES: &[&str] = &["venv", "__pycache__", "git", "idea", "migrations"];
const PYTHON_NAMES: &[&str] = &["__pycache__", ".pytest_cache", ".mypy_cache"];

impl ExclusionGroup {
    pub const ALL: [ExclusionGroup; 2] = [ExclusionGroup::Common, ExclusionGroup::Python];

    pub fn name(self) -> &'static str {
        match self {
            ExclusionGroup::Common => "common",
            ExclusionGroup::Python => "python",
        }
    }

    /// Names excluded by this group
    pub fn names(self) -> &'static [&'static str] {
        match self {
            ExclusionGroup::Common => COMMON_NAMES,
            ExclusionGroup::Python => PYTHON_NAMES,
        }
    }
}

impl fmt::Display for ExclusionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExclusionGroup {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.name() == s)
            .ok_or_else(|| {
                TreeError::InvalidArgument(format!(
                    "unknown exclude group '{}' (expected one of: common, python)",
                    s
                ))
            })
    }
}

impl TryFrom<String> for ExclusionGroup {
    type Error = TreeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Names whose entries are shown but never expanded.
///
/// Matching is exact and case-sensitive against a single path component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Merge a preset group into the set
    pub fn with_group(mut self, group: ExclusionGroup) -> Self {
        self.extend(group.names().iter().copied());
        self
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
