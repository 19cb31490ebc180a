use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

use super::entry::{list_names, DirectoryEntry};
use super::exclusion::ExclusionSet;
use super::options::TreeOptions;

/// Glyph joining an entry to its parent's vertical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// A sibling follows
    Branch,
    /// Last sibling at this level
    Last,
}

impl Connector {
    fn for_position(index: usize, count: usize) -> Self {
        if index + 1 == count {
            Connector::Last
        } else {
            Connector::Branch
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Connector::Branch => "├── ",
            Connector::Last => "└── ",
        }
    }

    /// Prefix segment added for the children of an entry with this connector
    pub fn child_extension(self) -> &'static str {
        match self {
            Connector::Branch => "│   ",
            Connector::Last => "    ",
        }
    }
}

/// One line of tree output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Indentation built from the ancestors' sibling positions
    pub prefix: String,
    pub connector: Connector,
    pub name: String,
    pub is_directory: bool,
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.connector.as_str(), self.name)
    }
}

/// Render the tree below `root` as an ordered list of lines.
///
/// The root itself is not part of the output. Hidden names are always skipped,
/// excluded names are listed but not expanded, and nothing at depth
/// `options.max_level` or deeper is listed.
pub fn render(root: &Path, options: &TreeOptions) -> Result<Vec<RenderedLine>> {
    if !root.is_dir() {
        return Err(TreeError::InvalidPath(root.to_path_buf()));
    }

    tracing::info!(
        root = %root.display(),
        max_level = options.max_level,
        excluded = options.excluded.len(),
        "Rendering tree"
    );

    let lines = render_level(root, 0, "", options.max_level, &options.excluded)?;

    tracing::info!(lines = lines.len(), "Rendered tree");
    Ok(lines)
}

/// Render the tree and join the lines with `\n` (no trailing newline).
pub fn render_to_string(root: &Path, options: &TreeOptions) -> Result<String> {
    let lines = render(root, options)?;
    Ok(join_lines(&lines))
}

pub fn join_lines(lines: &[RenderedLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_level(
    dir: &Path,
    depth: usize,
    prefix: &str,
    max_level: usize,
    excluded: &ExclusionSet,
) -> Result<Vec<RenderedLine>> {
    if depth >= max_level {
        return Ok(Vec::new());
    }

    tracing::debug!(path = %dir.display(), depth, "Listing directory");

    let listed: Vec<(String, PathBuf)> = list_names(dir)?
        .into_iter()
        .filter(|(name, _)| {
            let hidden = DirectoryEntry::is_hidden_name(name);
            if hidden {
                tracing::trace!(name = %name, "Skipping hidden entry");
            }
            !hidden
        })
        .collect();

    let count = listed.len();
    let mut lines = Vec::with_capacity(count);

    for (i, (name, path)) in listed.into_iter().enumerate() {
        let entry = DirectoryEntry::resolve(path, name)?;
        let connector = Connector::for_position(i, count);

        lines.push(RenderedLine {
            prefix: prefix.to_string(),
            connector,
            name: entry.name.clone(),
            is_directory: entry.is_directory,
        });

        if entry.is_directory {
            if excluded.contains(&entry.name) {
                tracing::trace!(name = %entry.name, "Not expanding excluded directory");
            } else {
                let child_prefix = format!("{}{}", prefix, connector.child_extension());
                lines.extend(render_level(
                    &entry.path,
                    depth + 1,
                    &child_prefix,
                    max_level,
                    excluded,
                )?);
            }
        }
    }

    Ok(lines)
}
