mod entry;
mod exclusion;
mod options;
mod renderer;

pub use entry::{list_names, DirectoryEntry};
pub use exclusion::{ExclusionGroup, ExclusionSet};
pub use options::{TreeOptions, DEFAULT_MAX_LEVEL};
pub use renderer::{join_lines, render, render_to_string, Connector, RenderedLine};
