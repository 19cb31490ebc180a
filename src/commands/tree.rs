//! Tree command implementation

use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::tree::{render_to_string, ExclusionSet, TreeOptions};

/// Merge CLI arguments over configuration defaults.
///
/// CLI names are unioned with the configured ones; an explicit group replaces
/// the configured group.
pub fn resolve_options(cli: &Cli, config: &Config) -> TreeOptions {
    let mut excluded = ExclusionSet::from_names(config.tree.exclude.iter().cloned());
    excluded.extend(cli.exclude.iter().cloned());

    let mut options = TreeOptions::new()
        .with_max_level(cli.max_level.unwrap_or(config.tree.max_level))
        .with_excluded(excluded);

    if let Some(group) = cli.exclude_group.or(config.tree.exclude_group) {
        options = options.with_group(group);
    }

    options
}

/// Run the tree command
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let options = resolve_options(cli, config);

    tracing::info!(path = %cli.start_path.display(), "Building tree");

    let output = render_to_string(&cli.start_path, &options)?;

    match &cli.output {
        Some(path) => {
            write_output(path, &output)?;
            println!("Tree saved to file: {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Write the rendered tree as UTF-8 text, without a trailing newline
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| TreeError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote output file");
    Ok(())
}
