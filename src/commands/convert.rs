//! Comando convert - Converte um descritor entre JSON e TOML

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::core::format::{self, Format};
use crate::core::utils;

pub fn run(
    file: &Path,
    to: Option<Format>,
    output: Option<&Path>,
    force: bool,
    verbose: bool,
) -> Result<()> {
    let template = format::load(file)?;
    let source = Format::from_path(file)?;
    let target = target_format(source, to, output)?;

    let Some(output) = output else {
        // undecorated, for piping
        print!("{}", format::render(&template, target)?);
        return Ok(());
    };

    utils::ensure_writable(output, force)?;

    if verbose {
        utils::print_step(&format!("{} → {}", source, target));
    }

    format::save_as(&template, output, target)?;

    utils::print_success(&format!(
        "Convertido para {}",
        output.display().to_string().bright_cyan()
    ));
    Ok(())
}

/// Explicit `--to` wins, then the output extension, then the opposite format.
/// A known output extension must agree with `--to`, or `load` could not read
/// the file back.
fn target_format(source: Format, to: Option<Format>, output: Option<&Path>) -> Result<Format> {
    let from_output = output.and_then(|p| Format::from_path(p).ok());

    match (to, from_output) {
        (Some(wanted), Some(found)) if wanted != found => anyhow::bail!(
            "--to {} conflicts with output file {} (extension .{})",
            wanted,
            output.map(|p| p.display().to_string()).unwrap_or_default(),
            found
        ),
        (Some(wanted), _) => Ok(wanted),
        (None, Some(found)) => Ok(found),
        (None, None) => Ok(source.other()),
    }
}
