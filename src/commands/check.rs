//! Comando check - Verifica se arquivos seguem o formato do descritor

use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

use crate::core::descriptor::WebsiteTemplate;
use crate::core::{format, utils};

pub fn run(files: &[PathBuf], verbose: bool) -> Result<()> {
    println!("{}", "🔍 Verificando descritores...".bright_yellow());

    let failed = check_all(files, verbose);

    if failed > 0 {
        anyhow::bail!("{} de {} arquivo(s) inválido(s)", failed, files.len());
    }

    println!("{}", "✓ Todos os descritores são válidos!".bright_green().bold());
    Ok(())
}

/// Check every file, returning how many failed
fn check_all(files: &[PathBuf], verbose: bool) -> usize {
    let mut failed = 0;

    for file in files {
        match check_one(file, verbose) {
            Ok(()) => utils::print_success(&file.display().to_string()),
            Err(e) => {
                utils::print_error(&format!("{}: {:#}", file.display(), e));
                failed += 1;
            }
        }
    }

    failed
}

fn check_one(file: &Path, verbose: bool) -> Result<()> {
    let template = format::load(file)?;

    if verbose {
        for name in WebsiteTemplate::field_names() {
            utils::print_step(&format!("{} ok", name));
        }
    }
    if template.template_name.is_empty() {
        utils::print_warning(&format!("{}: templateName vazio", file.display()));
    }

    Ok(())
}
