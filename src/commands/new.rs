//! Comando new - Cria um descritor esqueleto

use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

use crate::core::config::defaults;
use crate::core::descriptor::{FontPairing, WebsiteTemplate};
use crate::core::format::{self, Format};
use crate::core::utils;

pub fn run(
    name: &str,
    format_opt: Option<Format>,
    output: Option<&Path>,
    force: bool,
    _verbose: bool,
) -> Result<()> {
    let template = skeleton(name);

    let Some(output) = output else {
        let target = format_opt.unwrap_or(Format::Json);
        print!("{}", format::render(&template, target)?);
        return Ok(());
    };

    let path = output_path(output, format_opt);

    println!("{}", format!("🔨 Criando template '{}'...", name).bright_yellow());
    if path != output {
        utils::print_warning(&format!(
            "Saída ajustada ao formato: {} → {}",
            output.display(),
            path.display()
        ));
    }
    utils::ensure_writable(&path, force)?;
    format::save(&template, &path)?;
    utils::print_success(&format!(
        "Descritor criado em {}",
        path.display().to_string().bright_cyan()
    ));
    Ok(())
}

/// Descriptor named `name`, other fields from the config defaults
pub fn skeleton(name: &str) -> WebsiteTemplate {
    WebsiteTemplate {
        template_name: name.to_string(),
        description: defaults::DESCRIPTION.to_string(),
        color_palette: defaults::COLOR_PALETTE.iter().map(|c| c.to_string()).collect(),
        font_pairing: FontPairing {
            heading: defaults::HEADING_FONT.to_string(),
            body: defaults::BODY_FONT.to_string(),
        },
        sections: defaults::SECTIONS.iter().map(|s| s.to_string()).collect(),
        hero_image_prompt: defaults::HERO_IMAGE_PROMPT.to_string(),
    }
}

/// An output without a known extension gets one from `--format` (JSON if absent)
fn output_path(output: &Path, format_opt: Option<Format>) -> PathBuf {
    match (Format::from_path(output).ok(), format_opt) {
        (Some(found), Some(wanted)) if found != wanted => {
            output.with_extension(wanted.extension())
        }
        (Some(_), _) => output.to_path_buf(),
        (None, wanted) => {
            let ext = wanted.unwrap_or(Format::Json).extension();
            let mut name = output.as_os_str().to_owned();
            name.push(".");
            name.push(ext);
            PathBuf::from(name)
        }
    }
}
