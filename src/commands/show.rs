//! Comando show - Mostra um descritor

use anyhow::Result;
use colored::*;
use std::io::{self, Write};
use std::path::Path;

use crate::core::descriptor::WebsiteTemplate;
use crate::core::{config::keys, format, utils};

pub fn run(file: &Path, verbose: bool) -> Result<()> {
    let template = format::load(file)?;

    println!("{}", format!("🖼  {}", template.template_name).bright_cyan().bold());
    if verbose {
        utils::print_info(&format!("Arquivo: {}", file.display()));
    }
    println!();

    write_template(&mut io::stdout().lock(), &template)
}

fn write_template(out: &mut impl Write, t: &WebsiteTemplate) -> Result<()> {
    write_field(out, keys::DESCRIPTION, &t.description)?;
    write_field(out, keys::FONT_PAIRING_HEADING, &t.font_pairing.heading)?;
    write_field(out, keys::FONT_PAIRING_BODY, &t.font_pairing.body)?;

    writeln!(out)?;
    writeln!(out, "   {}", keys::COLOR_PALETTE.bright_black())?;
    write_numbered(out, &t.color_palette)?;

    writeln!(out)?;
    writeln!(out, "   {}", keys::SECTIONS.bright_black())?;
    write_numbered(out, &t.sections)?;

    writeln!(out)?;
    write_field(out, keys::HERO_IMAGE_PROMPT, &t.hero_image_prompt)
}

fn write_field(out: &mut impl Write, label: &str, value: &str) -> Result<()> {
    writeln!(out, "   {:<20} {}", label.bright_black().to_string(), value)?;
    Ok(())
}

fn write_numbered(out: &mut impl Write, items: &[String]) -> Result<()> {
    if items.is_empty() {
        writeln!(out, "     {}", "(vazio)".bright_black())?;
    }
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "     {}. {}", i + 1, item.bright_green())?;
    }
    Ok(())
}
