//! Comando prompt - Imprime o prompt da imagem hero
//!
//! Saída sem decoração, para ser encadeada num gerador de imagens.

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use crate::core::descriptor::WebsiteTemplate;
use crate::core::format;

pub fn run(file: &Path) -> Result<()> {
    let template = format::load(file)?;
    write_prompt(&mut io::stdout().lock(), &template)
}

fn write_prompt(out: &mut impl Write, template: &WebsiteTemplate) -> Result<()> {
    writeln!(out, "{}", template.hero_image_prompt)?;
    Ok(())
}
