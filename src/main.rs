//! Moldura - Descritores de templates de website
//!
//! A moldura onde encaixamos o site: nome, paleta de cores, par de fontes,
//! seções e o prompt da imagem hero, em JSON ou TOML.
//!
//! # Uso
//! ```bash
//! moldura new "Modern Portfolio" --output portfolio.toml
//! moldura check portfolio.toml
//! moldura convert portfolio.toml --to json
//! moldura prompt portfolio.toml
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

mod commands;
mod core;

use crate::core::format::Format;

#[derive(Parser)]
#[command(name = "moldura")]
#[command(about = "🖼  Moldura - Descritores de templates de website", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Mostra um descritor
    Show {
        /// Arquivo .json ou .toml
        file: PathBuf,
    },

    /// Verifica descritores
    Check {
        /// Arquivos .json ou .toml
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Converte entre JSON e TOML
    Convert {
        /// Arquivo de origem
        file: PathBuf,

        /// Formato de destino (padrão: o outro formato)
        #[arg(long, value_enum)]
        to: Option<Format>,

        /// Arquivo de saída (padrão: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sobrescreve a saída se existir
        #[arg(long)]
        force: bool,
    },

    /// Cria um descritor esqueleto
    New {
        /// Nome do template
        name: String,

        /// Formato (json, toml)
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Arquivo de saída (padrão: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sobrescreve a saída se existir
        #[arg(long)]
        force: bool,
    },

    /// Imprime o prompt da imagem hero
    Prompt {
        /// Arquivo .json ou .toml
        file: PathBuf,
    },
}

impl Commands {
    /// Commands whose stdout is meant to be piped
    fn is_plain(&self) -> bool {
        match self {
            Commands::Prompt { .. } => true,
            Commands::Convert { output, .. } | Commands::New { output, .. } => output.is_none(),
            _ => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Banner
    if !cli.quiet && !cli.command.is_plain() {
        println!("{}", "🖼  Moldura - Descritores de templates".bright_cyan().bold());
        println!("{}", "   A moldura onde encaixamos o site".bright_black());
        println!();
    }

    match cli.command {
        Commands::Show { file } => commands::show::run(&file, cli.verbose)?,
        Commands::Check { files } => commands::check::run(&files, cli.verbose)?,
        Commands::Convert {
            file,
            to,
            output,
            force,
        } => commands::convert::run(&file, to, output.as_deref(), force, cli.verbose)?,
        Commands::New {
            name,
            format,
            output,
            force,
        } => commands::new::run(&name, format, output.as_deref(), force, cli.verbose)?,
        Commands::Prompt { file } => commands::prompt::run(&file)?,
    }

    Ok(())
}
