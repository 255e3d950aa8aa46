//! Módulo core - Descritor de template e seus formatos

pub mod config;
pub mod descriptor;
pub mod format;
pub mod utils;
