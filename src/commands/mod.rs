//! Módulo de comandos do Moldura

pub mod check;
pub mod convert;
pub mod new;
pub mod prompt;
pub mod show;
