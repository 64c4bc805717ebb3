//! Core module - Scaffolding logic

pub mod config;
pub mod registry;
pub mod scaffold;
pub mod template;
pub mod utils;
