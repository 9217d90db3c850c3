//! Command implementations for the l10n-audit CLI

pub mod check;
pub mod completions;
pub mod rules;
pub mod version;
