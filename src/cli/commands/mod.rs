//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Language detection command handler.
pub mod detect;

/// Language table command handler.
pub mod languages;

/// Interactive prompt command handler.
pub mod prompt;

/// File translation command handler.
pub mod translate;
