//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! honors the global no-color setting so piped and `NO_COLOR` runs stay
//! plain.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Translation:", "Current configuration")
    pub fn header<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.bold())
        }
    }

    /// Style for labels/keys (e.g., "module", "Words:")
    pub fn label<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.dimmed())
        }
    }

    /// Style for primary values (e.g., module names, language names)
    pub fn value<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.cyan())
        }
    }

    /// Style for secondary/supplementary info (e.g., paths, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.dimmed())
        }
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.green())
        }
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.yellow())
        }
    }
}
