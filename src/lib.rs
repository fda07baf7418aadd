//! # filetr - Bounded-Excerpt File Translation CLI
//!
//! `filetr` translates text files using public translation endpoints.
//! Instead of sending whole files to a service, it reads a bounded excerpt
//! (capped by character, word, and sentence counts), detects the source
//! language, and prints or writes the translation.
//!
//! ## Features
//!
//! - **Bounded reading**: Only a configurable excerpt of the file is translated
//! - **Language detection**: Reports the detected source language and confidence
//! - **Multiple modules**: Switch between translation backends per invocation
//! - **Screen or file output**: Print the translation or write it next to the input
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file to Ukrainian
//! filetr --to uk ./notes.txt
//!
//! # Write the translation to notes_uk.txt instead of printing it
//! filetr --to uk --output file ./notes.txt
//!
//! # Detect the language of a file
//! filetr detect ./notes.txt
//!
//! # Render the supported-language table with a sample translation column
//! filetr languages --translate "Good morning" --limit 25
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/filetr/config.toml`:
//!
//! ```toml
//! [filetr]
//! module = "google"
//! to = "uk"
//! output = "screen"
//!
//! [limits]
//! max_chars = 1000
//! max_words = 200
//! max_sentences = 10
//!
//! [languages]
//! limit = 25
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and merged-settings resolution.
pub mod config;

/// File system utilities (atomic writes, derived output paths).
pub mod fs;

/// Bounded incremental file reading.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Word and sentence counting heuristics.
pub mod text;

/// Translation modules and the supported-language table.
pub mod translation;

/// Terminal UI components (spinner, colors, prompt handling).
pub mod ui;
