//! Configure command handler for editing default settings.

use anyhow::{Context, Result};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, FiletrConfig, LanguagesConfig, LimitsConfig};
use crate::input::Limits;
use crate::output::OutputMode;
use crate::translation::{MODULE_NAMES, SUPPORTED_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// `show` prints the current configuration; otherwise the defaults are
/// edited interactively and saved.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        show_config();
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn show_config() {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();
    let limits = Limits::default();

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}         {}",
        Style::label("module"),
        display_option(config.filetr.module.as_deref())
    );
    println!(
        "  {}             {}",
        Style::label("to"),
        display_option(config.filetr.to.as_deref())
    );
    println!(
        "  {}         {}",
        Style::label("output"),
        display_option(config.filetr.output.map(|mode| mode.to_string()).as_deref())
    );
    println!(
        "  {}      {}",
        Style::label("max_chars"),
        config.limits.max_chars.unwrap_or(limits.max_chars)
    );
    println!(
        "  {}      {}",
        Style::label("max_words"),
        config.limits.max_words.unwrap_or(limits.max_words)
    );
    println!(
        "  {}  {}",
        Style::label("max_sentences"),
        config.limits.max_sentences.unwrap_or(limits.max_sentences)
    );
    println!(
        "  {}    {}",
        Style::label("list limit"),
        display_option(config.languages.limit.map(|n| n.to_string()).as_deref())
    );
    println!();
    println!(
        "{}",
        Style::secondary(format!("Config file: {}", manager.config_path().display()))
    );
}

fn display_option(value: Option<&str>) -> String {
    value.map_or_else(|| Style::secondary("(not set)"), Style::value)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    let module = select_module(config.filetr.module.as_deref())?;
    let to = select_destination_language(config.filetr.to.as_deref())?;
    let output = select_output_mode(config.filetr.output)?;

    let defaults = Limits::default();
    let max_chars = prompt_limit(
        "Max characters:",
        config.limits.max_chars.unwrap_or(defaults.max_chars),
    )?;
    let max_words = prompt_limit(
        "Max words:",
        config.limits.max_words.unwrap_or(defaults.max_words),
    )?;
    let max_sentences = prompt_limit(
        "Max sentences:",
        config.limits.max_sentences.unwrap_or(defaults.max_sentences),
    )?;

    let updated = ConfigFile {
        filetr: FiletrConfig {
            module: Some(module),
            to: Some(to),
            output: Some(output),
        },
        limits: LimitsConfig {
            max_chars: Some(max_chars),
            max_words: Some(max_words),
            max_sentences: Some(max_sentences),
        },
        languages: LanguagesConfig {
            limit: config.languages.limit,
        },
    };
    manager.save(&updated)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn select_module(default: Option<&str>) -> Result<String> {
    let options: Vec<String> = MODULE_NAMES.iter().map(|name| (*name).to_string()).collect();
    let default_index = default
        .and_then(|d| MODULE_NAMES.iter().position(|name| *name == d))
        .unwrap_or(0);

    let selection = Select::new("Translation module:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_destination_language(default: Option<&str>) -> Result<String> {
    let options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_index = default
        .and_then(|d| SUPPORTED_LANGUAGES.iter().position(|(code, _)| *code == d))
        .unwrap_or(0);

    let selection = Select::new("Destination language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}

fn select_output_mode(default: Option<OutputMode>) -> Result<OutputMode> {
    let options = vec!["screen", "file"];
    let default_index = usize::from(default == Some(OutputMode::File));

    let selection = Select::new("Output:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(if selection == "file" {
        OutputMode::File
    } else {
        OutputMode::Screen
    })
}

fn prompt_limit(label: &str, current: usize) -> Result<usize> {
    let answer = Text::new(label)
        .with_default(&current.to_string())
        .prompt()?;

    answer
        .trim()
        .parse()
        .with_context(|| format!("Invalid number: '{}'", answer.trim()))
}
