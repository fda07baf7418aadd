use anyhow::{Result, bail};
use inquire::Text;

use crate::config::{ConfigManager, DEFAULT_MODULE};
use crate::translation::{self, Module};
use crate::ui::{Spinner, Style, prompt_or_cancel};
use crate::warn;

pub struct PromptOptions {
    pub module: Option<String>,
}

/// One-shot interactive translation.
///
/// Asks for a text and a destination language, then prints the detected
/// source language and the translation. Ctrl+C at either prompt exits
/// cleanly.
pub async fn run_prompt(options: PromptOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();
    let module_name = options
        .module
        .or(config_file.filetr.module)
        .unwrap_or_else(|| DEFAULT_MODULE.to_string());
    let module = Module::by_name(&module_name)?;

    let Some(text) = prompt_or_cancel(Text::new("Text to translate:").prompt())? else {
        return Ok(());
    };
    if text.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    let default_to = config_file.filetr.to;
    let mut lang_prompt = Text::new("Destination language (code or name):");
    if let Some(ref default) = default_to {
        lang_prompt = lang_prompt.with_default(default);
    }
    let Some(to) = prompt_or_cancel(lang_prompt.prompt())? else {
        return Ok(());
    };
    translation::validate_language(&to)?;

    println!();
    println!("{text}");

    let spinner = Spinner::new("Detecting language...");
    let detection = module.detect(&text).await;
    spinner.stop();
    match detection {
        Ok(detection) => println!("{detection}"),
        Err(e) => warn!("{} {e:#}", Style::warning("Warning:")),
    }

    let spinner = Spinner::new("Translating...");
    let translated = module.translate(&text, "auto", &to).await;
    spinner.stop();
    println!("{}", translated?);

    Ok(())
}
