use anyhow::{Result, bail};
use std::path::Path;

use crate::config::{ConfigManager, DEFAULT_MODULE};
use crate::input::read_full;
use crate::status;
use crate::translation::{self, Module};
use crate::ui::{Spinner, Style};

pub struct DetectOptions {
    pub file: String,
    pub module: Option<String>,
}

/// Reports the detected language of a file.
pub async fn run_detect(options: DetectOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();
    let module_name = options
        .module
        .or(config_file.filetr.module)
        .unwrap_or_else(|| DEFAULT_MODULE.to_string());
    let module = Module::by_name(&module_name)?;

    let text = read_full(Path::new(&options.file))?;
    if text.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    let spinner = Spinner::new("Detecting language...");
    let detection = module.detect(&text).await;
    spinner.stop();
    let detection = detection?;

    println!("{detection}");
    if let Some(name) = translation::describe(&detection.lang) {
        status!("{} {}", Style::label("Language:"), Style::value(name));
    }

    Ok(())
}
