use anyhow::{Result, bail};
use std::io::{self, Write};
use std::path::Path;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::fs;
use crate::input::{read_full, read_limited};
use crate::output::OutputMode;
use crate::text::TextStats;
use crate::translation::{self, Module};
use crate::ui::{Spinner, Style};
use crate::{status, warn};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub to: Option<String>,
    pub module: Option<String>,
    pub output: Option<OutputMode>,
    pub max_chars: Option<usize>,
    pub max_words: Option<usize>,
    pub max_sentences: Option<usize>,
}

/// Translates a bounded excerpt of a file.
///
/// Reports statistics over the whole file, detects its language, then
/// translates only the limited excerpt and routes the result to the screen
/// or a derived output file.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let Some(file) = options.file else {
        bail!(
            "Error: No input file given\n\n\
             Usage: filetr <file> [--to <lang>]"
        );
    };
    let path = Path::new(&file);

    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();
    let resolved = resolve_config(
        &ResolveOptions {
            module: options.module,
            to: options.to,
            output: options.output,
            max_chars: options.max_chars,
            max_words: options.max_words,
            max_sentences: options.max_sentences,
        },
        &config_file,
    )?;

    translation::validate_language(&resolved.to)?;
    let module = Module::by_name(&resolved.module)?;

    let full_text = read_full(path)?;
    if full_text.is_empty() {
        bail!("Error: Input is empty");
    }

    let stats = TextStats::of(&full_text);
    status!("{} {}", Style::label("File:"), Style::value(path.display()));
    status!("{} {}", Style::label("Size (bytes):"), full_text.len());
    status!("{} {}", Style::label("Characters:"), stats.chars);
    status!("{} {}", Style::label("Words:"), stats.words);
    status!("{} {}", Style::label("Sentences:"), stats.sentences);

    // Detection failures are reported but never block translation.
    let spinner = Spinner::new("Detecting language...");
    let detection = module.detect(&full_text).await;
    spinner.stop();
    match detection {
        Ok(detection) => status!("{} {detection}", Style::label("Source language:")),
        Err(e) => warn!("{} {e:#}", Style::warning("Warning:")),
    }

    let excerpt = read_limited(path, resolved.limits)?;

    let spinner = Spinner::new("Translating...");
    let translated = module.translate(&excerpt, "auto", &resolved.to).await;
    spinner.stop();
    let translated = translated?;

    match resolved.output {
        OutputMode::Screen => {
            status!("");
            status!(
                "{} {}",
                Style::label("Destination language:"),
                Style::value(&resolved.to)
            );
            status!("{} {}", Style::label("Module:"), Style::value(module.name()));
            status!("{}", Style::header("Translation:"));
            println!("{translated}");
            io::stdout().flush()?;
        }
        OutputMode::File => {
            let code = translation::output_code(&resolved.to);
            let out_path = fs::translated_path(path, &code);
            fs::atomic_write(&out_path, &translated)?;
            println!("Ok");
            status!(
                "{} {}",
                Style::success("Written:"),
                Style::secondary(out_path.display())
            );
        }
    }

    Ok(())
}
