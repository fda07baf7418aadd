use anyhow::Result;
use std::path::Path;

use crate::config::{ConfigManager, DEFAULT_MODULE};
use crate::fs;
use crate::output::OutputMode;
use crate::status;
use crate::translation::{Module, SUPPORTED_LANGUAGES};
use crate::ui::{Spinner, Style};

pub struct LanguagesOptions {
    /// Sample text translated into every listed language.
    pub sample: Option<String>,
    pub output: Option<OutputMode>,
    pub limit: Option<usize>,
    pub module: Option<String>,
}

/// Renders the supported-language table.
///
/// Without a sample the table is produced entirely offline. With one, each
/// row gains a column holding the sample translated into that row's
/// language; a failed translation renders as "-".
pub async fn run_languages(options: LanguagesOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();

    let limit = options.limit.or(config_file.languages.limit);
    let output = options
        .output
        .or(config_file.filetr.output)
        .unwrap_or_default();
    let module_name = options
        .module
        .or(config_file.filetr.module)
        .unwrap_or_else(|| DEFAULT_MODULE.to_string());
    let module = Module::by_name(&module_name)?;

    let row_count = limit
        .unwrap_or(SUPPORTED_LANGUAGES.len())
        .min(SUPPORTED_LANGUAGES.len());
    let entries = &SUPPORTED_LANGUAGES[..row_count];
    let sample = options.sample.as_deref();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(entries.len());
    let spinner = sample.map(|_| Spinner::new("Translating sample..."));
    for (index, (code, name)) in entries.iter().enumerate() {
        let mut row = vec![
            (index + 1).to_string(),
            (*name).to_string(),
            (*code).to_string(),
        ];
        if let Some(text) = sample {
            let translated = module
                .translate(text, "auto", code)
                .await
                .unwrap_or_else(|_| "-".to_string());
            row.push(translated);
        }
        rows.push(row);
    }
    if let Some(spinner) = spinner {
        spinner.stop();
    }

    let headers: &[&str] = if sample.is_some() {
        &["№", "Language", "Code", "Translation"]
    } else {
        &["№", "Language", "Code"]
    };
    let table = render_table(headers, &rows);

    match output {
        OutputMode::Screen => println!("{table}"),
        OutputMode::File => {
            let out_path = format!("languages_{}.txt", module.name());
            fs::atomic_write(Path::new(&out_path), &table)?;
            println!("Ok");
            status!(
                "{} {}",
                Style::success("Written:"),
                Style::secondary(out_path)
            );
        }
    }

    Ok(())
}

/// Renders a plain-text table with columns padded to their widest cell.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = vec![format_row(&header_cells), format_row(&rule)];
    for row in rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}
