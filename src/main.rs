use anyhow::Result;
use clap::Parser;

use filetr_cli::cli::commands::{configure, detect, languages, prompt, translate};
use filetr_cli::cli::{Args, Command};
use filetr_cli::output::{self, OutputConfig};
use filetr_cli::translation::validate_language;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    match args.command {
        Some(Command::Languages {
            translate: sample,
            output,
            limit,
            module,
        }) => {
            languages::run_languages(languages::LanguagesOptions {
                sample,
                output,
                limit,
                module,
            })
            .await?;
        }
        Some(Command::Detect { file, module }) => {
            detect::run_detect(detect::DetectOptions { file, module }).await?;
        }
        Some(Command::Prompt { module }) => {
            prompt::run_prompt(prompt::PromptOptions { module }).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            if let Some(ref lang) = args.to {
                validate_language(lang)?;
            }

            let options = translate::TranslateOptions {
                file: args.file,
                to: args.to,
                module: args.module,
                output: args.output,
                max_chars: args.max_chars,
                max_words: args.max_words,
                max_sentences: args.max_sentences,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
