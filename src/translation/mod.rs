mod client;
mod language;

pub use client::{Detection, GoogleWebClient, MODULE_NAMES, Module, MyMemoryClient};
pub use language::{SUPPORTED_LANGUAGES, describe, output_code, to_code, validate_language};
