//! Binary to generate TypeScript from a JSON Schema.
//!
//! Usage: `json-schema-ts --type-style class < input.json > output.ts`
//!
//! Reads a JSON Schema from `--input` or stdin and writes generated
//! TypeScript to `--output` or stdout. Diagnostics go to stderr and are
//! filtered with `RUST_LOG`.

mod config;

use clap::Parser;
use config::SettingsFile;
use json_schema_ts::{
    DateTimeType, GenerationSettings, JsonSchemaTsError, OutputStyle, generate_to_writer,
};
use std::io::{read_to_string, stdin, stdout};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "json-schema-ts", version, about = "Generate TypeScript from JSON Schema")]
struct Cli {
    /// JSON Schema file. Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// TypeScript output file. Writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON settings file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Interface, Class or KnockoutClass.
    #[arg(long)]
    type_style: Option<OutputStyle>,

    /// Type names always generated as classes.
    #[arg(long, value_delimiter = ',')]
    class_types: Option<Vec<String>>,

    /// Date or String.
    #[arg(long)]
    date_time_type: Option<DateTimeType>,

    /// Wrap the output in `module <NAME> { ... }`.
    #[arg(long)]
    module_name: Option<String>,

    /// Do not emit `readonly` for readOnly properties.
    #[arg(long)]
    no_readonly: bool,

    /// File with hand-written TypeScript merged into the output.
    #[arg(long)]
    extension_code: Option<PathBuf>,

    /// Classes implemented in the extension code.
    #[arg(long, value_delimiter = ',')]
    extended_classes: Option<Vec<String>>,
}

impl Cli {
    fn settings(&self) -> Result<GenerationSettings, JsonSchemaTsError> {
        let mut settings: GenerationSettings = match &self.config {
            Some(path) => SettingsFile::load(path)?
                .into_settings(path.parent().unwrap_or_else(|| Path::new("")))?,
            None => GenerationSettings::default(),
        };

        if let Some(type_style) = self.type_style {
            settings.type_style = type_style;
        }
        if let Some(class_types) = &self.class_types {
            settings.class_types = Some(class_types.iter().cloned().collect());
        }
        if let Some(date_time_type) = self.date_time_type {
            settings.date_time_type = date_time_type;
        }
        if let Some(module_name) = &self.module_name {
            settings.module_name.clone_from(module_name);
        }
        if self.no_readonly {
            settings.generate_read_only_keywords = false;
        }
        if let Some(path) = &self.extension_code {
            settings.set_extension_code(std::fs::read_to_string(path)?);
        }
        if let Some(extended_classes) = &self.extended_classes {
            settings.set_extended_classes(Some(extended_classes.clone()));
        }
        Ok(settings)
    }
}

fn run(cli: &Cli) -> Result<(), JsonSchemaTsError> {
    let settings: GenerationSettings = cli.settings()?;
    let schema_json: String = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_to_string(stdin())?,
    };
    match &cli.output {
        Some(path) => {
            let mut output_file: std::fs::File = std::fs::File::create(path)?;
            generate_to_writer(&schema_json, &mut output_file, &settings)
        }
        None => generate_to_writer(&schema_json, &mut stdout().lock(), &settings),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
