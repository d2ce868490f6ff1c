//! Generate TypeScript interfaces and classes from JSON Schema.
//!
//! Each named type is rendered as an interface, a class or a Knockout
//! observable class, depending on [`GenerationSettings`]. Hand-written
//! extension code can supply subclasses for generated types; see
//! [`ExtensionCode`].

mod codegen;
mod error;
mod extension_code;
mod schema;
mod settings;

pub use error::JsonSchemaTsError;
pub use extension_code::ExtensionCode;
pub use schema::{DefaultKeyword, JsonSchema};
pub use settings::{DateTimeType, GenerationSettings, OutputStyle, Template};

use std::io::Write;
use std::path::Path;

/// Generate TypeScript from a JSON Schema string and write to `writer`.
///
/// The writer can be any type implementing `Write`, such as `File`, `Vec<u8>`, or
/// `Cursor<Vec<u8>>`, enabling easy unit testing without file system interaction.
///
/// # Errors
///
/// Returns `JsonSchemaTsError` if the schema JSON is invalid, the root is not an object,
/// the schema has no properties to generate, or writing to the writer fails.
pub fn generate_to_writer<W: Write>(
    schema_json: &str,
    writer: &mut W,
    settings: &GenerationSettings,
) -> Result<(), JsonSchemaTsError> {
    codegen::generate_to_writer(schema_json, writer, settings)
}

/// Generate TypeScript from a JSON Schema file and write to an output file.
///
/// # Errors
///
/// Returns `JsonSchemaTsError` if reading the input file fails, the schema JSON is invalid,
/// the root is not an object, or writing to the output file fails.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    settings: &GenerationSettings,
) -> Result<(), JsonSchemaTsError> {
    let schema_json: String = std::fs::read_to_string(input_path)?;
    let mut output_file: std::fs::File = std::fs::File::create(output_path)?;
    generate_to_writer(&schema_json, &mut output_file, settings)
}
