//! Example matching the README: a schema rendered as Knockout classes, with
//! one type forced to a plain class and one hand-written subclass.
//!
//! Generated TypeScript is written to stdout.

use json_schema_ts::{GenerationSettings, OutputStyle};
use std::io;

const SCHEMA_JSON: &str = r#"{
  "type": "object",
  "title": "Person",
  "description": "A person with an address.",
  "required": ["id", "name"],
  "properties": {
    "id": { "type": "string", "format": "uuid", "readOnly": true },
    "name": { "type": "string" },
    "born": { "type": "string", "format": "date-time" },
    "status": { "type": "string", "enum": ["active", "inactive"], "default": "active" },
    "address": {
      "type": "object",
      "title": "Address",
      "properties": {
        "street": { "type": "string" },
        "city": { "type": "string" }
      }
    },
    "tags": { "type": "array", "items": { "type": "string" } }
  }
}"#;

const EXTENSION_CODE: &str = r"import * as ko from 'knockout';

export class Person extends PersonBase {
    displayName = ko.pureComputed(() => `${this.name()} (${this.status()})`);
}
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = GenerationSettings::default()
        .with_type_style(OutputStyle::KnockoutClass)
        .with_class_types(["Address"])
        .with_extension_code(EXTENSION_CODE)
        .with_extended_classes(["Person"]);
    let mut stdout: io::Stdout = io::stdout();
    json_schema_ts::generate_to_writer(SCHEMA_JSON, &mut stdout, &settings)?;
    Ok(())
}
