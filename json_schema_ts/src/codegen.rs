use crate::error::JsonSchemaTsError;
use crate::extension_code::ExtensionCode;
use crate::schema::JsonSchema;
use crate::settings::{DateTimeType, GenerationSettings, Template};
use heck::ToUpperCamelCase;
use std::collections::{BTreeMap, HashSet};
use std::io::Write;
use tracing::{debug, warn};

/// Represents an interface or class to be emitted, with its properties.
struct TypeDef {
    name: String,
    properties: Vec<PropertyDef>,
    description: Option<String>,
}

/// Represents a string enum to be emitted, with its members (`member_name`, `json_value`).
struct EnumDef {
    name: String,
    members: Vec<(String, String)>,
    description: Option<String>,
}

/// TypeScript type of a property. Arrays are kept apart so Knockout classes
/// can use `observableArray`.
enum TsType {
    Scalar(String),
    Array(String),
}

impl TsType {
    fn annotation(&self) -> String {
        match self {
            Self::Scalar(name) => name.clone(),
            Self::Array(element) => format!("{element}[]"),
        }
    }

    /// Name of the generated type this refers to, if any.
    fn referenced_name(&self) -> &str {
        match self {
            Self::Scalar(name) | Self::Array(name) => name.trim_end_matches("[]"),
        }
    }
}

/// Represents a property within an interface or class.
struct PropertyDef {
    json_key: String,
    ts_type: TsType,
    optional: bool,
    read_only: bool,
    description: Option<String>,
    /// TypeScript initializer expression, if the schema default is representable.
    default: Option<String>,
}

/// Normalize description: trim and treat empty/whitespace as None.
fn normalize_description(s: Option<&String>) -> Option<String> {
    s.as_ref().and_then(|t| {
        let trimmed: &str = t.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Convert a string to a TypeScript type name (`PascalCase`).
/// Examples: `"The Widget_Settings Schema"` -> `"TheWidgetSettingsSchema"`, `"widget_settings"` -> `"WidgetSettings"`
fn to_type_name(s: &str) -> String {
    let name: String = s.to_upper_camel_case();
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("T{name}")
    } else {
        name
    }
}

/// Name for types whose title and key have no usable characters.
const ANONYMOUS_TYPE_NAME: &str = "Anonymous";

/// Generate a type name from a property key and optional title.
/// Tries the title, then the key, then falls back to `Anonymous`.
fn type_name_from_property(property_key: &str, title: Option<&str>) -> String {
    title
        .into_iter()
        .chain(std::iter::once(property_key))
        .map(|candidate| to_type_name(candidate.trim()))
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| ANONYMOUS_TYPE_NAME.to_string())
}

/// Convert a JSON enum value to an enum member name (`PascalCase`).
/// Prefixes with `E` (short for Enum) if result is empty or starts with a digit.
fn to_member_name(s: &str) -> String {
    let base: String = s.to_upper_camel_case();
    if base.is_empty() || base.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("E{base}")
    } else {
        base
    }
}

/// Build enum members from JSON Schema enum values: sort, deduplicate, handle collisions.
/// Returns `Vec<(member_name, json_value)>`.
fn build_enum_members(enum_values: &[String]) -> Vec<(String, String)> {
    let mut unique: Vec<String> = enum_values.to_vec();
    unique.sort();
    unique.dedup();

    let base_names: Vec<String> = unique.iter().map(|s| to_member_name(s)).collect();
    let mut name_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for base in &base_names {
        *name_counts.entry(base.as_str()).or_insert(0) += 1;
    }

    let mut result: Vec<(String, String)> = Vec::with_capacity(unique.len());
    let mut name_indices: BTreeMap<&str, usize> = BTreeMap::new();
    for (json_val, base_name) in unique.iter().zip(base_names.iter()) {
        let member_name: String = if name_counts.get(base_name.as_str()).copied().unwrap_or(0) > 1 {
            let idx: &mut usize = name_indices.entry(base_name.as_str()).or_insert(0);
            let name: String = format!("{base_name}_{idx}");
            *idx += 1;
            name
        } else {
            base_name.clone()
        };
        result.push((member_name, json_val.clone()));
    }
    result
}

/// True if `key` can be written as a property name without quotes.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Property name as written in TypeScript: bare identifier or quoted string.
fn property_name(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        serde_json::Value::String(key.to_string()).to_string()
    }
}

fn is_date_format(format: Option<&str>) -> bool {
    matches!(format, Some("date-time" | "date"))
}

/// Resolve the TypeScript type of a property, collecting nested types and
/// enums along the way.
fn resolve_type(
    property_key: &str,
    schema: &JsonSchema,
    settings: &GenerationSettings,
    collected: &mut BTreeMap<String, TypeDef>,
    collected_enums: &mut BTreeMap<String, EnumDef>,
) -> TsType {
    // Check for string enum before type match
    if let Some(values) = schema.string_enum_values() {
        let enum_name: String = type_name_from_property(property_key, schema.title.as_deref());
        collected_enums.insert(
            enum_name.clone(),
            EnumDef {
                name: enum_name.clone(),
                members: build_enum_members(&values),
                description: normalize_description(schema.description.as_ref()),
            },
        );
        return TsType::Scalar(enum_name);
    }

    match schema.r#type.as_deref().unwrap_or("") {
        "string" => {
            if is_date_format(schema.format.as_deref())
                && settings.date_time_type == DateTimeType::Date
            {
                TsType::Scalar("Date".to_string())
            } else {
                TsType::Scalar("string".to_string())
            }
        }
        "integer" | "number" => TsType::Scalar("number".to_string()),
        "boolean" => TsType::Scalar("boolean".to_string()),
        "array" => match schema.items.as_deref() {
            Some(items) => TsType::Array(
                resolve_type(property_key, items, settings, collected, collected_enums)
                    .annotation(),
            ),
            None => TsType::Array("any".to_string()),
        },
        "object" => {
            if schema.properties.as_ref().is_some_and(|p| !p.is_empty()) {
                let nested_name: String =
                    type_name_from_property(property_key, schema.title.as_deref());
                collect_types(schema, &nested_name, settings, collected, collected_enums);
                TsType::Scalar(nested_name)
            } else {
                TsType::Scalar("{ [key: string]: any }".to_string())
            }
        }
        _ => TsType::Scalar("any".to_string()),
    }
}

/// TypeScript initializer for a schema default.
/// Returns None if there is no default or it has no sensible literal form.
fn default_literal(
    default_value: Option<&serde_json::Value>,
    ts_type: &TsType,
    collected_enums: &BTreeMap<String, EnumDef>,
) -> Option<String> {
    let dv: &serde_json::Value = default_value?;
    match ts_type {
        TsType::Array(_) => dv.is_array().then(|| dv.to_string()),
        TsType::Scalar(type_name) => {
            if let Some(enum_def) = collected_enums.get(type_name) {
                let json_str: &str = dv.as_str()?;
                let (member_name, _): &(String, String) = enum_def
                    .members
                    .iter()
                    .find(|(_, json_val)| json_val == json_str)?;
                return Some(format!("{type_name}.{member_name}"));
            }
            match type_name.as_str() {
                "string" if dv.is_string() => Some(dv.to_string()),
                "number" if dv.is_number() => Some(dv.to_string()),
                "boolean" if dv.is_boolean() => Some(dv.to_string()),
                "Date" if dv.is_string() => Some(format!("new Date({dv})")),
                _ => None,
            }
        }
    }
}

/// Recursively collect all interfaces/classes and enums from a schema.
/// Uses `BTreeMap` for deterministic type and property ordering (alphabetical by key).
fn collect_types(
    schema: &JsonSchema,
    type_name: &str,
    settings: &GenerationSettings,
    collected: &mut BTreeMap<String, TypeDef>,
    collected_enums: &mut BTreeMap<String, EnumDef>,
) {
    let Some(properties) = schema.properties.as_ref() else {
        return;
    };
    if properties.is_empty() {
        return;
    }

    let mut property_defs: Vec<PropertyDef> = Vec::with_capacity(properties.len());
    for (key, prop_schema) in properties {
        let ts_type: TsType = resolve_type(key, prop_schema, settings, collected, collected_enums);
        let is_required: bool = schema.required.as_ref().is_some_and(|r| r.contains(key));
        let default: Option<String> =
            default_literal(prop_schema.default.value(), &ts_type, collected_enums);
        property_defs.push(PropertyDef {
            json_key: key.clone(),
            ts_type,
            optional: !is_required,
            read_only: prop_schema.read_only,
            description: normalize_description(prop_schema.description.as_ref()),
            default,
        });
    }

    collected.insert(
        type_name.to_string(),
        TypeDef {
            name: type_name.to_string(),
            properties: property_defs,
            description: normalize_description(schema.description.as_ref()),
        },
    );
}

/// Emit a JSDoc comment from a description.
/// `line_prefix` is prepended to each line (e.g. `""` for types, `"    "` for properties).
fn emit_doc_comment<W: Write>(
    writer: &mut W,
    description: Option<&str>,
    line_prefix: &str,
) -> std::io::Result<()> {
    let Some(desc) = description else {
        return Ok(());
    };
    writeln!(writer, "{line_prefix}/**")?;
    for line in desc.lines() {
        let line: String = line.trim_end().replace("*/", "*\\/");
        if line.is_empty() {
            writeln!(writer, "{line_prefix} *")?;
        } else {
            writeln!(writer, "{line_prefix} * {line}")?;
        }
    }
    writeln!(writer, "{line_prefix} */")?;
    Ok(())
}

/// Emit a single enum to the writer.
fn emit_enum<W: Write>(enum_def: &EnumDef, writer: &mut W) -> std::io::Result<()> {
    emit_doc_comment(writer, enum_def.description.as_deref(), "")?;
    writeln!(writer, "export enum {} {{", enum_def.name)?;
    for (member_name, json_value) in &enum_def.members {
        let literal: serde_json::Value = serde_json::Value::String(json_value.clone());
        writeln!(writer, "    {member_name} = {literal},")?;
    }
    writeln!(writer, "}}")?;
    writeln!(writer)?;
    Ok(())
}

fn read_only_prefix(property: &PropertyDef, settings: &GenerationSettings) -> &'static str {
    if property.read_only && settings.generate_read_only_keywords {
        "readonly "
    } else {
        ""
    }
}

fn emit_interface<W: Write>(
    type_def: &TypeDef,
    emitted_name: &str,
    settings: &GenerationSettings,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "export interface {emitted_name} {{")?;
    for property in &type_def.properties {
        emit_doc_comment(writer, property.description.as_deref(), "    ")?;
        writeln!(
            writer,
            "    {}{}{}: {};",
            read_only_prefix(property, settings),
            property_name(&property.json_key),
            if property.optional { "?" } else { "" },
            property.ts_type.annotation(),
        )?;
    }
    writeln!(writer, "}}")?;
    writeln!(writer)?;
    Ok(())
}

fn emit_class<W: Write>(
    type_def: &TypeDef,
    emitted_name: &str,
    settings: &GenerationSettings,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "export class {emitted_name} {{")?;
    for property in &type_def.properties {
        emit_doc_comment(writer, property.description.as_deref(), "    ")?;
        let marker: &str = match (&property.default, property.optional) {
            (Some(_), _) => "",
            (None, true) => "?",
            (None, false) => "!",
        };
        let initializer: String = property
            .default
            .as_ref()
            .map(|d| format!(" = {d}"))
            .unwrap_or_default();
        writeln!(
            writer,
            "    {}{}{marker}: {}{initializer};",
            read_only_prefix(property, settings),
            property_name(&property.json_key),
            property.ts_type.annotation(),
        )?;
    }
    if !type_def.properties.is_empty() {
        writeln!(writer)?;
    }
    writeln!(writer, "    constructor(data?: Partial<{emitted_name}>) {{")?;
    writeln!(writer, "        if (data) {{")?;
    writeln!(writer, "            Object.assign(this, data);")?;
    writeln!(writer, "        }}")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "}}")?;
    writeln!(writer)?;
    Ok(())
}

fn emit_knockout_class<W: Write>(
    type_def: &TypeDef,
    emitted_name: &str,
    settings: &GenerationSettings,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "export class {emitted_name} {{")?;
    for property in &type_def.properties {
        emit_doc_comment(writer, property.description.as_deref(), "    ")?;
        let (factory, type_argument): (&str, String) = match &property.ts_type {
            TsType::Scalar(name) => ("observable", name.clone()),
            TsType::Array(element) => ("observableArray", element.clone()),
        };
        writeln!(
            writer,
            "    {}{} = ko.{factory}<{type_argument}>({});",
            read_only_prefix(property, settings),
            property_name(&property.json_key),
            property.default.as_deref().unwrap_or(""),
        )?;
    }
    writeln!(writer, "}}")?;
    writeln!(writer)?;
    Ok(())
}

/// Emit a single type with the template the settings select for it.
/// An extended type is emitted as `<Name>Base`, followed by its hand-written class.
fn emit_type<W: Write>(
    type_def: &TypeDef,
    settings: &GenerationSettings,
    extension_code: &ExtensionCode,
    writer: &mut W,
) -> std::io::Result<()> {
    let template: Template = settings.template(&type_def.name);
    let extended: bool = extension_code.is_extended(&type_def.name);
    let emitted_name: String = if extended {
        format!("{}Base", type_def.name)
    } else {
        type_def.name.clone()
    };

    emit_doc_comment(writer, type_def.description.as_deref(), "")?;
    match template {
        Template::Interface => emit_interface(type_def, &emitted_name, settings, writer)?,
        Template::Class => emit_class(type_def, &emitted_name, settings, writer)?,
        Template::KnockoutClass => emit_knockout_class(type_def, &emitted_name, settings, writer)?,
    }

    if extended && let Some(code) = extension_code.class_code(&type_def.name) {
        writeln!(writer, "{code}")?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Determine emission order: nested types before their parents.
fn emission_order(type_defs: &BTreeMap<String, TypeDef>, root_name: &str) -> Vec<String> {
    fn visit(
        name: &str,
        type_defs: &BTreeMap<String, TypeDef>,
        order: &mut Vec<String>,
        visited: &mut HashSet<String>,
    ) {
        if !visited.insert(name.to_string()) {
            return;
        }
        if let Some(def) = type_defs.get(name) {
            for property in &def.properties {
                let referenced: &str = property.ts_type.referenced_name();
                if type_defs.contains_key(referenced) {
                    visit(referenced, type_defs, order, visited);
                }
            }
        }
        order.push(name.to_string());
    }

    let mut order: Vec<String> = Vec::with_capacity(type_defs.len());
    let mut visited: HashSet<String> = HashSet::new();

    visit(root_name, type_defs, &mut order, &mut visited);
    for name in type_defs.keys() {
        visit(name, type_defs, &mut order, &mut visited);
    }

    order
}

/// Generate TypeScript from a JSON Schema string and write to `writer`.
pub fn generate_to_writer<W: Write>(
    schema_json: &str,
    writer: &mut W,
    settings: &GenerationSettings,
) -> Result<(), JsonSchemaTsError> {
    let schema: JsonSchema = serde_json::from_str(schema_json)?;
    if schema.r#type.as_deref() != Some("object") {
        return Err(JsonSchemaTsError::RootNotObject);
    }

    let root_name: String = schema
        .title
        .as_deref()
        .map(|t| to_type_name(t.trim()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Root".to_string());

    let mut collected: BTreeMap<String, TypeDef> = BTreeMap::new();
    let mut collected_enums: BTreeMap<String, EnumDef> = BTreeMap::new();
    collect_types(&schema, &root_name, settings, &mut collected, &mut collected_enums);
    if collected.is_empty() {
        return Err(JsonSchemaTsError::NoTypesToGenerate);
    }

    let extension_code: &ExtensionCode = settings.processed_extension_code();
    for name in extension_code.missing_extended_classes() {
        warn!(class = name, "extended class not found in extension code");
    }

    // Enums first (alphabetically), then types (topological order), then the
    // rest of the extension code.
    let mut body: Vec<u8> = Vec::new();
    for enum_def in collected_enums.values() {
        emit_enum(enum_def, &mut body)?;
    }
    for name in emission_order(&collected, &root_name) {
        if let Some(type_def) = collected.get(&name) {
            emit_type(type_def, settings, extension_code, &mut body)?;
        }
    }
    if !extension_code.remaining_code().is_empty() {
        writeln!(body, "{}", extension_code.remaining_code())?;
    }
    let body: String = String::from_utf8_lossy(&body).into_owned();

    writeln!(writer, "// Generated by json-schema-ts. Do not edit manually.")?;
    writeln!(writer)?;
    if !extension_code.import_code().is_empty() {
        writeln!(writer, "{}", extension_code.import_code())?;
        writeln!(writer)?;
    }
    if settings.module_name.is_empty() {
        writeln!(writer, "{}", body.trim_end())?;
    } else {
        writeln!(writer, "module {} {{", settings.module_name)?;
        for line in body.trim_end().lines() {
            if line.is_empty() {
                writeln!(writer)?;
            } else {
                writeln!(writer, "    {line}")?;
            }
        }
        writeln!(writer, "}}")?;
    }

    debug!(
        types = collected.len(),
        enums = collected_enums.len(),
        root = %root_name,
        "generated TypeScript"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::OutputStyle;

    fn generate(schema_json: &str, settings: &GenerationSettings) -> String {
        let mut output: Vec<u8> = Vec::new();
        generate_to_writer(schema_json, &mut output, settings).unwrap();
        String::from_utf8(output).unwrap()
    }

    const PET_SCHEMA: &str = r#"{
        "type": "object",
        "title": "Pet",
        "required": ["name"],
        "properties": {
            "name": { "type": "string" },
            "age": { "type": "integer" }
        }
    }"#;

    #[test]
    fn to_type_name_sanitizes_spaces() {
        assert_eq!(to_type_name("The Widget Schema"), "TheWidgetSchema");
    }

    #[test]
    fn to_type_name_sanitizes_underscores_and_spaces() {
        assert_eq!(to_type_name("The Foo_Bar Schema"), "TheFooBarSchema");
    }

    #[test]
    fn to_type_name_with_hyphens() {
        assert_eq!(to_type_name("foo-bar"), "FooBar");
    }

    #[test]
    fn to_type_name_numeric_prefix() {
        assert_eq!(to_type_name("3d point"), "T3dPoint");
    }

    #[test]
    fn type_name_without_alphanumerics_falls_back() {
        assert_eq!(type_name_from_property("***", None), "Anonymous");
        assert_eq!(type_name_from_property("***", Some("  ")), "Anonymous");
        assert_eq!(type_name_from_property("items", Some("***")), "Items");
        assert_eq!(type_name_from_property("items", Some("Line Item")), "LineItem");
    }

    #[test]
    fn to_member_name_numeric_prefix_gets_e_prefix() {
        assert_eq!(to_member_name("1st"), "E1st");
        assert_eq!(to_member_name(""), "E");
    }

    #[test]
    fn build_enum_members_deduplicates() {
        let values: Vec<String> = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let members: Vec<(String, String)> = build_enum_members(&values);
        assert_eq!(
            members,
            vec![
                ("A".to_string(), "a".to_string()),
                ("B".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn build_enum_members_collision_disambiguates() {
        let values: Vec<String> = vec!["A".to_string(), "a".to_string()];
        let members: Vec<(String, String)> = build_enum_members(&values);
        assert_eq!(
            members,
            vec![
                ("A_0".to_string(), "A".to_string()),
                ("A_1".to_string(), "a".to_string()),
            ]
        );
    }

    #[test]
    fn property_name_quotes_non_identifiers() {
        assert_eq!(property_name("name"), "name");
        assert_eq!(property_name("$ref"), "$ref");
        assert_eq!(property_name("foo-bar"), "\"foo-bar\"");
        assert_eq!(property_name("1st"), "\"1st\"");
    }

    #[test]
    fn generate_interface() {
        let actual: String = generate(PET_SCHEMA, &GenerationSettings::default());
        let expected: &str = "// Generated by json-schema-ts. Do not edit manually.

export interface Pet {
    age?: number;
    name: string;
}
";
        assert_eq!(expected, actual);
    }

    #[test]
    fn generate_class() {
        let settings = GenerationSettings::default().with_type_style(OutputStyle::Class);
        let actual: String = generate(PET_SCHEMA, &settings);
        let expected: &str = "// Generated by json-schema-ts. Do not edit manually.

export class Pet {
    age?: number;
    name!: string;

    constructor(data?: Partial<Pet>) {
        if (data) {
            Object.assign(this, data);
        }
    }
}
";
        assert_eq!(expected, actual);
    }

    #[test]
    fn generate_knockout_class() {
        let schema: &str = r#"{
            "type": "object",
            "title": "Pet",
            "properties": {
                "name": { "type": "string", "default": "Rex" },
                "tags": { "type": "array", "items": { "type": "string" } }
            }
        }"#;
        let settings = GenerationSettings::default().with_type_style(OutputStyle::KnockoutClass);
        let actual: String = generate(schema, &settings);
        let expected: &str = "// Generated by json-schema-ts. Do not edit manually.

export class Pet {
    name = ko.observable<string>(\"Rex\");
    tags = ko.observableArray<string>();
}
";
        assert_eq!(expected, actual);
    }

    #[test]
    fn class_types_override_default_style() {
        let schema: &str = r#"{
            "type": "object",
            "title": "Animal",
            "properties": {
                "pet": {
                    "type": "object",
                    "title": "Pet",
                    "properties": { "name": { "type": "string" } }
                }
            }
        }"#;
        let settings = GenerationSettings::default().with_class_types(["Pet"]);
        let actual: String = generate(schema, &settings);
        assert!(actual.contains("export class Pet {"));
        assert!(actual.contains("export interface Animal {"));
        assert!(actual.contains("    pet?: Pet;"));
        let pet_index: Option<usize> = actual.find("export class Pet");
        let animal_index: Option<usize> = actual.find("export interface Animal");
        assert!(pet_index < animal_index);
    }

    #[test]
    fn extended_class_gets_base_suffix() {
        let extension: &str = "import { Helper } from './helper';\n\nexport class Pet extends PetBase {\n    get label() { return this.name; }\n}\n\nexport const VERSION = 1;\n";
        let settings = GenerationSettings::default()
            .with_type_style(OutputStyle::Class)
            .with_extension_code(extension)
            .with_extended_classes(["Pet"]);
        let actual: String = generate(PET_SCHEMA, &settings);
        let expected: &str = "// Generated by json-schema-ts. Do not edit manually.

import { Helper } from './helper';

export class PetBase {
    age?: number;
    name!: string;

    constructor(data?: Partial<PetBase>) {
        if (data) {
            Object.assign(this, data);
        }
    }
}

export class Pet extends PetBase {
    get label() { return this.name; }
}

export const VERSION = 1;
";
        assert_eq!(expected, actual);
    }

    #[test]
    fn extension_comments_and_template_literals_do_not_hide_classes() {
        let extension: &str = "import {\n    Helper,\n} from './helper';\n\n/*\nclass Old {\n*/\nconst banner = `\nclass Fake {\n`;\n\nexport class Pet extends PetBase {\n}\n";
        let settings = GenerationSettings::default()
            .with_type_style(OutputStyle::Class)
            .with_extension_code(extension)
            .with_extended_classes(["Pet"]);
        let actual: String = generate(PET_SCHEMA, &settings);
        let expected: &str = "// Generated by json-schema-ts. Do not edit manually.

import {
    Helper,
} from './helper';

export class PetBase {
    age?: number;
    name!: string;

    constructor(data?: Partial<PetBase>) {
        if (data) {
            Object.assign(this, data);
        }
    }
}

export class Pet extends PetBase {
}

/*
class Old {
*/
const banner = `
class Fake {
`;
";
        assert_eq!(expected, actual);
    }

    #[test]
    fn hand_written_class_without_declaration_is_not_extended() {
        let settings = GenerationSettings::default()
            .with_extension_code("export class Pet extends PetBase {}\n");
        let actual: String = generate(PET_SCHEMA, &settings);
        assert!(actual.contains("export interface Pet {"));
        assert!(!actual.contains("PetBase {\n"));
        assert!(actual.ends_with("export class Pet extends PetBase {}\n"));
    }

    #[test]
    fn missing_extended_class_generates_plain_type() {
        let settings = GenerationSettings::default().with_extended_classes(["Pet"]);
        let actual: String = generate(PET_SCHEMA, &settings);
        assert!(actual.contains("export interface Pet {"));
        assert!(!actual.contains("PetBase"));
    }

    #[test]
    fn module_name_wraps_output() {
        let settings = GenerationSettings::default().with_module_name("Api");
        let actual: String = generate(PET_SCHEMA, &settings);
        let expected: &str = "// Generated by json-schema-ts. Do not edit manually.

module Api {
    export interface Pet {
        age?: number;
        name: string;
    }
}
";
        assert_eq!(expected, actual);
    }

    #[test]
    fn read_only_keywords() {
        let schema: &str = r#"{
            "type": "object",
            "properties": { "id": { "type": "integer", "readOnly": true } }
        }"#;
        let with: String = generate(schema, &GenerationSettings::default());
        assert!(with.contains("    readonly id?: number;"));

        let settings = GenerationSettings::default().with_read_only_keywords(false);
        let without: String = generate(schema, &settings);
        assert!(without.contains("    id?: number;"));
        assert!(!without.contains("readonly"));
    }

    #[test]
    fn date_time_type() {
        let schema: &str = r#"{
            "type": "object",
            "properties": {
                "created": { "type": "string", "format": "date-time" },
                "birthday": { "type": "string", "format": "date" }
            }
        }"#;
        let as_date: String = generate(schema, &GenerationSettings::default());
        assert!(as_date.contains("    created?: Date;"));
        assert!(as_date.contains("    birthday?: Date;"));

        let settings = GenerationSettings::default().with_date_time_type(DateTimeType::String);
        let as_string: String = generate(schema, &settings);
        assert!(as_string.contains("    created?: string;"));
        assert!(as_string.contains("    birthday?: string;"));
    }

    #[test]
    fn enums_and_defaults() {
        let schema: &str = r#"{
            "type": "object",
            "title": "Record",
            "properties": {
                "status": {
                    "type": "string",
                    "enum": ["active", "inactive"],
                    "default": "active",
                    "description": "Current status."
                },
                "count": { "type": "integer", "default": 3 },
                "created": { "type": "string", "format": "date-time", "default": "2020-01-01T00:00:00Z" },
                "flags": { "type": "array", "items": { "type": "boolean" }, "default": [] },
                "meta": { "type": "object", "default": {} }
            }
        }"#;
        let settings = GenerationSettings::default().with_type_style(OutputStyle::Class);
        let actual: String = generate(schema, &settings);
        assert!(actual.contains(
            "/**\n * Current status.\n */\nexport enum Status {\n    Active = \"active\",\n    Inactive = \"inactive\",\n}\n"
        ));
        assert!(actual.contains("    /**\n     * Current status.\n     */\n    status: Status = Status.Active;"));
        assert!(actual.contains("    count: number = 3;"));
        assert!(actual.contains("    created: Date = new Date(\"2020-01-01T00:00:00Z\");"));
        assert!(actual.contains("    flags: boolean[] = [];"));
        assert!(actual.contains("    meta?: { [key: string]: any };"));
    }

    #[test]
    fn arrays_of_objects_and_enums() {
        let schema: &str = r#"{
            "type": "object",
            "properties": {
                "items": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "title": "Line Item",
                        "properties": { "sku": { "type": "string" } }
                    }
                },
                "kinds": { "type": "array", "items": { "enum": ["x"] } },
                "matrix": { "type": "array", "items": { "type": "array", "items": { "type": "number" } } },
                "anything": { "type": "array" }
            }
        }"#;
        let actual: String = generate(schema, &GenerationSettings::default());
        assert!(actual.contains("export interface LineItem {"));
        assert!(actual.contains("    items?: LineItem[];"));
        assert!(actual.contains("export enum Kinds {"));
        assert!(actual.contains("    kinds?: Kinds[];"));
        assert!(actual.contains("    matrix?: number[][];"));
        assert!(actual.contains("    anything?: any[];"));
    }

    #[test]
    fn quoted_property_names() {
        let schema: &str = r#"{
            "type": "object",
            "properties": { "foo-bar": { "type": "string" } }
        }"#;
        let actual: String = generate(schema, &GenerationSettings::default());
        assert!(actual.contains("    \"foo-bar\"?: string;"));
        assert!(actual.contains("export interface Root {"));
    }

    #[test]
    fn nested_type_without_usable_name_is_anonymous() {
        let schema: &str = r#"{
            "type": "object",
            "title": "Holder",
            "properties": {
                "***": {
                    "type": "object",
                    "properties": { "id": { "type": "integer" } }
                }
            }
        }"#;
        let actual: String = generate(schema, &GenerationSettings::default());
        assert!(actual.contains("export interface Anonymous {\n    id?: number;\n}"));
        assert!(actual.contains("    \"***\"?: Anonymous;"));
    }

    #[test]
    fn root_not_object_is_error() {
        let mut output: Vec<u8> = Vec::new();
        let err = generate_to_writer(
            r#"{"type": "string"}"#,
            &mut output,
            &GenerationSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, JsonSchemaTsError::RootNotObject));
    }

    #[test]
    fn empty_root_is_error() {
        let mut output: Vec<u8> = Vec::new();
        let err = generate_to_writer(
            r#"{"type": "object", "properties": {}}"#,
            &mut output,
            &GenerationSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, JsonSchemaTsError::NoTypesToGenerate));
    }

    #[test]
    fn invalid_json_is_error() {
        let mut output: Vec<u8> = Vec::new();
        let err = generate_to_writer("{", &mut output, &GenerationSettings::default()).unwrap_err();
        assert!(matches!(err, JsonSchemaTsError::Json(_)));
    }
}
