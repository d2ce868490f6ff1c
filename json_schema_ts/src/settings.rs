//! Settings for JSON Schema to TypeScript code generation.

use crate::error::JsonSchemaTsError;
use crate::extension_code::ExtensionCode;
use std::cell::OnceCell;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// The shape a generated type takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputStyle {
    /// `export interface Name { ... }`
    #[default]
    Interface,
    /// `export class Name { ... }` with a data-assigning constructor.
    Class,
    /// A class whose fields are Knockout observables.
    KnockoutClass,
}

impl FromStr for OutputStyle {
    type Err = JsonSchemaTsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "interface" => Ok(Self::Interface),
            "class" => Ok(Self::Class),
            "knockoutclass" | "knockout-class" | "knockout" => Ok(Self::KnockoutClass),
            _ => Err(JsonSchemaTsError::UnsupportedStyle(s.to_string())),
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Self::Interface => "Interface",
            Self::Class => "Class",
            Self::KnockoutClass => "KnockoutClass",
        };
        f.write_str(name)
    }
}

/// How `date` and `date-time` string properties are typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateTimeType {
    /// The native `Date` type.
    #[default]
    Date,
    /// Plain `string`.
    String,
}

impl FromStr for DateTimeType {
    type Err = JsonSchemaTsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "string" => Ok(Self::String),
            _ => Err(JsonSchemaTsError::UnsupportedDateTimeType(s.to_string())),
        }
    }
}

/// The rendering strategy for a generated type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// `export interface` with optional members.
    Interface,
    /// `export class` with a `Partial<T>` constructor.
    Class,
    /// `export class` whose members are Knockout observables.
    KnockoutClass,
}

/// Settings that control code generation behavior.
///
/// The extension code and extended classes are only reachable through
/// setters so the processed [`ExtensionCode`] is rebuilt after they change.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Style used for every type not listed in `class_types`.
    ///
    /// **Default: `Interface`.**
    pub type_style: OutputStyle,

    /// Type names which always generate plain classes, regardless of
    /// `type_style`. Matching is exact and case-sensitive.
    pub class_types: Option<HashSet<String>>,

    /// **Default: `Date`.**
    pub date_time_type: DateTimeType,

    /// Module wrapping the generated code. Empty means no module.
    pub module_name: String,

    /// Emit `readonly` for properties marked `readOnly` in the schema.
    ///
    /// **Default: true.**
    pub generate_read_only_keywords: bool,

    extension_code: String,
    extended_classes: Option<Vec<String>>,
    processed_extension_code: OnceCell<ExtensionCode>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            type_style: OutputStyle::Interface,
            class_types: None,
            date_time_type: DateTimeType::Date,
            module_name: String::new(),
            generate_read_only_keywords: true,
            extension_code: String::new(),
            extended_classes: None,
            processed_extension_code: OnceCell::new(),
        }
    }
}

impl GenerationSettings {
    /// Set the style used for types not listed in `class_types`.
    #[must_use]
    pub fn with_type_style(mut self, type_style: OutputStyle) -> Self {
        self.type_style = type_style;
        self
    }

    /// Force these type names to the plain class template.
    #[must_use]
    pub fn with_class_types<I, S>(mut self, class_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_types = Some(class_types.into_iter().map(Into::into).collect());
        self
    }

    /// Set the TypeScript type for `date-time` strings.
    #[must_use]
    pub fn with_date_time_type(mut self, date_time_type: DateTimeType) -> Self {
        self.date_time_type = date_time_type;
        self
    }

    /// Wrap the output in `module <name> { ... }`.
    #[must_use]
    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = module_name.into();
        self
    }

    /// Toggle `readonly` on properties marked `readOnly`.
    #[must_use]
    pub fn with_read_only_keywords(mut self, generate: bool) -> Self {
        self.generate_read_only_keywords = generate;
        self
    }

    /// Replace the extension code. See [`Self::set_extension_code`].
    #[must_use]
    pub fn with_extension_code(mut self, code: impl Into<String>) -> Self {
        self.set_extension_code(code);
        self
    }

    /// Declare the classes implemented in the extension code.
    #[must_use]
    pub fn with_extended_classes<I, S>(mut self, extended_classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_extended_classes(Some(extended_classes.into_iter().map(Into::into).collect()));
        self
    }

    /// Hand-written code merged into the generated output.
    #[must_use]
    pub fn extension_code(&self) -> &str {
        &self.extension_code
    }

    /// Replace the extension code. The processed extension code is rebuilt
    /// on next access if the text changed.
    pub fn set_extension_code(&mut self, code: impl Into<String>) {
        let code: String = code.into();
        if code != self.extension_code {
            self.extension_code = code;
            self.processed_extension_code = OnceCell::new();
        }
    }

    /// Class names the extension code is expected to implement.
    #[must_use]
    pub fn extended_classes(&self) -> Option<&[String]> {
        self.extended_classes.as_deref()
    }

    /// Replace the extended classes. The processed extension code is rebuilt
    /// on next access if the list changed.
    pub fn set_extended_classes(&mut self, extended_classes: Option<Vec<String>>) {
        if extended_classes != self.extended_classes {
            self.extended_classes = extended_classes;
            self.processed_extension_code = OnceCell::new();
        }
    }

    /// The parsed extension code, built on first access after a change.
    #[must_use]
    pub fn processed_extension_code(&self) -> &ExtensionCode {
        self.processed_extension_code.get_or_init(|| {
            debug!(
                bytes = self.extension_code.len(),
                "building processed extension code"
            );
            ExtensionCode::new(&self.extension_code, self.extended_classes.as_deref())
        })
    }

    /// The style `type_name` is generated with.
    #[must_use]
    pub fn type_style(&self, type_name: &str) -> OutputStyle {
        if self.is_class_type(type_name) {
            OutputStyle::Class
        } else {
            self.type_style
        }
    }

    /// The template `type_name` is rendered with.
    #[must_use]
    pub fn template(&self, type_name: &str) -> Template {
        if self.is_class_type(type_name) {
            trace!(type_name, "forced class template");
            return Template::Class;
        }
        let template: Template = match self.type_style {
            OutputStyle::Interface => Template::Interface,
            OutputStyle::Class => Template::Class,
            OutputStyle::KnockoutClass => Template::KnockoutClass,
        };
        trace!(type_name, ?template, "selected template");
        template
    }

    fn is_class_type(&self, type_name: &str) -> bool {
        self.class_types
            .as_ref()
            .is_some_and(|names| names.contains(type_name))
    }
}
