//! Settings file for the command line.
//!
//! A JSON object with optional camelCase keys; unknown keys are rejected so
//! typos surface instead of silently falling back to defaults.

use json_schema_ts::{GenerationSettings, JsonSchemaTsError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsFile {
    pub type_style: Option<String>,
    pub class_types: Option<Vec<String>>,
    pub date_time_type: Option<String>,
    pub module_name: Option<String>,
    pub generate_read_only_keywords: Option<bool>,
    /// Inline extension code. Takes precedence over `extension_code_file`.
    pub extension_code: Option<String>,
    /// Path to extension code, relative to the settings file.
    pub extension_code_file: Option<PathBuf>,
    pub extended_classes: Option<Vec<String>>,
}

impl SettingsFile {
    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self, JsonSchemaTsError> {
        let text: String = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, JsonSchemaTsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build generation settings, resolving `extension_code_file` against `base_dir`.
    pub fn into_settings(self, base_dir: &Path) -> Result<GenerationSettings, JsonSchemaTsError> {
        let mut settings = GenerationSettings::default();
        if let Some(type_style) = self.type_style {
            settings.type_style = type_style.parse()?;
        }
        if let Some(date_time_type) = self.date_time_type {
            settings.date_time_type = date_time_type.parse()?;
        }
        if let Some(module_name) = self.module_name {
            settings.module_name = module_name;
        }
        if let Some(generate) = self.generate_read_only_keywords {
            settings.generate_read_only_keywords = generate;
        }
        settings.class_types = self.class_types.map(|names| names.into_iter().collect());

        match (self.extension_code, self.extension_code_file) {
            (Some(code), _) => settings.set_extension_code(code),
            (None, Some(file)) => {
                settings.set_extension_code(std::fs::read_to_string(base_dir.join(file))?);
            }
            (None, None) => {}
        }
        settings.set_extended_classes(self.extended_classes);
        Ok(settings)
    }
}
