use thiserror::Error;

/// Error type for JSON Schema to TypeScript generation.
#[derive(Debug, Error)]
pub enum JsonSchemaTsError {
    /// A type style value outside `Interface`, `Class` and `KnockoutClass`.
    #[error("unsupported type style \"{0}\" (expected Interface, Class or KnockoutClass)")]
    UnsupportedStyle(String),

    /// A date time type value outside `Date` and `String`.
    #[error("unsupported date time type \"{0}\" (expected Date or String)")]
    UnsupportedDateTimeType(String),

    /// The root schema does not describe an object.
    #[error("root schema must have type \"object\"")]
    RootNotObject,

    /// The schema produced no interfaces, classes or enums.
    #[error("no types to generate (root object has no supported properties)")]
    NoTypesToGenerate,

    /// I/O error (e.g., reading schema file, writing output file).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
