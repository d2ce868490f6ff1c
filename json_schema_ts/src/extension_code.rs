//! Index over hand-written TypeScript extension code.
//!
//! Extension code is free-form user text appended to the generated output.
//! Classes declared in it whose names are listed as extended classes replace
//! the generated class of the same name: the generated one is emitted as
//! `<Name>Base` and the hand-written class (which is expected to
//! `extends <Name>Base`) follows it.

use regress::Regex;
use std::collections::BTreeMap;
use std::ops::Range;
use thiserror::Error;
use tracing::debug;

/// Matches the header of a class declaration at the start of the input.
/// Group 1 is the class name.
const CLASS_HEADER_PATTERN: &str =
    r"^[ \t]*(?:export[ \t]+)?(?:default[ \t]+)?(?:abstract[ \t]+)?class[ \t]+([A-Za-z_$][\w$]*)";

/// Reasons extension code could not be split into classes.
#[derive(Debug, Error)]
enum ExtensionCodeError {
    #[error("invalid class header pattern: {0}")]
    Pattern(String),

    #[error("class {name} has no body")]
    MissingBody { name: String },

    #[error("class {name} has unbalanced braces")]
    UnbalancedBraces { name: String },

    #[error("closing brace without opening brace at byte {offset}")]
    StrayClosingBrace { offset: usize },
}

/// A top-level class found in the extension code.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExtensionClass {
    /// Header through closing brace, verbatim.
    code: String,
    /// Text between the braces, verbatim.
    body: String,
}

/// Location of a top-level class inside the scanned text.
struct ClassSpan {
    name: String,
    /// Start of the header line.
    start: usize,
    /// One past the closing brace.
    end: usize,
    body: Range<usize>,
}

/// Processed extension code: imports, classes by name and leftover code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionCode {
    import_code: String,
    remaining_code: String,
    classes: BTreeMap<String, Option<ExtensionClass>>,
    extended_classes: Vec<String>,
}

impl ExtensionCode {
    /// Parse `code`, recording which of `extended_classes` it defines.
    ///
    /// Never fails. Code whose class boundaries cannot be determined is kept
    /// as remaining code and the index reports no classes.
    #[must_use]
    pub fn new(code: &str, extended_classes: Option<&[String]>) -> Self {
        let normalized: String = code.replace('\r', "");
        let (import_code, body): (String, String) = split_imports(&normalized);
        let extended_classes: Vec<String> = extended_classes.map(<[String]>::to_vec).unwrap_or_default();

        let spans: Vec<ClassSpan> = match scan_classes(&body) {
            Ok(spans) => spans,
            Err(error) => {
                debug!(%error, "extension code treated as containing no classes");
                Vec::new()
            }
        };

        let mut classes: BTreeMap<String, Option<ExtensionClass>> = BTreeMap::new();
        let mut remaining_code: String = String::new();
        let mut cursor: usize = 0;
        for span in &spans {
            classes.entry(span.name.clone()).or_insert_with(|| {
                Some(ExtensionClass {
                    code: body[span.start..span.end].trim().to_string(),
                    body: body[span.body.clone()].to_string(),
                })
            });
            if extended_classes.contains(&span.name) {
                remaining_code.push_str(&body[cursor..span.start]);
                cursor = span.end;
            }
        }
        remaining_code.push_str(&body[cursor..]);

        for name in &extended_classes {
            classes.entry(name.clone()).or_insert(None);
        }

        debug!(
            classes = spans.len(),
            extended = extended_classes.len(),
            "processed extension code"
        );

        Self {
            import_code,
            remaining_code: remaining_code.trim().to_string(),
            classes,
            extended_classes,
        }
    }

    /// True if the extension code defines a class named `name`.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        matches!(self.classes.get(name), Some(Some(_)))
    }

    /// The text between the braces of the class named `name`.
    #[must_use]
    pub fn class_body(&self, name: &str) -> Option<&str> {
        self.class(name).map(|class| class.body.as_str())
    }

    /// The full declaration of the class named `name`.
    #[must_use]
    pub fn class_code(&self, name: &str) -> Option<&str> {
        self.class(name).map(|class| class.code.as_str())
    }

    /// True if `name` is an extended class that the extension code defines.
    ///
    /// The generated type for such a name is emitted as `<name>Base`.
    #[must_use]
    pub fn is_extended(&self, name: &str) -> bool {
        self.extended_classes.iter().any(|extended| extended == name) && self.has_class(name)
    }

    /// Extended class names with no definition in the extension code.
    pub fn missing_extended_classes(&self) -> impl Iterator<Item = &str> {
        self.extended_classes
            .iter()
            .filter(|name| !self.has_class(name))
            .map(String::as_str)
    }

    /// `import` and `/// <reference` lines, one per line.
    #[must_use]
    pub fn import_code(&self) -> &str {
        &self.import_code
    }

    /// Everything except imports and extended classes.
    #[must_use]
    pub fn remaining_code(&self) -> &str {
        &self.remaining_code
    }

    fn class(&self, name: &str) -> Option<&ExtensionClass> {
        self.classes.get(name).and_then(Option::as_ref)
    }
}

/// Split import statements and reference lines from the rest of the code.
///
/// An import statement runs until a line ending in `;`, a quote or `)`, so
/// multi-line `import { ... } from '...'` statements stay whole. A statement
/// that never ends is left in the code.
fn split_imports(code: &str) -> (String, String) {
    let mut imports: Vec<&str> = Vec::new();
    let mut statement: Vec<&str> = Vec::new();
    let mut body: String = String::with_capacity(code.len());
    for line in code.split_inclusive('\n') {
        let trimmed: &str = line.trim();
        if statement.is_empty() {
            if trimmed.starts_with("/// <reference") {
                imports.push(line.trim_end());
                continue;
            }
            if !(trimmed.starts_with("import ") || trimmed.starts_with("import{")) {
                body.push_str(line);
                continue;
            }
        }
        statement.push(line.trim_end());
        if ends_import_statement(trimmed) {
            imports.append(&mut statement);
        }
    }
    for line in statement {
        body.push_str(line);
        body.push('\n');
    }
    (imports.join("\n"), body)
}

fn ends_import_statement(line: &str) -> bool {
    line.ends_with(';') || line.ends_with('\'') || line.ends_with('"') || line.ends_with(')')
}

/// True if the line at the start of `rest` may open a class declaration.
fn may_start_class(rest: &str) -> bool {
    let rest: &str = rest.trim_start_matches([' ', '\t']);
    ["export", "default", "abstract", "class"]
        .iter()
        .any(|keyword| rest.starts_with(keyword))
}

/// Locate top-level classes in `code`, in source order.
///
/// Walks the text once, tracking brace depth and skipping string literals
/// and comments. Headers are only recognized at the start of a line at
/// depth 0, so classes in comments, strings and function bodies are ignored.
fn scan_classes(code: &str) -> Result<Vec<ClassSpan>, ExtensionCodeError> {
    let header: Regex =
        Regex::new(CLASS_HEADER_PATTERN).map_err(|e| ExtensionCodeError::Pattern(e.to_string()))?;

    let bytes: &[u8] = code.as_bytes();
    let mut spans: Vec<ClassSpan> = Vec::new();
    let mut depth: usize = 0;
    // Header seen, body not opened yet: (name, start).
    let mut pending: Option<(String, usize)> = None;
    // Body opened: (name, start, body start).
    let mut open: Option<(String, usize, usize)> = None;
    let mut line_start: bool = true;
    let mut i: usize = 0;
    while i < bytes.len() {
        if line_start && depth == 0 && pending.is_none() && may_start_class(&code[i..]) {
            if let Some(found) = header.find(&code[i..])
                && let Some(name_range) = found.group(1)
            {
                let name: String = code[i + name_range.start..i + name_range.end].to_string();
                pending = Some((name, i));
                i += found.end();
                line_start = false;
                continue;
            }
        }
        line_start = false;
        match bytes[i] {
            b'\n' => line_start = true,
            b'{' => {
                if depth == 0
                    && let Some((name, start)) = pending.take()
                {
                    open = Some((name, start, i + 1));
                }
                depth += 1;
            }
            b'}' => {
                if depth == 0 {
                    return Err(ExtensionCodeError::StrayClosingBrace { offset: i });
                }
                depth -= 1;
                if depth == 0
                    && let Some((name, start, body_start)) = open.take()
                {
                    spans.push(ClassSpan {
                        name,
                        start,
                        end: i + 1,
                        body: body_start..i,
                    });
                }
            }
            quote @ (b'"' | b'\'' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                // Stop on the newline so the next line is still a line start.
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    if let Some((name, _, _)) = open {
        return Err(ExtensionCodeError::UnbalancedBraces { name });
    }
    if let Some((name, _)) = pending {
        return Err(ExtensionCodeError::MissingBody { name });
    }
    Ok(spans)
}
