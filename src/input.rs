//! Input classification: file path or raw text.

use itertools::Itertools;
use lazy_static::lazy_static;
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
struct Language {
    extensions: Vec<String>,
}

const BUILTIN_DATABASE: &str = include_str!("../extensions.json");

lazy_static! {
    static ref PARSED_DB: HashMap<String, Language> = serde_json::from_str(BUILTIN_DATABASE)
        .unwrap_or_else(|e| {
            warn!("Built-in JSON database has a syntax error: {}", e);
            HashMap::new()
        });
    static ref RECOGNIZED_EXTENSIONS: Vec<String> = PARSED_DB
        .values()
        .flat_map(|lang| lang.extensions.iter().cloned())
        .sorted()
        .collect();
}

/// A classified scan input.
///
/// An input ending in a recognized file extension is treated as a path;
/// anything else is scanned as literal text, even if it looks like a path.
/// The converse holds too: a text blob that happens to end in ".py" is
/// taken to be a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource<'a> {
    /// Path of a file to read and scan.
    Path(&'a Path),
    /// Raw text to scan directly.
    Text(&'a str),
}

impl<'a> InputSource<'a> {
    /// Classify `input` by its suffix.
    ///
    /// ```
    /// use std::path::Path;
    /// use litscan::input::InputSource;
    ///
    /// assert_eq!(InputSource::classify("main.py"), InputSource::Path(Path::new("main.py")));
    /// assert_eq!(InputSource::classify("x = 'a'"), InputSource::Text("x = 'a'"));
    /// ```
    pub fn classify(input: &'a str) -> InputSource<'a> {
        if RECOGNIZED_EXTENSIONS
            .iter()
            .any(|ext| input.ends_with(ext.as_str()))
        {
            InputSource::Path(Path::new(input))
        } else {
            InputSource::Text(input)
        }
    }
}

/// Extensions which classify an input as a file path, in sorted order.
pub fn known_extensions() -> &'static [String] {
    &RECOGNIZED_EXTENSIONS
}
