//! Color naming: RGB pixel to human-readable name
//!
//! Resolution is an explicit ordered chain of three stages, first success
//! wins:
//!
//! 1. exact CSS3 keyword lookup ([`css`]) — ignores tolerance
//! 2. nearest match in the extended dictionary ([`dictionary`]) — bounded by
//!    the caller's Euclidean RGB tolerance
//! 3. descriptive HSV banding ([`descriptive`]) — always produces a name
//!
//! The chain never fails for an in-range pixel and never returns an empty
//! string.

pub mod css;
pub mod descriptive;
pub mod dictionary;

pub use dictionary::NamedColorEntry;

use crate::error::{AssistError, Result};
use crate::frame::Pixel;
use std::sync::OnceLock;

/// Which stage produced a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// Exact CSS3 keyword match
    Css,
    /// Extended dictionary nearest match within tolerance
    Dictionary,
    /// HSV banding fallback
    Descriptive,
}

/// A resolved color name tagged with its originating stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    pub name: String,
    pub source: NameSource,
}

/// Maps pixels to human-readable names via the three-stage chain
///
/// The dictionary is fixed at construction and never mutated; a namer is
/// freely shareable across threads.
#[derive(Debug, Clone)]
pub struct ColorNamer {
    dictionary: Vec<NamedColorEntry>,
}

impl Default for ColorNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorNamer {
    /// Create a namer with the builtin extended dictionary
    pub fn new() -> Self {
        Self {
            dictionary: dictionary::builtin_dictionary(),
        }
    }

    /// Create a namer with a custom dictionary
    ///
    /// # Errors
    ///
    /// Returns `AssistError::EmptyDictionary` if `entries` is empty. An empty
    /// dictionary is a configuration mistake caught here, at construction,
    /// so no per-call error path exists.
    pub fn with_dictionary(entries: Vec<NamedColorEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AssistError::EmptyDictionary);
        }
        log::debug!("color namer initialized with {} dictionary entries", entries.len());
        Ok(Self {
            dictionary: entries,
        })
    }

    /// The dictionary entries, in declaration order
    pub fn dictionary(&self) -> &[NamedColorEntry] {
        &self.dictionary
    }

    /// Resolve a pixel to a name, reporting which stage produced it
    pub fn resolve(&self, pixel: Pixel, tolerance: f32) -> NamedColor {
        if let Some(name) = css::lookup(pixel) {
            return NamedColor {
                name: name.to_string(),
                source: NameSource::Css,
            };
        }

        if let Some(entry) = dictionary::nearest(&self.dictionary, pixel, tolerance) {
            return NamedColor {
                name: entry.name.clone(),
                source: NameSource::Dictionary,
            };
        }

        NamedColor {
            name: descriptive::describe(pixel),
            source: NameSource::Descriptive,
        }
    }

    /// Resolve a pixel to a name
    pub fn name_color(&self, pixel: Pixel, tolerance: f32) -> String {
        self.resolve(pixel, tolerance).name
    }
}

/// Process-wide namer with the builtin dictionary
pub fn default_namer() -> &'static ColorNamer {
    static NAMER: OnceLock<ColorNamer> = OnceLock::new();
    NAMER.get_or_init(ColorNamer::new)
}

/// The utterance an assistive caller feeds to its speech engine
pub fn spoken_phrase(name: &str) -> String {
    format!("This color is {name}")
}
