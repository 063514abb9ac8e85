// src/utils/html.rs

//! HTML parser backends.

use std::fmt;

use scraper::{Html, Selector};

use crate::error::{AppError, Result};

/// Which HTML parsing backend turns page bytes into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ParserBackend {
    /// Lenient html5ever tree builder; malformed markup is repaired
    #[default]
    Html5,
    /// html5ever tree builder that rejects any recorded parse error
    Strict,
}

impl ParserBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserBackend::Html5 => "html5",
            ParserBackend::Strict => "strict",
        }
    }

    /// Parse raw page bytes fetched from `path`.
    pub fn parse(&self, path: &str, bytes: &[u8]) -> Result<Html> {
        let text = String::from_utf8_lossy(bytes);
        let document = Html::parse_document(&text);

        if *self == ParserBackend::Strict {
            if let Some(first) = document.errors.first() {
                return Err(AppError::parse(
                    path,
                    format!("{} ({} error(s) total)", first, document.errors.len()),
                ));
            }
        }
        Ok(document)
    }
}

impl fmt::Display for ParserBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a CSS selector, mapping failures into the crate error.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
