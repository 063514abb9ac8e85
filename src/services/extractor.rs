//! Method extraction from the documentation pages.
//!
//! The listing page marks every method with a `div.method-name` wrapping a
//! link to its detail page. Detail pages declare their parameters in an inline
//! script as `var parameters = {...};`.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::{MethodEntry, Parameters};
use crate::utils::parse_selector;

/// Selector for method entries on the listing page.
pub const METHOD_SELECTOR: &str = "div.method-name";

/// Assignment of the parameter literal inside a detail page script.
static PARAMETERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)parameters\s*=\s*(\{.*?\})\s*;").expect("parameter pattern is valid")
});

/// A method entry found on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodLink {
    /// Display name of the method
    pub name: String,
    /// Link to the method's detail page
    pub href: String,
}

/// Find every method entry on the listing page, in document order.
///
/// Entries without a link are skipped.
pub fn method_links(document: &Html) -> Result<Vec<MethodLink>> {
    let entry_sel = parse_selector(METHOD_SELECTOR)?;
    let link_sel = parse_selector("a")?;

    let links = document
        .select(&entry_sel)
        .filter_map(|entry| {
            let link = entry_link(entry, &link_sel);
            if link.is_none() {
                log::warn!(
                    "Skipping method entry without a link: {:?}",
                    entry.text().collect::<String>().trim()
                );
            }
            link
        })
        .collect();
    Ok(links)
}

fn entry_link(entry: ElementRef<'_>, link_sel: &scraper::Selector) -> Option<MethodLink> {
    let anchor = entry.select(link_sel).next()?;
    let href = anchor.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }
    let name: String = anchor.text().collect();
    Some(MethodLink {
        name: name.trim().to_string(),
        href: href.to_string(),
    })
}

/// Find the raw parameter literal on a detail page.
pub fn find_parameter_literal(document: &Html) -> Result<Option<String>> {
    let script_sel = parse_selector("script")?;
    let literal = document.select(&script_sel).find_map(|script| {
        let text: String = script.text().collect();
        PARAMETERS_RE
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    });
    Ok(literal)
}

/// Decode a parameter literal as a JSON object.
pub fn parse_parameters(method: &str, literal: &str) -> Result<Parameters> {
    serde_json::from_str::<Parameters>(literal).map_err(|e| AppError::extract(method, e))
}

/// Build the entry for `method` from its detail page.
///
/// A page without a parameter declaration yields an entry with no parameters;
/// a declaration that does not decode is an error.
pub fn extract_method(method: &str, detail: &Html) -> Result<MethodEntry> {
    let parameters = match find_parameter_literal(detail)? {
        Some(literal) => Some(parse_parameters(method, &literal)?),
        None => {
            log::debug!("No parameter declaration for {}", method);
            None
        }
    };
    Ok(MethodEntry::new(method, parameters))
}
