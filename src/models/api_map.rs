//! API map data structures.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Parameter declarations of one method, keyed by parameter name.
///
/// The declaration schema belongs to the documentation site; values are kept as-is.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// Grouping bucket a method is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Methods callable without a site parameter
    Network,
    /// Methods scoped to a single site
    Site,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Network, Category::Site];
}

/// A single documented API method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodEntry {
    /// Display name from the listing page (e.g. "/answers")
    pub name: String,

    /// Declared parameters, absent when the detail page declares none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

impl MethodEntry {
    pub fn new(name: impl Into<String>, parameters: Option<Parameters>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}

/// The generated map of the API surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMap {
    /// API version label supplied by the caller
    pub version: String,

    /// Local generation time, `YYYY-MM-DD HH:MM:SS.ffffff`
    pub generated: String,

    /// Methods grouped by category, each list in listing order
    pub methods: BTreeMap<Category, Vec<MethodEntry>>,
}

impl ApiMap {
    /// Create an empty map stamped with the current local time.
    pub fn new(version: impl Into<String>) -> Self {
        Self::generated_at(version, Local::now())
    }

    /// Create an empty map stamped with the given time.
    pub fn generated_at(version: impl Into<String>, at: DateTime<Local>) -> Self {
        Self {
            version: version.into(),
            generated: at.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
            methods: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        }
    }

    /// Append a method to the end of its category list.
    pub fn push(&mut self, category: Category, entry: MethodEntry) {
        self.methods.entry(category).or_default().push(entry);
    }

    /// Methods filed under a category, in insertion order.
    pub fn category(&self, category: Category) -> &[MethodEntry] {
        self.methods
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of methods across categories.
    pub fn method_count(&self) -> usize {
        self.methods.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_map_has_both_categories() {
        let map = ApiMap::new("2.2");
        assert_eq!(map.version, "2.2");
        assert!(!map.generated.is_empty());
        assert!(map.category(Category::Network).is_empty());
        assert!(map.category(Category::Site).is_empty());
        assert_eq!(map.method_count(), 0);
    }

    #[test]
    fn test_generated_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let map = ApiMap::generated_at("2.2", at);
        assert_eq!(map.generated, "2024-03-09 14:05:07.000000");
    }

    #[test]
    fn test_serialized_layout() {
        let at = Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut map = ApiMap::generated_at("2.2", at);
        map.push(Category::Network, MethodEntry::new("/sites", None));

        let mut params = Parameters::new();
        params.insert("id".to_string(), json!({"type": "number"}));
        map.push(Category::Network, MethodEntry::new("/answers", Some(params)));

        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(
            value,
            json!({
                "version": "2.2",
                "generated": "2024-01-01 00:00:00.000000",
                "methods": {
                    "network": [
                        {"name": "/sites"},
                        {"name": "/answers", "parameters": {"id": {"type": "number"}}}
                    ],
                    "site": []
                }
            })
        );

        let text = serde_json::to_string(&map).unwrap();
        let network_at = text.find("\"network\"").unwrap();
        let site_at = text.find("\"site\"").unwrap();
        assert!(text.starts_with("{\"version\""));
        assert!(network_at < site_at);
    }
}
