//! PubCaseFinder block attached to an analysis result when HPO terms were
//! queried alongside the image.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::locale::Locale;

/// One row of the PubCaseFinder disease ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PubCaseFinderEntry {
    /// Prefixed disease id, e.g. `OMIM:147920`.
    pub id: String,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hgnc_gene_symbol: Option<String>,
    /// Remaining fields from the service, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PubCaseFinderEntry {
    /// Bare OMIM number when the id carries the `OMIM:` prefix.
    pub fn omim_number(&self) -> Option<&str> {
        self.id
            .strip_prefix("OMIM:")
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    pub fn gene_symbol(&self) -> Option<&str> {
        self.hgnc_gene_symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HpoName {
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ja: String,
}

impl HpoName {
    /// Label in the requested locale; Japanese falls back to English when
    /// no translation is present.
    pub fn label(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ja if !self.name_ja.is_empty() => &self.name_ja,
            _ => &self.name_en,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PubCaseFinderResult {
    #[serde(default)]
    pub ranked_list: Vec<PubCaseFinderEntry>,
    /// Keyed by HPO id, e.g. `HP:0000347`.
    #[serde(default)]
    pub hpo_names: BTreeMap<String, HpoName>,
    /// Set by the backend when the PubCaseFinder query failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PubCaseFinderResult {
    pub fn is_usable(&self) -> bool {
        self.error.is_none() && !self.ranked_list.is_empty()
    }

    pub fn hpo_label(&self, hpo_id: &str, locale: Locale) -> Option<&str> {
        self.hpo_names.get(hpo_id).map(|n| n.label(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omim_number_strips_prefix() {
        let entry: PubCaseFinderEntry = serde_json::from_str(
            r#"{"id": "OMIM:147920", "rank": 1, "score": 0.92, "omim_disease_name_en": "Kabuki syndrome 1"}"#,
        )
        .unwrap();
        assert_eq!(entry.omim_number(), Some("147920"));
        assert_eq!(entry.gene_symbol(), None);
        assert!(entry.extra.contains_key("omim_disease_name_en"));
    }

    #[test]
    fn test_non_omim_id_has_no_number() {
        let entry: PubCaseFinderEntry =
            serde_json::from_str(r#"{"id": "ORPHA:2322", "rank": 4}"#).unwrap();
        assert_eq!(entry.omim_number(), None);
    }

    #[test]
    fn test_error_block_is_not_usable() {
        let pcf: PubCaseFinderResult =
            serde_json::from_str(r#"{"error": "Failed to connect to the PubCaseFinder API."}"#)
                .unwrap();
        assert!(!pcf.is_usable());
        assert!(pcf.ranked_list.is_empty());
    }

    #[test]
    fn test_hpo_label_by_locale() {
        let pcf: PubCaseFinderResult = serde_json::from_str(
            r#"{"hpo_names": {
                "HP:0000347": {"name_en": "Micrognathia", "name_ja": "小顎症"},
                "HP:0000316": {"name_en": "Hypertelorism", "name_ja": ""}
            }}"#,
        )
        .unwrap();
        assert_eq!(pcf.hpo_label("HP:0000347", Locale::Ja), Some("小顎症"));
        assert_eq!(pcf.hpo_label("HP:0000347", Locale::De), Some("Micrognathia"));
        assert_eq!(pcf.hpo_label("HP:0000316", Locale::Ja), Some("Hypertelorism"));
        assert_eq!(pcf.hpo_label("HP:9999999", Locale::EnUs), None);
    }
}
