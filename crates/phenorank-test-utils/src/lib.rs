//! Fixture builders shared by Phenorank crate tests.

use phenorank_common::{
    AnalysisResult, Annotations, GeneEntry, HpoName, OmimId, PatientEntry, PubCaseFinderEntry,
    PubCaseFinderResult, SyndromeEntry,
};

pub use pretty_assertions;

/// Float comparison for normalised scores.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn gene(name: &str, distance: f64) -> GeneEntry {
    GeneEntry {
        gene_name: name.to_string(),
        gene_entrez_id: format!("{}", 1000 + name.len()),
        distance,
        annotations: Annotations::default(),
        extra: serde_json::Map::new(),
    }
}

/// Genes named `GENE1..GENEn` with the given distances.
pub fn genes_with_distances(distances: &[f64]) -> Vec<GeneEntry> {
    distances
        .iter()
        .enumerate()
        .map(|(i, &d)| gene(&format!("GENE{}", i + 1), d))
        .collect()
}

pub fn syndrome(name: &str, omim_id: u64, distance: f64) -> SyndromeEntry {
    SyndromeEntry {
        syndrome_name: name.to_string(),
        omim_id: OmimId::Numeric(omim_id),
        distance,
        image_id: String::new(),
        subject_id: String::new(),
        annotations: Annotations::default(),
        extra: serde_json::Map::new(),
    }
}

pub fn patient(subject_id: &str, omim_id: u64, distance: f64) -> PatientEntry {
    PatientEntry {
        subject_id: subject_id.to_string(),
        gene_name: String::new(),
        gene_entrez_id: String::new(),
        distance,
        image_id: format!("{subject_id}_1"),
        syndrome_name: String::new(),
        omim_id: OmimId::Numeric(omim_id),
        numeric_omim_id: Some(omim_id),
        phenotypic_series_id: None,
        annotations: Annotations::default(),
        extra: serde_json::Map::new(),
    }
}

pub fn pcf_entry(id: &str, rank: u32, score: f64, gene_symbol: Option<&str>) -> PubCaseFinderEntry {
    PubCaseFinderEntry {
        id: id.to_string(),
        rank: Some(rank),
        score: Some(score),
        hgnc_gene_symbol: gene_symbol.map(str::to_string),
        extra: serde_json::Map::new(),
    }
}

pub fn pubcasefinder(ranked_list: Vec<PubCaseFinderEntry>) -> PubCaseFinderResult {
    PubCaseFinderResult {
        ranked_list,
        ..Default::default()
    }
}

/// A small but complete result: three genes, two syndromes, three patients,
/// plus a PubCaseFinder block for two HPO terms.
pub fn sample_result() -> AnalysisResult {
    let mut pcf = pubcasefinder(vec![
        pcf_entry("OMIM:122470", 1, 0.93, Some("NIPBL")),
        pcf_entry("OMIM:147920", 3, 0.71, Some("KMT2D")),
    ]);
    pcf.hpo_names.insert(
        "HP:0000347".to_string(),
        HpoName { name_en: "Micrognathia".to_string(), name_ja: "小顎症".to_string() },
    );
    pcf.hpo_names.insert(
        "HP:0000316".to_string(),
        HpoName { name_en: "Hypertelorism".to_string(), name_ja: "眼間開離".to_string() },
    );

    AnalysisResult {
        model_version: "v1.1.0".to_string(),
        gallery_version: "v1.0.3".to_string(),
        suggested_genes_list: vec![gene("KMT2D", 0.45), gene("NIPBL", 0.52), gene("NSD1", 0.61)],
        suggested_syndromes_list: vec![
            syndrome("Kabuki syndrome 1", 147920, 0.47),
            syndrome("Cornelia de Lange syndrome 1", 122470, 0.55),
        ],
        suggested_patients_list: vec![
            patient("10512", 147920, 0.38),
            patient("10877", 122470, 0.38),
            patient("11203", 117550, 0.64),
        ],
        queried_hpo_ids: Some(vec!["HP:0000347".to_string(), "HP:0000316".to_string()]),
        pubcasefinder: Some(pcf),
        extra: serde_json::Map::new(),
    }
}

pub fn sample_result_json() -> String {
    serde_json::to_string_pretty(&sample_result()).unwrap()
}
