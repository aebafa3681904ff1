//! Merge PubCaseFinder ranks into GestaltMatcher candidates.
//! Syndromes and patients join on OMIM id; genes join on HGNC symbol.

use std::collections::HashMap;

use phenorank_common::{AnalysisResult, Candidate, LookupKey, PubCaseFinderResult};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PcfMatch {
    rank: Option<u32>,
    score: Option<f64>,
}

/// Lookup tables built once per result.
#[derive(Debug, Default)]
pub struct PcfIndex {
    by_omim: HashMap<String, PcfMatch>,
    by_gene: HashMap<String, PcfMatch>,
}

impl PcfIndex {
    /// The ranked list is already in PubCaseFinder order, so the first entry
    /// for a key wins.
    pub fn build(pcf: &PubCaseFinderResult) -> Self {
        let mut index = Self::default();
        for entry in &pcf.ranked_list {
            let m = PcfMatch { rank: entry.rank, score: entry.score };
            if let Some(omim) = entry.omim_number() {
                index.by_omim.entry(omim.to_string()).or_insert(m);
            }
            if let Some(symbol) = entry.gene_symbol() {
                index.by_gene.entry(symbol.to_string()).or_insert(m);
            }
        }
        index
    }

    fn lookup(&self, key: &LookupKey) -> Option<PcfMatch> {
        match key {
            LookupKey::Omim(id) => self.by_omim.get(id).copied(),
            LookupKey::GeneSymbol(symbol) => self.by_gene.get(symbol).copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_omim.is_empty() && self.by_gene.is_empty()
    }

    /// Copy PubCaseFinder rank and score onto matching candidates.
    /// Returns the number of candidates matched.
    pub fn annotate<C: Candidate>(&self, list: &mut [C]) -> usize {
        let mut matched = 0;
        for candidate in list.iter_mut() {
            let Some(m) = candidate.lookup_key().and_then(|k| self.lookup(&k)) else {
                continue;
            };
            let ann = candidate.annotations_mut();
            ann.pubcasefinder_rank = m.rank;
            ann.pubcasefinder_score = m.score;
            matched += 1;
        }
        matched
    }
}

/// Enrich the three candidate lists with PubCaseFinder data, if any.
pub fn integrate_pubcasefinder(result: &mut AnalysisResult) {
    let index = match result.pubcasefinder.as_ref() {
        Some(pcf) if pcf.is_usable() => PcfIndex::build(pcf),
        Some(pcf) => {
            debug!(error = ?pcf.error, "PubCaseFinder block has no usable ranking");
            return;
        }
        None => {
            debug!("No PubCaseFinder data found to integrate");
            return;
        }
    };

    let syndromes = index.annotate(&mut result.suggested_syndromes_list);
    let genes = index.annotate(&mut result.suggested_genes_list);
    let patients = index.annotate(&mut result.suggested_patients_list);
    debug!(syndromes, genes, patients, "PubCaseFinder integration complete");
}
