//! Result types mirroring the prediction backend's JSON payload.
//! Identifying fields are carried verbatim; only the annotation block is
//! written by the ranker.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

use crate::error::{PhenorankError, Result};
use crate::pubcasefinder::PubCaseFinderResult;

// ---------------------------------------------------------------------------
// Annotations (assigned by the ranker, never trusted from input)
// ---------------------------------------------------------------------------

/// Ranking fields shared by every candidate variant.
///
/// `rank` and `score` may arrive pre-filled from older backends; they are
/// overwritten on normalisation. Older backends name the GestaltMatcher rank
/// `gm_rank`; when present it is kept in step with `rank`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gm_rank: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubcasefinder_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubcasefinder_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_rank: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_rank: Option<u32>,
}

// ---------------------------------------------------------------------------
// OMIM identifier
// ---------------------------------------------------------------------------

/// OMIM ids arrive as numbers for syndromes and as numbers or strings for
/// patients (phenotypic series ids such as `PS163950`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OmimId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for OmimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmimId::Numeric(n) => write!(f, "{n}"),
            OmimId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for OmimId {
    fn from(n: u64) -> Self {
        OmimId::Numeric(n)
    }
}

// ---------------------------------------------------------------------------
// Candidate trait
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    Gene,
    Syndrome,
    Patient,
}

impl CandidateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateKind::Gene => "gene",
            CandidateKind::Syndrome => "syndrome",
            CandidateKind::Patient => "patient",
        }
    }
}

/// Key used to join a candidate against an external ranked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Omim(String),
    GeneSymbol(String),
}

/// Common view over gene, syndrome, and patient candidates.
pub trait Candidate {
    const KIND: CandidateKind;

    /// Dissimilarity to the query; lower is more similar.
    fn distance(&self) -> f64;

    fn annotations(&self) -> &Annotations;

    fn annotations_mut(&mut self) -> &mut Annotations;

    /// Key for joining against PubCaseFinder. `None` when the candidate has
    /// no usable identifier.
    fn lookup_key(&self) -> Option<LookupKey>;

    /// Human-readable label for listings.
    fn label(&self) -> String;

    /// Consume `self` and return it with rank and score replaced.
    fn with_ranking(mut self, rank: u32, score: f64) -> Self
    where
        Self: Sized,
    {
        let ann = self.annotations_mut();
        ann.rank = Some(rank);
        if ann.gm_rank.is_some() {
            ann.gm_rank = Some(rank);
        }
        ann.score = Some(score);
        self
    }
}

fn omim_key(id: &OmimId) -> Option<LookupKey> {
    let key = id.to_string();
    if key.is_empty() || key == "0" {
        None
    } else {
        Some(LookupKey::Omim(key))
    }
}

// ---------------------------------------------------------------------------
// Gene
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneEntry {
    pub gene_name: String,
    pub gene_entrez_id: String,
    pub distance: f64,
    #[serde(flatten)]
    pub annotations: Annotations,
    /// Backend fields not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Candidate for GeneEntry {
    const KIND: CandidateKind = CandidateKind::Gene;

    fn distance(&self) -> f64 {
        self.distance
    }

    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }

    fn lookup_key(&self) -> Option<LookupKey> {
        if self.gene_name.is_empty() {
            None
        } else {
            Some(LookupKey::GeneSymbol(self.gene_name.clone()))
        }
    }

    fn label(&self) -> String {
        format!("{} (Entrez {})", self.gene_name, self.gene_entrez_id)
    }
}

// ---------------------------------------------------------------------------
// Syndrome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyndromeEntry {
    pub syndrome_name: String,
    pub omim_id: OmimId,
    pub distance: f64,
    #[serde(default)]
    pub image_id: String,
    #[serde(default)]
    pub subject_id: String,
    #[serde(flatten)]
    pub annotations: Annotations,
    /// Backend fields not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Candidate for SyndromeEntry {
    const KIND: CandidateKind = CandidateKind::Syndrome;

    fn distance(&self) -> f64 {
        self.distance
    }

    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }

    fn lookup_key(&self) -> Option<LookupKey> {
        omim_key(&self.omim_id)
    }

    fn label(&self) -> String {
        format!("{} (OMIM {})", self.syndrome_name, self.omim_id)
    }
}

// ---------------------------------------------------------------------------
// Patient
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientEntry {
    pub subject_id: String,
    #[serde(default)]
    pub gene_name: String,
    #[serde(default)]
    pub gene_entrez_id: String,
    pub distance: f64,
    #[serde(default)]
    pub image_id: String,
    #[serde(default)]
    pub syndrome_name: String,
    pub omim_id: OmimId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_omim_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phenotypic_series_id: Option<String>,
    #[serde(flatten)]
    pub annotations: Annotations,
    /// Backend fields not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Candidate for PatientEntry {
    const KIND: CandidateKind = CandidateKind::Patient;

    fn distance(&self) -> f64 {
        self.distance
    }

    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }

    fn lookup_key(&self) -> Option<LookupKey> {
        omim_key(&self.omim_id)
    }

    fn label(&self) -> String {
        format!("{} / {} ({})", self.subject_id, self.syndrome_name, self.gene_name)
    }
}

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

/// One prediction response. Absent lists deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub model_version: String,
    #[serde(default)]
    pub gallery_version: String,
    #[serde(default)]
    pub suggested_genes_list: Vec<GeneEntry>,
    #[serde(default)]
    pub suggested_syndromes_list: Vec<SyndromeEntry>,
    #[serde(default)]
    pub suggested_patients_list: Vec<PatientEntry>,
    /// HPO ids sent with the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queried_hpo_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubcasefinder: Option<PubCaseFinderResult>,
    /// Auxiliary backend data, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    /// Parse a prediction response. The backend answers failed requests with
    /// a bare `{"message": ...}` object, which is reported as
    /// [`PhenorankError::Backend`] rather than as an empty result.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let result: Self = serde_json::from_str(s)?;
        if result.is_empty() {
            if let Some(message) = result.extra.get("message").and_then(Value::as_str) {
                return Err(PhenorankError::Backend(message.to_string()));
            }
        }
        Ok(result)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of candidates across the three lists.
    pub fn candidate_count(&self) -> usize {
        self.suggested_genes_list.len()
            + self.suggested_syndromes_list.len()
            + self.suggested_patients_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidate_count() == 0
    }
}
