//! phenorank-common - Shared result types, errors, and locale handling used across all Phenorank crates.

pub mod error;
pub mod entities;
pub mod pubcasefinder;
pub mod locale;

// Re-export commonly used types
pub use entities::{
    AnalysisResult, Annotations, Candidate, CandidateKind, GeneEntry, LookupKey, OmimId,
    PatientEntry, SyndromeEntry,
};
pub use error::{PhenorankError, Result};
pub use locale::Locale;
pub use pubcasefinder::{HpoName, PubCaseFinderEntry, PubCaseFinderResult};
