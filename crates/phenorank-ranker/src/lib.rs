//! phenorank-ranker - Candidate ranking and score normalisation.
//! Annotates prediction results with ranks, similarity scores, and
//! PubCaseFinder-derived meta ranks.

pub mod normalise;
pub mod integrate;
pub mod meta_rank;
pub mod pipeline;

pub use pipeline::rank_result;
