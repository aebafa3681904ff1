//! Full annotation pass applied to every incoming result.

use phenorank_common::AnalysisResult;
use tracing::debug;

use crate::integrate::integrate_pubcasefinder;
use crate::meta_rank::apply_meta_rank;
use crate::normalise::normalise;

/// Normalise, merge PubCaseFinder ranks, then compute meta ranks.
/// Running it again on its own output yields the same result.
pub fn rank_result(result: AnalysisResult) -> AnalysisResult {
    let mut result = normalise(result);
    integrate_pubcasefinder(&mut result);
    apply_meta_rank(&mut result);
    debug!(
        model_version = %result.model_version,
        gallery_version = %result.gallery_version,
        candidates = result.candidate_count(),
        "analysis result ranked"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use phenorank_test_utils::sample_result;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rank_result_is_idempotent() {
        let once = rank_result(sample_result());
        let twice = rank_result(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_metadata_passes_through() {
        let input = sample_result();
        let out = rank_result(input.clone());
        assert_eq!(out.model_version, input.model_version);
        assert_eq!(out.gallery_version, input.gallery_version);
        assert_eq!(out.queried_hpo_ids, input.queried_hpo_ids);
        assert_eq!(out.pubcasefinder, input.pubcasefinder);
    }
}
