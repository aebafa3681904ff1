//! Distance-to-score normalisation.
//! Each candidate list is ranked by its existing order and rescaled with
//! min-max over its own distances.

use phenorank_common::{AnalysisResult, Candidate};
use tracing::debug;

/// Min-max similarity for one distance within `[min_dist, max_dist]`.
/// The closest candidate scores 1.0 and the farthest 0.0. A degenerate
/// range (all candidates equidistant) scores every candidate 1.0.
pub fn distance_score(distance: f64, min_dist: f64, max_dist: f64) -> f64 {
    if max_dist == min_dist {
        return 1.0;
    }
    (1.0 - (distance - min_dist) / (max_dist - min_dist)).clamp(0.0, 1.0)
}

/// Smallest and largest value of `distances`, or `None` when empty.
pub fn distance_range(distances: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    distances.into_iter().fold(None, |acc, d| match acc {
        None => Some((d, d)),
        Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
    })
}

/// Scores for a slice of distances, in input order.
pub fn distance_scores(distances: &[f64]) -> Vec<f64> {
    match distance_range(distances.iter().copied()) {
        None => vec![],
        Some((lo, hi)) => distances.iter().map(|&d| distance_score(d, lo, hi)).collect(),
    }
}

/// Assign `rank = index + 1` and a min-max score to every candidate.
/// Order is preserved; an empty list is returned unchanged.
pub fn normalise_list<C: Candidate>(list: Vec<C>) -> Vec<C> {
    let Some((min_dist, max_dist)) = distance_range(list.iter().map(|c| c.distance())) else {
        return list;
    };
    debug!(kind = C::KIND.as_str(), len = list.len(), min_dist, max_dist, "scoring candidates");

    list.into_iter()
        .enumerate()
        .map(|(i, candidate)| {
            let score = distance_score(candidate.distance(), min_dist, max_dist);
            candidate.with_ranking(i as u32 + 1, score)
        })
        .collect()
}

/// Normalise the gene, syndrome, and patient lists independently.
/// Version metadata and the PubCaseFinder block pass through untouched.
pub fn normalise(mut result: AnalysisResult) -> AnalysisResult {
    debug!(
        genes = result.suggested_genes_list.len(),
        syndromes = result.suggested_syndromes_list.len(),
        patients = result.suggested_patients_list.len(),
        "normalising analysis result"
    );
    result.suggested_genes_list = normalise_list(std::mem::take(&mut result.suggested_genes_list));
    result.suggested_syndromes_list =
        normalise_list(std::mem::take(&mut result.suggested_syndromes_list));
    result.suggested_patients_list =
        normalise_list(std::mem::take(&mut result.suggested_patients_list));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use phenorank_test_utils::{assert_close, gene, genes_with_distances};

    fn ranks<C: Candidate>(list: &[C]) -> Vec<u32> {
        list.iter().filter_map(|c| c.annotations().rank).collect()
    }

    fn scores<C: Candidate>(list: &[C]) -> Vec<f64> {
        list.iter().filter_map(|c| c.annotations().score).collect()
    }

    #[test]
    fn test_three_distances_spread_over_unit_range() {
        let list = normalise_list(genes_with_distances(&[0.2, 0.5, 0.8]));
        assert_eq!(ranks(&list), vec![1, 2, 3]);
        let s = scores(&list);
        assert_close(s[0], 1.0);
        assert_close(s[1], 0.5);
        assert_close(s[2], 0.0);
    }

    #[test]
    fn test_equal_distances_all_score_one() {
        let list = normalise_list(genes_with_distances(&[0.3, 0.3]));
        assert_eq!(ranks(&list), vec![1, 2]);
        assert_eq!(scores(&list), vec![1.0, 1.0]);
    }

    #[test]
    fn test_single_candidate() {
        let list = normalise_list(vec![gene("FGFR2", 0.7)]);
        assert_eq!(ranks(&list), vec![1]);
        assert_eq!(scores(&list), vec![1.0]);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let list: Vec<phenorank_common::GeneEntry> = normalise_list(vec![]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_unsorted_input_keeps_order() {
        // Ranks follow input order even when distances do not ascend.
        let list = normalise_list(genes_with_distances(&[0.6, 0.2, 1.0]));
        assert_eq!(ranks(&list), vec![1, 2, 3]);
        let s = scores(&list);
        assert_close(s[0], 0.5);
        assert_close(s[1], 1.0);
        assert_close(s[2], 0.0);
        let names: Vec<_> = list.iter().map(|g| g.gene_name.as_str()).collect();
        assert_eq!(names, vec!["GENE1", "GENE2", "GENE3"]);
    }

    #[test]
    fn test_distance_scores_matches_list_path() {
        let s = distance_scores(&[0.1, 0.4]);
        assert_close(s[0], 1.0);
        assert_close(s[1], 0.0);
        assert!(distance_scores(&[]).is_empty());
    }

    #[test]
    fn test_distance_score_degenerate_range() {
        assert_eq!(distance_score(0.42, 0.42, 0.42), 1.0);
    }
}
