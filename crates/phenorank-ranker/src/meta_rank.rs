//! Combined GestaltMatcher / PubCaseFinder rank.
//!
//! `mean_rank` averages the two ranks for candidates that matched a
//! PubCaseFinder row. `meta_rank` is a dense 1-based position over
//! `mean_rank` (ties broken by GestaltMatcher rank), with unmatched
//! candidates placed after all matched ones in their original order.
//! The list itself is never reordered.

use std::cmp::Ordering;

use phenorank_common::{AnalysisResult, Candidate};

/// Mean of the two ranks, when both are known.
pub fn mean_rank(gm_rank: Option<u32>, pcf_rank: Option<u32>) -> Option<f64> {
    match (gm_rank, pcf_rank) {
        (Some(gm), Some(pcf)) => Some((gm as f64 + pcf as f64) / 2.0),
        _ => None,
    }
}

/// Fill `mean_rank` and `meta_rank` for one list. Lists without any
/// PubCaseFinder match have both cleared.
pub fn apply_meta_rank_list<C: Candidate>(list: &mut [C]) {
    let has_pcf = list.iter().any(|c| c.annotations().pubcasefinder_rank.is_some());
    if !has_pcf {
        for c in list.iter_mut() {
            let ann = c.annotations_mut();
            ann.mean_rank = None;
            ann.meta_rank = None;
        }
        return;
    }

    for c in list.iter_mut() {
        let ann = c.annotations_mut();
        ann.mean_rank = mean_rank(ann.rank, ann.pubcasefinder_rank);
    }

    // (original index, mean rank, gm rank)
    let mut order: Vec<(usize, Option<f64>, u32)> = list
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let ann = c.annotations();
            (i, ann.mean_rank, ann.rank.unwrap_or(i as u32 + 1))
        })
        .collect();

    order.sort_by(|a, b| match (a.1, b.1) {
        (Some(x), Some(y)) => x
            .partial_cmp(&y)
            .unwrap_or(Ordering::Equal)
            .then(a.2.cmp(&b.2)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.2.cmp(&b.2),
    });

    for (position, (idx, _, _)) in order.into_iter().enumerate() {
        list[idx].annotations_mut().meta_rank = Some(position as u32 + 1);
    }
}

/// Fill `mean_rank` and `meta_rank` on the gene, syndrome, and patient lists.
pub fn apply_meta_rank(result: &mut AnalysisResult) {
    apply_meta_rank_list(&mut result.suggested_genes_list);
    apply_meta_rank_list(&mut result.suggested_syndromes_list);
    apply_meta_rank_list(&mut result.suggested_patients_list);
}

#[cfg(test)]
mod tests {
    use super::*;
    use phenorank_common::SyndromeEntry;
    use phenorank_test_utils::syndrome;

    fn ranked(gm_and_pcf: &[(u32, Option<u32>)]) -> Vec<SyndromeEntry> {
        gm_and_pcf
            .iter()
            .enumerate()
            .map(|(i, &(gm, pcf))| {
                let mut s = syndrome(&format!("Syndrome {i}"), 100_000 + i as u64, 0.1 * i as f64);
                s.annotations.rank = Some(gm);
                s.annotations.pubcasefinder_rank = pcf;
                s
            })
            .collect()
    }

    fn meta(list: &[SyndromeEntry]) -> Vec<Option<u32>> {
        list.iter().map(|s| s.annotations.meta_rank).collect()
    }

    #[test]
    fn test_mean_rank_requires_both() {
        assert_eq!(mean_rank(Some(1), Some(4)), Some(2.5));
        assert_eq!(mean_rank(Some(1), None), None);
    }

    #[test]
    fn test_meta_rank_orders_by_mean_then_gm_rank() {
        // means: 5.5, 2.0, unmatched, 2.0
        let mut list = ranked(&[(1, Some(10)), (2, Some(2)), (3, None), (4, Some(0))]);
        apply_meta_rank_list(&mut list);
        assert_eq!(meta(&list), vec![Some(3), Some(1), Some(4), Some(2)]);
        assert_eq!(list[0].annotations.mean_rank, Some(5.5));
        assert_eq!(list[2].annotations.mean_rank, None);
    }

    #[test]
    fn test_meta_rank_dense_and_order_preserving() {
        let mut list = ranked(&[(1, Some(3)), (2, None), (3, Some(1)), (4, None)]);
        let names_before: Vec<_> = list.iter().map(|s| s.syndrome_name.clone()).collect();
        apply_meta_rank_list(&mut list);
        let names_after: Vec<_> = list.iter().map(|s| s.syndrome_name.clone()).collect();
        assert_eq!(names_before, names_after);

        let mut metas: Vec<u32> = list.iter().filter_map(|s| s.annotations.meta_rank).collect();
        metas.sort_unstable();
        assert_eq!(metas, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_without_pcf_matches_fields_are_cleared() {
        let mut list = ranked(&[(1, None), (2, None)]);
        list[0].annotations.meta_rank = Some(7);
        apply_meta_rank_list(&mut list);
        assert_eq!(meta(&list), vec![None, None]);
    }
}
