//! Plain-text tables for a ranked result.

use std::fmt::{self, Write};

use phenorank_common::{AnalysisResult, Candidate, Locale};

fn fmt_opt_u32(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

fn fmt_opt_f64(v: Option<f64>) -> String {
    v.map(|x| format!("{x:.3}")).unwrap_or_else(|| "-".to_string())
}

fn render_list<C: Candidate>(out: &mut String, title: &str, list: &[C], top: usize) -> fmt::Result {
    writeln!(out, "{title} ({})", list.len())?;
    if list.is_empty() {
        writeln!(out, "  (none)")?;
        return Ok(());
    }
    let show_pcf = list.iter().any(|c| c.annotations().pubcasefinder_rank.is_some());
    if show_pcf {
        writeln!(
            out,
            "  {:>4}  {:>6}  {:>8}  {:>7}  {:>4}  {}",
            "rank", "score", "distance", "pcf", "meta", "candidate"
        )?;
    } else {
        writeln!(out, "  {:>4}  {:>6}  {:>8}  {}", "rank", "score", "distance", "candidate")?;
    }

    let limit = if top == 0 { list.len() } else { top.min(list.len()) };
    for c in &list[..limit] {
        let ann = c.annotations();
        if show_pcf {
            writeln!(
                out,
                "  {:>4}  {:>6}  {:>8.4}  {:>7}  {:>4}  {}",
                fmt_opt_u32(ann.rank),
                fmt_opt_f64(ann.score),
                c.distance(),
                fmt_opt_u32(ann.pubcasefinder_rank),
                fmt_opt_u32(ann.meta_rank),
                c.label()
            )?;
        } else {
            writeln!(
                out,
                "  {:>4}  {:>6}  {:>8.4}  {}",
                fmt_opt_u32(ann.rank),
                fmt_opt_f64(ann.score),
                c.distance(),
                c.label()
            )?;
        }
    }
    if limit < list.len() {
        writeln!(out, "  ... {} more", list.len() - limit)?;
    }
    Ok(())
}

pub fn render_tables(result: &AnalysisResult, locale: Locale, top: usize) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "model {}  gallery {}",
        result.model_version, result.gallery_version
    )?;

    if let Some(hpo_ids) = result.queried_hpo_ids.as_deref().filter(|ids| !ids.is_empty()) {
        writeln!(out, "HPO terms:")?;
        for id in hpo_ids {
            let label = result
                .pubcasefinder
                .as_ref()
                .and_then(|pcf| pcf.hpo_label(id, locale))
                .unwrap_or("");
            writeln!(out, "  {id}  {label}")?;
        }
    }
    if let Some(err) = result.pubcasefinder.as_ref().and_then(|p| p.error.as_deref()) {
        writeln!(out, "PubCaseFinder: {err}")?;
    }

    out.push('\n');
    render_list(&mut out, "Syndromes", &result.suggested_syndromes_list, top)?;
    out.push('\n');
    render_list(&mut out, "Genes", &result.suggested_genes_list, top)?;
    out.push('\n');
    render_list(&mut out, "Patients", &result.suggested_patients_list, top)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phenorank_session::AppStore;
    use phenorank_test_utils::{genes_with_distances, sample_result};

    #[test]
    fn test_tables_show_japanese_hpo_labels() {
        let mut store = AppStore::new();
        let result = store.set_analysis_result(sample_result());
        let text = render_tables(result, Locale::Ja, 10).unwrap();
        assert!(text.contains("HP:0000347  小顎症"));
        assert!(text.contains("Kabuki syndrome 1 (OMIM 147920)"));
        assert!(text.contains("meta"));
    }

    #[test]
    fn test_top_limits_rows() {
        let mut store = AppStore::new();
        let result = store.set_analysis_result(phenorank_common::AnalysisResult {
            suggested_genes_list: genes_with_distances(&[0.1, 0.2, 0.3, 0.4]),
            ..Default::default()
        });
        let text = render_tables(result, Locale::EnUs, 2).unwrap();
        assert!(text.contains("GENE2"));
        assert!(!text.contains("GENE3"));
        assert!(text.contains("... 2 more"));
        assert!(text.contains("Patients (0)"));
    }
}
