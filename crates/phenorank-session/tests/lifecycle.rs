use phenorank_common::{AnalysisResult, Locale};
use phenorank_config::Config;
use phenorank_session::AppStore;
use phenorank_test_utils::pretty_assertions::assert_eq;
use phenorank_test_utils::{genes_with_distances, sample_result};

#[test]
fn test_new_result_replaces_previous() {
    let mut store = AppStore::new();
    store.set_analysis_result(sample_result());

    let replacement = AnalysisResult {
        model_version: "v2.0.0".to_string(),
        suggested_genes_list: genes_with_distances(&[0.9]),
        ..Default::default()
    };
    store.set_analysis_result(replacement);

    let current = store.analysis_result().unwrap();
    assert_eq!(current.model_version, "v2.0.0");
    assert_eq!(current.suggested_genes_list.len(), 1);
    assert!(current.suggested_syndromes_list.is_empty());
}

#[test]
fn test_clear_keeps_settings_and_locale() {
    let config = Config::from_toml_str(
        "[server]\nhost = \"https://gm.example.org\"\nport = \"8443\"\n[ui]\nlocale = \"ko\"",
    )
    .unwrap();
    let mut store = AppStore::from_config(&config);
    store.set_uploaded_image("data:image/jpeg;base64,/9j/4AAQ");
    store.set_analysis_result(sample_result());
    store.clear_analysis_result();

    assert_eq!(store.locale(), Locale::Ko);
    assert_eq!(store.predict_api_uri(), "https://gm.example.org:8443/api/predict");
    assert!(store.analysis_result().is_none());
}

#[test]
fn test_locale_switch() {
    let mut store = AppStore::new();
    store.set_locale(Locale::ZhTw);
    assert_eq!(store.locale(), Locale::ZhTw);
}
