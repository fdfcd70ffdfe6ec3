//! Integration tests for lazy configuration fetching and introspection

mod common;

use biomart::{QueryError, TransportError};
use common::mouse_dataset;

#[test]
fn test_dataset_identity() {
    let dataset = mouse_dataset();
    assert_eq!(dataset.name(), "mmusculus_gene_ensembl");
    assert_eq!(dataset.display_name(), "Mus musculus genes (GRCm38.p4)");

    // Identity never touches the network.
    assert_eq!(dataset.transport().call_count(), 0);
}

#[test]
fn test_configuration_fetched_once() {
    let dataset = mouse_dataset();

    assert!(dataset.filters().unwrap().len() > 0);
    assert!(dataset.attributes().unwrap().len() > 0);
    assert!(dataset.attributes().unwrap().len() > 0);

    // One fetch regardless of how many times the registries are read.
    let calls = dataset.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![
            ("type".to_string(), "configuration".to_string()),
            ("dataset".to_string(), "mmusculus_gene_ensembl".to_string()),
        ]
    );
}

#[test]
fn test_attribute_metadata() {
    let dataset = mouse_dataset();

    let attr = dataset.attributes().unwrap().get("ensembl_gene_id").unwrap();
    assert_eq!(attr.name, "ensembl_gene_id");
    assert_eq!(attr.display_name, "Ensembl Gene ID");
    assert_eq!(attr.description, "Ensembl Stable ID of the Gene");
    assert!(attr.default);
}

#[test]
fn test_filter_metadata() {
    let dataset = mouse_dataset();

    let filt = dataset.filters().unwrap().get("chromosome_name").unwrap();
    assert_eq!(filt.name, "chromosome_name");
    assert_eq!(filt.kind, "list");
    assert_eq!(filt.description, "");

    assert!(dataset.filters().unwrap().get("with_interpro").unwrap().is_boolean());
}

#[test]
fn test_attribute_order_matches_document() {
    let dataset = mouse_dataset();

    let names: Vec<String> = dataset
        .attributes()
        .unwrap()
        .iter()
        .map(|a| a.name.clone())
        .collect();
    assert_eq!(
        names,
        vec![
            "ensembl_gene_id",
            "ensembl_transcript_id",
            "external_gene_name",
            "chromosome_name",
            "start_position",
        ]
    );
}

#[test]
fn test_default_attributes() {
    let dataset = mouse_dataset();

    let defaults: Vec<String> = dataset
        .attributes()
        .unwrap()
        .defaults()
        .map(|a| a.name.clone())
        .collect();
    assert_eq!(defaults, vec!["ensembl_gene_id", "ensembl_transcript_id"]);
}

#[test]
fn test_unknown_filter_name() {
    let dataset = mouse_dataset();

    let err = dataset
        .filters()
        .unwrap()
        .get("nonexistent_filter")
        .unwrap_err();
    assert_eq!(err.name, "nonexistent_filter");
    assert!(err.to_string().contains("nonexistent_filter"));
}

#[test]
fn test_transport_failure_propagates_and_cache_stays_empty() {
    let dataset = mouse_dataset();

    // Drop the queued configuration so the first fetch fails.
    dataset.transport().clear_responses();
    let err = dataset.attributes().unwrap_err();
    assert!(matches!(
        err,
        QueryError::Transport(TransportError::Other(_))
    ));

    // A failed fetch must not poison the cache: queue the fixture again and
    // the next access succeeds.
    dataset
        .transport()
        .push_response(common::load_fixture("mmusculus_config.xml"));
    assert!(dataset.attributes().is_ok());
}

#[test]
fn test_malformed_configuration() {
    let dataset = mouse_dataset();

    // Replace the queued fixture with a document lacking filter pages.
    dataset.transport().clear_responses();
    dataset.transport().push_response(
        "<DatasetConfig><AttributePage><AttributeDescription internalName=\"a\" /></AttributePage></DatasetConfig>"
            .as_bytes()
            .to_vec(),
    );

    let err = dataset.attributes().unwrap_err();
    assert!(matches!(err, QueryError::Config(_)));
}
