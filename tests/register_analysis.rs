use std::path::PathBuf;

use riskmap::app::markdown::MarkdownReport;
use riskmap::app::{CommandExecutor, QueryExecutor, RegisterExporter};
use riskmap::domain::riskregister::risk_id::RiskId;
use riskmap::domain::riskregister::risk_register::RiskRegister;
use riskmap::domain::riskregister::risk_status::RiskStatus;
use riskmap::domain::riskregister::severity::Severity;
use riskmap::infra::{
    CsvRegisterExporter, JsonFileRiskSource, JsonRegisterExporter, KeywordControlMapper,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

async fn fixture_register() -> RiskRegister {
    QueryExecutor::new(JsonFileRiskSource::new(fixture("risks.json")))
        .fetch_register()
        .await
        .expect("fixture register should load")
}

#[tokio::test]
async fn loads_the_register_with_defaults_resolved() {
    let register = fixture_register().await;

    assert_eq!(register.len(), 6);

    let folded = register.find_risk_by_id(&RiskId::from(5u64)).unwrap();
    assert_eq!(folded.status(), RiskStatus::Open);
    assert_eq!(folded.owner_or_unassigned(), "Unassigned");
    assert_eq!(folded.due_date(), None);

    let scanner_finding = register.find_risk_by_id(&RiskId::from("scan-hsts-01")).unwrap();
    assert_eq!(scanner_finding.score(), 12);
    assert_eq!(scanner_finding.severity(), Severity::Medium);
}

#[tokio::test]
async fn computes_register_stats() {
    let stats = QueryExecutor::new(JsonFileRiskSource::new(fixture("risks.json")))
        .register_stats()
        .await
        .unwrap();

    assert_eq!(stats.total, 6);
    assert_eq!(stats.critical, 1);
    assert_eq!(stats.high, 2);
    assert_eq!(stats.medium, 2);
    assert_eq!(stats.low, 1);

    assert_eq!(stats.by_status["In Progress"], 1);
    assert_eq!(stats.by_status["Open"], 3);
    assert_eq!(stats.by_status["Mitigated"], 1);
    assert_eq!(stats.by_status["Accepted"], 1);

    assert_eq!(stats.by_owner["alice"], 1);
    assert_eq!(stats.by_owner["Unassigned"], 4);

    assert_eq!(stats.by_framework["soc2"], 6);
    assert_eq!(stats.by_category["Security (CC)"], 5);
    assert_eq!(stats.by_category["Availability (A)"], 1);

    let top_names: Vec<&str> = stats.top_risks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(top_names, vec!["Weak or Missing SSL/TLS"]);
}

#[tokio::test]
async fn computes_the_heat_map_with_out_of_range_bucket() {
    let heat_map = QueryExecutor::new(JsonFileRiskSource::new(fixture("risks.json")))
        .register_heat_map()
        .await
        .unwrap();

    assert_eq!(heat_map.cells_in_display_order().count(), 25);
    assert_eq!(heat_map.plotted_count(), 5);
    assert_eq!(heat_map.cell(5, 5).unwrap().count(), 1);
    assert_eq!(heat_map.cell(4, 4).unwrap().count(), 1);
    assert_eq!(heat_map.cell(3, 4).unwrap().count(), 1);
    assert_eq!(heat_map.cell(2, 5).unwrap().count(), 1);
    assert_eq!(heat_map.cell(2, 2).unwrap().count(), 1);

    let excluded: Vec<&str> = heat_map.out_of_range().iter().map(|r| r.name()).collect();
    assert_eq!(excluded, vec!["Legacy finding with bad coordinates"]);
}

#[tokio::test]
async fn computes_coverage_from_mitigated_risks() {
    let register = fixture_register().await;

    // 1 Mitigated out of 6.
    assert_eq!(register.coverage_score(), 1.7);
}

#[tokio::test]
async fn maps_controls_from_the_catalog_directory() {
    let register = fixture_register().await;
    let executor = CommandExecutor::new(KeywordControlMapper::new(fixture("controls")));

    let mapped = executor.map_register_controls(&register).await.unwrap();

    let tls = mapped.find_risk_by_id(&RiskId::from(1u64)).unwrap();
    assert_eq!(tls.controls(), ["CC6.7".to_string()]);

    let spf = mapped.find_risk_by_id(&RiskId::from(2u64)).unwrap();
    assert_eq!(spf.controls(), ["CC6.6".to_string()]);

    let hsts = mapped.find_risk_by_id(&RiskId::from("scan-hsts-01")).unwrap();
    assert_eq!(hsts.controls(), ["CC6.7".to_string(), "CC7.1".to_string()]);

    let unmatched = mapped.find_risk_by_id(&RiskId::from(4u64)).unwrap();
    assert!(unmatched.controls().is_empty());

    // The source register keeps its original (empty) controls.
    let original = register.find_risk_by_id(&RiskId::from(1u64)).unwrap();
    assert!(original.controls().is_empty());
}

#[tokio::test]
async fn exports_the_register_in_every_format() {
    let register = fixture_register().await;

    let csv = CsvRegisterExporter.export(&register).unwrap();
    assert_eq!(csv.lines().count(), 7);
    assert!(csv.lines().next().unwrap().starts_with("id,name"));

    let json = JsonRegisterExporter.export(&register).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed.as_array().map(Vec::len), Some(6));

    let markdown = MarkdownReport::from(&register).to_string();
    assert!(markdown.contains("### Heat Map"));
    assert!(markdown.contains("Weak or Missing SSL/TLS"));
}

#[tokio::test]
async fn exported_json_reloads_to_an_equivalent_register() {
    let register = fixture_register().await;
    let json = JsonRegisterExporter.export(&register).unwrap();

    let path = std::env::temp_dir().join(format!("riskmap-reload-{}.json", std::process::id()));
    tokio::fs::write(&path, &json).await.unwrap();

    let reloaded = QueryExecutor::new(JsonFileRiskSource::new(&path))
        .fetch_register()
        .await
        .unwrap();
    tokio::fs::remove_file(&path).await.unwrap();

    assert_eq!(reloaded.len(), register.len());
    assert_eq!(reloaded.stats(), register.stats());
    assert_eq!(reloaded.coverage_score(), register.coverage_score());
}

#[tokio::test]
async fn missing_register_document_surfaces_a_fetch_error() {
    let result = QueryExecutor::new(JsonFileRiskSource::new(fixture("does-not-exist.json")))
        .fetch_register()
        .await;

    assert!(result.is_err());
}
