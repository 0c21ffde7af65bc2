use std::io::Write;

use wc_batch::{BatchError, RunOptions, StructureError, load_path, run_batch, summarize};
use wc_report::parse_compliance;

const SURVEY_YAML: &str = r#"
version: 1
checks:
  - id: kitchen-radial
    kind: cable_sizing
    current_a: 20
    cable_size_mm2: 2.5
    installation_type: pvc
    voltage_drop_v: 6.2
    length_m: 18
  - id: outbuilding-feed
    kind: cable_sizing
    current_a: 32
    cable_size_mm2: 6
    installation_type: copper
    voltage_drop_v: 14
    length_m: 120
  - id: workshop-pf
    kind: power_factor
    active_power_w: 6000
    apparent_power_va: 10000
    power_factor: 0.6
  - id: board-pfc
    kind: pfc
    voltage_v: 230
    impedance_ohm: 0.1
    pfc_a: 2300
    breaking_capacity_a: 6000
  - id: ring-zs
    kind: earth_fault_loop
    device_rating_a: 32
    measured_zs_ohm: 0.62
  - id: supply-frequency
    kind: input_range
    value: 50
    input_type: frequency
  - id: heater-current
    kind: ohms_law
    voltage_v: 230
    resistance_ohm: 26.45
    calculation_type: current
  - id: lighting-drop
    kind: voltage_drop
    voltage_drop_v: 9.2
    category: lighting
"#;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn yaml_batch_runs_in_file_order() {
    let file = write_temp(".yaml", SURVEY_YAML);
    let batch = load_path(file.path()).unwrap();
    let outcomes = run_batch(&batch, RunOptions::default());

    let ids: Vec<&str> = outcomes.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "kitchen-radial",
            "outbuilding-feed",
            "workshop-pf",
            "board-pfc",
            "ring-zs",
            "supply-frequency",
            "heater-current",
            "lighting-drop",
        ]
    );

    let valid: Vec<bool> = outcomes.iter().map(|o| o.result.is_valid()).collect();
    assert_eq!(valid, [true, false, false, true, true, true, true, false]);

    assert_eq!(outcomes[1].kind, "cable_sizing");
    assert!(outcomes[1].result.errors()[1].contains("copper"));
    assert!(outcomes.iter().all(|o| o.report.is_none()));

    let summary = summarize(&outcomes);
    assert_eq!(summary.total, 8);
    assert_eq!(summary.valid, 5);
    assert_eq!(summary.invalid, 3);
}

#[test]
fn reports_are_rendered_on_request() {
    let file = write_temp(".yml", SURVEY_YAML);
    let batch = load_path(file.path()).unwrap();
    let outcomes = run_batch(&batch, RunOptions { with_reports: true });

    for outcome in &outcomes {
        let report = outcome.report.as_deref().unwrap();
        assert!(report.contains(&format!("Type: {}", outcome.kind)));
        assert_eq!(
            parse_compliance(report).unwrap(),
            outcome.result.standards_compliance()
        );
    }
    assert!(outcomes[0].report.as_deref().unwrap().contains("installation_type: pvc"));
}

#[test]
fn json_batch_loads() {
    let json = r#"{
        "checks": [
            {"id": "pf", "kind": "power_factor", "active_power_w": 900, "apparent_power_va": 1000, "power_factor": 0.9}
        ]
    }"#;
    let file = write_temp(".json", json);
    let batch = load_path(file.path()).unwrap();
    assert_eq!(batch.version, 1);
    let outcomes = run_batch(&batch, RunOptions::default());
    assert!(outcomes[0].result.is_valid());

    let value = serde_json::to_value(&outcomes[0]).unwrap();
    assert_eq!(value["result"]["isValid"], true);
    assert!(value.get("report").is_none());
}

#[test]
fn duplicate_ids_are_rejected_on_load() {
    let yaml = r#"
checks:
  - id: a
    kind: input_range
    value: 10
    input_type: current
  - id: a
    kind: input_range
    value: 20
    input_type: current
"#;
    let file = write_temp(".yaml", yaml);
    let err = load_path(file.path()).unwrap_err();
    assert!(matches!(
        err,
        BatchError::Structure(StructureError::DuplicateId { .. })
    ));
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_temp(".toml", "checks = []");
    let err = load_path(file.path()).unwrap_err();
    assert!(matches!(err, BatchError::UnknownFormat { .. }));
}

#[test]
fn unknown_kind_is_a_parse_error() {
    let yaml = "checks:\n  - id: x\n    kind: insulation_resistance\n    value: 200\n";
    let file = write_temp(".yaml", yaml);
    let err = load_path(file.path()).unwrap_err();
    assert!(matches!(err, BatchError::Yaml(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = load_path(std::path::Path::new("/nonexistent/survey.yaml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/survey.yaml"));
}
