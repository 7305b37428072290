use crate::{CatalogDocument, CriticalSystem, CriticalSystemReference};

#[test]
fn test_critical_system_skips_absent_parameters() {
    let system = CriticalSystem {
        system: "Payroll".to_string(),
        rto: Some(3.0),
        ..Default::default()
    };

    let json = serde_json::to_value(&system).unwrap();
    assert_eq!(json["system"], "Payroll");
    assert_eq!(json["rto"], 3.0);
    assert!(json.get("maxDowntime").is_none());
    assert!(json.get("calculatedRTO").is_none());
}

#[test]
fn test_critical_system_reads_original_field_names() {
    let system: CriticalSystem = serde_json::from_str(
        r#"{"system":"CRM","maxDowntime":4,"recoveryBuffer":1,"priority":2,"calculatedRTO":5}"#,
    )
    .unwrap();

    assert_eq!(system.max_downtime, Some(4.0));
    assert_eq!(system.recovery_buffer, Some(1.0));
    assert_eq!(system.calculated_rto, Some(5.0));
    assert_eq!(system.key(), "CRM");
}

#[test]
fn test_reference_table_has_three_systems() {
    let rows = CriticalSystemReference::defaults();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].system, "Order Management");
}
