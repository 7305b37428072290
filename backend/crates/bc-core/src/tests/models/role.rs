use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Employee.as_str(), "employee");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("employee").unwrap(), Role::Employee);
    assert!(Role::from_str("superuser").is_err());
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn test_role_default_is_employee() {
    assert_eq!(Role::default(), Role::Employee);
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    let parsed: Role = serde_json::from_str("\"employee\"").unwrap();
    assert_eq!(parsed, Role::Employee);
    assert!(serde_json::from_str::<Role>("\"root\"").is_err());
}
