use crate::{Role, User};

#[test]
fn test_new_employee_forces_employee_role() {
    let user = User::new_employee(
        "a@x.com".to_string(),
        "alice".to_string(),
        "$argon2id$stub".to_string(),
        Some("Finance".to_string()),
    );

    assert_eq!(user.role, Role::Employee);
    assert!(!user.is_admin());
    assert_eq!(user.department.as_deref(), Some("Finance"));
}

#[test]
fn test_new_admin_has_admin_role() {
    let user = User::new_admin(
        "admin@example.com".to_string(),
        "admin".to_string(),
        "$argon2id$stub".to_string(),
    );

    assert!(user.is_admin());
    assert!(user.department.is_none());
}

#[test]
fn test_serialized_user_omits_password_hash() {
    let user = User::new_employee(
        "a@x.com".to_string(),
        "alice".to_string(),
        "$argon2id$secret".to_string(),
        None,
    );

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["username"], "alice");
}

#[test]
fn test_summary_projection() {
    let user = User::new_employee(
        "a@x.com".to_string(),
        "alice".to_string(),
        "hash".to_string(),
        None,
    );

    let summary = user.summary();
    assert_eq!(summary.username, "alice");
    assert_eq!(summary.email, "a@x.com");
    assert_eq!(summary.role, Role::Employee);
}
