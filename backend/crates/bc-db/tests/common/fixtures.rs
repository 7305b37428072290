use bc_core::{Department, User};

/// Creates a test employee. The hash is a placeholder, repositories never
/// look inside it.
pub fn create_test_user(username: &str) -> User {
    User::new_employee(
        format!("{}@example.com", username),
        username.to_string(),
        "$argon2id$v=19$m=64,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        None,
    )
}

/// Creates a test administrator
pub fn create_test_admin(username: &str) -> User {
    User::new_admin(
        format!("{}@example.com", username),
        username.to_string(),
        "$argon2id$v=19$m=64,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    )
}

/// Creates a test department with the given members
pub fn create_test_department(name: &str, members: &[&str]) -> Department {
    Department::new(
        name.to_string(),
        members.iter().map(|m| m.to_string()).collect(),
    )
}
