use crate::Department;

#[test]
fn test_department_new_collapses_duplicate_members() {
    let department = Department::new(
        "Finance".to_string(),
        vec![
            "alice".to_string(),
            "bob".to_string(),
            "alice".to_string(),
        ],
    );

    assert_eq!(department.employees, vec!["alice", "bob"]);
}

#[test]
fn test_department_new_accepts_empty_member_list() {
    let department = Department::new("Legal".to_string(), Vec::new());
    assert!(department.employees.is_empty());
}
