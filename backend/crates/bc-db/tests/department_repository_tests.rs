mod common;

use common::{create_test_department, create_test_pool};

use bc_db::DepartmentRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_created_department_when_found_by_name_then_members_in_order() {
    // Given
    let pool = create_test_pool().await;
    let repo = DepartmentRepository::new(pool);
    let department = create_test_department("Finance", &["alice", "bob"]);

    // When
    repo.create(&department).await.unwrap();
    let found = repo.find_by_name("Finance").await.unwrap().unwrap();

    // Then
    assert_that!(found.id, eq(department.id));
    assert_that!(found.employees, elements_are![eq("alice"), eq("bob")]);
}

#[tokio::test]
async fn given_taken_name_when_created_again_then_unique_violation() {
    let pool = create_test_pool().await;
    let repo = DepartmentRepository::new(pool);
    repo.create(&create_test_department("Ops", &[])).await.unwrap();

    let result = repo.create(&create_test_department("Ops", &["carol"])).await;

    assert!(result.unwrap_err().is_unique_violation());
    // The failed transaction left no stray member rows behind
    let ops = repo.find_by_name("Ops").await.unwrap().unwrap();
    assert_that!(ops.employees, is_empty());
}

#[tokio::test]
async fn given_member_when_added_twice_then_second_add_reports_false() {
    let pool = create_test_pool().await;
    let repo = DepartmentRepository::new(pool);
    let department = create_test_department("Finance", &[]);
    repo.create(&department).await.unwrap();

    let first = repo.add_member(department.id, "alice").await.unwrap();
    let second = repo.add_member(department.id, "alice").await.unwrap();

    assert!(first);
    assert!(!second);
    assert_that!(
        repo.members(department.id).await.unwrap(),
        elements_are![eq("alice")]
    );
}

#[tokio::test]
async fn given_member_when_removed_then_set_restored() {
    let pool = create_test_pool().await;
    let repo = DepartmentRepository::new(pool);
    let department = create_test_department("Finance", &["bob"]);
    repo.create(&department).await.unwrap();
    let before = repo.members(department.id).await.unwrap();

    repo.add_member(department.id, "alice").await.unwrap();
    let removed = repo.remove_member(department.id, "alice").await.unwrap();

    assert!(removed);
    assert_that!(repo.members(department.id).await.unwrap(), eq(&before));
}

#[tokio::test]
async fn given_non_member_when_removed_then_false() {
    let pool = create_test_pool().await;
    let repo = DepartmentRepository::new(pool);
    let department = create_test_department("Finance", &["bob"]);
    repo.create(&department).await.unwrap();

    let removed = repo.remove_member(department.id, "alice").await.unwrap();

    assert!(!removed);
    assert_that!(
        repo.members(department.id).await.unwrap(),
        elements_are![eq("bob")]
    );
}

#[tokio::test]
async fn given_several_departments_when_listing_then_members_grouped() {
    let pool = create_test_pool().await;
    let repo = DepartmentRepository::new(pool);
    repo.create(&create_test_department("Ops", &["carol"]))
        .await
        .unwrap();
    repo.create(&create_test_department("Finance", &["alice", "bob"]))
        .await
        .unwrap();
    repo.create(&create_test_department("Legal", &[]))
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();

    assert_that!(all.len(), eq(3));
    assert_that!(all[0].name, eq("Finance"));
    assert_that!(all[0].employees, elements_are![eq("alice"), eq("bob")]);
    assert_that!(all[1].name, eq("Legal"));
    assert_that!(all[1].employees, is_empty());
    assert_that!(all[2].employees, elements_are![eq("carol")]);
}

#[tokio::test]
async fn given_unknown_department_when_found_by_name_then_none() {
    let pool = create_test_pool().await;
    let repo = DepartmentRepository::new(pool);

    assert_that!(repo.find_by_name("Nowhere").await.unwrap(), none());
}
