//! Department creation and membership mutation.

use crate::{DirectoryError, Result as DirectoryResult};

use bc_core::{Department, DepartmentMember, DepartmentRoster};
use bc_db::{DepartmentRepository, UserRepository};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Sole mutator of department membership.
///
/// Members are raw usernames. Adding checks that the account exists at that
/// moment; nothing ties the two stores together afterwards, so listings
/// resolve members at read time and drop the ones that no longer resolve.
#[derive(Clone)]
pub struct DepartmentDirectory {
    departments: Arc<DepartmentRepository>,
    users: Arc<UserRepository>,
}

impl DepartmentDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            departments: Arc::new(DepartmentRepository::new(pool.clone())),
            users: Arc::new(UserRepository::new(pool)),
        }
    }

    /// Create a department. Initial usernames are taken as given, without
    /// checking that accounts exist for them.
    pub async fn create(&self, name: &str, employees: Vec<String>) -> DirectoryResult<Department> {
        if self.departments.find_by_name(name).await?.is_some() {
            return Err(DirectoryError::DuplicateDepartment {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let department = Department::new(name.to_string(), employees);

        match self.departments.create(&department).await {
            Ok(()) => {}
            Err(e) if e.is_unique_violation() => {
                return Err(DirectoryError::DuplicateDepartment {
                    name: department.name,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        log::info!(
            "Created department '{}' with {} member(s)",
            department.name,
            department.employees.len()
        );
        Ok(department)
    }

    /// Add `username` to the named department
    pub async fn add_employee(
        &self,
        department_name: &str,
        username: &str,
    ) -> DirectoryResult<Department> {
        // 1. Resolve department
        let department = self.require_department(department_name).await?;

        // 2. The user must exist now
        if self.users.find_by_username(username).await?.is_none() {
            return Err(DirectoryError::UserNotFound {
                username: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // 3. Conditional insert, zero rows means already present
        let added = self.departments.add_member(department.id, username).await?;
        if !added {
            return Err(DirectoryError::AlreadyMember {
                department: department.name,
                username: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::info!("Added '{}' to department '{}'", username, department.name);
        self.reload(department).await
    }

    /// Remove `username` from the named department
    pub async fn remove_employee(
        &self,
        department_name: &str,
        username: &str,
    ) -> DirectoryResult<Department> {
        let department = self.require_department(department_name).await?;

        let removed = self
            .departments
            .remove_member(department.id, username)
            .await?;
        if !removed {
            return Err(DirectoryError::NotAMember {
                department: department.name,
                username: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::info!(
            "Removed '{}' from department '{}'",
            username,
            department.name
        );
        self.reload(department).await
    }

    /// Every department with its members resolved to `{username, email}`
    pub async fn list(&self) -> DirectoryResult<Vec<DepartmentRoster>> {
        let departments = self.departments.find_all().await?;

        let mut usernames: Vec<String> = departments
            .iter()
            .flat_map(|d| d.employees.iter().cloned())
            .collect();
        usernames.sort();
        usernames.dedup();

        let emails: HashMap<String, String> = self
            .users
            .find_by_usernames(&usernames)
            .await?
            .into_iter()
            .map(|u| (u.username, u.email))
            .collect();

        let rosters = departments
            .into_iter()
            .map(|department| {
                let employees = department
                    .employees
                    .into_iter()
                    .filter_map(|username| {
                        let email = emails.get(&username)?.clone();
                        Some(DepartmentMember { username, email })
                    })
                    .collect();

                DepartmentRoster {
                    id: department.id,
                    name: department.name,
                    employees,
                }
            })
            .collect();

        Ok(rosters)
    }

    async fn require_department(&self, name: &str) -> DirectoryResult<Department> {
        self.departments
            .find_by_name(name)
            .await?
            .ok_or_else(|| DirectoryError::DepartmentNotFound {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn reload(&self, department: Department) -> DirectoryResult<Department> {
        let employees = self.departments.members(department.id).await?;
        Ok(Department {
            employees,
            ..department
        })
    }
}
