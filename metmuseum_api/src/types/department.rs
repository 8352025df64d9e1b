use serde::{Deserialize, Serialize};

use super::nullable;

/// Numeric identifier for a curatorial department.
pub type DepartmentID = i64;

/// Listing of all departments, returned by the `departments` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DepartmentsResult {
    /// Departments in the order the API returns them (ascending ID in practice).
    #[serde(deserialize_with = "nullable")]
    pub departments: Vec<Department>,
}

impl DepartmentsResult {
    /// Looks up a department by its ID.
    pub fn find(&self, department_id: DepartmentID) -> Option<&Department> {
        self.departments
            .iter()
            .find(|department| department.department_id == department_id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Department {
    /// ID usable as a filter in the objects and search endpoints.
    #[serde(deserialize_with = "nullable")]
    pub department_id: DepartmentID,

    #[serde(deserialize_with = "nullable")]
    pub display_name: String,
}
