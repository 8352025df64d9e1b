use chrono::NaiveDate;

use crate::types::DepartmentID;

use super::common::{push_list, Query, DATE_FORMAT};

/// Arguments for the `objects` endpoint. See <https://metmuseum.github.io/#objects>.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectsOptions {
    /// Restricts results to objects whose metadata was updated after this day.
    pub metadata_date: Option<NaiveDate>,
    /// Restricts results to objects in these departments. Empty means all.
    pub department_ids: Vec<DepartmentID>,
}

impl Query for ObjectsOptions {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(date) = self.metadata_date {
            pairs.push(("metadataDate", date.format(DATE_FORMAT).to_string()));
        }
        push_list(&mut pairs, "departmentIds", &self.department_ids);
        pairs
    }
}

impl ObjectsOptions {
    pub fn with_metadata_date(mut self, metadata_date: NaiveDate) -> Self {
        self.metadata_date = Some(metadata_date);
        self
    }

    pub fn with_department_id(mut self, department_id: DepartmentID) -> Self {
        self.department_ids.push(department_id);
        self
    }
    pub fn with_department_ids(mut self, department_ids: &[DepartmentID]) -> Self {
        self.department_ids.extend_from_slice(department_ids);
        self
    }
}
