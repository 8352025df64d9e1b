use serde::{Deserialize, Serialize};

use super::nullable;

/// Numeric identifier for an object in the collection.
pub type ObjectID = i64;

/// Listing of object IDs, returned by both the `objects` and `search` endpoints.
///
/// `total` is reported by the API and is expected to equal `object_ids.len()`;
/// it is not checked here.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ObjectsResult {
    /// Number of matching objects.
    #[serde(deserialize_with = "nullable")]
    pub total: i64,

    /// ID of each matching object. The API sends `null` when nothing matches.
    #[serde(rename = "objectIDs", deserialize_with = "nullable")]
    pub object_ids: Vec<ObjectID>,
}

impl ObjectsResult {
    /// Whether the reported total agrees with the number of IDs returned.
    pub fn is_consistent(&self) -> bool {
        usize::try_from(self.total).is_ok_and(|total| total == self.object_ids.len())
    }
}
