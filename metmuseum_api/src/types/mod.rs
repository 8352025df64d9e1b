//! Typed mirrors of the API's JSON responses.
//!
//! Fields the API omits, or sends as `null`, decode to their `Default`.
//! Fields these types do not know about are ignored.

use serde::{Deserialize, Deserializer};

mod objects;
pub use self::objects::{ObjectID, ObjectsResult};

mod object;
pub use self::object::{Constituent, Measurement, ObjectResult, Tag};

mod department;
pub use self::department::{Department, DepartmentID, DepartmentsResult};

/// Deserializes `null` as `T::default()`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
