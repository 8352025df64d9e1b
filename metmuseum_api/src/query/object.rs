use crate::types::ObjectID;

/// Arguments for the `objects/<id>` endpoint. See <https://metmuseum.github.io/#object>.
///
/// The ID is sent verbatim; an unknown or negative ID comes back from the API
/// as a 404 and surfaces as [`crate::Error::HttpStatus`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectOptions {
    /// The unique object ID, as listed by the objects and search endpoints.
    pub object_id: ObjectID,
}

impl ObjectOptions {
    pub fn new(object_id: ObjectID) -> Self {
        Self { object_id }
    }

    pub(crate) fn path(&self) -> String {
        format!("objects/{}", self.object_id)
    }
}

impl From<ObjectID> for ObjectOptions {
    fn from(object_id: ObjectID) -> Self {
        Self::new(object_id)
    }
}
