mod common;
pub use self::common::{Query, DATE_FORMAT, LIST_SEPARATOR};

mod objects;
pub use self::objects::ObjectsOptions;

mod object;
pub use self::object::ObjectOptions;

mod search;
pub use self::search::SearchOptions;
