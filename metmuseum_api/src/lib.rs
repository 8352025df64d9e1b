//! A thin, typed client for the Metropolitan Museum of Art Collection API.
//!
//! See the upstream documentation at <https://metmuseum.github.io>.
//!
//! ```no_run
//! use metmuseum_api::{Client, SearchOptions};
//!
//! # async fn run() -> Result<(), metmuseum_api::Error> {
//! let client = Client::new()?;
//! let results = client
//!     .search(&SearchOptions::new("sunflowers").with_is_highlight(true))
//!     .await?;
//! println!("There are {} results.", results.total);
//! # Ok(())
//! # }
//! ```
//!
//! Callers that need control over timeouts, proxies or TLS build their own
//! `reqwest::Client` and hand it to [`Client::with_http_client`].

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_ROOT, USER_AGENT};
pub use self::errors::Error;
pub use self::query::{
    ObjectOptions, ObjectsOptions, Query, SearchOptions, DATE_FORMAT, LIST_SEPARATOR,
};
