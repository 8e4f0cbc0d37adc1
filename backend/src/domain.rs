//! Transport-agnostic core: error taxonomy, query translation, pagination,
//! partial-update policy, geodistance enrichment, and the favorites guard.

pub mod error;
pub mod favorites;
pub mod geo;
pub mod page;
pub mod patch;
pub mod ports;
pub mod query;
pub mod resources;

pub use error::{DomainError, ErrorCode};
pub use favorites::{FavoritesService, InvalidResourceType, ResourceType};
pub use page::{MAX_PAGE_SIZE, Page, PageRequest};
pub use patch::{Patch, now_rfc3339};
pub use ports::{DocumentStore, StoreError};
pub use query::{QueryFilter, SortOrder};
