//! Typed request shapes per resource.
//!
//! Each module pins its remote collection name and default page size, and
//! owns three shapes: a create payload (system fields forced server-side),
//! an explicit-presence update payload, and a list query that translates
//! into the remote filter document. Unknown payload fields are ignored
//! rather than persisted.

pub mod comment;
pub mod favorite;
pub mod photo;
pub mod poi;
pub mod product;
pub mod region;
pub mod theme;
