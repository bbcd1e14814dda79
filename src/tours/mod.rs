//! The tour catalogue: records, the in-memory store, the listing query
//! pipeline, and the HTTP endpoints over them.

pub mod pipeline;
pub mod query;
pub mod record;
pub mod routes;
pub mod store;

pub use pipeline::Page;
pub use query::{PriceRange, SortDirection, SortSpec, TourQuery};
pub use record::Tour;
pub use store::TourStore;
