pub mod analyzer;
pub mod catalog;
pub(crate) mod catalog_db;
pub mod composition;
pub mod db;
pub mod element;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod scoring;

pub use alloydb_data;
pub use analyzer::{AlloyClass, Analysis, Dominant, ElementNote, Recommendation, analyze};
pub use catalog::{AlloyFamily, Catalog, ReferenceAlloy};
pub use composition::Composition;
pub use db::{AlloyDb, Identification};
pub use element::Element;
pub use error::{AlloyDbError, Result};
pub use matcher::{Match, MatchOptions, find_matches};
pub use parser::{Parser, parse};
pub use scoring::score;
