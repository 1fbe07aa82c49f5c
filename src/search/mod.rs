pub mod filter;
pub mod query;
pub mod vocabulary;

pub use filter::{filter_properties, FilterOptions, SearchEngine};
pub use query::Constraints;
pub use vocabulary::Vocabulary;
