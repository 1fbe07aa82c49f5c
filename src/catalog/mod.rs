pub mod models;
pub mod store;

pub use models::Property;
pub use store::Catalog;
