pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{chat_bubble, market_trends_widget, property_card};
pub use layouts::site::site_layout;
