pub mod chat;
pub mod market_trends;
pub mod property_card;

pub use chat::chat_bubble;
pub use market_trends::market_trends_widget;
pub use property_card::property_card;
