pub mod chat;
pub mod home;
pub mod search;

pub use chat::chat_page;
pub use home::home_page;
pub use search::search_page;
