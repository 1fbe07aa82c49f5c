mod chat_tests;
mod home_tests;
mod search_tests;
