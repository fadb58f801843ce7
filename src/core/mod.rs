pub mod address;
pub mod config;
pub mod schema;
pub mod word_dictionary;
