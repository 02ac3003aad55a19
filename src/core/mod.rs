pub mod dictionary;
pub mod types;
pub mod view;
pub mod word_set;
