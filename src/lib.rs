pub mod driver;
pub mod errors;
mod information;
pub mod input;
pub mod output;
pub mod ranking;
pub mod table;
pub mod tfidf;
