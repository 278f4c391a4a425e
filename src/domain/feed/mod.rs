//! Remote feed wire shapes

pub mod parser;

pub use parser::parse_feed;
