//! DSV tokenization and record shaping

mod parser;

pub use parser::DsvParser;
