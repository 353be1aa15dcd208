pub mod reader;

pub use reader::TokenReader;
