#![warn(clippy::pedantic)]

pub mod error;
pub mod field_reader;
pub mod decoder;
pub mod options;

pub use decoder::BcbpDecoder;
pub use error::DecodeError;
pub use options::DecodeOptions;
