#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod layout;
pub mod scope;

pub use cursor::Cursor;
pub use error::WireError;
pub use scope::ScopeStack;
