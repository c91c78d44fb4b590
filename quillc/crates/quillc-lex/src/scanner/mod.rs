//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - Scanner struct, dispatch and token construction
//! - `comment` - Whitespace and line comment skipping
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Number literal scanning
//! - `operator` - One and two character operators
//! - `string` - String literal scanning

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
