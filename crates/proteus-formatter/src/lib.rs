//! Built-in field formatters.
//!
//! Formatters rewrite bound field values in place after parsing. The
//! crate currently ships one, [`StringFormatter`], registered by the
//! engine's builder by default.

mod string;

pub use string::{StringFormatter, UnknownOperation};
