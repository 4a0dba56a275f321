//! Built-in request source parsers.
//!
//! Each parser here answers to one tag keyword and pulls values from one
//! part of the request:
//!
//! | Parser | Keyword | Source |
//! |---|---|---|
//! | [`QueryParser`] | `query` | URL query string |
//! | [`HeaderParser`] | `header` | Request headers |
//! | [`CookieParser`] | `cookie` | The `Cookie` header |
//! | [`PathParser`] | `path` | Route path parameters |
//!
//! All four are registered by the engine's builder by default.

mod cookie;
mod header;
mod path;
mod query;

pub use cookie::CookieParser;
pub use header::HeaderParser;
pub use path::PathParser;
pub use query::QueryParser;
