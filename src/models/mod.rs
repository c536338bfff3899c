//! Data transfer objects.
//!
//! - `blame`: BlameRecord parsed from git output, Annotation for `--json`
//! - `status`: EditorEvent and StatusUpdate for the stdio host

pub mod blame;
pub mod status;

pub use blame::*;
pub use status::*;
