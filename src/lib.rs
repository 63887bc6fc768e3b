//! keypath - resolve values in nested documents by slash-delimited key paths

pub mod demo;
pub mod error;
pub mod node;
pub mod path;
pub mod resolve;

pub use error::{FixSuggestion, PathError};
pub use node::Node;
pub use path::KeyPath;
pub use resolve::{resolve, resolve_path, resolve_safe};
