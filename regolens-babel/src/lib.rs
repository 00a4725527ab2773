//! Output formats for analyzed policy files
//!
//!     This crate provides a uniform interface for turning a parsed policy
//!     (package + rule blocks) into the representations its consumers want:
//!     a canonical export object serialized as JSON or YAML, a flat node list
//!     for hierarchical renderers, and a plain-text tree for terminals.
//!
//! Architecture
//!
//!     - Format trait: uniform serialization interface for all formats
//!     - FormatRegistry: centralized discovery and selection of formats
//!     - Format implementations: one module per concrete format
//!
//!     This is a pure lib: it powers the regolens CLI but is shell agnostic —
//!     no printing, no env vars, no filesystem. Callers hand in a
//!     `ParsedPolicy` and get a `String` or an error back.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── export.rs               # Canonical export object (package/policies)
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── tree.rs                 # Flat TreeNode list for visualization
//!     └── formats
//!         ├── json/mod.rs
//!         ├── yaml/mod.rs
//!         ├── nodes/mod.rs
//!         └── treeviz/mod.rs
//!
//! Round-tripping
//!
//!     JSON and YAML serialize the same export object; decoding either output
//!     yields the same object graph. The tree formats are presentational and
//!     one-way.

pub mod error;
pub mod export;
pub mod format;
pub mod formats;
pub mod registry;
pub mod tree;

pub use error::FormatError;
pub use export::{export, export_policy, serialize, ExportDocument, ExportPolicy};
pub use format::Format;
pub use registry::FormatRegistry;
pub use tree::{build_tree, TreeNode};
