//! Format implementations
//!
//! One module per concrete format. `json`/`yaml` serialize the canonical
//! export object; `nodes`/`treeviz` serialize the visualization tree.

pub mod json;
pub mod nodes;
pub mod treeviz;
pub mod yaml;
