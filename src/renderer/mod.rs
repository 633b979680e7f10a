//! SVG markup construction
//!
//! Documents are assembled as a small tree of [`Node`]s and serialized once,
//! so escaping and whitespace are handled in a single place.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{Element, Node};
