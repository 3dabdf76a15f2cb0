#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// The piecewise financial model and the pieces it is assembled from.
///
/// The types in this module are plain values: a model is built once from a
/// threshold and a demand quantity and is never mutated afterwards, so every
/// query is a pure function of its inputs.
pub mod models;
