//! Heuristics layered on top of the core encode/decode transforms.

pub mod detection;
