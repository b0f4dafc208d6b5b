//! Deterministic cutting-stock engine.
//!
//! Packs rectangular parts onto panels with a MAXRECTS packer (90° rotation, saw-kerf spacing,
//! five placement heuristics) and linear parts onto bars with first-fit decreasing.

/// Single entry point: external job in, plan out
pub mod engine;

/// Entities to model cutting-stock jobs and their plans
pub mod entities;

/// Reasons a job is rejected
pub mod error;

/// Geometric primitives on the integer millimetre grid
pub mod geometry;

/// Importing jobs into and exporting plans out of this library
pub mod io;

/// The packing algorithms: free rectangles, heuristics, single- and multi-bin packers, bar packer
pub mod packing;

/// Fill ratios, waste and material usage of plans
pub mod stats;

/// Helper functions which do not belong to any specific module
pub mod util;
