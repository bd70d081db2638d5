//! Core engine for composing 2D vector shapes edge-to-edge in a row:
//! outlines sampled from path data are rotated, scaled and positioned so that
//! consecutive shapes touch at a shared baseline without gap or overlap.

/// Base shapes and the process-wide shape registry
pub mod entities;

/// Geometric primitives and the pure geometry kernel
pub mod geometry;

/// Importing shape assets into the registry
pub mod io;

/// The contact/placement engine
pub mod placement;

/// Sampling path curves into outline point sequences
pub mod sampling;

/// Helper functions which do not belong to any specific module
pub mod util;
