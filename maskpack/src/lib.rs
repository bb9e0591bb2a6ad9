//! Raster packing primitives: binary occupancy masks, shape descriptors,
//! packing entities and the feasibility checks run before any search.

/// Everything related to the occupancy of a container
pub mod entities;

/// Cheap necessary conditions for an instance to be packable
pub mod feasibility;

/// Binary masks and the operations on them
pub mod geometry;

/// Importing and exporting instances, solutions and renderings
pub mod io;

/// Helper functions and configuration
pub mod util;
