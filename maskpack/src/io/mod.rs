/// External (serializable) representations of masks, instances and solutions
pub mod ext_repr;

/// Conversion of internal representations into external ones
pub mod export;

/// Conversion of external representations into internal ones
pub mod import;

/// Rendering of layouts as SVG
pub mod svg;
