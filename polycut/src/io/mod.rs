/// External (serializable) representations of instances and solutions
pub mod ext_repr;

/// Conversion of external representations into internal ones
pub mod import;

/// Conversion of internal representations into external ones
pub mod export;

/// Drawing solutions as SVG documents
pub mod svg;
