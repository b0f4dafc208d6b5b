/// External (serializable) representations of jobs and plans.
pub mod ext_repr;

/// Validation and conversion of external jobs into internal ones
pub mod import;

/// Conversion of internal plans into external ones
pub mod export;
