// ============================================================================
// Order Domain - Validated Order Entities
// ============================================================================

pub mod value_objects;

// Re-export for convenience
pub use value_objects::*;
