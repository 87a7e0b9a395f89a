// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains the domain entities and the validation contract they
// share:
// - validation: the reusable bounded numeric field contract
// - order: the OrderItem entity built on top of it
//
// ============================================================================

pub mod validation;
pub mod order;

// Future entities can be added here:
// pub mod product;
