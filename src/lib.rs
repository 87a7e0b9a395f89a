//! Attribute validation for order line items.
//!
//! A reusable [`BoundedNumericField`] contract enforces a numeric-type check
//! and an inclusive bounds check on every write. [`OrderItem`] composes two
//! independent contracts (`weight`: min 0; `price`: min 0, max 10) next to an
//! unvalidated description, and derives `subtotal()` from the validated pair.
//!
//! ```
//! use order_item::{ErrorKind, OrderItem};
//!
//! let mut beans = OrderItem::new("beans", 4, 10)?;
//! assert_eq!(beans.subtotal(), 40.0);
//!
//! let err = beans.set_weight(-1).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Range);
//! assert_eq!(beans.weight(), 4.into()); // prior value untouched
//! # Ok::<(), order_item::ValidationError>(())
//! ```

pub mod domain;

pub use domain::order::OrderItem;
pub use domain::validation::{
    BoundedNumericField, ErrorKind, Number, Scalar, ValidationError, DEFAULT_MIN_VALUE, MAX_PRICE,
};
