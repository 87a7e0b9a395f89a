use serde::{Deserialize, Serialize};

use crate::domain::validation::{BoundedNumericField, Number, Scalar, ValidationError, MAX_PRICE};

// ============================================================================
// Order Value Objects
// ============================================================================

/// A purchasable line item.
///
/// `weight` and `price` only change through their bound contracts, so a value
/// of this type always satisfies `weight >= 0` and `0 <= price <= 10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOrderItem")]
pub struct OrderItem {
    description: String,
    weight: Number,
    price: Number,
}

impl OrderItem {
    /// Shared contracts, one per validated field for the whole type.
    const WEIGHT: BoundedNumericField = BoundedNumericField::new("weight");
    const PRICE: BoundedNumericField = BoundedNumericField::new("price").with_max(MAX_PRICE);

    /// Build an item, validating `weight` then `price`.
    ///
    /// Fails at the first violation; no partially built item is observable.
    pub fn new(
        description: impl Into<String>,
        weight: impl Into<Scalar>,
        price: impl Into<Scalar>,
    ) -> Result<Self, ValidationError> {
        let weight = Self::WEIGHT.validate(weight.into())?;
        let price = Self::PRICE.validate(price.into())?;

        Ok(Self {
            description: description.into(),
            weight,
            price,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight(&self) -> Number {
        self.weight
    }

    pub fn price(&self) -> Number {
        self.price
    }

    /// Replace `weight`. On failure the stored value is left unchanged.
    pub fn set_weight(&mut self, weight: impl Into<Scalar>) -> Result<(), ValidationError> {
        self.weight = Self::WEIGHT.validate(weight.into())?;
        Ok(())
    }

    /// Replace `price`. On failure the stored value is left unchanged.
    pub fn set_price(&mut self, price: impl Into<Scalar>) -> Result<(), ValidationError> {
        self.price = Self::PRICE.validate(price.into())?;
        Ok(())
    }

    /// `weight * price`. Pure; trusts already-validated state.
    pub fn subtotal(&self) -> f64 {
        self.weight.as_f64() * self.price.as_f64()
    }
}

// Decoding goes through the same contracts as construction, so untrusted
// input cannot smuggle an out-of-bounds item past the invariant.
#[derive(Deserialize)]
struct RawOrderItem {
    description: String,
    weight: Number,
    price: Number,
}

impl TryFrom<RawOrderItem> for OrderItem {
    type Error = ValidationError;

    fn try_from(raw: RawOrderItem) -> Result<Self, Self::Error> {
        OrderItem::new(raw.description, raw.weight, raw.price)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ErrorKind;

    #[test]
    fn test_order_item_creation() {
        let item = OrderItem::new("beans", 4, 10).unwrap();

        assert_eq!(item.description(), "beans");
        assert_eq!(item.weight(), Number::Int(4));
        assert_eq!(item.price(), Number::Int(10));
        assert_eq!(item.subtotal(), 40.0);
    }

    #[test]
    fn test_creation_rejects_text_weight() {
        let err = OrderItem::new("beans", "4", 10.0).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.field(), "weight");
        assert_eq!(
            err.to_string(),
            "the value of 'weight' must be an int or a float."
        );
    }

    #[test]
    fn test_creation_rejects_price_above_maximum() {
        let err = OrderItem::new("beans", 6, 10.01).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.field(), "price");
        assert_eq!(
            err.to_string(),
            "the value of 'price' must not be greater than 10."
        );
    }

    #[test]
    fn test_creation_rejects_negative_weight() {
        let err = OrderItem::new("beans", -1, 10).unwrap_err();

        assert_eq!(
            err,
            ValidationError::BelowMinimum {
                field: "weight",
                min: 0.0
            }
        );
    }

    #[test]
    fn test_weight_is_validated_before_price() {
        // Both fields are invalid; the weight violation surfaces first.
        let err = OrderItem::new("beans", "4", 10.01).unwrap_err();
        assert_eq!(err.field(), "weight");
    }

    #[test]
    fn test_failed_reassignment_keeps_previous_value() {
        let mut beans = OrderItem::new("beans", 4, 10).unwrap();

        let err = beans.set_weight(-1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "the value of 'weight' must not be less than 0."
        );
        assert_eq!(beans.weight(), Number::Int(4));
        assert_eq!(beans.subtotal(), 40.0);

        let err = beans.set_price(10.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(beans.price(), Number::Int(10));
    }

    #[test]
    fn test_successful_reassignment() {
        let mut beans = OrderItem::new("beans", 4, 10).unwrap();

        beans.set_weight(2.5).unwrap();
        beans.set_price(8).unwrap();

        assert_eq!(beans.weight(), Number::Float(2.5));
        assert_eq!(beans.price(), Number::Int(8));
        assert_eq!(beans.subtotal(), 20.0);
    }

    #[test]
    fn test_assigned_value_is_stored_exactly() {
        // No coercion: an integer stays an integer, a float stays a float.
        let item = OrderItem::new("beans", 4, 10.0).unwrap();

        assert_eq!(item.weight(), Number::Int(4));
        assert_ne!(item.weight(), Number::Float(4.0));
        assert_eq!(item.price(), Number::Float(10.0));
    }

    #[test]
    fn test_description_is_not_validated() {
        let item = OrderItem::new("", 0, 0).unwrap();
        assert_eq!(item.description(), "");
        assert_eq!(item.subtotal(), 0.0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let item = OrderItem::new("beans", 4, 9.5).unwrap();

        let json = serde_json::to_string(&item).unwrap();
        let decoded: OrderItem = serde_json::from_str(&json).unwrap();

        assert_eq!(item, decoded);
    }

    #[test]
    fn test_deserialization_enforces_bounds() {
        let err = serde_json::from_str::<OrderItem>(
            r#"{"description":"beans","weight":4,"price":11}"#,
        )
        .unwrap_err();

        assert!(err
            .to_string()
            .contains("the value of 'price' must not be greater than 10."));
    }
}
