use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::{OrderId, ProductId};
use crate::money::check_money;
use crate::record::{Record, Validate};

/// A single-product order.
///
/// `total_price` is stored exactly as submitted; the server never recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub product_id: ProductId,
    pub quantity: i32,
    pub total_price: Decimal,
}

impl Validate for OrderDraft {
    fn validate(&self) -> DomainResult<()> {
        if !self.product_id.is_assigned() {
            return Err(DomainError::validation("productId must be a positive id"));
        }
        if self.quantity <= 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }
        if self.total_price <= Decimal::ZERO {
            return Err(DomainError::validation("totalPrice must be greater than zero"));
        }
        check_money("totalPrice", self.total_price)
    }
}

/// Total for `quantity` units at `unit_price`, or `None` when it overflows.
pub fn order_total(unit_price: Decimal, quantity: i32) -> Option<Decimal> {
    unit_price.checked_mul(Decimal::from(quantity))
}

impl Record for Order {
    type Id = OrderId;
    type Draft = OrderDraft;

    const COLLECTION: &'static str = "orders";
    const LABEL: &'static str = "order";

    fn id(&self) -> OrderId {
        self.id
    }

    fn from_draft(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            product_id: draft.product_id,
            quantity: draft.quantity,
            total_price: draft.total_price,
        }
    }

    fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            product_id: self.product_id,
            quantity: self.quantity,
            total_price: self.total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn total_is_price_times_quantity() {
        assert_eq!(order_total(Decimal::new(4999, 2), 3), Some(Decimal::new(14997, 2)));
    }

    #[test]
    fn overflowing_total_is_none() {
        let huge = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        assert_eq!(order_total(huge, 1_000_000_000), None);
        assert_eq!(order_total(Decimal::MAX, 2), None);
    }

    #[test]
    fn total_beyond_money_limit_is_rejected() {
        let d = OrderDraft {
            product_id: ProductId::new(1),
            quantity: 1,
            total_price: crate::MONEY_LIMIT,
        };
        assert_eq!(
            d.validate(),
            Err(DomainError::validation("totalPrice must be less than 10000000000"))
        );
    }

    #[test]
    fn total_with_sub_cent_digits_is_rejected() {
        let d = OrderDraft {
            product_id: ProductId::new(1),
            quantity: 1,
            total_price: Decimal::new(10_001, 3),
        };
        assert_eq!(
            d.validate(),
            Err(DomainError::validation("totalPrice must have at most 2 decimal places"))
        );
    }

    #[test]
    fn rejects_zero_total() {
        let d = OrderDraft {
            product_id: ProductId::new(1),
            quantity: 1,
            total_price: Decimal::ZERO,
        };
        assert_eq!(
            d.validate(),
            Err(DomainError::validation("totalPrice must be greater than zero"))
        );
    }

    proptest! {
        #[test]
        fn non_positive_quantity_is_always_rejected(quantity in i32::MIN..=0) {
            let d = OrderDraft {
                product_id: ProductId::new(1),
                quantity,
                total_price: Decimal::ONE,
            };
            prop_assert!(d.validate().is_err());
        }

        #[test]
        fn positive_fields_are_always_accepted(product in 1i32..10_000, quantity in 1i32..10_000, cents in 1i64..1_000_000) {
            let d = OrderDraft {
                product_id: ProductId::new(product),
                quantity,
                total_price: Decimal::new(cents, 2),
            };
            prop_assert!(d.validate().is_ok());
        }
    }
}
