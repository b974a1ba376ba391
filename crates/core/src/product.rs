use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult, require_text};
use crate::id::{CategoryId, ProductId, SupplierId};
use crate::money::check_money;
use crate::record::{Record, Validate};

/// A sellable product.
///
/// `category_id` and `supplier_id` are expected to reference existing rows, but
/// nothing at this layer checks that they do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub category_id: CategoryId,
    pub supplier_id: SupplierId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub category_id: CategoryId,
    pub supplier_id: SupplierId,
}

impl Validate for ProductDraft {
    fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)?;
        if self.price < Decimal::ZERO {
            return Err(DomainError::validation("price must not be negative"));
        }
        check_money("price", self.price)?;
        if !self.category_id.is_assigned() {
            return Err(DomainError::validation("categoryId must be a positive id"));
        }
        if !self.supplier_id.is_assigned() {
            return Err(DomainError::validation("supplierId must be a positive id"));
        }
        Ok(())
    }
}

impl Record for Product {
    type Id = ProductId;
    type Draft = ProductDraft;

    const COLLECTION: &'static str = "products";
    const LABEL: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category_id: draft.category_id,
            supplier_id: draft.supplier_id,
        }
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category_id: self.category_id,
            supplier_id: self.supplier_id,
        }
    }
}
