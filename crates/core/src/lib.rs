//! `stockdesk-core`: inventory domain records.
//!
//! This crate contains **pure domain** types (no storage or transport concerns).

pub mod category;
pub mod error;
pub mod id;
pub mod money;
pub mod order;
pub mod product;
pub mod record;
pub mod supplier;
pub mod user;

pub use category::{Category, CategoryDraft};
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, OrderId, ProductId, SerialId, SupplierId, UserId};
pub use money::{MONEY_LIMIT, MONEY_SCALE};
pub use order::{Order, OrderDraft, order_total};
pub use product::{Product, ProductDraft};
pub use record::{Record, Validate};
pub use supplier::{Supplier, SupplierDraft};
pub use user::{NewUser, User, normalize_email};
