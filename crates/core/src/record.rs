//! The shape every stored entity shares.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::DomainResult;
use crate::id::SerialId;

/// Trivial checks a write body must pass before it reaches the store.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}

/// A row-backed entity with a store-assigned id and a full-replacement write body.
///
/// Creation turns a `Draft` into a record once the store has assigned the id; updates
/// replace every field of the draft at once (no partial patch).
pub trait Record: Clone + core::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: SerialId;
    type Draft: Validate + Clone + core::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// URL path segment and table name (`categories`, `products`, ...).
    const COLLECTION: &'static str;

    /// Singular, human-readable name used in messages.
    const LABEL: &'static str;

    fn id(&self) -> Self::Id;

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    fn to_draft(&self) -> Self::Draft;
}
