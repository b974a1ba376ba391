use serde::{Deserialize, Serialize};

use crate::error::{DomainResult, require_text};
use crate::id::SupplierId;
use crate::record::{Record, Validate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    /// Free-form contact line (phone, e-mail, person).
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub name: String,
    #[serde(default)]
    pub contact: String,
}

impl Validate for SupplierDraft {
    fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)
    }
}

impl Record for Supplier {
    type Id = SupplierId;
    type Draft = SupplierDraft;

    const COLLECTION: &'static str = "suppliers";
    const LABEL: &'static str = "supplier";

    fn id(&self) -> SupplierId {
        self.id
    }

    fn from_draft(id: SupplierId, draft: SupplierDraft) -> Self {
        Self {
            id,
            name: draft.name,
            contact: draft.contact,
        }
    }

    fn to_draft(&self) -> SupplierDraft {
        SupplierDraft {
            name: self.name.clone(),
            contact: self.contact.clone(),
        }
    }
}
