use serde::{Deserialize, Serialize};

use crate::error::{DomainResult, require_text};
use crate::id::CategoryId;
use crate::record::{Record, Validate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Write body for `POST`/`PUT /api/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
}

impl Validate for CategoryDraft {
    fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)
    }
}

impl Record for Category {
    type Id = CategoryId;
    type Draft = CategoryDraft;

    const COLLECTION: &'static str = "categories";
    const LABEL: &'static str = "category";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn from_draft(id: CategoryId, draft: CategoryDraft) -> Self {
        Self { id, name: draft.name }
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft { name: self.name.clone() }
    }
}
