use stockdesk_core::{Supplier, SupplierDraft, SupplierId};

use crate::pages::list::ListPage;
use crate::pages::{contains_ci, required};
use crate::services::ResourceService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierForm {
    pub name: String,
    pub contact: String,
}

impl SupplierForm {
    pub fn from_record(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            contact: supplier.contact.clone(),
        }
    }

    /// Contact is optional.
    pub fn to_draft(&self) -> Result<SupplierDraft, String> {
        Ok(SupplierDraft {
            name: required(&self.name, "name")?,
            contact: self.contact.trim().to_string(),
        })
    }
}

#[derive(Debug)]
pub struct SuppliersPage {
    list: ListPage<Supplier>,
    pub form: SupplierForm,
}

impl SuppliersPage {
    pub fn new(service: ResourceService<Supplier>) -> Self {
        Self {
            list: ListPage::new(service),
            form: SupplierForm::default(),
        }
    }

    pub fn list(&self) -> &ListPage<Supplier> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListPage<Supplier> {
        &mut self.list
    }

    pub async fn load(&mut self) {
        self.list.load().await;
    }

    /// Matches on name or contact.
    pub fn visible(&self) -> Vec<&Supplier> {
        self.list
            .filtered(|s, needle| contains_ci(&s.name, needle) || contains_ci(&s.contact, needle))
    }

    pub fn open_create(&mut self) -> bool {
        let opened = self.list.open_create();
        if opened {
            self.form = SupplierForm::default();
        }
        opened
    }

    pub fn open_edit(&mut self, id: SupplierId) -> bool {
        let opened = self.list.open_edit(id);
        if let Some(supplier) = self.list.selected().filter(|_| opened) {
            self.form = SupplierForm::from_record(supplier);
        }
        opened
    }

    pub async fn save(&mut self) -> bool {
        match self.form.to_draft() {
            Ok(draft) => self.list.save(draft).await,
            Err(message) => {
                self.list.toasts_mut().error(message);
                false
            }
        }
    }

    pub async fn confirm_delete(&mut self) -> bool {
        self.list.confirm_delete().await
    }
}
