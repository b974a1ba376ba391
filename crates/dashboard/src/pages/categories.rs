use stockdesk_core::{Category, CategoryDraft, CategoryId};

use crate::pages::list::ListPage;
use crate::pages::{contains_ci, required};
use crate::services::ResourceService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    pub fn from_record(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
        }
    }

    pub fn to_draft(&self) -> Result<CategoryDraft, String> {
        Ok(CategoryDraft {
            name: required(&self.name, "name")?,
        })
    }
}

#[derive(Debug)]
pub struct CategoriesPage {
    list: ListPage<Category>,
    pub form: CategoryForm,
}

impl CategoriesPage {
    pub fn new(service: ResourceService<Category>) -> Self {
        Self {
            list: ListPage::new(service),
            form: CategoryForm::default(),
        }
    }

    pub fn list(&self) -> &ListPage<Category> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListPage<Category> {
        &mut self.list
    }

    pub async fn load(&mut self) {
        self.list.load().await;
    }

    pub fn visible(&self) -> Vec<&Category> {
        self.list.filtered(|c, needle| contains_ci(&c.name, needle))
    }

    pub fn open_create(&mut self) -> bool {
        let opened = self.list.open_create();
        if opened {
            self.form = CategoryForm::default();
        }
        opened
    }

    pub fn open_edit(&mut self, id: CategoryId) -> bool {
        let opened = self.list.open_edit(id);
        if let Some(category) = self.list.selected().filter(|_| opened) {
            self.form = CategoryForm::from_record(category);
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
