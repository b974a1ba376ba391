use rust_decimal::Decimal;

use stockdesk_core::{Category, CategoryId, Product, ProductDraft, ProductId, Supplier, SupplierId};

use crate::api::ApiError;
use crate::pages::list::ListPage;
use crate::pages::{contains_ci, required};
use crate::services::ResourceService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    /// Raw text as typed; parsed on submit.
    pub price: String,
    pub category_id: Option<CategoryId>,
    pub supplier_id: Option<SupplierId>,
}

impl ProductForm {
    pub fn from_record(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category_id: Some(product.category_id),
            supplier_id: Some(product.supplier_id),
        }
    }

    pub fn to_draft(&self) -> Result<ProductDraft, String> {
        let name = required(&self.name, "name")?;
        let price = required(&self.price, "price")?
            .parse::<Decimal>()
            .map_err(|_| "price must be a number".to_string())?;
        let category_id = self.category_id.ok_or("category is required")?;
        let supplier_id = self.supplier_id.ok_or("supplier is required")?;

        Ok(ProductDraft {
            name,
            description: self.description.trim().to_string(),
            price,
            category_id,
            supplier_id,
        })
    }
}

/// Products plus the categories and suppliers their ids point at.
#[derive(Debug)]
pub struct ProductsPage {
    list: ListPage<Product>,
    categories_service: ResourceService<Category>,
    suppliers_service: ResourceService<Supplier>,
    categories: Vec<Category>,
    suppliers: Vec<Supplier>,
    pub form: ProductForm,
}

impl ProductsPage {
    pub fn new(
        products: ResourceService<Product>,
        categories: ResourceService<Category>,
        suppliers: ResourceService<Supplier>,
    ) -> Self {
        Self {
            list: ListPage::new(products),
            categories_service: categories,
            suppliers_service: suppliers,
            categories: Vec::new(),
            suppliers: Vec::new(),
            form: ProductForm::default(),
        }
    }

    pub fn list(&self) -> &ListPage<Product> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListPage<Product> {
        &mut self.list
    }

    /// Choices for the category select.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Choices for the supplier select.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// All three lists must load for the page to show.
    pub async fn load(&mut self) {
        self.list.begin_load();
        match self.fetch().await {
            Ok((products, categories, suppliers)) => {
                self.categories = categories;
                self.suppliers = suppliers;
                self.list.finish_load(Ok(products));
            }
            Err(e) => self.list.finish_load(Err(e)),
        }
    }

    async fn fetch(&self) -> Result<(Vec<Product>, Vec<Category>, Vec<Supplier>), ApiError> {
        let products = self.list.service().get_all().await?;
        let categories = self.categories_service.get_all().await?;
        let suppliers = self.suppliers_service.get_all().await?;
        Ok((products, categories, suppliers))
    }

    pub fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.categories.iter().find(|c| c.id == id).map(|c| c.name.as_str())
    }

    pub fn supplier_name(&self, id: SupplierId) -> Option<&str> {
        self.suppliers.iter().find(|s| s.id == id).map(|s| s.name.as_str())
    }

    /// Matches on product name, category name or supplier name.
    pub fn visible(&self) -> Vec<&Product> {
        self.list.filtered(|p, needle| {
            contains_ci(&p.name, needle)
                || self.category_name(p.category_id).is_some_and(|n| contains_ci(n, needle))
                || self.supplier_name(p.supplier_id).is_some_and(|n| contains_ci(n, needle))
        })
    }

    pub fn open_create(&mut self) -> bool {
        let opened = self.list.open_create();
        if opened {
            self.form = ProductForm::default();
        }
        opened
    }

    pub fn open_edit(&mut self, id: ProductId) -> bool {
        let opened = self.list.open_edit(id);
        if let Some(product) = self.list.selected().filter(|_| opened) {
            self.form = ProductForm::from_record(product);
        }
        opened
    }

    /// Products reload alone after a save; the lookup lists are kept.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            name: "Hammer".into(),
            description: " steel ".into(),
            price: "12.50".into(),
            category_id: Some(CategoryId::new(1)),
            supplier_id: Some(SupplierId::new(2)),
        }
    }

    #[test]
    fn complete_form_becomes_draft() {
        let draft = filled().to_draft().unwrap();
        assert_eq!(draft.price, Decimal::new(1250, 2));
        assert_eq!(draft.description, "steel");
        assert_eq!(draft.supplier_id, SupplierId::new(2));
    }

    #[test]
    fn unparsable_price_is_rejected() {
        let form = ProductForm {
            price: "twelve".into(),
            ..filled()
        };
        assert_eq!(form.to_draft().unwrap_err(), "price must be a number");
    }

    #[test]
    fn selections_are_required() {
        let form = ProductForm {
            category_id: None,
            ..filled()
        };
        assert_eq!(form.to_draft().unwrap_err(), "category is required");

        let form = ProductForm {
            supplier_id: None,
            ..filled()
        };
        assert_eq!(form.to_draft().unwrap_err(), "supplier is required");
    }
}
