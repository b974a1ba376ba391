use rust_decimal::Decimal;

use stockdesk_core::{Order, OrderDraft, OrderId, Product, ProductId, order_total};

use crate::api::ApiError;
use crate::pages::contains_ci;
use crate::pages::list::ListPage;
use crate::services::ResourceService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub product_id: Option<ProductId>,
    /// Raw text as typed; parsed on submit.
    pub quantity: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            product_id: None,
            quantity: "1".to_string(),
        }
    }
}

impl OrderForm {
    pub fn from_record(order: &Order) -> Self {
        Self {
            product_id: Some(order.product_id),
            quantity: order.quantity.to_string(),
        }
    }

    fn quantity(&self) -> Option<i32> {
        self.quantity.trim().parse().ok()
    }

    /// Price of the selected product times the quantity, once both are usable
    /// and the product fits.
    pub fn total(&self, products: &[Product]) -> Option<Decimal> {
        let product = products.iter().find(|p| Some(p.id) == self.product_id)?;
        order_total(product.price, self.quantity()?)
    }

    pub fn to_draft(&self, products: &[Product]) -> Result<OrderDraft, String> {
        let product_id = self.product_id.ok_or("product is required")?;
        let product = products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or("the selected product is no longer available")?;
        let quantity = self.quantity().ok_or("quantity must be a whole number")?;

        Ok(OrderDraft {
            product_id,
            quantity,
            total_price: order_total(product.price, quantity).ok_or("total is too large")?,
        })
    }
}

/// Orders plus the products they reference.
#[derive(Debug)]
pub struct OrdersPage {
    list: ListPage<Order>,
    products_service: ResourceService<Product>,
    products: Vec<Product>,
    pub form: OrderForm,
}

impl OrdersPage {
    pub fn new(orders: ResourceService<Order>, products: ResourceService<Product>) -> Self {
        Self {
            list: ListPage::new(orders),
            products_service: products,
            products: Vec::new(),
            form: OrderForm::default(),
        }
    }

    pub fn list(&self) -> &ListPage<Order> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListPage<Order> {
        &mut self.list
    }

    /// Choices for the product select.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub async fn load(&mut self) {
        self.list.begin_load();
        match self.fetch().await {
            Ok((orders, products)) => {
                self.products = products;
                self.list.finish_load(Ok(orders));
            }
            Err(e) => self.list.finish_load(Err(e)),
        }
    }

    async fn fetch(&self) -> Result<(Vec<Order>, Vec<Product>), ApiError> {
        let orders = self.list.service().get_all().await?;
        let products = self.products_service.get_all().await?;
        Ok((orders, products))
    }

    pub fn product_name(&self, id: ProductId) -> Option<&str> {
        self.products.iter().find(|p| p.id == id).map(|p| p.name.as_str())
    }

    /// Matches on product name or order id.
    pub fn visible(&self) -> Vec<&Order> {
        self.list.filtered(|o, needle| {
            o.id.to_string().contains(needle)
                || self.product_name(o.product_id).is_some_and(|n| contains_ci(n, needle))
        })
    }

    /// Live total for the open form.
    pub fn form_total(&self) -> Option<Decimal> {
        self.form.total(&self.products)
    }

    pub fn open_create(&mut self) -> bool {
        let opened = self.list.open_create();
        if opened {
            self.form = OrderForm::default();
        }
        opened
    }

    pub fn open_edit(&mut self, id: OrderId) -> bool {
        let opened = self.list.open_edit(id);
        if let Some(order) = self.list.selected().filter(|_| opened) {
            self.form = OrderForm::from_record(order);
        }
        opened
    }

    pub async fn save(&mut self) -> bool {
        match self.form.to_draft(&self.products) {
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
    use stockdesk_core::{CategoryId, SupplierId};

    use super::*;

    fn product(id: i32, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("p{id}"),
            description: String::new(),
            price,
            category_id: CategoryId::new(1),
            supplier_id: SupplierId::new(1),
        }
    }

    #[test]
    fn total_follows_selected_product_and_quantity() {
        let products = [product(1, Decimal::new(999, 2)), product(2, Decimal::new(5, 0))];
        let mut form = OrderForm {
            product_id: Some(ProductId::new(1)),
            quantity: "3".into(),
        };
        assert_eq!(form.total(&products), Some(Decimal::new(2997, 2)));

        form.product_id = Some(ProductId::new(2));
        assert_eq!(form.total(&products), Some(Decimal::new(15, 0)));

        form.quantity = "x".into();
        assert_eq!(form.total(&products), None);
    }

    #[test]
    fn draft_carries_computed_total() {
        let products = [product(7, Decimal::new(1250, 2))];
        let form = OrderForm {
            product_id: Some(ProductId::new(7)),
            quantity: " 4 ".into(),
        };
        let draft = form.to_draft(&products).unwrap();
        assert_eq!(draft.quantity, 4);
        assert_eq!(draft.total_price, Decimal::new(50, 0));
    }

    #[test]
    fn overflowing_total_is_a_form_error() {
        let huge = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        let products = [product(1, huge)];
        let form = OrderForm {
            product_id: Some(ProductId::new(1)),
            quantity: "1000000000".into(),
        };

        assert_eq!(form.total(&products), None);
        assert_eq!(form.to_draft(&products).unwrap_err(), "total is too large");
    }

    #[test]
    fn missing_or_unknown_product_is_rejected() {
        let products = [product(1, Decimal::ONE)];
        let form = OrderForm::default();
        assert_eq!(form.to_draft(&products).unwrap_err(), "product is required");

        let form = OrderForm {
            product_id: Some(ProductId::new(9)),
            ..OrderForm::default()
        };
        assert!(form.to_draft(&products).is_err());
    }
}
