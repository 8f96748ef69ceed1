use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Distinct products the shopper wants to remember.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    products: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a wishlist from stored entries, keeping the first entry per product.
    pub fn from_repository(products: Vec<Product>) -> Self {
        let mut wishlist = Self::new();
        for product in products {
            wishlist.add(product);
        }
        wishlist
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == product_id)
    }

    /// Appends the product unless it is already present. Returns whether it was added.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.products.push(product);
        true
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == product_id)?;
        Some(self.products.remove(index))
    }

    pub fn clear(&mut self) -> usize {
        let count = self.products.len();
        self.products.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn should_ignore_duplicate_add() {
        let mut wishlist = Wishlist::new();

        assert!(wishlist.add(product("3", Decimal::new(1999, 2))));
        assert!(!wishlist.add(product("3", Decimal::new(1999, 2))));

        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(&ProductId::new("3")));
    }

    #[test]
    fn should_remove_entry_when_present() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("3", Decimal::ONE));

        assert!(wishlist.remove(&ProductId::new("3")).is_some());
        assert!(wishlist.remove(&ProductId::new("3")).is_none());
        assert!(wishlist.is_empty());
    }

    #[test]
    fn should_drop_duplicates_when_restoring() {
        let wishlist = Wishlist::from_repository(vec![
            product("1", Decimal::ONE),
            product("2", Decimal::ONE),
            product("1", Decimal::ONE),
        ]);

        assert_eq!(wishlist.len(), 2);
    }

    #[test]
    fn should_clear_all_entries() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("1", Decimal::ONE));
        wishlist.add(product("2", Decimal::ONE));

        assert_eq!(wishlist.clear(), 2);
        assert!(wishlist.is_empty());
    }

    proptest! {
        #[test]
        fn add_is_idempotent(ids in proptest::collection::vec(0u8..6, 0..30)) {
            let mut wishlist = Wishlist::new();
            for raw in &ids {
                wishlist.add(product(&raw.to_string(), Decimal::ONE));
            }
            let distinct: std::collections::HashSet<_> = ids.iter().collect();
            prop_assert_eq!(wishlist.len(), distinct.len());
        }
    }
}
