use rust_decimal::Decimal;

use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Largest quantity a line can hold.
pub const MAX_QUANTITY: u32 = u32::MAX;

/// A product in the cart together with how many units the shopper wants.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Saved-for-later lines have the same shape as cart lines.
pub type SavedLine = CartLine;

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn line_total(&self) -> Decimal {
        self.product.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Result of adding a product to the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added,
    Incremented { quantity: u32 },
}

/// Result of setting a line's quantity.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityChange {
    Updated { from: u32, to: u32 },
    Removed(CartLine),
    Missing,
}

/// Shopping cart with its saved-for-later list.
///
/// Each list holds at most one line per product and every line has a
/// quantity of at least one. Totals are computed on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    saved: Vec<SavedLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from stored lines, merging duplicates and dropping
    /// empty lines so the invariants hold whatever was on disk.
    pub fn from_repository(lines: Vec<CartLine>, saved: Vec<SavedLine>) -> Self {
        Self {
            lines: merge_lines(lines),
            saved: merge_lines(saved),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn saved_lines(&self) -> &[SavedLine] {
        &self.saved
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn subtotal(&self) -> Decimal {
        lines_subtotal(&self.lines)
    }

    pub fn add(&mut self, product: Product) -> AddOutcome {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                AddOutcome::Incremented {
                    quantity: line.quantity,
                }
            }
            None => {
                self.lines.push(CartLine::new(product));
                AddOutcome::Added
            }
        }
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product_id() == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Replaces the quantity of a line. Anything below one removes it and
    /// anything above `MAX_QUANTITY` is clamped to it.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> QuantityChange {
        if quantity < 1 {
            return match self.remove(product_id) {
                Some(line) => QuantityChange::Removed(line),
                None => QuantityChange::Missing,
            };
        }

        let to = u32::try_from(quantity).unwrap_or(MAX_QUANTITY);
        match self.lines.iter_mut().find(|l| l.product_id() == product_id) {
            Some(line) => {
                let from = line.quantity;
                line.quantity = to;
                QuantityChange::Updated { from, to }
            }
            None => QuantityChange::Missing,
        }
    }

    /// Empties the cart. Saved-for-later lines are kept.
    pub fn clear(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }

    /// Moves a cart line to the saved list. Returns false when the product
    /// is not in the cart.
    pub fn move_to_saved(&mut self, product_id: &ProductId) -> bool {
        match self.remove(product_id) {
            Some(line) => {
                merge_into(&mut self.saved, line);
                true
            }
            None => false,
        }
    }

    /// Moves a saved line back into the cart, summing quantities when the
    /// product is already there.
    pub fn move_to_cart(&mut self, product_id: &ProductId) -> bool {
        let Some(index) = self.saved.iter().position(|l| l.product_id() == product_id) else {
            return false;
        };
        let line = self.saved.remove(index);
        merge_into(&mut self.lines, line);
        true
    }
}

/// Sum of the line totals, saturating like `CartLine::line_total`.
pub fn lines_subtotal(lines: &[CartLine]) -> Decimal {
    lines
        .iter()
        .map(CartLine::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

fn merge_into(lines: &mut Vec<CartLine>, line: CartLine) {
    match lines.iter_mut().find(|l| l.product.id == line.product.id) {
        Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
        None => lines.push(line),
    }
}

fn merge_lines(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut merged = Vec::with_capacity(lines.len());
    for line in lines.into_iter().filter(|l| l.quantity > 0) {
        merge_into(&mut merged, line);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn id(raw: &str) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn should_saturate_totals_instead_of_overflowing() {
        let mut huge = product("1", Decimal::ONE);
        huge.price = Decimal::MAX;
        let cart = Cart::from_repository(
            vec![
                CartLine::from_repository(huge, 10),
                CartLine::from_repository(product("2", Decimal::ONE), 1),
            ],
            Vec::new(),
        );

        assert_eq!(cart.lines()[0].line_total(), Decimal::MAX);
        assert_eq!(cart.subtotal(), Decimal::MAX);
    }

    #[test]
    fn should_merge_quantity_when_product_added_twice() {
        let mut cart = Cart::new();
        let headphones = product("1", Decimal::new(7999, 2));

        assert_eq!(cart.add(headphones.clone()), AddOutcome::Added);
        assert_eq!(
            cart.add(headphones),
            AddOutcome::Incremented { quantity: 2 }
        );

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(&id("1")).unwrap().quantity, 2);
    }

    #[test]
    fn should_compute_totals_from_lines() {
        let mut cart = Cart::new();
        cart.add(product("1", Decimal::from(10)));
        cart.add(product("1", Decimal::from(10)));
        cart.add(product("2", Decimal::from(5)));

        assert_eq!(cart.subtotal(), Decimal::from(25));
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn should_remove_line_when_quantity_set_to_zero() {
        let mut cart = Cart::new();
        cart.add(product("1", Decimal::from(10)));

        let change = cart.update_quantity(&id("1"), 0);

        assert!(matches!(change, QuantityChange::Removed(_)));
        assert!(cart.line(&id("1")).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn should_replace_quantity_instead_of_adding() {
        let mut cart = Cart::new();
        cart.add(product("1", Decimal::from(10)));
        cart.add(product("1", Decimal::from(10)));

        let change = cart.update_quantity(&id("1"), 7);

        assert_eq!(change, QuantityChange::Updated { from: 2, to: 7 });
        assert_eq!(cart.total_items(), 7);
        assert_eq!(cart.subtotal(), Decimal::from(70));
    }

    #[test]
    fn should_report_missing_line_on_update() {
        let mut cart = Cart::new();
        assert_eq!(cart.update_quantity(&id("9"), 3), QuantityChange::Missing);
        assert_eq!(cart.update_quantity(&id("9"), -2), QuantityChange::Missing);
    }

    #[test]
    fn should_ignore_removal_of_absent_product() {
        let mut cart = Cart::new();
        cart.add(product("1", Decimal::ONE));

        assert!(cart.remove(&id("2")).is_none());
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn should_keep_saved_lines_when_clearing() {
        let mut cart = Cart::new();
        cart.add(product("1", Decimal::ONE));
        cart.add(product("2", Decimal::ONE));
        cart.move_to_saved(&id("2"));

        let removed = cart.clear();

        assert_eq!(removed.len(), 1);
        assert!(cart.is_empty());
        assert_eq!(cart.saved_lines().len(), 1);
    }

    #[test]
    fn should_relocate_line_to_saved_list() {
        let mut cart = Cart::new();
        cart.add(product("1", Decimal::ONE));
        cart.update_quantity(&id("1"), 3);

        assert!(cart.move_to_saved(&id("1")));

        assert!(cart.is_empty());
        assert_eq!(cart.saved_lines()[0].quantity, 3);
        assert!(!cart.move_to_saved(&id("1")));
    }

    #[test]
    fn should_sum_quantities_when_moving_back_to_cart() {
        let mut cart = Cart::new();
        cart.add(product("1", Decimal::ONE));
        cart.update_quantity(&id("1"), 2);
        cart.move_to_saved(&id("1"));
        cart.add(product("1", Decimal::ONE));

        assert!(cart.move_to_cart(&id("1")));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(&id("1")).unwrap().quantity, 3);
        assert!(cart.saved_lines().is_empty());
    }

    #[test]
    fn should_normalise_restored_lines() {
        let lines = vec![
            CartLine::from_repository(product("1", Decimal::ONE), 2),
            CartLine::from_repository(product("2", Decimal::ONE), 0),
            CartLine::from_repository(product("1", Decimal::ONE), 1),
        ];

        let cart = Cart::from_repository(lines, vec![]);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(&id("1")).unwrap().quantity, 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8),
        Remove(u8),
        Update(u8, i64),
        Save(u8),
        Restore(u8),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..5).prop_map(Op::Add),
            (0u8..5).prop_map(Op::Remove),
            ((0u8..5), -3i64..20).prop_map(|(p, q)| Op::Update(p, q)),
            (0u8..5).prop_map(Op::Save),
            (0u8..5).prop_map(Op::Restore),
            Just(Op::Clear),
        ]
    }

    fn unique(lines: &[CartLine]) -> bool {
        let ids: HashSet<_> = lines.iter().map(|l| l.product_id().clone()).collect();
        ids.len() == lines.len()
    }

    proptest! {
        #[test]
        fn invariants_hold_after_any_sequence(ops in proptest::collection::vec(op(), 0..40)) {
            let mut cart = Cart::new();
            for op in ops {
                match op {
                    Op::Add(p) => { cart.add(product(&p.to_string(), Decimal::new(i64::from(p) * 150 + 99, 2))); }
                    Op::Remove(p) => { cart.remove(&id(&p.to_string())); }
                    Op::Update(p, q) => { cart.update_quantity(&id(&p.to_string()), q); }
                    Op::Save(p) => { cart.move_to_saved(&id(&p.to_string())); }
                    Op::Restore(p) => { cart.move_to_cart(&id(&p.to_string())); }
                    Op::Clear => { cart.clear(); }
                }

                prop_assert!(unique(cart.lines()));
                prop_assert!(unique(cart.saved_lines()));
                prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));
                let expected: Decimal = cart
                    .lines()
                    .iter()
                    .map(|l| l.product.price * Decimal::from(l.quantity))
                    .sum();
                prop_assert_eq!(cart.subtotal(), expected);
            }
        }
    }
}
