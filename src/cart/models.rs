use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Book;

/// One (book, quantity) pairing inside a cart.
///
/// A line only exists while its quantity is strictly positive; a quantity
/// that drops to zero removes the line rather than storing it.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub book: Book,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(book: Book, quantity: u32) -> Self {
        debug_assert!(quantity > 0, "cart lines must have positive quantity");
        Self { book, quantity }
    }

    /// `unit price * quantity` for this line.
    pub fn line_total(&self) -> Decimal {
        self.book.price * Decimal::from(self.quantity)
    }
}

/// Mutable shopping cart for one session.
///
/// Lines are keyed by book title. A BTreeMap keeps iteration stable for
/// display while pricing stays order-independent. Totals are recomputed from
/// the lines on every call, so there is no cached value to drift.
#[derive(Debug, Default)]
pub struct Cart {
    lines: BTreeMap<String, CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `book`, summing with any existing line for the same
    /// title. Zero is a no-op (validation flows pass it through deliberately).
    /// Quantities saturate at `u32::MAX` instead of wrapping, so a line can
    /// never overflow back to zero.
    pub fn add_item(&mut self, book: Book, quantity: u32) {
        if quantity == 0 {
            return;
        }
        self.lines
            .entry(book.title.clone())
            .and_modify(|line| line.quantity = line.quantity.saturating_add(quantity))
            .or_insert_with(|| CartLine::new(book, quantity));
    }

    /// Remove the line for `title`. Removing an absent title is not an error.
    pub fn remove_item(&mut self, title: &str) {
        self.lines.remove(title);
    }

    /// Set the quantity for `title` to exactly `quantity` (not additive).
    /// Zero deletes the line; an absent title is a no-op.
    pub fn update_quantity(&mut self, title: &str, quantity: u32) {
        if !self.lines.contains_key(title) {
            return;
        }
        if quantity == 0 {
            self.lines.remove(title);
        } else if let Some(line) = self.lines.get_mut(title) {
            line.quantity = quantity;
        }
    }

    /// Sum of line totals. O(number of distinct lines).
    pub fn total_price(&self) -> Decimal {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines
            .values()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Copies of the current lines, in stable title order. Orders materialize
    /// from this snapshot so later cart mutation cannot alter them.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.values().cloned().collect()
    }
}
