//! Cart
//!
//! A single-session collection of line items, held in memory until checkout. Each distinct
//! product occupies exactly one line; adding it again grows that line's quantity.
//!
//! Stock checks made here are advisory: they compare against the stock figure supplied by the
//! caller when the line is added, which may be stale by the time the cart is checked out.

use thiserror::Error;

/// Errors raised while changing the contents of a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A line was requested with a quantity of zero.
    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    /// The requested quantity plus what is already in the cart exceeds the available stock.
    #[error(
        "insufficient stock: {available} available, {in_cart} in cart, {requested} requested"
    )]
    InsufficientStock {
        /// Stock figure supplied with the request.
        available: u64,

        /// Quantity of the product already in the cart.
        in_cart: u64,

        /// Quantity the caller tried to add.
        requested: u64,
    },

    /// No line exists at the given position.
    #[error("no cart line at index {index}; cart has {len} lines")]
    IndexOutOfBounds {
        /// Position that was requested.
        index: usize,

        /// Number of lines in the cart.
        len: usize,
    },
}

/// Line to add to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartLine<P> {
    /// Product being purchased.
    pub product: P,

    /// Product name at the time it was added.
    pub product_name: String,

    /// Unit selling price, in minor units, at the time it was added.
    pub unit_price: u64,

    /// Quantity to add.
    pub quantity: u64,
}

/// A product and quantity pairing inside a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine<P> {
    product: P,
    product_name: String,
    unit_price: u64,
    quantity: u64,
}

impl<P: Copy> CartLine<P> {
    /// Product this line refers to.
    pub fn product(&self) -> P {
        self.product
    }

    /// Product name captured when the line was created.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Snapshot unit price in minor units.
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Quantity of the product in the cart.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Snapshot unit price multiplied by quantity.
    ///
    /// Saturates rather than overflowing; checkout recomputes amounts with checked arithmetic.
    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// Shopping cart keyed by product identifier `P`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart<P> {
    lines: Vec<CartLine<P>>,
}

impl<P> Default for Cart<P> {
    fn default() -> Self {
        Self { lines: Vec::new() }
    }
}

impl<P: Copy + Eq> Cart<P> {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity of a product, merging with an existing line for the same product.
    ///
    /// `available_stock` is the stock figure the caller observed for the product. The cart is
    /// left untouched when an error is returned.
    ///
    /// Returns the total quantity of the product now in the cart.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: the requested quantity is zero.
    /// - [`CartError::InsufficientStock`]: the quantity already in the cart plus the requested
    ///   quantity exceeds `available_stock`.
    pub fn add_line(
        &mut self,
        line: NewCartLine<P>,
        available_stock: u64,
    ) -> Result<u64, CartError> {
        if line.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let in_cart = self.quantity_of(line.product);

        let projected = match in_cart.checked_add(line.quantity) {
            Some(total) if total <= available_stock => total,
            _ => {
                return Err(CartError::InsufficientStock {
                    available: available_stock,
                    in_cart,
                    requested: line.quantity,
                });
            }
        };

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|existing| existing.product == line.product)
        {
            existing.quantity = projected;
        } else {
            self.lines.push(CartLine {
                product: line.product,
                product_name: line.product_name,
                unit_price: line.unit_price,
                quantity: line.quantity,
            });
        }

        Ok(projected)
    }

    /// Remove the line at `index`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfBounds`] when no line exists at `index`.
    pub fn remove_line(&mut self, index: usize) -> Result<CartLine<P>, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::IndexOutOfBounds {
                index,
                len: self.lines.len(),
            });
        }

        Ok(self.lines.remove(index))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Quantity of `product` currently in the cart, zero when absent.
    pub fn quantity_of(&self, product: P) -> u64 {
        self.lines
            .iter()
            .find(|line| line.product == product)
            .map_or(0, CartLine::quantity)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine<P>] {
        &self.lines
    }

    /// Sum of line subtotals.
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(0, u64::saturating_add)
    }

    /// Sum of line quantities.
    pub fn total_units(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::quantity)
            .fold(0, u64::saturating_add)
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
