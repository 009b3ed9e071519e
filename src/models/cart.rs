use indexmap::IndexMap;

/// Flat discount applied at checkout
pub const DEFAULT_DISCOUNT: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

/// Checkout summary shown before placing an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bill {
    pub order_amount: u64,
    pub discount: u64,
    pub total: u64,
}

/// Cart items in the order they were added, keyed by item id
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: IndexMap<u32, CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, or bump the quantity if the id is already in the cart
    pub fn add(&mut self, item: CartItem) {
        let quantity = item.quantity.max(1);
        self.items
            .entry(item.id)
            .and_modify(|existing| existing.quantity += quantity)
            .or_insert(CartItem { quantity, ..item });
    }

    pub fn remove(&mut self, id: u32) -> Option<CartItem> {
        self.items.shift_remove(&id)
    }

    /// Returns the new quantity, or None if the id is not in the cart
    pub fn increment(&mut self, id: u32) -> Option<u32> {
        let item = self.items.get_mut(&id)?;
        item.quantity += 1;
        Some(item.quantity)
    }

    /// Quantities never drop below one; use `remove` to take an item out
    pub fn decrement(&mut self, id: u32) -> Option<u32> {
        let item = self.items.get_mut(&id)?;
        if item.quantity > 1 {
            item.quantity -= 1;
        }
        Some(item.quantity)
    }

    pub fn get(&self, id: u32) -> Option<&CartItem> {
        self.items.get(&id)
    }

    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn order_amount(&self) -> u64 {
        self.items.values().map(CartItem::line_total).sum()
    }

    pub fn bill(&self, discount: u64) -> Bill {
        let order_amount = self.order_amount();
        Bill {
            order_amount,
            discount,
            total: order_amount.saturating_sub(discount),
        }
    }
}
