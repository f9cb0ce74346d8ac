//! Order draft - the order being typed in before it is submitted

/// In-progress order form
///
/// Quantities keep the order in which items were first touched, which becomes
/// the line order of the created order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_id: Option<i64>,
    quantities: Vec<(String, u32)>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_customer(&mut self, name: impl Into<String>, customer_id: Option<i64>) {
        self.customer_name = name.into();
        self.customer_id = customer_id;
    }

    /// Set the quantity for a menu item (0 keeps the entry but selects nothing)
    pub fn set_qty(&mut self, menu_item_id: &str, qty: u32) {
        match self.quantities.iter_mut().find(|(id, _)| id == menu_item_id) {
            Some((_, q)) => *q = qty,
            None => self.quantities.push((menu_item_id.to_string(), qty)),
        }
    }

    pub fn qty(&self, menu_item_id: &str) -> u32 {
        self.quantities
            .iter()
            .find(|(id, _)| id == menu_item_id)
            .map(|(_, q)| *q)
            .unwrap_or(0)
    }

    pub fn quantities(&self) -> &[(String, u32)] {
        &self.quantities
    }

    /// Whether any item has a positive quantity
    pub fn has_selection(&self) -> bool {
        self.quantities.iter().any(|(_, q)| *q > 0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
