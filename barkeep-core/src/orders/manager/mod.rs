//! OrdersManager - order lifecycle and emote production
//!
//! This module handles:
//! - Order creation from quantities (or from the draft form)
//! - Completing, restoring and canceling orders
//! - Focus tracking (the order currently shown)
//! - Emote copying for an order line (cursor lives on the order line)
//!
//! # Lifecycle
//!
//! ```text
//! create ──▶ active ──complete──▶ archived
//!              ▲  │                  │
//!              │  └──cancel──▶ gone  │
//!              └──────restore────────┘ (appended to the tail)
//! ```
//!
//! Unknown order ids make every transition a no-op.

use shared::models::{MenuItem, Order, OrderItem, find_menu_item};
use shared::util::{new_id, now_millis};

use super::draft::OrderDraft;
use super::money;
use crate::emote::{EmoteContext, EmoteEngine, render_helper_command};
use crate::services::{Clipboard, NotificationQueue};
use crate::utils::validation::sanitize_input;

/// Fallback for `{name}` when an order has no customer name
pub const DEFAULT_CUSTOMER_LABEL: &str = "the customer";

/// Notification shown after an emote line is copied
const COPIED_MESSAGE: &str = "RP command copied";

/// Owner of the active and archived order collections
#[derive(Debug)]
pub struct OrdersManager {
    active: Vec<Order>,
    archived: Vec<Order>,
    /// Order currently focused in the desk view
    focused: Option<String>,
    draft: OrderDraft,
    emotes: EmoteEngine,
    default_customer: String,
}

impl Default for OrdersManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OrdersManager {
    pub fn new() -> Self {
        Self::with_engine(EmoteEngine::new())
    }

    /// Manager with a specific emote engine (deterministic tests)
    pub fn with_engine(emotes: EmoteEngine) -> Self {
        Self {
            active: Vec::new(),
            archived: Vec::new(),
            focused: None,
            draft: OrderDraft::new(),
            emotes,
            default_customer: DEFAULT_CUSTOMER_LABEL.to_string(),
        }
    }

    /// Override the `{name}` fallback
    pub fn set_default_customer(&mut self, label: impl Into<String>) {
        self.default_customer = label.into();
    }

    // ========== Queries ==========

    pub fn active_orders(&self) -> &[Order] {
        &self.active
    }

    pub fn archived_orders(&self) -> &[Order] {
        &self.archived
    }

    pub fn focused_order_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn focused_order(&self) -> Option<&Order> {
        let id = self.focused.as_deref()?;
        self.active.iter().find(|o| o.id == id)
    }

    /// Look up an order in either collection
    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        self.active
            .iter()
            .chain(self.archived.iter())
            .find(|o| o.id == order_id)
    }

    pub fn is_archived(&self, order_id: &str) -> bool {
        self.archived.iter().any(|o| o.id == order_id)
    }

    pub fn emote_engine(&self) -> &EmoteEngine {
        &self.emotes
    }

    /// Sum of `price * qty` over lines whose menu item still exists
    pub fn get_total(order: &Order, menu: &[MenuItem]) -> f64 {
        money::order_total(order, menu)
    }

    // ========== Draft ==========

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    /// Create an order from the draft form
    ///
    /// The draft is cleared only when an order was actually created.
    pub fn submit_draft(&mut self, menu: &[MenuItem]) -> Option<String> {
        let draft = std::mem::take(&mut self.draft);
        let created = self.create_order(
            &draft.customer_name,
            draft.customer_id,
            draft.quantities(),
            menu,
        );
        if created.is_none() {
            self.draft = draft;
        }
        created
    }

    // ========== Lifecycle ==========

    /// Create an order from `(menu_item_id, qty)` pairs
    ///
    /// Lines with qty 0 are dropped; if nothing is left this is a no-op and
    /// returns `None`. Advanced menu items get a seeded progression cursor.
    /// The new order is appended to the active set and focused.
    pub fn create_order(
        &mut self,
        customer_name: &str,
        customer_id: Option<i64>,
        quantities: &[(String, u32)],
        menu: &[MenuItem],
    ) -> Option<String> {
        let items: Vec<OrderItem> = quantities
            .iter()
            .filter(|(_, qty)| *qty > 0)
            .map(|(id, qty)| OrderItem {
                id: id.clone(),
                qty: *qty,
                progression: match find_menu_item(menu, id) {
                    Some(item) => self.emotes.seed(item),
                    None => Default::default(),
                },
            })
            .collect();

        if items.is_empty() {
            tracing::debug!("Order has no items with quantity, nothing created");
            return None;
        }

        let order = Order {
            id: new_id(),
            customer_name: normalize_name(customer_name),
            customer_id,
            items,
            created_at: now_millis(),
        };
        let order_id = order.id.clone();

        tracing::info!(
            order_id = %order_id,
            items = order.items.len(),
            customer = order.customer_name.as_deref().unwrap_or("-"),
            "Order created"
        );
        self.active.push(order);
        self.focused = Some(order_id.clone());
        Some(order_id)
    }

    /// Move an active order to the archive tail
    pub fn complete_order(&mut self, order_id: &str) -> bool {
        let Some(index) = self.active.iter().position(|o| o.id == order_id) else {
            return false;
        };
        let order = self.active.remove(index);
        self.archived.push(order);
        self.refocus_after_removal(order_id);
        tracing::info!(order_id = %order_id, "Order completed");
        true
    }

    /// Move an archived order back to the active tail
    ///
    /// Focus only changes when nothing was focused.
    pub fn restore_order(&mut self, order_id: &str) -> bool {
        let Some(index) = self.archived.iter().position(|o| o.id == order_id) else {
            return false;
        };
        let order = self.archived.remove(index);
        self.active.push(order);
        if self.focused.is_none() {
            self.focused = Some(order_id.to_string());
        }
        tracing::info!(order_id = %order_id, "Order restored");
        true
    }

    /// Remove an active order permanently, cursors included
    pub fn cancel_order(&mut self, order_id: &str) -> bool {
        let before = self.active.len();
        self.active.retain(|o| o.id != order_id);
        if self.active.len() == before {
            return false;
        }
        self.refocus_after_removal(order_id);
        tracing::info!(order_id = %order_id, "Order canceled");
        true
    }

    /// Update customer name and id of an active order
    ///
    /// A blank name clears it.
    pub fn update_order_details(
        &mut self,
        order_id: &str,
        customer_name: &str,
        customer_id: Option<i64>,
    ) -> bool {
        let Some(order) = self.active.iter_mut().find(|o| o.id == order_id) else {
            return false;
        };
        order.customer_name = normalize_name(customer_name);
        order.customer_id = customer_id;
        tracing::debug!(order_id = %order_id, "Order details updated");
        true
    }

    /// Focus an active order
    pub fn focus(&mut self, order_id: &str) -> bool {
        if self.active.iter().any(|o| o.id == order_id) {
            self.focused = Some(order_id.to_string());
            true
        } else {
            false
        }
    }

    /// Drop every order, the focus and the draft
    pub fn clear_all(&mut self) {
        tracing::info!(
            active = self.active.len(),
            archived = self.archived.len(),
            "Clearing all orders"
        );
        self.active.clear();
        self.archived.clear();
        self.focused = None;
        self.draft.reset();
    }

    fn refocus_after_removal(&mut self, removed_id: &str) {
        if self.focused.as_deref() == Some(removed_id) {
            self.focused = self.active.first().map(|o| o.id.clone());
        }
    }

    // ========== Emotes ==========

    /// Produce the next emote line for one order line without side effects
    /// beyond the cursor advance
    ///
    /// Works on active and archived orders. `None` when the order, the order
    /// line or the menu item cannot be found.
    pub fn next_emote(&mut self, order_id: &str, menu_item_id: &str, menu: &[MenuItem]) -> Option<String> {
        let item = find_menu_item(menu, menu_item_id)?;
        let order = self
            .active
            .iter_mut()
            .chain(self.archived.iter_mut())
            .find(|o| o.id == order_id)?;

        let line_index = order.items.iter().position(|i| i.id == menu_item_id)?;
        let qty = order.items[line_index].qty;
        let ctx = EmoteContext::for_order_item(order, item, qty, &self.default_customer);
        let mut progression = order.items[line_index].progression;
        let text = self.emotes.emit(item, &mut progression, &ctx);
        order.items[line_index].progression = progression;
        Some(text)
    }

    /// Produce the next emote line and copy it to the clipboard
    ///
    /// The cursor advance stands even if the clipboard fails; the failure is
    /// reported through `notifications`.
    pub fn copy_emote(
        &mut self,
        order_id: &str,
        menu_item_id: &str,
        menu: &[MenuItem],
        clipboard: &mut dyn Clipboard,
        notifications: &mut NotificationQueue,
    ) -> Option<String> {
        let text = self.next_emote(order_id, menu_item_id, menu)?;
        match clipboard.copy_text(&text) {
            Ok(()) => {
                notifications.info(COPIED_MESSAGE);
            }
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "Failed to copy emote");
                notifications.error(e.to_string());
            }
        }
        Some(text)
    }

    /// Render an RP helper command for an order and copy it
    pub fn copy_helper_command(
        &self,
        order_id: &str,
        command: &str,
        menu: &[MenuItem],
        clipboard: &mut dyn Clipboard,
        notifications: &mut NotificationQueue,
    ) -> Option<String> {
        let order = self.get_order(order_id)?;
        let text = render_helper_command(command, order, menu, &self.default_customer);
        match clipboard.copy_text(&text) {
            Ok(()) => {
                notifications.info(COPIED_MESSAGE);
            }
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "Failed to copy helper command");
                notifications.error(e.to_string());
            }
        }
        Some(text)
    }
}

/// Sanitized name, or `None` when blank
fn normalize_name(name: &str) -> Option<String> {
    let clean = sanitize_input(name);
    (!clean.is_empty()).then_some(clean)
}

#[cfg(test)]
mod tests;
