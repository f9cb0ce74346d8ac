//! `{variable}` template rendering
//!
//! Placeholders are `{word}` tokens. A placeholder without a value in the
//! context renders as an empty string.

use regex::Regex;
use shared::models::{MenuItem, Order, find_menu_item};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// Label used for order lines whose menu item no longer exists
pub const UNKNOWN_ITEM_LABEL: &str = "Unknown item";

/// Variables available to a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmoteContext {
    vars: HashMap<String, String>,
}

impl EmoteContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Context for one order line: `{name}`, `{customerName}`, `{item}`, `{qty}`
    ///
    /// `{name}` and `{customerName}` fall back to `default_customer` when the
    /// order has no customer name.
    pub fn for_order_item(order: &Order, item: &MenuItem, qty: u32, default_customer: &str) -> Self {
        let customer = order.customer_name.as_deref().unwrap_or(default_customer);
        Self::new()
            .with("name", customer)
            .with("customerName", customer)
            .with("item", item.name.as_str())
            .with("qty", qty.to_string())
    }

    /// Context for RP helper commands: `{items}`, `{name}`, `{customerName}`, `{customerId}`
    pub fn for_helper(order: &Order, menu: &[MenuItem], default_customer: &str) -> Self {
        let customer = order.customer_name.as_deref().unwrap_or(default_customer);
        let mut ctx = Self::new()
            .with("items", describe_items(order, menu))
            .with("name", customer)
            .with("customerName", customer);
        if let Some(id) = order.customer_id {
            ctx.set("customerId", id.to_string());
        }
        ctx
    }
}

/// Replace every `{variable}` with its context value (or nothing)
pub fn interpolate(template: &str, ctx: &EmoteContext) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures| {
            ctx.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// "2x Soda, 1x Bread" style summary of an order
pub fn describe_items(order: &Order, menu: &[MenuItem]) -> String {
    order
        .items
        .iter()
        .map(|line| {
            let name = find_menu_item(menu, &line.id)
                .map(|m| m.name.as_str())
                .unwrap_or(UNKNOWN_ITEM_LABEL);
            format!("{}x {}", line.qty, name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render an RP helper command for an order
pub fn render_helper_command(
    command: &str,
    order: &Order,
    menu: &[MenuItem],
    default_customer: &str,
) -> String {
    interpolate(command, &EmoteContext::for_helper(order, menu, default_customer))
}
