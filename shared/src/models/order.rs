//! Order Model

use serde::{Deserialize, Serialize};

/// Position of an order item inside its menu item's emote cycle
///
/// Only advanced menu items carry a cursor. When present,
/// `section_index < sections.len()` and
/// `step_index < sections[section_index].steps.len()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Progression {
    #[default]
    None,
    At {
        section_index: usize,
        step_index: usize,
    },
}

impl Progression {
    pub fn at(section_index: usize, step_index: usize) -> Self {
        Self::At {
            section_index,
            step_index,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// One line of an order, referencing a menu item by id
///
/// The referenced menu item may have been deleted since; that is tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Menu item reference
    pub id: String,
    pub qty: u32,
    #[serde(default)]
    pub progression: Progression,
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub items: Vec<OrderItem>,
    /// Creation time (Unix millis)
    pub created_at: i64,
}

impl Order {
    pub fn item(&self, menu_item_id: &str) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.id == menu_item_id)
    }

    pub fn item_mut(&mut self, menu_item_id: &str) -> Option<&mut OrderItem> {
        self.items.iter_mut().find(|i| i.id == menu_item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progression_serde() {
        let json = serde_json::to_value(Progression::at(1, 2)).unwrap();
        assert_eq!(json["kind"], "at");
        assert_eq!(json["sectionIndex"], 1);
        assert_eq!(json["stepIndex"], 2);

        let none = serde_json::to_value(Progression::None).unwrap();
        assert_eq!(none["kind"], "none");
    }

    #[test]
    fn test_order_item_without_progression_defaults_to_none() {
        let item: OrderItem = serde_json::from_str(r#"{"id":"m1","qty":2}"#).unwrap();
        assert!(item.progression.is_none());
    }

    #[test]
    fn test_order_item_lookup() {
        let mut order = Order {
            id: "o1".into(),
            customer_name: None,
            customer_id: None,
            items: vec![OrderItem {
                id: "m1".into(),
                qty: 1,
                progression: Progression::None,
            }],
            created_at: 0,
        };
        assert!(order.item("m1").is_some());
        assert!(order.item("m2").is_none());
        order.item_mut("m1").unwrap().qty = 3;
        assert_eq!(order.items[0].qty, 3);
    }
}
