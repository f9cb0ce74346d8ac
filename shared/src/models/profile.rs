//! Profile Model

use serde::{Deserialize, Serialize};

use super::menu::{MenuItem, find_menu_item};
use super::theme::CustomTheme;

/// Roleplay helper: a named set of command templates
///
/// Commands may reference `{items}`, `{customerName}`/`{name}` and
/// `{customerId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpHelper {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub commands: Vec<String>,
}

/// Profile entity: one venue's menu, helpers and look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub menu: Vec<MenuItem>,
    #[serde(default)]
    pub rp_helpers: Vec<RpHelper>,
    /// Profile image URL
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<CustomTheme>,
}

impl Profile {
    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        find_menu_item(&self.menu, id)
    }

    /// Menu item ids in menu order
    pub fn menu_item_ids(&self) -> impl Iterator<Item = &str> {
        self.menu.iter().map(|m| m.id.as_str())
    }
}
