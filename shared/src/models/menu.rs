//! Menu Model

use serde::{Deserialize, Serialize};

/// `type` value used for section header rows in a menu
pub const SECTION_ITEM_TYPE: &str = "section";

/// Menu item entity
///
/// `id` is unique within a profile's menu and, by import policy, across every
/// stored profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default = "default_item_type")]
    pub item_type: String,
    #[serde(default = "default_available")]
    pub available: bool,
    /// Unit price (currency-agnostic, two decimal places when rendered)
    pub price: f64,
    #[serde(default)]
    pub emotes: MultistepEmotes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_item_type() -> String {
    "item".to_string()
}

fn default_available() -> bool {
    true
}

impl MenuItem {
    /// Whether this row is a section header rather than an orderable item
    pub fn is_section_header(&self) -> bool {
        self.item_type == SECTION_ITEM_TYPE
    }
}

/// Emote configuration of a menu item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultistepEmotes {
    /// Advanced items cycle through sections step by step
    #[serde(default)]
    pub advanced: bool,
    #[serde(default)]
    pub sections: Vec<EmoteSection>,
}

impl MultistepEmotes {
    /// Simple (non-advanced) emotes: one section holding the alternatives
    pub fn simple(lines: Vec<String>) -> Self {
        Self {
            advanced: false,
            sections: vec![EmoteSection {
                name: "Default".to_string(),
                steps: lines,
            }],
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of steps in a section, 0 for an out-of-range index
    pub fn step_count(&self, section_index: usize) -> usize {
        self.sections
            .get(section_index)
            .map(|s| s.steps.len())
            .unwrap_or(0)
    }

    /// Template at a cursor position
    pub fn step(&self, section_index: usize, step_index: usize) -> Option<&str> {
        self.sections
            .get(section_index)?
            .steps
            .get(step_index)
            .map(String::as_str)
    }
}

/// Named ordered sequence of step templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmoteSection {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Find a menu item by id
pub fn find_menu_item<'a>(menu: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
    menu.iter().find(|m| m.id == id)
}
