//! ProfileBook - the stored profile collection and the focused profile

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, MultistepEmotes, Profile, SECTION_ITEM_TYPE};
use shared::util::new_id;
use std::collections::HashSet;

use crate::orders::money::validate_price;
use crate::utils::validation::{MAX_INPUT_LENGTH, validate_image_url, validate_required_text};

/// Name given to freshly created section headers
pub const NEW_SECTION_NAME: &str = "New Section";

/// All stored profiles plus the one currently open
///
/// Menu item ids are unique across the whole book. Every mutation that can
/// introduce a menu item id checks this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileBook {
    profiles: Vec<Profile>,
    focused: Option<String>,
}

impl ProfileBook {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            focused: None,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn into_profiles(self) -> Vec<Profile> {
        self.profiles
    }

    pub fn get(&self, profile_id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == profile_id)
    }

    // ========== Focus ==========

    /// Open a stored profile; unknown ids leave focus unchanged
    pub fn focus(&mut self, profile_id: &str) -> bool {
        if self.get(profile_id).is_none() {
            return false;
        }
        self.focused = Some(profile_id.to_string());
        true
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn focused(&self) -> Option<&Profile> {
        self.get(self.focused.as_deref()?)
    }

    fn focused_mut(&mut self) -> AppResult<&mut Profile> {
        let id = self
            .focused
            .as_deref()
            .ok_or_else(|| AppError::new(ErrorCode::ProfileNotFocused))?;
        self.profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::ProfileNotFound).with_detail("id", id))
    }

    // ========== Profiles ==========

    /// Add a new profile
    ///
    /// Rejects a taken profile id and a menu that fails [`Self::check_menu`].
    pub fn add_profile(&mut self, profile: Profile) -> AppResult<()> {
        if self.get(&profile.id).is_some() {
            return Err(AppError::already_exists(format!("Profile {}", profile.id)));
        }
        self.check_menu(&profile)?;
        tracing::info!(profile_id = %profile.id, name = %profile.name, "Profile added");
        self.profiles.push(profile);
        Ok(())
    }

    /// Replace a stored profile with an edited copy (matched by id)
    pub fn update_profile(&mut self, profile: Profile) -> AppResult<()> {
        if self.get(&profile.id).is_none() {
            return Err(AppError::new(ErrorCode::ProfileNotFound).with_detail("id", profile.id));
        }
        self.check_menu(&profile)?;
        tracing::debug!(profile_id = %profile.id, "Profile updated");
        self.replace_profile(profile);
        Ok(())
    }

    /// Replace a profile wholesale, used by import after all checks passed
    pub(crate) fn replace_profile(&mut self, profile: Profile) -> bool {
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(slot) => {
                *slot = profile;
                true
            }
            None => false,
        }
    }

    // ========== Menu ==========

    /// Append an item to the focused profile's menu
    pub fn add_menu_item(&mut self, item: MenuItem) -> AppResult<()> {
        validate_required_text(&item.name, "Menu item name", MAX_INPUT_LENGTH)?;
        validate_price(item.price)?;
        if let Some(image) = &item.image {
            validate_image_url(image)?;
        }
        if self.all_menu_item_ids().contains(item.id.as_str()) {
            return Err(AppError::new(ErrorCode::MenuItemIdConflict).with_detail("id", item.id));
        }
        let profile = self.focused_mut()?;
        tracing::debug!(profile_id = %profile.id, menu_item_id = %item.id, "Menu item added");
        profile.menu.push(item);
        Ok(())
    }

    /// Remove an item from the focused profile's menu
    ///
    /// Orders that still reference it keep their lines.
    pub fn delete_menu_item(&mut self, menu_item_id: &str) -> AppResult<bool> {
        let profile = self.focused_mut()?;
        let before = profile.menu.len();
        profile.menu.retain(|m| m.id != menu_item_id);
        Ok(profile.menu.len() != before)
    }

    /// Store a reordered menu on the focused profile
    ///
    /// The new menu must hold exactly the same ids.
    pub fn apply_menu_order(&mut self, menu: Vec<MenuItem>) -> AppResult<()> {
        let profile = self.focused_mut()?;
        let current: HashSet<&str> = profile.menu_item_ids().collect();
        let reordered: HashSet<&str> = menu.iter().map(|m| m.id.as_str()).collect();
        if menu.len() != profile.menu.len() || current != reordered {
            return Err(AppError::invalid_request(
                "Reordered menu does not match the current menu",
            ));
        }
        profile.menu = menu;
        tracing::debug!(profile_id = %profile.id, "Menu order saved");
        Ok(())
    }

    /// Fresh section header entry, not yet added to any menu
    pub fn new_section_item() -> MenuItem {
        MenuItem {
            id: new_id(),
            name: NEW_SECTION_NAME.to_string(),
            item_type: SECTION_ITEM_TYPE.to_string(),
            available: true,
            price: 0.0,
            emotes: MultistepEmotes::default(),
            image: None,
        }
    }

    // ========== Id bookkeeping ==========

    /// Whole-menu checks for a profile about to be stored
    ///
    /// No id twice in its own menu, no id owned by another profile, every
    /// price in range.
    fn check_menu(&self, profile: &Profile) -> AppResult<()> {
        let mut seen = HashSet::new();
        if let Some(dup) = profile.menu_item_ids().find(|id| !seen.insert(*id)) {
            return Err(AppError::new(ErrorCode::DuplicateMenuItemId).with_detail("id", dup));
        }
        let others = self.menu_item_ids_except(&profile.id);
        if let Some(id) = profile.menu_item_ids().find(|id| others.contains(id)) {
            return Err(AppError::new(ErrorCode::MenuItemIdConflict).with_detail("id", id));
        }
        for item in &profile.menu {
            validate_price(item.price).map_err(|e| e.with_detail("id", item.id.as_str()))?;
        }
        Ok(())
    }

    /// Menu item ids of every profile except `profile_id`
    pub fn menu_item_ids_except(&self, profile_id: &str) -> HashSet<&str> {
        self.profiles
            .iter()
            .filter(|p| p.id != profile_id)
            .flat_map(|p| p.menu_item_ids())
            .collect()
    }

    fn all_menu_item_ids(&self) -> HashSet<&str> {
        self.profiles.iter().flat_map(|p| p.menu_item_ids()).collect()
    }
}
