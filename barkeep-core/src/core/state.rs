use std::path::Path;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::MenuItem;

use crate::core::Config;
use crate::menu::MenuReorder;
use crate::orders::OrdersManager;
use crate::profiles::{self, ProfileBook, ProfileStore, StorageError};
use crate::services::{Clipboard, NotificationQueue, ThemeState};

/// Notification after a successful import
const IMPORT_SUCCESS_MESSAGE: &str = "Profile updated successfully!";

/// Desk state - everything one open desk session owns
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | ProfileStore | profiles.json 读写 |
/// | book | ProfileBook | 全部 profile 与当前 profile |
/// | orders | OrdersManager | 订单与 emote 游标 |
/// | theme | ThemeState | 明暗模式与自定义配色 |
/// | notifications | NotificationQueue | 通知队列 |
///
/// Single writer: every mutating call takes `&mut self`.
#[derive(Debug)]
pub struct DeskState {
    pub config: Config,
    pub store: ProfileStore,
    pub book: ProfileBook,
    pub orders: OrdersManager,
    pub theme: ThemeState,
    pub notifications: NotificationQueue,
}

impl DeskState {
    /// Load stored profiles and build the session
    ///
    /// The first stored profile (if any) is focused.
    pub async fn initialize(config: Config) -> Result<Self, StorageError> {
        let store = ProfileStore::new(config.profiles_path());
        let profiles = store.load().await?;
        let mut book = ProfileBook::new(profiles);
        if let Some(first) = book.profiles().first().map(|p| p.id.clone()) {
            book.focus(&first);
        }

        let mut orders = OrdersManager::new();
        orders.set_default_customer(config.default_customer.clone());

        let mut theme = ThemeState::default();
        theme.apply_profile(book.focused().and_then(|p| p.custom_theme.as_ref()));

        Ok(Self {
            notifications: NotificationQueue::new(config.toast_duration_ms),
            config,
            store,
            book,
            orders,
            theme,
        })
    }

    /// Menu of the focused profile (empty when none is open)
    pub fn menu(&self) -> &[MenuItem] {
        self.book.focused().map(|p| p.menu.as_slice()).unwrap_or_default()
    }

    /// Switch profile and apply its theme
    pub fn focus_profile(&mut self, profile_id: &str) -> bool {
        if !self.book.focus(profile_id) {
            return false;
        }
        self.theme
            .apply_profile(self.book.focused().and_then(|p| p.custom_theme.as_ref()));
        true
    }

    /// Write the profile collection to disk
    pub async fn persist(&self) -> Result<(), StorageError> {
        self.store.save(self.book.profiles()).await
    }

    /// Copy the next emote line of an order item against the focused menu
    pub fn copy_emote(
        &mut self,
        order_id: &str,
        menu_item_id: &str,
        clipboard: &mut dyn Clipboard,
    ) -> Option<String> {
        let menu = self
            .book
            .focused()
            .map(|p| p.menu.as_slice())
            .unwrap_or_default();
        self.orders
            .copy_emote(order_id, menu_item_id, menu, clipboard, &mut self.notifications)
    }

    /// Finish a menu drag and store the new order on the focused profile
    ///
    /// Returns whether the menu changed. The drag is always over afterwards.
    pub fn finish_menu_drag(&mut self, reorder: &mut MenuReorder) -> AppResult<bool> {
        let Some(menu) = reorder.end_drag(self.menu()) else {
            return Ok(false);
        };
        self.book.apply_menu_order(menu)?;
        Ok(true)
    }

    /// Import a profile file over the focused profile and persist the result
    ///
    /// All-or-nothing: if the save fails the in-memory profile and theme are
    /// rolled back. Outcome is reported through the notification queue as well.
    pub async fn import_file(&mut self, path: &Path) -> AppResult<String> {
        let book_before = self.book.clone();
        let theme_before = self.theme.clone();

        let outcome = match profiles::read_import_file(path).await {
            Ok((file_name, bytes)) => {
                profiles::import_profile(&mut self.book, &mut self.theme, &file_name, &bytes)
            }
            Err(e) => Err(e),
        };

        let profile_id = match outcome {
            Ok(id) => id,
            Err(e) => {
                self.notifications.error(e.to_string());
                return Err(e.into());
            }
        };

        if let Err(e) = self.persist().await {
            tracing::error!(profile_id = %profile_id, error = %e, "Import not saved, rolled back");
            self.book = book_before;
            self.theme = theme_before;
            self.notifications.error(e.to_string());
            return Err(e.into());
        }
        self.notifications.success(IMPORT_SUCCESS_MESSAGE);
        Ok(profile_id)
    }

    /// Export the focused profile: `(file_name, pretty_json)`
    pub fn export_focused(&self) -> AppResult<(String, String)> {
        let profile = self
            .book
            .focused()
            .ok_or_else(|| AppError::new(ErrorCode::ProfileNotFocused))?;
        Ok(profiles::export_profile(profile)?)
    }
}
