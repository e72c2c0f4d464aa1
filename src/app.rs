//! Application state and event handling
//!
//! This is the core of orgportal, managing:
//! - Application state across both tabs and the notification bell
//! - Event handling (keyboard and mouse input)
//! - Background API calls and their results

use crate::components::notification_bell::visible_notifications;
use crate::components::{
    AvatarResolver, EditorMode, NotificationBell, PasswordForm, PointerDispatcher, ProfileEditor,
};
use crate::config::Config;
use crate::error::PortalError;
use crate::portal::{NotificationStore, PortalData, ProfileApi};
use crate::types::{ProfileRecord, Tab};
use crate::ui::{layout, Theme};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Seconds a flash message stays on screen
const FLASH_SECONDS: u64 = 3;

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub active_tab: Tab,
    pub config: Config,
    /// Where theme changes are written; `None` if no config dir exists
    pub config_path: Option<PathBuf>,
    pub theme: Theme,
    /// Last known terminal area, used for mouse hit-testing
    pub viewport: Rect,

    // Widgets
    pub editor: ProfileEditor,
    pub password: PasswordForm,
    pub bell: NotificationBell,
    pub pointer: PointerDispatcher,
    pub avatars: AvatarResolver,

    // Collaborators
    pub store: NotificationStore,
    api: Arc<dyn ProfileApi>,

    // Popup state
    pub popup: PopupState,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)

    // Background task channel
    task_tx: mpsc::UnboundedSender<TaskResult>,
    task_rx: mpsc::UnboundedReceiver<TaskResult>,
}

/// Popup overlay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    None,
    Error { title: String, message: String },
    /// Every notification, without the dropdown cap
    AllNotifications { scroll: usize },
}

/// Outcome of a spawned API call
#[derive(Debug)]
pub enum TaskResult {
    ProfileSaved(Result<ProfileRecord, PortalError>),
    PasswordChanged(Result<(), PortalError>),
}

/// Which handler owns the keyboard right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Popup,
    DropdownOpen,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config, data: PortalData, api: Arc<dyn ProfileApi>) -> Self {
        let theme = Theme::from_name(config.theme);
        let avatars = AvatarResolver::new(config.placeholder_avatar.clone());
        let (task_tx, task_rx) = mpsc::unbounded_channel();

        let pointer = PointerDispatcher::new();
        let mut bell = NotificationBell::new();
        bell.mount(&pointer);

        Self {
            should_quit: false,
            active_tab: Tab::Profile,
            config_path: Config::path().ok(),
            theme,
            viewport: Rect::new(0, 0, 80, 24),

            editor: ProfileEditor::new(data.profile),
            password: PasswordForm::new(config.password.min_length),
            bell,
            pointer,
            avatars,

            store: NotificationStore::new(data.notifications),
            api,

            popup: PopupState::None,
            flash_message: None,

            task_tx,
            task_rx,
            config,
        }
    }

    /// Get current app state
    pub fn state(&self) -> AppState {
        if self.popup != PopupState::None {
            AppState::Popup
        } else if self.bell.is_open() {
            AppState::DropdownOpen
        } else {
            AppState::Normal
        }
    }

    /// Periodic housekeeping, called once per frame
    pub fn tick(&mut self) {
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed().as_secs() >= FLASH_SECONDS {
                self.flash_message = None;
            }
        }
        self.check_background_tasks();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state() {
            AppState::Popup => self.handle_popup_key(key),
            AppState::DropdownOpen => self.handle_dropdown_key(key),
            AppState::Normal => self.handle_normal_key(key),
        }
    }

    /// Handle key in normal state
    fn handle_normal_key(&mut self, key: KeyEvent) {
        // Global keys (work in both tabs)
        match key.code {
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.bell.toggle();
                return;
            }
            KeyCode::F(1) => {
                self.active_tab = Tab::Profile;
                return;
            }
            KeyCode::F(2) => {
                self.active_tab = Tab::Password;
                return;
            }
            KeyCode::Left | KeyCode::Right => {
                self.active_tab = self.active_tab.other();
                return;
            }
            _ => {}
        }

        match self.active_tab {
            Tab::Profile => self.handle_profile_key(key),
            Tab::Password => self.handle_password_key(key),
        }
    }

    /// Handle keys in Profile tab
    fn handle_profile_key(&mut self, key: KeyEvent) {
        match self.editor.mode() {
            EditorMode::Viewing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('e') | KeyCode::Enter => {
                    self.editor.begin_edit();
                }
                KeyCode::Char('n') => self.bell.toggle(),
                KeyCode::Char('t') => self.cycle_theme(),
                _ => {}
            },
            EditorMode::Editing => match key.code {
                KeyCode::Esc => {
                    self.editor.cancel();
                    self.show_flash("Changes discarded", false);
                }
                KeyCode::Enter => self.submit_profile(),
                KeyCode::Up | KeyCode::BackTab => self.editor.focus_prev(),
                KeyCode::Down | KeyCode::Tab => self.editor.focus_next(),
                KeyCode::Backspace => {
                    self.editor.backspace();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.editor.input_char(c);
                }
                _ => {}
            },
            // Edit, cancel and save stay disabled until the call returns
            EditorMode::Saving => {}
        }
    }

    /// Handle keys in Password tab
    fn handle_password_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let field = self.password.focus();
                self.password.toggle_visibility(field);
            }
            KeyCode::Esc => {
                self.password.clear();
            }
            KeyCode::Enter => self.submit_password(),
            KeyCode::Up | KeyCode::BackTab => self.password.focus_prev(),
            KeyCode::Down | KeyCode::Tab => self.password.focus_next(),
            KeyCode::Backspace => {
                self.password.backspace();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.password.input_char(c);
            }
            _ => {}
        }
    }

    /// Handle keys while the notification dropdown is open
    fn handle_dropdown_key(&mut self, key: KeyEvent) {
        let visible = visible_notifications(self.store.items()).len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.bell.move_cursor(1, visible),
            KeyCode::Char('k') | KeyCode::Up => self.bell.move_cursor(-1, visible),
            KeyCode::Enter => {
                if let Some(id) = self.bell.cursor_id(self.store.items()) {
                    self.select_notification(id);
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') => self.mark_all_read(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.see_all(),
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.bell.toggle();
            }
            KeyCode::Char('n') | KeyCode::Char('q') | KeyCode::Esc => self.bell.toggle(),
            _ => {}
        }
    }

    /// Handle keys in popups
    fn handle_popup_key(&mut self, key: KeyEvent) {
        match &mut self.popup {
            PopupState::None => {}
            PopupState::Error { .. } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o')) {
                    self.popup = PopupState::None;
                }
            }
            PopupState::AllNotifications { scroll } => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    let max = self.store.items().len().saturating_sub(1);
                    *scroll = (*scroll + 1).min(max);
                }
                KeyCode::Char('k') | KeyCode::Up => *scroll = scroll.saturating_sub(1),
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    self.popup = PopupState::None;
                }
                _ => {}
            },
        }
    }

    /// Handle a mouse event. Only left pointer-downs matter.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.popup != PopupState::None {
            return;
        }
        let position = Position::new(event.column, event.row);

        // Outside-click listeners see the event first
        self.sync_pointer_regions();
        let outside = self.pointer.dispatch(position);
        if self.bell.handle_outside(&outside) {
            return;
        }

        let anchor = self.bell_anchor();
        if anchor.contains(position) {
            self.bell.toggle();
            return;
        }

        if self.bell.is_open() {
            let visible = visible_notifications(self.store.items());
            let dropdown = layout::dropdown(anchor, visible.len(), self.viewport);
            if let Some(index) = layout::dropdown_item_at(dropdown, visible.len(), position) {
                let id = visible[index].id;
                self.select_notification(id);
            }
        }
    }

    // === LAYOUT ===

    pub fn bell_anchor(&self) -> Rect {
        layout::bell_anchor(layout::screen(self.viewport).header)
    }

    /// Tell the dispatcher where the bell currently is
    fn sync_pointer_regions(&self) {
        let anchor = self.bell_anchor();
        let visible = visible_notifications(self.store.items()).len();
        let dropdown = layout::dropdown(anchor, visible, self.viewport);
        self.bell.set_region(anchor, Some(dropdown));
    }

    // === ACTIONS ===

    /// Editing -> Saving, then run the save in the background
    fn submit_profile(&mut self) {
        match self.editor.begin_save() {
            Ok(record) => {
                let api = Arc::clone(&self.api);
                let tx = self.task_tx.clone();
                tokio::spawn(async move {
                    let result = api.save(record).await;
                    if tx.send(TaskResult::ProfileSaved(result)).is_err() {
                        warn!("profile save finished after the app closed");
                    }
                });
            }
            Err(e) => {
                debug!(error = %e, "profile save rejected before submission");
            }
        }
    }

    fn submit_password(&mut self) {
        match self.password.begin_submit() {
            Ok(request) => {
                let api = Arc::clone(&self.api);
                let tx = self.task_tx.clone();
                tokio::spawn(async move {
                    let result = api.change_password(request).await;
                    if tx.send(TaskResult::PasswordChanged(result)).is_err() {
                        warn!("password change finished after the app closed");
                    }
                });
            }
            Err(e) => {
                debug!(error = %e, "password change rejected before submission");
            }
        }
    }

    /// Mark read through the store, then close the dropdown
    fn select_notification(&mut self, id: u64) {
        let store = &mut self.store;
        self.bell.select_item(id, |id| {
            store.mark_as_read(id);
        });
        if let Some(item) = self.store.get(id) {
            info!(id, title = %item.title, "notification opened");
        }
    }

    fn mark_all_read(&mut self) {
        let changed = self.store.mark_all_as_read();
        if changed > 0 {
            self.show_flash(&format!("Marked {} notification(s) as read", changed), false);
        }
    }

    fn see_all(&mut self) {
        if self.bell.is_open() {
            self.bell.toggle();
        }
        self.popup = PopupState::AllNotifications { scroll: 0 };
    }

    fn cycle_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        self.theme = Theme::from_name(self.config.theme);
        let saved = match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Err(anyhow::anyhow!("Could not determine config directory")),
        };
        if let Err(e) = saved {
            self.show_error("Save Failed", &format!("{:#}", e));
        } else {
            self.show_flash(&format!("Theme: {}", self.config.theme.as_str()), false);
        }
    }

    // === BACKGROUND TASKS ===

    /// Drain finished API calls
    pub fn check_background_tasks(&mut self) {
        while let Ok(result) = self.task_rx.try_recv() {
            self.apply_task_result(result);
        }
    }

    fn apply_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::ProfileSaved(Ok(record)) => {
                self.editor.finish_save(Ok(record));
                self.show_flash("Profile saved", false);
            }
            TaskResult::ProfileSaved(Err(e)) => {
                self.report_failure("Save Failed", &e);
                self.editor.finish_save(Err(e));
            }
            TaskResult::PasswordChanged(Ok(())) => {
                self.password.finish_submit(Ok(()));
                self.show_flash("Password updated", false);
            }
            TaskResult::PasswordChanged(Err(e)) => {
                self.report_failure("Password Update Failed", &e);
                self.password.finish_submit(Err(e));
            }
        }
    }

    /// Auth failures get a popup; everything else an inline error plus flash
    fn report_failure(&mut self, title: &str, error: &PortalError) {
        if error.requires_reauth() {
            self.show_error(
                "Session Expired",
                &format!("{}\n\nSign in again to continue. Your changes were kept.", error),
            );
        } else if error.is_retryable() {
            self.show_flash(&format!("{}: {} (press Enter to retry)", title, error), true);
        } else {
            self.show_flash(&format!("{}: {}", title, error), true);
        }
    }

    /// Wait for the next background result (tests only)
    #[cfg(test)]
    pub async fn wait_for_task(&mut self) {
        if let Some(result) = self.task_rx.recv().await {
            self.apply_task_result(result);
        }
    }

    /// Show an error popup
    fn show_error(&mut self, title: &str, message: &str) {
        self.popup = PopupState::Error {
            title: title.into(),
            message: message.into(),
        };
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PasswordField;
    use crate::config::{BackendOptions, FailureMode, ThemeName};
    use crate::portal::SimulatedBackend;

    fn app_with(failure: FailureMode) -> (App, Arc<SimulatedBackend>) {
        let data = PortalData::demo();
        let backend = Arc::new(SimulatedBackend::new(
            data.profile.clone(),
            data.password.clone(),
            &BackendOptions {
                latency_ms: 0,
                failure,
            },
        ));
        let mut app = App::new(Config::default(), data, backend.clone());
        app.resize(100, 40);
        (app, backend)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[tokio::test]
    async fn test_edit_and_save_profile() {
        let (mut app, backend) = app_with(FailureMode::None);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.editor.mode(), EditorMode::Editing);
        type_text(&mut app, "belle");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.editor.mode(), EditorMode::Saving);

        // Input is ignored while saving
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.editor.mode(), EditorMode::Saving);

        app.wait_for_task().await;
        assert_eq!(app.editor.mode(), EditorMode::Viewing);
        assert_eq!(app.editor.persisted().first_name, "Mariabelle");
        assert_eq!(backend.stored_profile().unwrap().first_name, "Mariabelle");
        assert!(matches!(&app.flash_message, Some((msg, false, _)) if msg == "Profile saved"));
    }

    #[tokio::test]
    async fn test_network_failure_keeps_editing() {
        let (mut app, _backend) = app_with(FailureMode::Network);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        app.wait_for_task().await;

        assert_eq!(app.editor.mode(), EditorMode::Editing);
        assert_eq!(app.editor.profile().first_name, "Mariax");
        assert_eq!(app.editor.persisted().first_name, "Maria");
        assert!(app.editor.error().unwrap().is_retryable());
        assert!(matches!(&app.flash_message, Some((_, true, _))));
        assert_eq!(app.popup, PopupState::None);
    }

    #[tokio::test]
    async fn test_auth_failure_shows_popup() {
        let (mut app, _backend) = app_with(FailureMode::Auth);

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Enter);
        app.wait_for_task().await;

        assert_eq!(app.editor.mode(), EditorMode::Editing);
        assert!(matches!(&app.popup, PopupState::Error { title, .. } if title == "Session Expired"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.popup, PopupState::None);
    }

    #[test]
    fn test_cancel_reverts_edits() {
        let (mut app, _backend) = app_with(FailureMode::None);
        let before = app.editor.profile().clone();

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.editor.mode(), EditorMode::Viewing);
        assert_eq!(app.editor.profile(), &before);
    }

    #[test]
    fn test_edit_survives_tab_switch() {
        let (mut app, _backend) = app_with(FailureMode::None);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "!");
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.active_tab, Tab::Password);
        press(&mut app, KeyCode::F(1));

        assert_eq!(app.editor.mode(), EditorMode::Editing);
        assert_eq!(app.editor.profile().first_name, "Maria!");
    }

    #[test]
    fn test_validation_error_blocks_save() {
        let (mut app, _backend) = app_with(FailureMode::None);

        press(&mut app, KeyCode::Char('e'));
        for _ in 0.."Maria".len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.editor.mode(), EditorMode::Editing);
        assert!(matches!(app.editor.error(), Some(PortalError::Validation(_))));
    }

    #[tokio::test]
    async fn test_password_change_flow() {
        let (mut app, _backend) = app_with(FailureMode::None);
        press(&mut app, KeyCode::F(2));

        type_text(&mut app, "changeme123");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "brandnew99");
        ctrl(&mut app, 't');
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "brandnew99");

        assert!(app.password.is_visible(PasswordField::New));
        assert!(!app.password.is_visible(PasswordField::Current));
        assert!(!app.password.is_visible(PasswordField::Confirm));

        press(&mut app, KeyCode::Enter);
        assert!(app.password.is_submitting());
        app.wait_for_task().await;

        assert!(!app.password.is_submitting());
        assert!(app.password.error().is_none());
        assert_eq!(app.password.value(PasswordField::Current), "");
    }

    #[tokio::test]
    async fn test_wrong_current_password_is_reported() {
        let (mut app, _backend) = app_with(FailureMode::None);
        press(&mut app, KeyCode::F(2));

        type_text(&mut app, "notmypassword");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "brandnew99");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "brandnew99");
        press(&mut app, KeyCode::Enter);
        app.wait_for_task().await;

        assert!(matches!(app.password.error(), Some(PortalError::Validation(_))));
        assert_eq!(app.password.value(PasswordField::New), "brandnew99");
    }

    #[test]
    fn test_bell_keyboard_select() {
        let (mut app, _backend) = app_with(FailureMode::None);
        assert_eq!(app.store.unread_count(), 3);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state(), AppState::DropdownOpen);

        press(&mut app, KeyCode::Enter);
        assert!(!app.bell.is_open());
        assert!(app.store.get(1).unwrap().read);
        assert_eq!(app.store.unread_count(), 2);
    }

    #[test]
    fn test_bell_mouse_scenario() {
        let (mut app, _backend) = app_with(FailureMode::None);
        let anchor = app.bell_anchor();

        click(&mut app, anchor.x + 1, anchor.y);
        assert!(app.bell.is_open());

        let dropdown = layout::dropdown(anchor, 5, app.viewport);
        let first = layout::dropdown_item(dropdown, 0).unwrap();
        click(&mut app, first.x + 2, first.y + 1);

        assert!(!app.bell.is_open());
        assert!(app.store.get(1).unwrap().read);
    }

    #[test]
    fn test_click_outside_closes_dropdown() {
        let (mut app, _backend) = app_with(FailureMode::None);

        // Closed: outside click does nothing
        click(&mut app, 2, 20);
        assert!(!app.bell.is_open());

        ctrl(&mut app, 'b');
        assert!(app.bell.is_open());

        // Inside the dropdown but not on an entry: stays open
        let anchor = app.bell_anchor();
        let dropdown = layout::dropdown(anchor, 5, app.viewport);
        click(&mut app, dropdown.x + 2, dropdown.y + 1);
        assert!(app.bell.is_open());

        click(&mut app, 2, 20);
        assert!(!app.bell.is_open());
        assert_eq!(app.store.unread_count(), 3);
    }

    #[test]
    fn test_mark_all_and_see_all() {
        let (mut app, _backend) = app_with(FailureMode::None);

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.store.unread_count(), 0);
        assert!(app.bell.is_open());

        press(&mut app, KeyCode::Char('s'));
        assert!(!app.bell.is_open());
        assert_eq!(app.popup, PopupState::AllNotifications { scroll: 0 });

        for _ in 0..20 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.popup, PopupState::AllNotifications { scroll: 7 });

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.popup, PopupState::None);
    }

    #[tokio::test]
    async fn test_theme_save_keeps_failure_override_out_of_config() {
        let dir = std::env::temp_dir().join(format!("orgportal-app-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = std::fs::remove_dir_all(&dir);

        // A one-run override reaches the backend only
        let data = PortalData::demo();
        let backend = Arc::new(SimulatedBackend::new(
            data.profile.clone(),
            data.password.clone(),
            &BackendOptions {
                latency_ms: 0,
                failure: FailureMode::Network,
            },
        ));
        let mut app = App::new(Config::default(), data, backend);
        app.config_path = Some(path.clone());

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.popup, PopupState::None);

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.theme, ThemeName::Nord);
        assert_eq!(saved.backend.failure, FailureMode::None);

        // The running session still fails as requested
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Enter);
        app.wait_for_task().await;
        assert!(app.editor.error().unwrap().is_retryable());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _backend) = app_with(FailureMode::None);
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.password.value(PasswordField::Current), "q");

        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
