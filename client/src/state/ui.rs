//! Local UI chrome state (theme, navigation menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the chat controller so the
//! page chrome can evolve independently of the conversation.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the theme toggle and the mobile navigation menu.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close_mobile_menu(&mut self) -> bool {
        std::mem::replace(&mut self.mobile_menu_open, false)
    }
}
