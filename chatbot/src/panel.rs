//! Chat panel visibility/size state machine.
//!
//! DESIGN
//! ======
//! `Closed → OpenMinimized ↔ OpenMaximized → Closed`. The machine is the only
//! source of truth; DOM classes and inline widths are derived from
//! [`PanelMachine::view`] on every transition.
//!
//! Animations run on fixed timers owned by the UI layer. Each transition
//! that schedules a timer bumps `epoch`, and [`PanelMachine::settle`] ignores
//! timers from an older epoch, so a close timer can never hide a panel that
//! was re-opened while sliding out.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::config::WidgetConfig;

/// Width used while maximized.
pub const MAXIMIZED_WIDTH_CSS: &str = "calc(100vw - 16px)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    OpenMinimized,
    OpenMaximized,
}

/// Animation currently running between two visible states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelTransition {
    Opening,
    Closing,
}

/// Side effect the UI layer must perform after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEffect {
    FocusInput { after_ms: u32 },
    ScrollToBottom { after_ms: u32 },
    /// Call [`PanelMachine::settle`] with `epoch` once `after_ms` elapses.
    Settle { epoch: u64, after_ms: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelWidth {
    Px(u32),
    FullViewport,
}

impl PanelWidth {
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Px(px) => format!("{px}px"),
            Self::FullViewport => MAXIMIZED_WIDTH_CSS.to_owned(),
        }
    }
}

/// DOM projection of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelView {
    /// Panel is displayed at all.
    pub visible: bool,
    /// Panel sits at its on-screen position (not sliding out).
    pub slid_in: bool,
    pub maximized: bool,
    pub width: PanelWidth,
}

impl PanelView {
    /// CSS classes for the panel root element.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["chat-popup"];
        if self.visible {
            classes.push("chat-popup--visible");
        }
        if self.slid_in {
            classes.push("chat-popup--open");
        }
        if self.maximized {
            classes.push("chat-popup--maximized");
        }
        classes
    }
}

#[derive(Clone, Debug)]
pub struct PanelMachine {
    state: PanelState,
    transition: Option<PanelTransition>,
    epoch: u64,
    panel_width_px: u32,
    open_duration_ms: u32,
    close_duration_ms: u32,
    focus_delay_ms: u32,
    scroll_delay_ms: u32,
}

impl PanelMachine {
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            state: PanelState::Closed,
            transition: None,
            epoch: 0,
            panel_width_px: config.panel_width_px,
            open_duration_ms: config.open_duration_ms,
            close_duration_ms: config.close_duration_ms,
            focus_delay_ms: config.focus_delay_ms,
            scroll_delay_ms: config.scroll_delay_ms,
        }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    pub fn transition(&self) -> Option<PanelTransition> {
        self.transition
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state != PanelState::Closed
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.transition == Some(PanelTransition::Closing)
    }

    /// Closed → `OpenMinimized`. Also re-opens a panel that is sliding out.
    pub fn open(&mut self) -> Vec<PanelEffect> {
        if self.is_open() && !self.is_closing() {
            return Vec::new();
        }
        self.state = PanelState::OpenMinimized;
        self.transition = Some(PanelTransition::Opening);
        self.epoch += 1;
        vec![
            PanelEffect::FocusInput { after_ms: self.focus_delay_ms },
            PanelEffect::Settle { epoch: self.epoch, after_ms: self.open_duration_ms },
        ]
    }

    /// `OpenMinimized` → `OpenMaximized`.
    pub fn maximize(&mut self) -> Vec<PanelEffect> {
        if self.state != PanelState::OpenMinimized || self.is_closing() {
            return Vec::new();
        }
        self.state = PanelState::OpenMaximized;
        vec![PanelEffect::ScrollToBottom { after_ms: self.scroll_delay_ms }]
    }

    /// `OpenMaximized` → `OpenMinimized`.
    pub fn minimize(&mut self) -> Vec<PanelEffect> {
        if self.state != PanelState::OpenMaximized || self.is_closing() {
            return Vec::new();
        }
        self.state = PanelState::OpenMinimized;
        vec![PanelEffect::ScrollToBottom { after_ms: self.scroll_delay_ms }]
    }

    /// Start sliding out. The state becomes `Closed` only in [`Self::settle`].
    pub fn close(&mut self) -> Vec<PanelEffect> {
        if !self.is_open() || self.is_closing() {
            return Vec::new();
        }
        self.transition = Some(PanelTransition::Closing);
        self.epoch += 1;
        vec![PanelEffect::Settle { epoch: self.epoch, after_ms: self.close_duration_ms }]
    }

    /// Finish the animation scheduled under `epoch`. Returns `false` for a
    /// stale timer.
    pub fn settle(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        if self.transition.take() == Some(PanelTransition::Closing) {
            self.state = PanelState::Closed;
        }
        true
    }

    #[must_use]
    pub fn view(&self) -> PanelView {
        let visible = self.is_open();
        let maximized = self.state == PanelState::OpenMaximized;
        PanelView {
            visible,
            slid_in: visible && !self.is_closing(),
            maximized,
            width: if maximized { PanelWidth::FullViewport } else { PanelWidth::Px(self.panel_width_px) },
        }
    }
}

impl Default for PanelMachine {
    fn default() -> Self {
        Self::new(&WidgetConfig::default())
    }
}
