//! Tab and theme selection. Plain state; the caller acts on [`TabChange`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Analysis,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Modifier class applied to the app root.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// What a tab selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    pub changed: bool,
    /// The history list should be fetched again.
    pub refresh_history: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active_tab: Tab,
    theme: Theme,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn select_tab(&mut self, tab: Tab) -> TabChange {
        let changed = self.active_tab != tab;
        self.active_tab = tab;
        TabChange {
            changed,
            refresh_history: changed && tab == Tab::History,
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
