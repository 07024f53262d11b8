#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenId {
    #[default]
    Settings,
    TravelTalk,
}

impl ScreenId {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::TravelTalk => "chats",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Settings => Self::TravelTalk,
            Self::TravelTalk => Self::Settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_screen: ScreenId,
    notice: Option<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::starting_on(ScreenId::default())
    }
}

impl ShellState {
    pub fn starting_on(screen: ScreenId) -> Self {
        Self {
            running: true,
            active_screen: screen,
            notice: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_screen(&self) -> ScreenId {
        self.active_screen
    }

    pub fn show_screen(&mut self, screen: ScreenId) {
        self.active_screen = screen;
    }

    /// Last apply outcome worth surfacing in the status line.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
