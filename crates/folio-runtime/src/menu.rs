#![forbid(unsafe_code)]

//! Mobile navigation menu state.

/// Messages that change the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMsg {
    /// The menu button was pressed.
    Toggle,
    /// A navigation link was activated.
    Close,
}

/// Whether the mobile navigation panel is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    /// A collapsed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Flip the menu.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::trace!(open = self.open, "menu toggled");
    }

    /// Collapse the menu, whatever its state.
    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Apply a message.
    pub fn update(&mut self, msg: MenuMsg) {
        match msg {
            MenuMsg::Toggle => self.toggle(),
            MenuMsg::Close => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuToggle::new().is_open());
    }

    #[test]
    fn three_toggles_leave_it_open() {
        let mut menu = MenuToggle::new();
        menu.toggle();
        menu.toggle();
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn close_always_closes() {
        let mut menu = MenuToggle::new();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn update_routes_messages() {
        let mut menu = MenuToggle::new();
        menu.update(MenuMsg::Toggle);
        assert!(menu.is_open());
        menu.update(MenuMsg::Close);
        assert!(!menu.is_open());
    }
}
