//! Screen stack.
//!
//! `Home` is the root and can never be popped. Navigating to a screen that is
//! already on the stack pops back to it instead of pushing a duplicate, so
//! "Go Back to Shop" from the cart returns to the existing product list.

use core::fmt;

/// A storefront screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Product list.
    Home,
    /// Cart contents with quantity steppers.
    Cart,
    /// Order summary and checkout.
    Checkout,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Cart => write!(f, "Cart"),
            Self::Checkout => write!(f, "Checkout"),
        }
    }
}

/// Stack of visited screens, rooted at [`Screen::Home`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start at the product list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
        }
    }

    /// The screen on top of the stack.
    #[must_use]
    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Home)
    }

    /// Number of screens on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Go to `screen`, popping back to it if it is already on the stack.
    pub fn navigate(&mut self, screen: Screen) {
        match self.stack.iter().position(|s| *s == screen) {
            Some(index) => self.stack.truncate(index + 1),
            None => self.stack.push(screen),
        }
    }

    /// Pop the current screen. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_pushes_new_screens() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Cart);
        nav.navigate(Screen::Checkout);
        assert_eq!(nav.current(), Screen::Checkout);
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_navigate_pops_to_existing_screen() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Cart);
        nav.navigate(Screen::Checkout);
        nav.navigate(Screen::Home);
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Cart);
        nav.navigate(Screen::Cart);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_back_stops_at_root() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Cart);
        assert!(nav.back());
        assert_eq!(nav.current(), Screen::Home);
        assert!(!nav.back());
        assert_eq!(nav.current(), Screen::Home);
    }
}
