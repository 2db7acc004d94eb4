//! Visibility - which interfaces are currently shown

use std::collections::HashSet;

/// Read-only answer to "is this name visible".
pub trait VisibilityOracle {
    fn is_visible(&self, name: &str) -> bool;
}

/// Every name is visible unless it has been hidden.
#[derive(Debug, Clone, Default)]
pub struct Visibility {
    hidden: HashSet<String>,
}

impl Visibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if `name` was already visible.
    pub fn show(&mut self, name: &str) -> bool {
        self.hidden.remove(name)
    }

    /// Returns false if `name` was already hidden.
    pub fn hide(&mut self, name: &str) -> bool {
        self.hidden.insert(name.to_string())
    }

    /// Drop any record of `name`.
    pub fn forget(&mut self, name: &str) {
        self.hidden.remove(name);
    }
}

impl VisibilityOracle for Visibility {
    fn is_visible(&self, name: &str) -> bool {
        !self.hidden.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_reports_changes() {
        let mut visibility = Visibility::new();
        assert!(visibility.is_visible("a"));
        assert!(!visibility.show("a"));

        assert!(visibility.hide("a"));
        assert!(!visibility.hide("a"));
        assert!(!visibility.is_visible("a"));

        assert!(visibility.show("a"));
        assert!(visibility.is_visible("a"));
    }
}
