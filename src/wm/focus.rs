//! Focus - which interface currently has focus

use crate::error::{Error, Result};

/// Read-only answer to "which name is focused".
pub trait FocusOracle {
    fn focused(&self) -> Option<&str>;
}

/// Focusable names in registration order with a wrapping cursor.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    names: Vec<String>,
    current: Option<usize>,
}

impl FocusRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name`. The first name added takes focus.
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.names.contains(&name) {
            return;
        }
        self.names.push(name);
        if self.current.is_none() {
            self.current = Some(0);
        }
    }

    /// Remove `name`; focus moves to the next entry if it had focus.
    pub fn remove(&mut self, name: &str) {
        let Some(index) = self.names.iter().position(|n| n == name) else {
            return;
        };
        self.names.remove(index);

        self.current = match self.current {
            _ if self.names.is_empty() => None,
            Some(current) if current > index => Some(current - 1),
            Some(current) if current >= self.names.len() => Some(0),
            other => other,
        };
    }

    /// Focus `name`; fails if it was never added.
    pub fn focus_by_name(&mut self, name: &str) -> Result<&str> {
        let index = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::not_found("focus", name))?;
        self.current = Some(index);
        Ok(&self.names[index])
    }

    /// Move focus forward, wrapping at the end.
    pub fn next(&mut self) -> Option<&str> {
        self.step(1)
    }

    /// Move focus backward, wrapping at the start.
    pub fn previous(&mut self) -> Option<&str> {
        self.step(self.names.len().saturating_sub(1))
    }

    fn step(&mut self, by: usize) -> Option<&str> {
        let len = self.names.len();
        let current = self.current?;
        let index = (current + by) % len;
        self.current = Some(index);
        Some(&self.names[index])
    }

    pub fn current(&self) -> Option<&str> {
        self.current.map(|index| self.names[index].as_str())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl FocusOracle for FocusRing {
    fn focused(&self) -> Option<&str> {
        self.current()
    }
}
