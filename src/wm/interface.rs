//! Interface - a named region and its presentation

use crate::colour::{Colour, Style};
use crate::registry::Model;

/// A named rectangular region of the display.
///
/// Geometry, border and content live in their own registries under the
/// same name; the interface carries what they share.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interface {
    name: String,
    /// Group this interface was declared in
    pub group: Option<String>,
    /// Presentation used to pad content that does not fill the region
    pub colour: Colour,
    pub style: Style,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Model for Interface {
    const KIND: &'static str = "interface";

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let interface = Interface::new("log")
            .with_group("main")
            .with_colour(Colour::foreground("green"))
            .with_style(Style::DIM);
        assert_eq!(interface.name(), "log");
        assert_eq!(interface.group.as_deref(), Some("main"));
        assert_eq!(interface.colour.foreground, "green");
        assert_eq!(interface.style, Style::DIM);
    }
}
