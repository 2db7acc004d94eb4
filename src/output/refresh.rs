//! Refresh - addressing modes for redrawing interfaces

use std::time::Instant;

use tracing::info;

use super::writer::TerminalWriter;
use crate::error::Result;
use crate::wm::Screen;

/// Chooses which interfaces to redraw. Each mode returns the number of
/// interfaces actually written to the terminal.
pub struct Refresh<'a, W: TerminalWriter> {
    screen: &'a mut Screen<W>,
}

impl<'a, W: TerminalWriter> Refresh<'a, W> {
    pub fn new(screen: &'a mut Screen<W>) -> Self {
        Self { screen }
    }

    /// Every registered interface, bottom of the stack first.
    pub fn all(&mut self) -> Result<usize> {
        let names = self.screen.stacking_order();
        self.timed("all", &names)
    }

    /// Every member of `group`; fails before drawing anything if the group
    /// does not exist.
    pub fn by_group(&mut self, group: &str) -> Result<usize> {
        let members = self.screen.group(group)?.members().to_vec();
        self.timed(group, &members)
    }

    /// The focused interface, if any.
    pub fn by_focus(&mut self) -> Result<usize> {
        match self.screen.focused() {
            Some(name) => self.by_name(&name),
            None => Ok(0),
        }
    }

    /// Exactly one interface.
    pub fn by_name(&mut self, name: &str) -> Result<usize> {
        Ok(usize::from(self.screen.render_buffer(name)?))
    }

    fn timed(&mut self, label: &str, names: &[String]) -> Result<usize> {
        let started = Instant::now();
        let mut rendered = 0;
        for name in names {
            rendered += self.by_name(name)?;
        }
        info!(
            "Refresh {}: {}/{} interfaces in {:?}",
            label,
            rendered,
            names.len(),
            started.elapsed()
        );
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::Content;
    use crate::colour::{Colour, ColourMode, Style};
    use crate::geometry::{Area, FixedSize};
    use crate::output::Capture;
    use crate::wm::{Interface, Screen};

    fn screen() -> Screen<Capture> {
        let mut screen = Screen::new(Capture::new(), FixedSize::new(20, 10), ColourMode::Indexed);
        screen
            .register(Interface::new("a").with_group("top"), Area::new(1, 1, 5, 1))
            .unwrap();
        screen
            .register(Interface::new("b").with_group("top"), Area::new(1, 2, 5, 1))
            .unwrap();
        screen.register(Interface::new("c"), Area::new(1, 3, 5, 1)).unwrap();
        for name in ["a", "b", "c"] {
            screen.add(name, Content::from_lines(&[name], &Colour::default(), Style::empty()));
        }
        screen
    }

    #[test]
    fn test_all_in_stacking_order() {
        let mut screen = screen();
        screen.set_zindex("a", 9).unwrap();
        assert_eq!(screen.refresh().all().unwrap(), 3);

        let frames = screen.writer().frames();
        assert!(frames[0].contains('b'));
        assert!(frames[1].contains('c'));
        assert!(frames[2].contains('a'));
    }

    #[test]
    fn test_by_group() {
        let mut screen = screen();
        assert_eq!(screen.refresh().by_group("top").unwrap(), 2);
        assert_eq!(screen.writer().frames().len(), 2);
    }

    #[test]
    fn test_by_group_unknown_renders_nothing() {
        let mut screen = screen();
        let err = screen.refresh().by_group("missing").unwrap_err();
        assert!(err.is_not_found());
        assert!(screen.writer().frames().is_empty());
        assert!(screen.buffer("a").has_back());
    }

    #[test]
    fn test_by_focus() {
        let mut screen = screen();
        screen.focus_mut().focus_by_name("b").unwrap();
        assert_eq!(screen.refresh().by_focus().unwrap(), 1);
        assert!(screen.writer().output().starts_with("\x1b[2;1H\x1b[0mb"));
    }

    #[test]
    fn test_by_focus_without_focus() {
        let mut screen = Screen::new(Capture::new(), FixedSize::new(20, 10), ColourMode::Indexed);
        assert_eq!(screen.refresh().by_focus().unwrap(), 0);
    }

    #[test]
    fn test_by_name_skips_hidden() {
        let mut screen = screen();
        screen.hide("c").unwrap();
        screen.writer_mut().clear();
        assert_eq!(screen.refresh().by_name("c").unwrap(), 0);
        assert_eq!(screen.refresh().all().unwrap(), 2);
    }
}
