//! Buffer - the back/front/previous generations of one region
//!
//! The content on screen is always the front generation. New content waits
//! in back until the next render, at which point front is displaced into
//! previous.

use tracing::debug;

use super::content::Content;
use crate::registry::Model;

/// Triple-generation content store for a named region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buffer {
    name: String,
    /// Next generation to display
    back: Option<Content>,
    /// Generation last rendered
    front: Option<Content>,
    /// Generation displaced by the current front
    previous: Option<Content>,
}

impl Buffer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Queue `content` as the next generation. Does not render.
    pub fn add(&mut self, content: Content) {
        self.back = Some(content);
    }

    /// Resolve the content to draw, rotating first when back holds a pending
    /// generation.
    ///
    /// Prefers the newest generation available: front after rotation, else
    /// front, else previous. `None` only if no generation ever held content.
    pub fn render(&mut self) -> Option<&Content> {
        if self.has_back() {
            self.swap();
        }

        if self.has_front() {
            self.front.as_ref()
        } else if self.has_previous() {
            self.previous.as_ref()
        } else {
            None
        }
    }

    /// previous ← front, front ← back, back ← empty.
    ///
    /// Takes `&mut self`, so no `add` can interleave with the rotation.
    fn swap(&mut self) {
        debug!(name = %self.name, "Buffer swapping");
        self.previous = self.front.take();
        self.front = self.back.take();
    }

    pub fn has_back(&self) -> bool {
        occupied(&self.back)
    }

    pub fn has_front(&self) -> bool {
        occupied(&self.front)
    }

    pub fn has_previous(&self) -> bool {
        occupied(&self.previous)
    }

    pub fn back(&self) -> Option<&Content> {
        self.back.as_ref()
    }

    pub fn front(&self) -> Option<&Content> {
        self.front.as_ref()
    }

    pub fn previous(&self) -> Option<&Content> {
        self.previous.as_ref()
    }
}

/// A slot holding zero rows or only empty rows counts as empty.
fn occupied(slot: &Option<Content>) -> bool {
    slot.as_ref().map_or(false, |content| !content.is_empty())
}

impl Model for Buffer {
    const KIND: &'static str = "buffer";

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{Colour, Style};

    fn content(text: &str) -> Content {
        Content::from_lines(&[text], &Colour::default(), Style::empty())
    }

    #[test]
    fn test_add_then_render_rotates_once() {
        let mut buffer = Buffer::new("main");
        buffer.add(content("one"));
        assert!(buffer.has_back());

        assert_eq!(buffer.render(), Some(&content("one")));
        assert!(!buffer.has_back());
        assert!(buffer.has_front());
        assert!(!buffer.has_previous());
    }

    #[test]
    fn test_render_is_idempotent_without_new_content() {
        let mut buffer = Buffer::new("main");
        buffer.add(content("one"));
        let first = buffer.render().cloned();
        let second = buffer.render().cloned();
        assert_eq!(first, second);
        assert!(!buffer.has_previous());
    }

    #[test]
    fn test_rotation_displaces_front() {
        let mut buffer = Buffer::new("main");
        buffer.add(content("one"));
        buffer.render();
        buffer.add(content("two"));

        assert_eq!(buffer.render(), Some(&content("two")));
        assert_eq!(buffer.previous(), Some(&content("one")));
        assert_eq!(buffer.back(), None);
    }

    #[test]
    fn test_falls_back_to_previous() {
        let mut buffer = Buffer {
            name: "main".to_string(),
            back: None,
            front: Some(Content::empty()),
            previous: Some(content("old")),
        };
        assert_eq!(buffer.render(), Some(&content("old")));
    }

    #[test]
    fn test_nothing_to_render() {
        let mut buffer = Buffer::new("main");
        assert_eq!(buffer.render(), None);
    }

    #[test]
    fn test_empty_back_does_not_rotate() {
        let mut buffer = Buffer::new("main");
        buffer.add(content("one"));
        buffer.render();
        buffer.add(Content::empty());

        assert_eq!(buffer.render(), Some(&content("one")));
        assert!(!buffer.has_previous());
    }
}
