//! Screen - owns every registry and drives output for all interfaces

use tracing::{debug, info, warn};

use super::focus::{FocusOracle, FocusRing};
use super::group::Group;
use super::interface::Interface;
use super::visibility::{Visibility, VisibilityOracle};
use crate::border::Border;
use crate::buffer::{Buffer, Content};
use crate::colour::{ColourMode, Palette};
use crate::error::{Error, Result};
use crate::event::{Event, EventBus, EventKind};
use crate::geometry::{Area, Direction, Geometry, TerminalSize};
use crate::output::{Compressor, Refresh, TerminalWriter, Viewport};
use crate::registry::{Entry, Model, Registry};

/// Context object for the rendering core.
///
/// Everything that needs a name lookup goes through the registries held
/// here; nothing is process-global.
pub struct Screen<W: TerminalWriter> {
    interfaces: Registry<Interface>,
    geometries: Registry<Geometry>,
    buffers: Registry<Buffer>,
    borders: Registry<Border>,
    groups: Registry<Group>,
    palette: Palette,
    events: EventBus,
    focus: FocusRing,
    visibility: Visibility,
    size: Box<dyn TerminalSize>,
    writer: W,
    /// Z-index handed to the next registered interface
    next_zindex: u32,
}

impl<W: TerminalWriter> Screen<W> {
    pub fn new(writer: W, size: impl TerminalSize + 'static, mode: ColourMode) -> Self {
        let (width, height) = size.size();
        Self {
            interfaces: Registry::new(|name| Interface::new(name)),
            geometries: Registry::new(move |name| Geometry::null(name, width, height)),
            buffers: Registry::new(|name| Buffer::new(name)),
            borders: Registry::new(|name| Border::new(name)),
            groups: Registry::new(|name| Group::new(name)),
            palette: Palette::new(mode),
            events: EventBus::new(),
            focus: FocusRing::new(),
            visibility: Visibility::new(),
            size: Box::new(size),
            writer,
            next_zindex: 1,
        }
    }

    /// Current terminal `(width, height)`
    pub fn size(&self) -> (u16, u16) {
        self.size.size()
    }

    /// Register an interface occupying `area`.
    ///
    /// Creates its geometry (stacked above everything registered so far)
    /// and a disabled border unless one was configured already, joins its
    /// group and the focus ring. Re-registering replaces the interface and
    /// geometry but keeps buffered content.
    pub fn register(&mut self, interface: Interface, area: Area) -> Result<()> {
        let name = interface.name().to_string();
        if self.groups.exists(&name) {
            return Err(Error::ModelKind {
                name,
                expected: Interface::KIND,
                found: Group::KIND,
            });
        }
        if let Some(group) = interface.group.as_deref() {
            if group == name || self.interfaces.exists(group) {
                return Err(Error::ModelKind {
                    name: group.to_string(),
                    expected: Group::KIND,
                    found: Interface::KIND,
                });
            }
        }

        let zindex = match self.geometries.find(&name) {
            Ok(existing) => existing.zindex(),
            Err(_) => {
                let zindex = self.next_zindex;
                self.next_zindex += 1;
                zindex
            }
        };
        let (width, height) = self.size();
        let mut geometry = Geometry::new(name.as_str(), area).with_zindex(zindex);
        geometry.fit(width, height);
        self.geometries.store(geometry);

        if !self.borders.exists(&name) {
            self.borders.store(Border::new(name.as_str()));
        }

        let previous_group = self
            .interfaces
            .find(&name)
            .ok()
            .and_then(|old| old.group.clone());
        if let Some(old) = previous_group {
            if let Some(old) = self.groups.get_mut(&old) {
                old.remove(&name);
            }
        }

        let group = interface.group.clone();
        self.interfaces.store(interface);
        if let Some(group) = group {
            self.add_to_group(&group, &name)?;
        }
        self.focus.add(name.as_str());

        debug!("Registered interface '{}' at {:?}", name, area);
        Ok(())
    }

    /// Remove an interface and everything stored under its name.
    pub fn deregister(&mut self, name: &str) -> Result<Interface> {
        self.interfaces.find(name)?;
        if self.is_visible(name) {
            self.clear(name)?;
        }

        let interface = self
            .interfaces
            .delete(name)
            .ok_or_else(|| Error::not_found(Interface::KIND, name))?;
        self.geometries.delete(name);
        self.borders.delete(name);
        self.buffers.delete(name);
        if let Some(group) = interface.group.as_deref() {
            if let Some(group) = self.groups.get_mut(group) {
                group.remove(name);
            }
        }
        self.focus.remove(name);
        self.visibility.forget(name);

        debug!("Deregistered interface '{}'", name);
        Ok(interface)
    }

    /// Add `member` to `group`, creating the group on first use.
    ///
    /// Fails with `ModelKind` when `group` names an interface.
    pub fn add_to_group(&mut self, group: &str, member: &str) -> Result<()> {
        if self.interfaces.exists(group) {
            return Err(Error::ModelKind {
                name: group.to_string(),
                expected: Group::KIND,
                found: Interface::KIND,
            });
        }
        self.interfaces.find(member)?;

        match self.groups.get_mut(group) {
            Some(existing) => existing.add(member),
            None => {
                let mut created = Group::new(group);
                created.add(member);
                self.groups.store(created);
            }
        }
        Ok(())
    }

    /// Install a border; the name must belong to a registered interface.
    pub fn set_border(&mut self, border: Border) -> Result<()> {
        self.interfaces.find(border.name())?;
        self.borders.store(border);
        Ok(())
    }

    /// Change where an interface sits in the stacking order.
    pub fn set_zindex(&mut self, name: &str, zindex: u32) -> Result<()> {
        self.geometries.find_mut(name)?.set_zindex(zindex);
        Ok(())
    }

    /// Queue `content` as the next generation for `name`. Does not render.
    pub fn add(&mut self, name: &str, content: Content) {
        match self.buffers.get_mut(name) {
            Some(buffer) => buffer.add(content),
            None => {
                let mut buffer = Buffer::new(name);
                buffer.add(content);
                self.buffers.store(buffer);
            }
        }
    }

    /// Render the current generation of `name` to the terminal.
    ///
    /// Hidden interfaces and buffers with nothing to draw write nothing.
    /// Returns whether anything was written.
    pub fn render_buffer(&mut self, name: &str) -> Result<bool> {
        if !self.visibility.is_visible(name) {
            debug!("Skipping hidden interface '{}'", name);
            return Ok(false);
        }

        let screen = self.size.size();
        let content = match self.buffers.get_mut(name).and_then(|buffer| buffer.render()) {
            Some(content) => content,
            None => return Ok(false),
        };

        let geometry = self.geometries.by_name(name);
        let border = self.borders.by_name(name);
        let interface = self.interfaces.by_name(name);
        let rows = Viewport::new(&geometry, &border, &interface.colour, interface.style, screen)
            .rows(content);

        let payload = Compressor::new(&mut self.palette).compress(&rows);
        self.writer.write(&payload)?;
        debug!("Rendered '{}' ({} bytes)", name, payload.len());

        self.events.trigger(&Event::new(EventKind::Refresh, name));
        Ok(true)
    }

    /// Blank the area of `name` on screen without touching its buffer.
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let screen = self.size.size();
        let geometry = self.geometries.by_name(name);
        let border = self.borders.by_name(name);
        let interface = self.interfaces.by_name(name);
        let rows =
            Viewport::new(&geometry, &border, &interface.colour, interface.style, screen).blank();

        let payload = Compressor::new(&mut self.palette).compress(&rows);
        self.writer.write(&payload)?;
        Ok(())
    }

    /// Make `name` visible and draw it. A no-op if already visible.
    pub fn show(&mut self, name: &str) -> Result<bool> {
        if !self.visibility.show(name) {
            return Ok(false);
        }
        self.render_buffer(name)?;
        Ok(true)
    }

    /// Hide `name` and blank its area. A no-op if already hidden.
    pub fn hide(&mut self, name: &str) -> Result<bool> {
        if !self.visibility.hide(name) {
            return Ok(false);
        }
        self.clear(name)?;
        Ok(true)
    }

    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        if self.visibility.is_visible(name) {
            self.hide(name)
        } else {
            self.show(name)
        }
    }

    /// Expand `name` to the whole screen and redraw it.
    pub fn maximise(&mut self, name: &str) -> Result<bool> {
        let (width, height) = self.size();
        if !self.geometries.find_mut(name)?.maximise(width, height) {
            return Ok(false);
        }

        self.events.trigger(&Event::new(EventKind::Maximise, name));
        self.render_buffer(name)?;
        Ok(true)
    }

    /// Restore `name` to its size before `maximise` and redraw the screen.
    pub fn unmaximise(&mut self, name: &str) -> Result<bool> {
        if !self.geometries.find(name)?.is_maximised() {
            return Ok(false);
        }

        self.clear(name)?;
        self.geometries.find_mut(name)?.unmaximise();
        self.events.trigger(&Event::new(EventKind::Unmaximise, name));
        self.refresh().all()?;
        Ok(true)
    }

    /// Move `name` by `offset` cells, staying on screen.
    ///
    /// Ignored while maximised. The old area is blanked and the screen
    /// redrawn so that anything uncovered reappears.
    pub fn move_view(&mut self, name: &str, direction: Direction, offset: u16) -> Result<bool> {
        let (width, height) = self.size();
        let mut moved = self.geometries.find(name)?.clone();
        if moved.is_maximised() {
            warn!("Ignoring move of maximised interface '{}'", name);
            return Ok(false);
        }
        if !moved.move_by(direction, offset, width, height) {
            return Ok(false);
        }

        self.clear(name)?;
        self.geometries.store(moved);
        self.events.trigger(&Event::new(EventKind::Move(direction), name));
        self.refresh().all()?;
        Ok(true)
    }

    /// Pick up a new terminal size: refit every geometry to it.
    pub fn resize(&mut self) {
        let (width, height) = self.size();
        info!("Resize: {}x{}", width, height);

        self.geometries
            .set_null(move |name| Geometry::null(name, width, height));
        for geometry in self.geometries.iter_mut() {
            geometry.fit(width, height);
        }
    }

    /// Registered interfaces ordered bottom to top.
    ///
    /// Equal z-indices keep registration order.
    pub fn stacking_order(&self) -> Vec<String> {
        let mut names = self.interfaces.registered();
        names.sort_by_key(|name| self.geometries.by_name(name).zindex());
        names
    }

    /// Addressing modes for redrawing interfaces.
    pub fn refresh(&mut self) -> Refresh<'_, W> {
        Refresh::new(self)
    }

    pub fn interface(&self, name: &str) -> Entry<'_, Interface> {
        self.interfaces.by_name(name)
    }

    pub fn interfaces(&self) -> &Registry<Interface> {
        &self.interfaces
    }

    pub fn geometry(&self, name: &str) -> Entry<'_, Geometry> {
        self.geometries.by_name(name)
    }

    pub fn buffer(&self, name: &str) -> Entry<'_, Buffer> {
        self.buffers.by_name(name)
    }

    pub fn border(&self, name: &str) -> Entry<'_, Border> {
        self.borders.by_name(name)
    }

    /// Strict group lookup.
    pub fn group(&self, name: &str) -> Result<&Group> {
        self.groups.find(name)
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    pub fn focus(&self) -> &FocusRing {
        &self.focus
    }

    pub fn focus_mut(&mut self) -> &mut FocusRing {
        &mut self.focus
    }

    /// Currently focused interface, if any.
    pub fn focused(&self) -> Option<String> {
        self.focus.focused().map(str::to_string)
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.visibility.is_visible(name)
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Forget every interface and its state.
    pub fn reset(&mut self) {
        self.interfaces.reset();
        self.geometries.reset();
        self.buffers.reset();
        self.borders.reset();
        self.groups.reset();
        self.focus = FocusRing::new();
        self.visibility = Visibility::new();
        self.next_zindex = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{Colour, Style};
    use crate::geometry::FixedSize;
    use crate::output::Capture;

    fn screen() -> Screen<Capture> {
        Screen::new(Capture::new(), FixedSize::new(20, 10), ColourMode::Indexed)
    }

    fn text(line: &str) -> Content {
        Content::from_lines(&[line], &Colour::default(), Style::empty())
    }

    #[test]
    fn test_null_geometry_uses_screen_size() {
        let screen = screen();
        let geometry = screen.geometry("nothing");
        assert!(geometry.is_absent());
        assert_eq!((geometry.width(), geometry.height()), (20, 10));
    }

    #[test]
    fn test_register_creates_models() {
        let mut screen = screen();
        screen
            .register(Interface::new("a").with_group("g"), Area::new(1, 1, 5, 2))
            .unwrap();

        assert!(screen.geometry("a").is_found());
        assert!(screen.border("a").is_found());
        assert_eq!(screen.group("g").unwrap().members(), &["a".to_string()]);
        assert_eq!(screen.focused().as_deref(), Some("a"));
    }

    #[test]
    fn test_register_fits_to_screen() {
        let mut screen = screen();
        screen.register(Interface::new("a"), Area::new(15, 1, 30, 2)).unwrap();
        assert_eq!(screen.geometry("a").area(), Area::new(1, 1, 20, 2));
    }

    #[test]
    fn test_group_named_after_interface_is_model_kind_error() {
        let mut screen = screen();
        screen.register(Interface::new("a"), Area::new(1, 1, 5, 2)).unwrap();
        screen.register(Interface::new("b"), Area::new(1, 3, 5, 2)).unwrap();

        let err = screen.add_to_group("a", "b").unwrap_err();
        assert!(matches!(err, Error::ModelKind { expected: "group", .. }));
    }

    #[test]
    fn test_deregister_removes_everything() {
        let mut screen = screen();
        screen
            .register(Interface::new("a").with_group("g"), Area::new(1, 1, 5, 2))
            .unwrap();
        screen.add("a", text("hi"));
        screen.deregister("a").unwrap();

        assert!(screen.geometry("a").is_absent());
        assert!(screen.buffer("a").is_absent());
        assert!(screen.group("g").unwrap().is_empty());
        assert_eq!(screen.focused(), None);
        assert!(screen.deregister("a").unwrap_err().is_not_found());
    }

    #[test]
    fn test_deregister_blanks_area() {
        let mut screen = screen();
        screen.register(Interface::new("a"), Area::new(2, 3, 3, 2)).unwrap();
        screen.register(Interface::new("b"), Area::new(9, 1, 2, 1)).unwrap();
        screen.add("a", text("hi"));
        screen.refresh().all().unwrap();
        screen.writer_mut().clear();

        screen.deregister("a").unwrap();
        assert_eq!(screen.writer().output(), "\x1b[3;2H\x1b[0m   \x1b[4;2H   \x1b[0m");

        screen.hide("b").unwrap();
        screen.writer_mut().clear();
        screen.deregister("b").unwrap();
        assert!(screen.writer().frames().is_empty());
    }

    #[test]
    fn test_add_does_not_render() {
        let mut screen = screen();
        screen.add("a", text("hi"));
        assert!(screen.buffer("a").has_back());
        assert!(screen.writer().frames().is_empty());
    }

    #[test]
    fn test_render_unknown_name_writes_nothing() {
        let mut screen = screen();
        assert!(!screen.render_buffer("ghost").unwrap());
        assert!(screen.writer().frames().is_empty());
    }

    #[test]
    fn test_hide_and_show_are_idempotent() {
        let mut screen = screen();
        screen.register(Interface::new("a"), Area::new(1, 1, 2, 1)).unwrap();
        screen.add("a", text("hi"));

        assert!(screen.hide("a").unwrap());
        assert!(!screen.hide("a").unwrap());
        assert_eq!(screen.writer().frames().len(), 1);
        assert!(!screen.render_buffer("a").unwrap());

        assert!(screen.show("a").unwrap());
        assert!(!screen.show("a").unwrap());
        assert_eq!(screen.writer().frames().len(), 2);
        assert!(screen.writer().frames()[1].contains("hi"));
    }

    #[test]
    fn test_stacking_order() {
        let mut screen = screen();
        for name in ["a", "b", "c"] {
            screen.register(Interface::new(name), Area::new(1, 1, 2, 2)).unwrap();
        }
        assert_eq!(screen.stacking_order(), vec!["a", "b", "c"]);

        screen.set_zindex("a", 10).unwrap();
        assert_eq!(screen.stacking_order(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_resize_refits_geometries() {
        let size = std::rc::Rc::new(FixedSize::new(20, 10));
        let mut screen = Screen::new(Capture::new(), std::rc::Rc::clone(&size), ColourMode::Indexed);
        screen.register(Interface::new("a"), Area::new(10, 1, 10, 2)).unwrap();

        size.set(12, 5);
        screen.resize();
        assert_eq!(screen.geometry("a").area(), Area::new(3, 1, 10, 2));
        assert_eq!(screen.geometry("ghost").width(), 12);
    }
}
