//! Drag-to-select state machine
//!
//! The selector owns a [`SelectionSurface`] (the full-screen translucent
//! window in the real application) and turns pointer events into a
//! finalized [`Region`] or a cancellation. It never touches GTK directly.

use log::debug;

use super::region::{Point, Region};

/// The full-screen surface the user drags over
pub trait SelectionSurface {
    /// Cover the screen and start accepting pointer input
    fn show(&mut self);
    /// Remove the surface from the screen
    fn hide(&mut self);
    /// Redraw the rubber band; `None` clears it
    fn draw_selection(&mut self, rect: Option<Region>);
}

/// How a selection session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    Finalized(Region),
    Cancelled,
}

/// Transient state of one drag gesture
#[derive(Default, Clone, Copy, Debug)]
struct SelectionSession {
    anchor: Option<Point>,
    current: Option<Point>,
}

impl SelectionSession {
    fn rectangle(&self) -> Option<Region> {
        match (self.anchor, self.current) {
            (Some(anchor), Some(current)) => Some(Region::from_corners(anchor, current)),
            _ => None,
        }
    }
}

pub struct RegionSelector<S> {
    surface: S,
    session: Option<SelectionSession>,
}

impl<S: SelectionSurface> RegionSelector<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            session: None,
        }
    }

    /// Whether a session is open (the surface is showing)
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the pointer has been pressed in the current session
    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|s| s.anchor.is_some())
    }

    /// The rectangle currently being drawn, if any
    pub fn current_rect(&self) -> Option<Region> {
        self.session.and_then(|s| s.rectangle())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Open a new session and show the surface. An already open session
    /// is discarded.
    pub fn start(&mut self) {
        debug!("Starting region selection");
        self.session = Some(SelectionSession::default());
        self.surface.draw_selection(None);
        self.surface.show();
    }

    pub fn pointer_down(&mut self, point: Point) {
        if let Some(session) = self.session.as_mut() {
            session.anchor = Some(point);
            session.current = Some(point);
            let rect = session.rectangle();
            self.surface.draw_selection(rect);
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        if let Some(session) = self.session.as_mut() {
            if session.anchor.is_some() {
                session.current = Some(point);
                let rect = session.rectangle();
                self.surface.draw_selection(rect);
            }
        }
    }

    /// Release the pointer. Returns the finalized region when a drag was in
    /// progress; a release without a prior press is ignored.
    pub fn pointer_up(&mut self, point: Point) -> Option<SelectionOutcome> {
        let anchor = self.session.and_then(|s| s.anchor)?;
        let region = Region::from_corners(anchor, point);
        self.finish();
        debug!("Region selected: {}", region);
        Some(SelectionOutcome::Finalized(region))
    }

    /// Abort the session without producing a region
    pub fn cancel(&mut self) -> Option<SelectionOutcome> {
        self.session?;
        self.finish();
        debug!("Region selection cancelled");
        Some(SelectionOutcome::Cancelled)
    }

    fn finish(&mut self) {
        self.session = None;
        self.surface.draw_selection(None);
        self.surface.hide();
    }
}
