// File: crates/chart-core/src/tooltip.rs
// Summary: Two-state hover tooltip over line-chart markers.
// Notes:
// - The controller holds one state value; every transition overwrites it.
// - Pointer positions are canvas coordinates (same space as `Scene::marker_at`).

use crate::geometry::Point;
use crate::scene::{Marker, MarkerId, Scene};
use crate::series::DataPoint;

/// Offset from the pointer to the tooltip's top-left corner.
pub const DEFAULT_OFFSET: Point = Point::new(5.0, -28.0);

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible {
        marker: MarkerId,
        point: DataPoint,
        text: String,
        position: Point,
    },
}

/// Pointer input as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter { marker: MarkerId, at: Point },
    Move { at: Point },
    Leave { marker: MarkerId },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipController {
    state: TooltipState,
    offset: Point,
}

impl TooltipController {
    pub fn new() -> Self {
        Self { state: TooltipState::Hidden, offset: DEFAULT_OFFSET }
    }

    pub fn with_offset(offset: Point) -> Self {
        Self { state: TooltipState::Hidden, offset }
    }

    pub fn state(&self) -> &TooltipState { &self.state }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match &self.state {
            TooltipState::Visible { text, .. } => Some(text),
            TooltipState::Hidden => None,
        }
    }

    pub fn position(&self) -> Option<Point> {
        match &self.state {
            TooltipState::Visible { position, .. } => Some(*position),
            TooltipState::Hidden => None,
        }
    }

    pub fn active_marker(&self) -> Option<MarkerId> {
        match &self.state {
            TooltipState::Visible { marker, .. } => Some(*marker),
            TooltipState::Hidden => None,
        }
    }

    /// Show the tooltip for `marker`, replacing whatever was shown.
    pub fn pointer_enter(&mut self, marker: &Marker, at: Point) {
        log::trace!("tooltip enter marker {:?} at ({}, {})", marker.id, at.x, at.y);
        self.state = TooltipState::Visible {
            marker: marker.id,
            point: marker.point.clone(),
            text: tooltip_text(&marker.point),
            position: at.offset(self.offset.x, self.offset.y),
        };
    }

    /// Follow the pointer while visible.
    pub fn pointer_move(&mut self, at: Point) {
        let offset = self.offset;
        if let TooltipState::Visible { position, .. } = &mut self.state {
            *position = at.offset(offset.x, offset.y);
        }
    }

    /// Hide, unless a later enter already moved the tooltip to another marker.
    pub fn pointer_leave(&mut self, marker: MarkerId) {
        if self.active_marker() == Some(marker) {
            log::trace!("tooltip leave marker {:?}", marker);
            self.state = TooltipState::Hidden;
        }
    }

    /// Apply a host event. Enter events for ids the scene does not know are ignored.
    pub fn handle(&mut self, scene: &Scene, event: PointerEvent) {
        match event {
            PointerEvent::Enter { marker, at } => match scene.marker(marker) {
                Some(m) => self.pointer_enter(m, at),
                None => log::debug!("tooltip enter for unknown marker {:?}", marker),
            },
            PointerEvent::Move { at } => self.pointer_move(at),
            PointerEvent::Leave { marker } => self.pointer_leave(marker),
        }
    }

    /// Hit-test driven update for hosts that only report raw pointer motion.
    pub fn track(&mut self, scene: &Scene, at: Point) {
        match scene.marker_at(at) {
            Some(m) if self.active_marker() == Some(m.id) => self.pointer_move(at),
            Some(m) => self.pointer_enter(m, at),
            None => self.state = TooltipState::Hidden,
        }
    }
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new()
    }
}

/// Last `/`-separated segment of an identifier (`"/a/b/proj"` → `"proj"`).
pub fn tooltip_label(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// `"<last path segment>: <y>"`.
pub fn tooltip_text(point: &DataPoint) -> String {
    format!("{}: {}", tooltip_label(&point.label), point.y)
}
