//! Overlay presentation seam.
//!
//! The tracker decides *where* the four overlay elements go and *whether*
//! they are visible; a presenter owns the actual elements and how they move.

use crate::constants::{
    CALIPER_COLOR, CALIPER_SHADOW_COLOR, CALIPER_SHADOW_OFFSET, CALIPER_SHADOW_OPACITY,
    CALIPER_SHADOW_RADIUS, CALIPER_SIZE, OVERLAY_CORNER_RADIUS, TRACK_ALPHA, TRACK_FALLBACK_COLOR,
};
use crate::geometry::OverlayGeometry;
use glam::Vec2;
use std::time::Duration;

/// How a presenter should move from the current overlay state to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Instant,
    Animated(Duration),
}

impl Transition {
    pub fn duration(&self) -> Duration {
        match self {
            Transition::Instant => Duration::ZERO,
            Transition::Animated(d) => *d,
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, Transition::Animated(d) if !d.is_zero())
    }
}

/// Which of the four overlay elements a slot holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    LeftCaliper,
    RightCaliper,
    LeftTrack,
    RightTrack,
}

impl SlotKind {
    pub fn is_caliper(&self) -> bool {
        matches!(self, SlotKind::LeftCaliper | SlotKind::RightCaliper)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SlotKind::LeftCaliper => "left-caliper",
            SlotKind::RightCaliper => "right-caliper",
            SlotKind::LeftTrack => "left-track",
            SlotKind::RightTrack => "right-track",
        }
    }
}

/// The four overlay elements, by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlaySlots<T> {
    pub left_caliper: T,
    pub right_caliper: T,
    pub left_track: T,
    pub right_track: T,
}

impl<T> OverlaySlots<T> {
    /// Build all four slots from a per-kind constructor.
    pub fn from_fn(mut f: impl FnMut(SlotKind) -> T) -> Self {
        Self {
            left_caliper: f(SlotKind::LeftCaliper),
            right_caliper: f(SlotKind::RightCaliper),
            left_track: f(SlotKind::LeftTrack),
            right_track: f(SlotKind::RightTrack),
        }
    }

    pub fn try_from_fn<E>(mut f: impl FnMut(SlotKind) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            left_caliper: f(SlotKind::LeftCaliper)?,
            right_caliper: f(SlotKind::RightCaliper)?,
            left_track: f(SlotKind::LeftTrack)?,
            right_track: f(SlotKind::RightTrack)?,
        })
    }

    /// Apply `f` to every slot, tracks first so calipers stack above them.
    pub fn for_each(&self, mut f: impl FnMut(SlotKind, &T)) {
        f(SlotKind::LeftTrack, &self.left_track);
        f(SlotKind::RightTrack, &self.right_track);
        f(SlotKind::LeftCaliper, &self.left_caliper);
        f(SlotKind::RightCaliper, &self.right_caliper);
    }

    pub fn for_each_mut(&mut self, mut f: impl FnMut(SlotKind, &mut T)) {
        f(SlotKind::LeftTrack, &mut self.left_track);
        f(SlotKind::RightTrack, &mut self.right_track);
        f(SlotKind::LeftCaliper, &mut self.left_caliper);
        f(SlotKind::RightCaliper, &mut self.right_caliper);
    }

    pub fn calipers(&self) -> [&T; 2] {
        [&self.left_caliper, &self.right_caliper]
    }

    pub fn tracks(&self) -> [&T; 2] {
        [&self.left_track, &self.right_track]
    }

    pub fn get(&self, kind: SlotKind) -> &T {
        match kind {
            SlotKind::LeftCaliper => &self.left_caliper,
            SlotKind::RightCaliper => &self.right_caliper,
            SlotKind::LeftTrack => &self.left_track,
            SlotKind::RightTrack => &self.right_track,
        }
    }
}

/// Placement of one overlay element in container coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlotFrame {
    pub origin: Vec2,
    pub size: Vec2,
}

impl OverlayGeometry {
    /// Per-element frames for this layout. Calipers take their size from the
    /// style; tracks take width from the layout and height from the track.
    pub fn slot_frames(&self, style: &OverlayStyle) -> OverlaySlots<SlotFrame> {
        let caliper_size = Vec2::from(style.caliper_size);
        OverlaySlots {
            left_caliper: SlotFrame {
                origin: Vec2::new(self.left_caliper_x as f32, self.caliper_y),
                size: caliper_size,
            },
            right_caliper: SlotFrame {
                origin: Vec2::new(self.right_caliper_x as f32, self.caliper_y),
                size: caliper_size,
            },
            left_track: SlotFrame {
                origin: Vec2::new(self.left_track_x as f32, self.track_y),
                size: Vec2::new(self.left_track_width as f32, self.track_height),
            },
            right_track: SlotFrame {
                origin: Vec2::new(self.right_track_x as f32, self.track_y),
                size: Vec2::new(self.right_track_width as f32, self.track_height),
            },
        }
    }
}

/// Static appearance of the overlays. Colours are straight RGBA in 0..1.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    pub caliper_size: [f32; 2],
    pub caliper_color: [f32; 4],
    pub caliper_shadow_color: [f32; 4],
    pub caliper_shadow_radius: f32,
    pub caliper_shadow_opacity: f32,
    pub caliper_shadow_offset: [f32; 2],
    pub corner_radius: f32,
    /// Base colour of the extension bars; `None` means "the container's
    /// background, or white when it has none".
    pub track_color: Option<[f32; 4]>,
    pub track_alpha: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            caliper_size: CALIPER_SIZE,
            caliper_color: CALIPER_COLOR,
            caliper_shadow_color: CALIPER_SHADOW_COLOR,
            caliper_shadow_radius: CALIPER_SHADOW_RADIUS,
            caliper_shadow_opacity: CALIPER_SHADOW_OPACITY,
            caliper_shadow_offset: CALIPER_SHADOW_OFFSET,
            corner_radius: OVERLAY_CORNER_RADIUS,
            track_color: None,
            track_alpha: TRACK_ALPHA,
        }
    }
}

impl OverlayStyle {
    /// Final extension bar colour given the container background, if known.
    pub fn resolved_track_color(&self, container_background: Option<[f32; 4]>) -> [f32; 4] {
        let [r, g, b, _] = self
            .track_color
            .or(container_background)
            .unwrap_or(TRACK_FALLBACK_COLOR);
        [r, g, b, self.track_alpha]
    }
}

/// Owner of the four overlay elements.
pub trait OverlayPresenter {
    /// Create, style and attach the overlays next to the host control. They
    /// start invisible.
    fn attach_overlays(&mut self, style: &OverlayStyle) -> anyhow::Result<()>;

    /// Move the overlays to `geometry`. A newer request supersedes any
    /// transition still running.
    fn apply_geometry(&mut self, geometry: &OverlayGeometry, transition: Transition);

    fn set_visibility(&mut self, visible: bool, transition: Transition);
}

/// One request received by a [`RecordingPresenter`].
#[derive(Clone, Debug, PartialEq)]
pub enum PresenterRequest {
    Attach,
    Geometry(OverlayGeometry, Transition),
    Visibility(bool, Transition),
}

/// Presenter that keeps every request in order and tracks the resulting
/// state. Useful for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    pub requests: Vec<PresenterRequest>,
    pub attached: bool,
    pub visible: bool,
    pub geometry: Option<OverlayGeometry>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl OverlayPresenter for RecordingPresenter {
    fn attach_overlays(&mut self, _style: &OverlayStyle) -> anyhow::Result<()> {
        self.attached = true;
        self.visible = false;
        self.requests.push(PresenterRequest::Attach);
        Ok(())
    }

    fn apply_geometry(&mut self, geometry: &OverlayGeometry, transition: Transition) {
        self.geometry = Some(*geometry);
        self.requests
            .push(PresenterRequest::Geometry(*geometry, transition));
    }

    fn set_visibility(&mut self, visible: bool, transition: Transition) {
        self.visible = visible;
        self.requests
            .push(PresenterRequest::Visibility(visible, transition));
    }
}
