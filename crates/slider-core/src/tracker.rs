use crate::constants::{
    FADE_IN_DURATION, FADE_OUT_DURATION, PRECISION_THRESHOLD_HEIGHTS, RESET_DURATION,
};
use crate::error::{finite, GeometryResult};
use crate::geometry::{
    is_precision_distance, value_divisor, value_increment, vertical_touch_delta, OverlayGeometry,
};
use crate::host::RangeHost;
use crate::presenter::{OverlayPresenter, OverlayStyle, Transition};
use crate::state::{MoveOutcome, TrackingSession, TrackingState};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Vertical distance from the centre line, in control heights, at which
    /// precision tracking takes over.
    pub precision_threshold: f32,
    pub fade_in: Duration,
    pub reset: Duration,
    pub fade_out: Duration,
    pub style: OverlayStyle,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            precision_threshold: PRECISION_THRESHOLD_HEIGHTS,
            fade_in: FADE_IN_DURATION,
            reset: RESET_DURATION,
            fade_out: FADE_OUT_DURATION,
            style: OverlayStyle::default(),
        }
    }
}

/// Precision-tracking decorator around a range control.
///
/// Pointer positions passed to the lifecycle hooks are local to the control.
/// Moves close to the track go to the host's own drag handling; moves farther
/// than [`TrackerConfig::precision_threshold`] control heights away are
/// remapped with a dampening factor that grows with the distance.
pub struct PrecisionTracker<H, P> {
    host: H,
    presenter: P,
    config: TrackerConfig,
    session: Option<TrackingSession>,
}

impl<H: RangeHost, P: OverlayPresenter> PrecisionTracker<H, P> {
    pub fn new(host: H, presenter: P) -> Self {
        Self::with_config(host, presenter, TrackerConfig::default())
    }

    pub fn with_config(host: H, presenter: P, config: TrackerConfig) -> Self {
        Self {
            host,
            presenter,
            config,
            session: None,
        }
    }

    /// Attach and style the overlays, hidden and in the neutral layout.
    pub fn attach(&mut self) -> anyhow::Result<()> {
        self.presenter.attach_overlays(&self.config.style)?;
        self.presenter.set_visibility(false, Transition::Instant);
        let neutral = self.neutral_geometry();
        self.presenter.apply_geometry(&neutral, Transition::Instant);
        log::debug!("[tracker] overlays attached");
        Ok(())
    }

    pub fn state(&self) -> TrackingState {
        self.session
            .as_ref()
            .map(TrackingSession::state)
            .unwrap_or_default()
    }

    pub fn session(&self) -> Option<&TrackingSession> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_parts(self) -> (H, P) {
        (self.host, self.presenter)
    }

    /// Layout the overlays rest in for the host's current frame.
    pub fn neutral_geometry(&self) -> OverlayGeometry {
        OverlayGeometry::neutral(self.host.bounds(), self.host.track_rect())
    }

    /// Start a gesture. Any session still open is cancelled first.
    pub fn pointer_down(&mut self, point: Vec2) -> &TrackingSession {
        if self.session.is_some() {
            log::warn!("[tracker] pointer-down while tracking; cancelling previous session");
            self.pointer_cancel();
        }
        let session = TrackingSession::new(point, self.host.bounds(), self.host.track_rect());
        self.presenter
            .apply_geometry(&session.geometry, Transition::Instant);
        self.presenter
            .set_visibility(true, Transition::Animated(self.config.fade_in));
        self.host.begin_native_tracking(point);
        log::debug!(
            "[tracker] begin at ({:.1},{:.1}) value={:.3}",
            point.x,
            point.y,
            self.host.value()
        );
        self.session.insert(session)
    }

    /// Feed one pointer-move. Returns `None` when no gesture is active.
    pub fn pointer_move(&mut self, point: Vec2) -> Option<MoveOutcome> {
        let Self {
            host,
            presenter,
            config,
            session,
        } = self;
        let session = session.as_mut()?;
        session.moves += 1;
        let previous = std::mem::replace(&mut session.last_pointer, point);
        let bounds = session.control_bounds;
        let vertical = vertical_touch_delta(point, bounds);

        if !is_precision_distance(vertical, bounds, config.precision_threshold) {
            let neutral = OverlayGeometry::neutral(bounds, session.track_rect);
            if std::mem::replace(&mut session.precision_active, false) {
                log::debug!("[tracker] precision -> normal");
                presenter.apply_geometry(&neutral, Transition::Animated(config.reset));
            }
            session.geometry = neutral;
            host.continue_native_tracking(point);
            return Some(MoveOutcome {
                value: host.value(),
                geometry: neutral,
                consumed: false,
                state: TrackingState::NormalTracking,
                divisor: None,
            });
        }

        if !session.precision_active {
            log::debug!("[tracker] normal -> precision");
            session.precision_active = true;
        }

        match precision_step(host, session, point.x - previous.x, vertical) {
            Ok((divisor, geometry)) => {
                session.geometry = geometry;
                presenter.apply_geometry(&geometry, Transition::Instant);
                Some(MoveOutcome {
                    value: host.value(),
                    geometry,
                    consumed: true,
                    state: TrackingState::PrecisionTracking,
                    divisor: Some(divisor),
                })
            }
            Err(e) => {
                log::warn!("[tracker] ignoring move: {}", e);
                Some(MoveOutcome {
                    value: host.value(),
                    geometry: session.geometry,
                    consumed: true,
                    state: TrackingState::PrecisionTracking,
                    divisor: None,
                })
            }
        }
    }

    /// Finish the gesture normally.
    pub fn pointer_up(&mut self) -> Option<OverlayGeometry> {
        self.finish(false)
    }

    /// Finish the gesture because the platform took the pointer away.
    pub fn pointer_cancel(&mut self) -> Option<OverlayGeometry> {
        self.finish(true)
    }

    fn finish(&mut self, cancelled: bool) -> Option<OverlayGeometry> {
        let session = self.session.take()?;
        let neutral = OverlayGeometry::neutral(session.control_bounds, session.track_rect);
        let fade = Transition::Animated(self.config.fade_out);
        self.presenter.apply_geometry(&neutral, fade);
        self.presenter.set_visibility(false, fade);
        self.host.end_native_tracking(cancelled);
        log::debug!(
            "[tracker] {} after {:?}, {} moves, value={:.3}",
            if cancelled { "cancelled" } else { "ended" },
            session.started_at.elapsed(),
            session.moves,
            self.host.value()
        );
        Some(neutral)
    }
}

/// Apply one dampened move to the host and lay the overlays out around the
/// resulting value. Nothing is written when the arithmetic is degenerate.
fn precision_step<H: RangeHost>(
    host: &mut H,
    session: &TrackingSession,
    horizontal_delta: f32,
    vertical_delta: f32,
) -> GeometryResult<(f32, OverlayGeometry)> {
    let bounds = session.control_bounds;
    let range = host.range();
    let divisor = value_divisor(vertical_delta, bounds)?;
    let increment = value_increment(horizontal_delta, range, bounds, divisor)?;

    let candidate = finite(host.value() + increment, "candidate value")?;
    range.fractions(range.clamp(candidate))?;
    host.set_value(candidate);
    host.notify_value_changed();

    let geometry = OverlayGeometry::precision(
        bounds,
        session.track_rect,
        range,
        host.value(),
        divisor,
    )?;
    Ok((divisor, geometry))
}
