use glam::Vec2;
use slider_core::{
    MoveOutcome, OverlayGeometry, OverlayPresenter, OverlayStyle, PrecisionTracker, Rect,
    SimpleRangeHost, TrackingState, Transition, ValueRange,
};
use winit::dpi::LogicalSize;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

// Window layout (logical px)
const WINDOW_SIZE: [f64; 2] = [480.0, 360.0];
const SLIDER_MARGIN: f32 = 40.0;
const SLIDER_HEIGHT: f32 = 30.0;
const TRACK_HEIGHT: f32 = 2.0;

const VALUE_RANGE: ValueRange = ValueRange::new(0.0, 100.0);
const INITIAL_VALUE: f32 = 50.0;

/// Presenter for a window without a renderer: keeps the latest overlay
/// state and reports changes to the log.
#[derive(Default)]
struct LogPresenter {
    visible: bool,
    geometry: OverlayGeometry,
}

impl OverlayPresenter for LogPresenter {
    fn attach_overlays(&mut self, style: &OverlayStyle) -> anyhow::Result<()> {
        log::info!(
            "[overlay] attached; caliper {}x{}, track alpha {}",
            style.caliper_size[0],
            style.caliper_size[1],
            style.track_alpha
        );
        Ok(())
    }

    fn apply_geometry(&mut self, geometry: &OverlayGeometry, transition: Transition) {
        if *geometry != self.geometry {
            log::debug!(
                "[overlay] calipers {}..{} tracks {}+{} / {}+{} ({:?})",
                geometry.left_caliper_x,
                geometry.right_caliper_x,
                geometry.left_track_x,
                geometry.left_track_width,
                geometry.right_track_x,
                geometry.right_track_width,
                transition.duration()
            );
        }
        self.geometry = *geometry;
    }

    fn set_visibility(&mut self, visible: bool, transition: Transition) {
        if visible != self.visible {
            log::debug!(
                "[overlay] {} over {:?}",
                if visible { "show" } else { "hide" },
                transition.duration()
            );
        }
        self.visible = visible;
    }
}

type Tracker = PrecisionTracker<SimpleRangeHost, LogPresenter>;

/// Slider band centred vertically in a window of `size` logical px.
fn slider_bounds(size: Vec2) -> Rect {
    Rect::new(
        SLIDER_MARGIN,
        (size.y - SLIDER_HEIGHT) / 2.0,
        (size.x - 2.0 * SLIDER_MARGIN).max(0.0),
        SLIDER_HEIGHT,
    )
}

fn track_for(bounds: Rect) -> Rect {
    Rect::new(
        0.0,
        (bounds.height() - TRACK_HEIGHT) / 2.0,
        bounds.width(),
        TRACK_HEIGHT,
    )
}

fn relayout(tracker: &mut Tracker, size: Vec2) {
    let bounds = slider_bounds(size);
    let host = tracker.host_mut();
    host.bounds = bounds;
    host.track = track_for(bounds);
}

fn title_for(value: f32, state: TrackingState, divisor: Option<f32>) -> String {
    match divisor {
        Some(d) => format!("Precision slider | {:.3} | {} x{:.1}", value, state.label(), d),
        None => format!("Precision slider | {:.2} | {}", value, state.label()),
    }
}

/// Window coordinates to slider-local coordinates.
fn local(tracker: &Tracker, window_pos: Vec2) -> Vec2 {
    window_pos - tracker.host().bounds.origin
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(title_for(INITIAL_VALUE, TrackingState::Idle, None))
        .with_inner_size(LogicalSize::new(WINDOW_SIZE[0], WINDOW_SIZE[1]))
        .build(&event_loop)?;

    let size = Vec2::new(WINDOW_SIZE[0] as f32, WINDOW_SIZE[1] as f32);
    let bounds = slider_bounds(size);
    let host =
        SimpleRangeHost::new(VALUE_RANGE, bounds, INITIAL_VALUE).with_track(track_for(bounds));
    let mut tracker = PrecisionTracker::new(host, LogPresenter::default());
    tracker.attach()?;
    log::info!("[native] drag the middle band; pull away vertically for precision");

    let mut cursor = Vec2::ZERO;
    let mut active_touch: Option<u64> = None;

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        let scale = window.scale_factor();
        let mut outcome: Option<MoveOutcome> = None;
        let mut ended = false;
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(physical) => {
                let logical = physical.to_logical::<f32>(scale);
                relayout(&mut tracker, Vec2::new(logical.width, logical.height));
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(scale);
                cursor = Vec2::new(p.x, p.y);
                if active_touch.is_none() {
                    outcome = tracker.pointer_move(local(&tracker, cursor));
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } if active_touch.is_none() => match state {
                ElementState::Pressed => {
                    if tracker.host().bounds.contains(cursor) {
                        tracker.pointer_down(local(&tracker, cursor));
                    }
                }
                ElementState::Released => ended = tracker.pointer_up().is_some(),
            },
            WindowEvent::Touch(touch) => {
                let p = touch.location.to_logical::<f32>(scale);
                let pos = Vec2::new(p.x, p.y);
                match touch.phase {
                    TouchPhase::Started if active_touch.is_none() => {
                        if tracker.host().bounds.contains(pos) {
                            active_touch = Some(touch.id);
                            tracker.pointer_down(local(&tracker, pos));
                        }
                    }
                    TouchPhase::Moved if active_touch == Some(touch.id) => {
                        outcome = tracker.pointer_move(local(&tracker, pos));
                    }
                    TouchPhase::Ended if active_touch == Some(touch.id) => {
                        active_touch = None;
                        ended = tracker.pointer_up().is_some();
                    }
                    TouchPhase::Cancelled if active_touch == Some(touch.id) => {
                        active_touch = None;
                        ended = tracker.pointer_cancel().is_some();
                    }
                    _ => {}
                }
            }
            WindowEvent::Focused(false) => {
                active_touch = None;
                ended = tracker.pointer_cancel().is_some();
            }
            _ => {}
        }

        if let Some(o) = outcome {
            window.set_title(&title_for(o.value, o.state, o.divisor));
        } else if ended {
            let host = tracker.host();
            log::info!(
                "[native] value {:.4} ({} notifications)",
                host.value,
                host.notifications
            );
            window.set_title(&title_for(host.value, TrackingState::Idle, None));
        }
    })?;
    Ok(())
}
