//! Frame scheduling.
//!
//! The scheduler owns the redraw lifecycle. A host provides a [`FrameClock`]
//! that turns "schedule this token" into its own frame callback. Each running
//! period has one token; ticks carrying any other token are stale and draw
//! nothing, so no frame is produced after [`FrameScheduler::stop`] even if the
//! host delivers a callback it had already queued.

use tracing::{debug, trace};

use crate::geom::SurfaceSize;
use crate::plane::CoordinatePlane;
use crate::render::FrameStats;
use crate::surface::Surface;

/// Identifies one running period of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// Host hook for frame callbacks.
pub trait FrameClock {
    /// Arrange for a tick carrying `token` on the next frame.
    fn schedule(&mut self, token: FrameToken);
    /// Drop any pending tick for `token`.
    fn cancel(&mut self, token: FrameToken);
}

/// Result of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A frame was rendered onto the surface.
    Rendered(FrameStats),
    /// The token was not active; nothing was drawn.
    Stale,
}

/// Single pending request, for hosts that poll once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRequest {
    pending: Option<FrameToken>,
}

impl FrameRequest {
    /// Create an empty request slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending token, if any.
    pub fn take(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    /// Peek at the pending token.
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }
}

impl FrameClock for FrameRequest {
    fn schedule(&mut self, token: FrameToken) {
        self.pending = Some(token);
    }

    fn cancel(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }
}

/// Continuous redraw driver with explicit start/stop.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    active: Option<FrameToken>,
    next_token: u64,
    frames_rendered: u64,
}

impl FrameScheduler {
    /// Create a stopped scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether ticks are currently accepted.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Token of the current running period.
    pub fn active_token(&self) -> Option<FrameToken> {
        self.active
    }

    /// Number of frames rendered over the scheduler's lifetime.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Start ticking. Starting a running scheduler returns the active token
    /// without scheduling a second callback.
    pub fn start(&mut self, clock: &mut impl FrameClock) -> FrameToken {
        if let Some(token) = self.active {
            return token;
        }
        self.next_token += 1;
        let token = FrameToken(self.next_token);
        self.active = Some(token);
        clock.schedule(token);
        debug!(token = token.0, "frame scheduler started");
        token
    }

    /// Stop ticking. Returns whether the scheduler was running.
    pub fn stop(&mut self, clock: &mut impl FrameClock) -> bool {
        let Some(token) = self.active.take() else {
            return false;
        };
        clock.cancel(token);
        debug!(token = token.0, "frame scheduler stopped");
        true
    }

    /// Handle one host frame callback.
    ///
    /// Resizes the surface backing to `logical` × `scale_factor`, rebuilds
    /// the frame from the plane's current state, presents it, and schedules
    /// the next tick.
    pub fn tick(
        &mut self,
        token: FrameToken,
        plane: &CoordinatePlane,
        surface: &mut Surface,
        logical: SurfaceSize,
        scale_factor: f64,
        clock: &mut impl FrameClock,
    ) -> TickOutcome {
        if self.active != Some(token) {
            trace!(token = token.0, "stale frame tick ignored");
            return TickOutcome::Stale;
        }
        surface.resize(logical, scale_factor);
        let frame = plane.build_frame(surface.logical_size());
        let stats = frame.stats;
        surface.present(frame);
        self.frames_rendered += 1;
        clock.schedule(token);
        TickOutcome::Rendered(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ScreenPoint;
    use crate::render::RenderCommand;
    use crate::scene::Point;

    #[derive(Default)]
    struct RecordingClock {
        scheduled: Vec<FrameToken>,
        cancelled: Vec<FrameToken>,
    }

    impl FrameClock for RecordingClock {
        fn schedule(&mut self, token: FrameToken) {
            self.scheduled.push(token);
        }

        fn cancel(&mut self, token: FrameToken) {
            self.cancelled.push(token);
        }
    }

    const SIZE: SurfaceSize = SurfaceSize {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn start_is_idempotent() {
        let mut clock = RecordingClock::default();
        let mut scheduler = FrameScheduler::new();
        let first = scheduler.start(&mut clock);
        let second = scheduler.start(&mut clock);
        assert_eq!(first, second);
        assert_eq!(clock.scheduled, vec![first]);
    }

    #[test]
    fn tick_renders_and_reschedules() {
        let mut clock = FrameRequest::new();
        let mut scheduler = FrameScheduler::new();
        let mut surface = Surface::new();
        let plane = CoordinatePlane::new();

        let token = scheduler.start(&mut clock);
        let pending = clock.take().expect("first tick scheduled");
        let outcome = scheduler.tick(pending, &plane, &mut surface, SIZE, 2.0, &mut clock);
        assert!(matches!(outcome, TickOutcome::Rendered(_)));
        assert_eq!(clock.pending(), Some(token));
        assert_eq!(scheduler.frames_rendered(), 1);
        assert_eq!(surface.backing_size().width, 1600);
        assert!(surface.frame().is_some());
    }

    #[test]
    fn no_draw_after_stop() {
        let mut clock = RecordingClock::default();
        let mut scheduler = FrameScheduler::new();
        let mut surface = Surface::new();
        let plane = CoordinatePlane::new();

        let token = scheduler.start(&mut clock);
        scheduler.tick(token, &plane, &mut surface, SIZE, 1.0, &mut clock);
        assert!(scheduler.stop(&mut clock));
        assert_eq!(clock.cancelled, vec![token]);

        let before = scheduler.frames_rendered();
        let outcome = scheduler.tick(token, &plane, &mut surface, SIZE, 1.0, &mut clock);
        assert_eq!(outcome, TickOutcome::Stale);
        assert_eq!(scheduler.frames_rendered(), before);
        // Nothing new was scheduled by the stale tick.
        assert_eq!(clock.scheduled.len(), 2);
        assert!(!scheduler.stop(&mut clock));
    }

    #[test]
    fn restart_invalidates_old_token() {
        let mut clock = FrameRequest::new();
        let mut scheduler = FrameScheduler::new();
        let mut surface = Surface::new();
        let plane = CoordinatePlane::new();

        let old = scheduler.start(&mut clock);
        scheduler.stop(&mut clock);
        assert_eq!(clock.pending(), None);
        let new = scheduler.start(&mut clock);
        assert_ne!(old, new);
        assert_eq!(
            scheduler.tick(old, &plane, &mut surface, SIZE, 1.0, &mut clock),
            TickOutcome::Stale
        );
        assert!(matches!(
            scheduler.tick(new, &plane, &mut surface, SIZE, 1.0, &mut clock),
            TickOutcome::Rendered(_)
        ));
    }

    #[test]
    fn mutation_between_ticks_is_visible() {
        let mut clock = FrameRequest::new();
        let mut scheduler = FrameScheduler::new();
        let mut surface = Surface::new();
        let mut plane = CoordinatePlane::new();
        plane.add_point(Point::new(0.0, 0.0));

        let token = scheduler.start(&mut clock);
        scheduler.tick(token, &plane, &mut surface, SIZE, 1.0, &mut clock);

        plane.pointer_down(ScreenPoint::new(0.0, 0.0));
        plane.pointer_move(ScreenPoint::new(15.0, -5.0));
        scheduler.tick(token, &plane, &mut surface, SIZE, 1.0, &mut clock);

        let frame = surface.frame().expect("frame presented");
        let center = frame
            .render
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .expect("point drawn");
        assert_eq!(center, ScreenPoint::new(415.0, 295.0));
    }

    #[test]
    fn resize_between_ticks_is_picked_up() {
        let mut clock = FrameRequest::new();
        let mut scheduler = FrameScheduler::new();
        let mut surface = Surface::new();
        let plane = CoordinatePlane::new();

        let token = scheduler.start(&mut clock);
        scheduler.tick(token, &plane, &mut surface, SIZE, 1.0, &mut clock);
        let resized = SurfaceSize::new(400.0, 300.0);
        scheduler.tick(token, &plane, &mut surface, resized, 1.0, &mut clock);
        let frame = surface.frame().expect("frame presented");
        assert_eq!(frame.size, resized);
        assert_eq!(surface.backing_size().height, 300);
    }
}
