//! Picking session state, independent of any window.
//!
//! The picker window translates egui input into [`PickEvent`]s and feeds them
//! to [`PickSession::handle`]; the session decides whether a click becomes a
//! point, is ignored, or ends the session.

use crate::config::PointLimit;

/// Image-space coordinate `[x, y]`: x along columns, y along rows (growing downward).
pub type Point = [f64; 2];

/// Lifecycle of one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
    /// Ended by the finish key, by a click past the limit, or by closing the window.
    Completed,
    /// Ended by the cancel key. The caller should start a fresh session.
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickKey {
    Finish,
    Cancel,
}

/// Input delivered to a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickEvent {
    /// Primary click. `panel` is the image under the pointer, `None` when outside every image.
    Click { panel: Option<usize>, point: Point },
    Key(PickKey),
    /// The window was closed without a key.
    Close,
}

/// What a single event did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// A point was appended to `panel` at position `index`.
    Recorded { panel: usize, index: usize },
    Ignored,
    Finished,
    Cancelled,
}

/// Points collected on one or more images during one window lifetime.
#[derive(Clone, Debug)]
pub struct PickSession {
    panels: Vec<Vec<Point>>,
    limit: PointLimit,
    state: SessionState,
}

impl PickSession {
    pub fn new(panel_count: usize, limit: PointLimit) -> Self {
        Self {
            panels: vec![Vec::new(); panel_count],
            limit,
            state: SessionState::NotStarted,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn limit(&self) -> PointLimit {
        self.limit
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Mark the session as running. Called when the window shows its first frame.
    pub fn start(&mut self) {
        if self.state == SessionState::NotStarted {
            self.state = SessionState::InProgress;
        }
    }

    /// `true` once the session completed or was cancelled.
    pub fn is_over(&self) -> bool {
        matches!(
            self.state,
            SessionState::Completed | SessionState::Cancelled
        )
    }

    /// `true` when the session ended through the cancel key.
    pub fn restart_requested(&self) -> bool {
        self.state == SessionState::Cancelled
    }

    /// Points picked so far on `panel` (empty for an unknown panel).
    pub fn points(&self, panel: usize) -> &[Point] {
        self.panels.get(panel).map(|p| p.as_slice()).unwrap_or(&[])
    }

    /// Segments joining successive points of `panel`, oldest first.
    pub fn segments(&self, panel: usize) -> impl Iterator<Item = [Point; 2]> + '_ {
        self.points(panel).windows(2).map(|w| [w[0], w[1]])
    }

    /// `true` when every panel holds the maximum number of points.
    pub fn all_full(&self) -> bool {
        self.panels.iter().all(|p| self.limit.is_reached(p.len()))
    }

    pub fn handle(&mut self, event: PickEvent) -> EventOutcome {
        if self.is_over() {
            return EventOutcome::Ignored;
        }
        self.start();

        match event {
            PickEvent::Click { panel, point } => self.click(panel, point),
            PickEvent::Key(PickKey::Finish) | PickEvent::Close => {
                self.state = SessionState::Completed;
                EventOutcome::Finished
            }
            PickEvent::Key(PickKey::Cancel) => {
                for p in &mut self.panels {
                    p.clear();
                }
                self.state = SessionState::Cancelled;
                EventOutcome::Cancelled
            }
        }
    }

    fn click(&mut self, panel: Option<usize>, point: Point) -> EventOutcome {
        // a click once everything is full is the signal to stop, not a new point
        if self.all_full() {
            self.state = SessionState::Completed;
            return EventOutcome::Finished;
        }

        let Some(panel) = panel.filter(|i| *i < self.panels.len()) else {
            return EventOutcome::Ignored;
        };
        let points = &mut self.panels[panel];
        if self.limit.is_reached(points.len()) {
            return EventOutcome::Ignored;
        }

        points.push(point);
        EventOutcome::Recorded {
            panel,
            index: points.len() - 1,
        }
    }

    /// Consume the session, returning one sequence per panel in click order.
    pub fn into_sequences(self) -> Vec<Vec<Point>> {
        self.panels
    }
}
