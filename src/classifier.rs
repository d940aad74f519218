use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::event::Key;
use crate::hit::{self, HitTest};
use crate::metrics::{Metrics, ScrollOffset};

/// Quiet period after the last signal before reverting to "not manual".
pub const QUIET_PERIOD: Duration = Duration::from_millis(100);

/// Scope of the keyboard signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyScope {
    /// Any navigation key press counts, wherever focus is.
    #[default]
    Global,
    /// Navigation keys count only while the container (or a descendant)
    /// holds focus.
    Focused,
}

/// Per-container classifier configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Keys excluded from the keyboard signal. Wheel, touch, and
    /// scrollbar signals are always active.
    pub ignore_keys: HashSet<Key>,
    pub key_scope: KeyScope,
    /// Debounce delay; [`QUIET_PERIOD`] when unset.
    pub quiet_period: Option<Duration>,
    /// Replacement scrollbar hit-test. The default edge-margin test is
    /// used when unset.
    pub hit_test: Option<HitTest>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_key(mut self, key: Key) -> Self {
        self.ignore_keys.insert(key);
        self
    }

    pub fn key_scope(mut self, scope: KeyScope) -> Self {
        self.key_scope = scope;
        self
    }

    pub fn quiet_period(mut self, period: Duration) -> Self {
        self.quiet_period = Some(period);
        self
    }

    pub fn hit_test(mut self, test: HitTest) -> Self {
        self.hit_test = Some(test);
        self
    }

    fn period(&self) -> Duration {
        self.quiet_period.unwrap_or(QUIET_PERIOD)
    }
}

/// State machine deciding whether a container's scroll-position changes
/// are user-driven.
///
/// Five signal sources feed two transient flags; an observed position
/// delta combined with either flag classifies the change as manual. A
/// deadline re-armed on scroll and pointer-up reverts the state after the
/// quiet period. Each handler returns the notification to deliver, if
/// any: `Some(true)` for a manual signal or classified change,
/// `Some(false)` when a manual episode ends.
///
/// Drop policy: releasing a scrollbar drag notifies `false` immediately
/// (unless a keyboard/wheel/touch episode is still live); keyboard,
/// wheel, and touch episodes end via the debounce deadline.
#[derive(Debug)]
pub struct Classifier {
    config: Config,
    user_scrolling: bool,
    dragging_scrollbar: bool,
    last_scroll: ScrollOffset,
    reset_deadline: Option<Instant>,
    /// Last notified classification; suppresses duplicate `false`s.
    manual: bool,
}

impl Classifier {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            user_scrolling: false,
            dragging_scrollbar: false,
            last_scroll: ScrollOffset::default(),
            reset_deadline: None,
            manual: false,
        }
    }

    /// Whether the last notification classified the container as
    /// manually scrolled.
    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn is_dragging_scrollbar(&self) -> bool {
        self.dragging_scrollbar
    }

    /// Pending debounce deadline, if a reset is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.reset_deadline
    }

    /// Pointer pressed inside the container. Classifies as a drag start
    /// when the point lands on a scrollbar track.
    pub fn on_pointer_down(&mut self, metrics: &Metrics, x: u16, y: u16) -> Option<bool> {
        let on_track = match self.config.hit_test {
            Some(test) => test(metrics, x, y),
            None => hit::on_scrollbar(metrics, x, y),
        };
        if !on_track {
            return None;
        }
        log::debug!("[scroll] drag start at ({x}, {y})");
        self.dragging_scrollbar = true;
        self.notify_manual()
    }

    /// Pointer released anywhere in the window. Ends a drag and re-arms
    /// the reset deadline.
    pub fn on_pointer_up(&mut self, now: Instant) -> Option<bool> {
        let dropped = self.stop_drag();
        self.arm(now);
        dropped
    }

    /// Pointer left the window; treated as a drag end without touching
    /// the deadline.
    pub fn on_pointer_leave(&mut self) -> Option<bool> {
        self.stop_drag()
    }

    /// Navigation key pressed. `has_focus` is only consulted under
    /// [`KeyScope::Focused`].
    pub fn on_key_down(&mut self, key: Key, has_focus: bool) -> Option<bool> {
        if !key.is_navigation() || self.config.ignore_keys.contains(&key) {
            return None;
        }
        if self.config.key_scope == KeyScope::Focused && !has_focus {
            return None;
        }
        log::trace!("[scroll] key signal {key:?}");
        self.user_scrolling = true;
        self.notify_manual()
    }

    /// Wheel tick over the container.
    pub fn on_wheel(&mut self) -> Option<bool> {
        self.user_scrolling = true;
        self.notify_manual()
    }

    /// Touch contact started on the container.
    pub fn on_touch_start(&mut self) -> Option<bool> {
        self.user_scrolling = true;
        self.notify_manual()
    }

    /// Observed scroll notification. Classifies an actual position delta
    /// against the current flags, then records the new position either
    /// way so repeated non-moving notifications never report a change.
    pub fn on_scroll(&mut self, metrics: &Metrics, now: Instant) -> Option<bool> {
        let moved = metrics.scroll != self.last_scroll;
        let notification = if moved && (self.dragging_scrollbar || self.user_scrolling) {
            log::trace!(
                "[scroll] manual move {:?} -> {:?}",
                self.last_scroll,
                metrics.scroll
            );
            self.notify_manual()
        } else {
            None
        };
        self.last_scroll = metrics.scroll;
        self.arm(now);
        notification
    }

    /// Fire the reset deadline if it is due. Ends the keyboard/wheel/
    /// touch episode; never notifies `false` twice for one episode.
    pub fn poll(&mut self, now: Instant) -> Option<bool> {
        let deadline = self.reset_deadline?;
        if now < deadline {
            return None;
        }
        self.reset_deadline = None;
        self.user_scrolling = false;
        if self.manual && !self.dragging_scrollbar {
            log::debug!("[scroll] quiet period elapsed, episode over");
            self.manual = false;
            return Some(false);
        }
        None
    }

    fn stop_drag(&mut self) -> Option<bool> {
        if !self.dragging_scrollbar {
            return None;
        }
        self.dragging_scrollbar = false;
        log::debug!("[scroll] drag end");
        // Keyboard/wheel/touch episodes outlive the drag and end via the
        // deadline instead.
        if self.manual && !self.user_scrolling {
            self.manual = false;
            return Some(false);
        }
        None
    }

    /// Replace any pending deadline; at most one is armed at a time.
    fn arm(&mut self, now: Instant) {
        self.reset_deadline = Some(now + self.config.period());
    }

    fn notify_manual(&mut self) -> Option<bool> {
        self.manual = true;
        Some(true)
    }
}
