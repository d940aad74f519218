use std::time::Instant;

use thiserror::Error;

use crate::classifier::{Classifier, Config};
use crate::event::Event;
use crate::metrics::ContainerView;

/// Notification sink for one attachment: `(manual, container_id)`.
pub type ScrollCallback = Box<dyn FnMut(bool, &str)>;

/// Attach-time contract violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachError {
    #[error("container id must not be empty")]
    EmptyContainerId,
}

/// Handle for one attachment; pass back to [`Detector::detach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

struct Entry {
    token: u64,
    container: String,
    classifier: Classifier,
    callback: ScrollCallback,
}

impl Entry {
    fn deliver(&mut self, notification: Option<bool>) {
        if let Some(manual) = notification {
            (self.callback)(manual, &self.container);
        }
    }
}

/// Registry of scroll-interaction classifiers, one per attachment.
///
/// Window-scoped signals (pointer up/leave, key down) are dispatched once
/// here and fanned out to every attachment, each of which scopes the
/// effect to its own state. Container-scoped signals route by rect
/// containment or by target id. Attachments to the same container are
/// allowed and fully independent.
#[derive(Default)]
pub struct Detector {
    entries: Vec<Entry>,
    next_token: u64,
}

impl Detector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a classifier to a container with the default config.
    pub fn attach(
        &mut self,
        container: impl Into<String>,
        callback: impl FnMut(bool, &str) + 'static,
    ) -> Result<Subscription, AttachError> {
        self.attach_with(container, Config::new(), callback)
    }

    /// Attach a classifier to a container.
    ///
    /// The callback is invoked synchronously from [`dispatch`] and
    /// [`poll`], never batched. Fails fast on an empty container id.
    ///
    /// [`dispatch`]: Detector::dispatch
    /// [`poll`]: Detector::poll
    pub fn attach_with(
        &mut self,
        container: impl Into<String>,
        config: Config,
        callback: impl FnMut(bool, &str) + 'static,
    ) -> Result<Subscription, AttachError> {
        let container = container.into();
        if container.is_empty() {
            return Err(AttachError::EmptyContainerId);
        }
        let token = self.next_token;
        self.next_token += 1;
        log::debug!("[scroll] attach {container} (token {token})");
        self.entries.push(Entry {
            token,
            container,
            classifier: Classifier::new(config),
            callback: Box::new(callback),
        });
        Ok(Subscription(token))
    }

    /// Tear down one attachment. Idempotent; any pending reset deadline
    /// dies with the attachment, so nothing fires after this returns.
    pub fn detach(&mut self, subscription: Subscription) {
        if let Some(pos) = self
            .entries
            .iter()
            .position(|entry| entry.token == subscription.0)
        {
            let entry = self.entries.swap_remove(pos);
            log::debug!("[scroll] detach {} (token {})", entry.container, entry.token);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending reset deadline across attachments, for host
    /// event-loop poll timeouts.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .iter()
            .filter_map(|entry| entry.classifier.deadline())
            .min()
    }

    /// Route one input signal to the affected attachments, delivering any
    /// resulting notifications to their callbacks.
    pub fn dispatch(&mut self, event: &Event, view: &impl ContainerView, now: Instant) {
        match event {
            Event::PointerDown { x, y, .. } => {
                for entry in &mut self.entries {
                    let Some(metrics) = view.metrics(&entry.container) else {
                        continue;
                    };
                    if metrics.rect.contains(*x, *y) {
                        let note = entry.classifier.on_pointer_down(&metrics, *x, *y);
                        entry.deliver(note);
                    }
                }
            }
            Event::PointerUp { .. } => {
                for entry in &mut self.entries {
                    let note = entry.classifier.on_pointer_up(now);
                    entry.deliver(note);
                }
            }
            Event::PointerLeave => {
                for entry in &mut self.entries {
                    let note = entry.classifier.on_pointer_leave();
                    entry.deliver(note);
                }
            }
            Event::KeyDown { key, .. } => {
                for entry in &mut self.entries {
                    let has_focus = view.has_focus(&entry.container);
                    let note = entry.classifier.on_key_down(*key, has_focus);
                    entry.deliver(note);
                }
            }
            Event::Wheel { x, y, .. } => {
                for entry in &mut self.entries {
                    let Some(metrics) = view.metrics(&entry.container) else {
                        continue;
                    };
                    if metrics.rect.contains(*x, *y) {
                        let note = entry.classifier.on_wheel();
                        entry.deliver(note);
                    }
                }
            }
            Event::TouchStart { x, y } => {
                for entry in &mut self.entries {
                    let Some(metrics) = view.metrics(&entry.container) else {
                        continue;
                    };
                    if metrics.rect.contains(*x, *y) {
                        let note = entry.classifier.on_touch_start();
                        entry.deliver(note);
                    }
                }
            }
            Event::Scroll { target } => {
                for entry in &mut self.entries {
                    if entry.container != *target {
                        continue;
                    }
                    let Some(metrics) = view.metrics(&entry.container) else {
                        continue;
                    };
                    let note = entry.classifier.on_scroll(&metrics, now);
                    entry.deliver(note);
                }
            }
        }
    }

    /// Fire any due reset deadlines, ending quiet manual episodes.
    pub fn poll(&mut self, now: Instant) {
        for entry in &mut self.entries {
            let note = entry.classifier.poll(now);
            entry.deliver(note);
        }
    }
}
