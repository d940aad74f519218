pub mod classifier;
pub mod detector;
pub mod event;
pub mod hit;
pub mod metrics;
pub mod rect;

pub use classifier::{Classifier, Config, KeyScope, QUIET_PERIOD};
pub use detector::{AttachError, Detector, ScrollCallback, Subscription};
pub use event::{Event, Key, Modifiers, PointerButton};
pub use hit::{on_horizontal_scrollbar, on_scrollbar, on_vertical_scrollbar, HitTest};
pub use metrics::{ContainerView, Metrics, ScrollOffset, StaticView};
pub use rect::Rect;
