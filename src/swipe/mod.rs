// Swipe module - paged-view interaction components
//
// A "deck" of N side-by-side pages is navigated through a single continuous
// horizontal offset plus a discrete page index. Two input sources share one
// rule set:
// - drag gestures (mouse press / drag / release) tracked by the controller
// - explicit tab selection (clicks or number keys) routed through the same
//   settle logic
//
// Ownership follows the component pattern used throughout this codebase:
// the controller owns all interaction state, the App merely routes input to
// it and applies its offset when rendering. The settle animation is a target
// the controller hands to its tween; the event-loop tick drives the stepping.

pub mod animator;
pub mod controller;
pub mod tabs;

pub use animator::{Easing, SettleAnimator};
pub use controller::{PagedSwipeController, SwipeTuning};
pub use tabs::{TabItem, TabStrip};
