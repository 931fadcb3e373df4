//! UI Components
//!
//! Leptos views for the page's transient widgets.

mod skeleton;
mod toast;

pub use skeleton::{show_skeleton, SkeletonCards, DEFAULT_SKELETON_COUNT};
pub use toast::{notify, show_toast, ToastSchedule, FADE_IN_DELAY_MS, REMOVAL_GRACE_MS};
