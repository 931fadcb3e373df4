//! Web Motion Utilities
//!
//! Small visual effects for server-rendered pages: stepped and eased
//! progress bars, count-up numbers, click ripples, confetti, shake and
//! scroll-triggered card reveals.
//!
//! The stepping and easing math lives apart from the DOM glue so it can be
//! exercised without a browser.

pub mod confetti;
pub mod counter;
pub mod dom;
pub mod easing;
pub mod frame;
pub mod keyframes;
pub mod progress;
pub mod reveal;
pub mod ripple;
pub mod scroll;

pub use confetti::{create_confetti, ConfettiParticle};
pub use counter::{animate_counter, CounterTicker};
pub use dom::{dom_ready, parse_int_prefix};
pub use easing::ease_out_cubic;
pub use frame::{next_frame, sleep};
pub use keyframes::{inject_keyframes, shake};
pub use progress::{animate_progress_bar, update_progress_with_animation};
pub use reveal::observe_cards;
pub use ripple::add_ripple_effect;
pub use scroll::smooth_scroll_to;
