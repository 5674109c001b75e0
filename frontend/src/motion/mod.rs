//! Animation plumbing: springs and easing curves, variant configs, and the
//! browser adapters (frame loop, viewport observer, scroll offset) the
//! components drive them with.

pub mod counter;
pub mod css;
pub mod easing;
pub mod frame;
pub mod in_view;
pub mod scroll;
pub mod spring;
pub mod variants;

pub use css::{entrance_class, loop_class};
pub use in_view::use_in_view;
pub use scroll::use_scroll_y;
