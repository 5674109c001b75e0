pub mod animated_counter;
pub mod badge;
pub mod button;
pub mod card;
pub mod progress_bar;

pub use animated_counter::AnimatedCounter;
pub use badge::{Badge, BadgeSize, XpBadge};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, HoverEffect};
pub use progress_bar::{CircularProgress, ProgressBar};

/// Stylesheet shared by every kit component, mounted once by the page.
pub fn kit_css() -> String {
    [button::CSS, badge::CSS, card::CSS, progress_bar::CSS].concat()
}
