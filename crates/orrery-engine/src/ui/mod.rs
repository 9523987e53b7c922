pub mod layout;
pub mod tooltip;
pub mod widgets;
