//! Reusable dashboard widgets.

pub mod icons;
pub mod select;
pub mod virtual_list;

pub use icons::{icon, Icon};
pub use select::{SelectState, VirtualSelect};
pub use virtual_list::{VirtualList, DEFAULT_OVERSCAN};
