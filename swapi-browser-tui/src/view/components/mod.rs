//! 可复用的界面组件

pub mod modal;
pub mod pagination;
pub mod search_bar;
pub mod statusbar;
