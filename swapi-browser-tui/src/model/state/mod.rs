//! 页面状态模块
//!
//! 定义列表页与弹窗的状态数据结构

mod modal;
mod people;

pub use modal::{DetailOverlay, Homeworld, Modal, ModalState};
pub use people::{PageState, PageStatus};
