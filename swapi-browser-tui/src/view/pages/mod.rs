//! 页面内容

pub mod people;
pub mod status;
