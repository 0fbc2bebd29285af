#![forbid(unsafe_code)]

pub mod catalog;
pub mod games;
pub mod interact;
pub mod model;
pub mod navigation;
