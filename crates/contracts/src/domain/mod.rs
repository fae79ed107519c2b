pub mod a001_storage;
pub mod a002_box;
pub mod common;
