pub mod cache;
pub mod collector;
pub mod presenter;
pub mod youtube;
