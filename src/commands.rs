pub mod categories;
pub mod render;
pub mod serve;
