mod color;
mod format;
mod fs;
mod html;

pub(crate) use color::*;
pub(crate) use format::*;
pub(crate) use fs::*;
pub(crate) use html::*;
