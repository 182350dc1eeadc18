pub mod check;
pub mod format;
mod input;
