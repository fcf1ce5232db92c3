pub mod kind;

pub use calc_error::Error;
pub use kind::{MaxDepthExceeded, UndefinedVariable, UnknownOperation};
