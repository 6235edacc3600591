pub mod length;
pub mod var;

pub use length::{Length, PX_PER_REM, Unit};
pub use var::VarReference;
