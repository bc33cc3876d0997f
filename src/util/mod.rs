pub mod assert;
pub mod circle;
pub mod collision;
pub mod dimension;
pub mod linalg;
pub mod log;
pub mod real;
pub mod rect;
pub mod units;
