pub mod check;
pub mod emit;
pub mod levels;
