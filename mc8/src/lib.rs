pub mod asm;
pub mod dis;
pub mod rom;
