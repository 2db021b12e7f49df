//! High-level operations on the numbers.

mod add;
mod log;
mod mul;
mod other;
mod pow;
