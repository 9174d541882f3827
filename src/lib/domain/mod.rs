//! The higher abstractions of the program: what a benchmark suite is, and the
//! measurements produced by timing one
pub mod measurement;
pub mod suite;
