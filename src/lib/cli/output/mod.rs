//! Contains helpers and data structures to deal with what the program emits:
//! the compiler command lines, their timed execution and the measurement records
pub mod arguments;
pub mod executors;
pub mod records;
