pub mod statistics;
pub mod accumulator;
pub mod compile;
