mod operators;
mod optimizer;
mod vector;

pub use optimizer::{Candidate, Generation, Optimizer};
