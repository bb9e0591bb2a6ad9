pub mod ff_optimizer;
pub mod search;
