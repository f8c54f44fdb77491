pub mod config;
pub mod random_walk;
pub mod ratio;
pub mod sequence;
