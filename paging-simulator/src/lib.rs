// Paging Experiment Library

pub mod models;
pub mod runner;
pub mod stats;
