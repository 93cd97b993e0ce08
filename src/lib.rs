pub mod archetype;
pub mod brain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dimensions;
pub mod logging;
pub mod resonance;
pub mod scan;
pub mod scanner;
pub mod twins;

pub use scanner::BrainScanner;
