//! Ports (trait boundaries) between the game loop and the players it drives.

pub mod agent;

pub use agent::Agent;
