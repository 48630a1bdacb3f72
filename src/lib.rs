//! Goldfish simulator: how many turns does a deck and strategy take to deal
//! 20 damage to an opponent who never does anything?

pub mod card;
pub mod game;
pub mod rng;
pub mod sims;
pub mod simulation;
pub mod strategy;

#[cfg(test)]
mod integration_tests;
