//! Reference content: a small aggro deck and the strategies that pilot it.

pub mod burn;
pub mod cards;
pub mod savannah_bolt;

pub use burn::BurnStrategy;
pub use cards::{register_standard_cards, LightningBolt, Savannah, SavannahLion, StandardCards};
pub use savannah_bolt::SavannahBoltStrategy;
