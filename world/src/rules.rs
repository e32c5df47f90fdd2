use fxhash::FxHashMap;

use crate::creature::Kind;

/// Pairwise attraction factors between creature kinds. Positive values
/// attract, negative repel; unset pairs are neutral (1.0).
#[derive(Debug, Clone, Default)]
pub struct AttractionRules {
    factors: FxHashMap<(Kind, Kind), f32>,
}

impl AttractionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock ruleset: herbivores flock together and flee carnivores,
    /// carnivores ignore each other and drift toward prey.
    pub fn flocking() -> Self {
        let mut rules = Self::new();
        rules.set(Kind::Herbivore, Kind::Herbivore, 1.5);
        rules.set(Kind::Herbivore, Kind::Carnivore, -0.5);
        rules.set(Kind::Carnivore, Kind::Herbivore, 1.0);
        rules.set(Kind::Carnivore, Kind::Carnivore, 0.0);
        rules
    }

    pub fn set(&mut self, left: Kind, right: Kind, factor: f32) {
        self.factors.insert((left, right), factor);
    }

    pub fn get(&self, left: Kind, right: Kind) -> f32 {
        self.factors.get(&(left, right)).copied().unwrap_or(1.0)
    }
}
