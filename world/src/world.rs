use common::vec2::Vec2;
use quadtree::{InsertOutcome, QuadTree, ResultList};
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::creature::{Creature, Neighbour};
use crate::error::{WorldError, WorldResult};
use crate::rules::AttractionRules;

pub const POP_MAX: usize = 1000;

/// The simulation world: fixed rectangular bounds, an owned population, and
/// the spatial index rebuilt from scratch every tick.
///
/// The index payload is the creature's population slot, never the creature
/// itself; tearing the tree down between ticks touches no creature state.
pub struct World {
    nw: Vec2,
    se: Vec2,

    population: Vec<Creature>,
    pub rules: AttractionRules,

    tree: QuadTree<usize>,

    // Reusable per-tick scratch: reset, never reallocated, between queries.
    matches: ResultList<usize>,
    neighbours: Vec<Neighbour>,

    tick: u64,
}

impl World {
    pub fn new(nw: Vec2, se: Vec2, rules: AttractionRules) -> WorldResult<Self> {
        let tree = QuadTree::try_new(nw, se).map_err(WorldError::InvalidBounds)?;
        Ok(Self {
            nw,
            se,
            population: Vec::new(),
            rules,
            tree,
            matches: ResultList::new(64),
            neighbours: Vec::new(),
            tick: 0,
        })
    }

    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.nw, self.se)
    }

    pub fn width(&self) -> f32 {
        (self.se.x - self.nw.x).abs()
    }

    pub fn height(&self) -> f32 {
        (self.se.y - self.nw.y).abs()
    }

    pub fn population(&self) -> &[Creature] {
        &self.population
    }

    pub fn population_mut(&mut self) -> &mut [Creature] {
        &mut self.population
    }

    /// The current tick's spatial index. Stale after the next [`World::step`].
    pub fn tree(&self) -> &QuadTree<usize> {
        &self.tree
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Adds a creature to the population and returns its slot index.
    pub fn spawn(&mut self, creature: Creature) -> WorldResult<usize> {
        if self.population.len() >= POP_MAX {
            return Err(WorldError::PopulationExhausted { max: POP_MAX });
        }
        self.population.push(creature);
        Ok(self.population.len() - 1)
    }

    /// Runs one simulation tick: rebuild the index over the fixed bounds,
    /// then give every living creature its neighbourhood and one movement
    /// update.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.rebuild_index();

        for slot in 0..self.population.len() {
            if !self.population[slot].is_alive() {
                continue;
            }

            let (pos, perception) = {
                let crt = &self.population[slot];
                (crt.pos, crt.perception)
            };
            let area_nw = Vec2::new(pos.x - perception, pos.y - perception);
            let area_se = Vec2::new(pos.x + perception, pos.y + perception);

            self.matches.reset();
            self.tree
                .find_in_area_excluding(area_nw, area_se, &slot, &mut self.matches);
            trace!(slot, matches = self.matches.len(), "neighbourhood query");

            self.neighbours.clear();
            for entry in &self.matches {
                let other = &self.population[entry.value];
                if !other.is_alive() {
                    continue;
                }
                self.neighbours.push(Neighbour {
                    pos: other.pos,
                    kind: other.kind,
                    mass: other.mass,
                });
            }

            let (nw, se) = (self.nw, self.se);
            self.population[slot].update(&self.rules, &self.neighbours, nw, se, rng);
        }

        self.tick += 1;
    }

    /// Discards the previous tick's tree and reinserts every living creature
    /// at its current position. A creature that has wandered outside the
    /// world rectangle is clamped back in and inserted once more.
    fn rebuild_index(&mut self) {
        let mut tree = QuadTree::new(self.nw, self.se);

        for (slot, crt) in self.population.iter_mut().enumerate() {
            if !crt.is_alive() {
                continue;
            }
            if tree.insert(crt.pos, slot) == InsertOutcome::Failed {
                warn!(slot, pos = %crt.pos, "creature out of bounds, clamping");
                crt.pos = Vec2::new(
                    crt.pos.x.clamp(self.nw.x, self.se.x),
                    crt.pos.y.clamp(self.nw.y, self.se.y),
                );
                tree.insert(crt.pos, slot);
            }
        }

        debug!(tick = self.tick, len = tree.len(), "rebuilt spatial index");
        self.tree = tree;
    }
}
