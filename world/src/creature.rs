use common::vec2::Vec2;
use rand::Rng;
use std::fmt;

use crate::rules::AttractionRules;

pub const MIN_SIZE: f32 = 10.0;
pub const MIN_MASS: f32 = 1.0;
pub const MIN_AGILITY: f32 = 0.0;
pub const MIN_PERCEPTION: f32 = 0.0;

/// Off-world marker position for creatures that have not been placed yet.
pub const POS_NONE: f32 = -1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Herbivore,
    Carnivore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Alive,
    Dead,
}

/// Snapshot of a neighbouring creature, taken from an area-query result so a
/// creature can be updated while the rest of the population stays borrowed
/// immutably.
#[derive(Debug, Clone, Copy)]
pub struct Neighbour {
    pub pos: Vec2,
    pub kind: Kind,
    pub mass: f32,
}

#[derive(Debug, Clone)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub kind: Kind,
    pub status: Status,

    pub agility: f32,
    pub size: f32,
    pub mass: f32,

    /// Half-width of the square neighbourhood this creature perceives.
    pub perception: f32,

    pub pos: Vec2,
    pub target: Vec2,
}

impl Creature {
    pub fn birth(id: u32, name: &str, kind: Kind, pos: Vec2) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            status: Status::Alive,
            agility: MIN_AGILITY,
            size: MIN_SIZE,
            mass: MIN_MASS,
            perception: MIN_PERCEPTION,
            pos,
            target: pos,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == Status::Alive
    }

    /// Picks a new wander target within `max_radius` of the current position,
    /// clamped to the world rectangle.
    pub fn random_target<R: Rng>(&mut self, nw: Vec2, se: Vec2, max_radius: f32, rng: &mut R) {
        let offset = Vec2::rand_from(max_radius, rng);
        let targ = self.pos + offset;
        self.target = Vec2::new(targ.x.clamp(nw.x, se.x), targ.y.clamp(nw.y, se.y));
    }

    /// One tick of movement. Neighbour influence wins over wandering: when at
    /// least one neighbour exerts force, the target chase is skipped for this
    /// tick.
    pub fn update<R: Rng>(
        &mut self,
        rules: &AttractionRules,
        neighbours: &[Neighbour],
        nw: Vec2,
        se: Vec2,
        rng: &mut R,
    ) {
        let affected = self.apply_neighbours(rules, neighbours);
        if affected > 0 {
            self.pos = Vec2::new(self.pos.x.clamp(nw.x, se.x), self.pos.y.clamp(nw.y, se.y));
            return;
        }

        let speed = self.agility * 25.0;
        let remaining = self.pos.dist(self.target);
        self.pos = self.pos.move_to(self.target, speed);
        if remaining <= speed {
            self.random_target(nw, se, 200.0, rng);
        }
    }

    /// Inverse-square attraction/repulsion against each perceived neighbour,
    /// a variation of Newton's law of gravitation with per-kind attraction
    /// factors in place of the gravitational constant. Returns the number of
    /// neighbours that exerted force.
    fn apply_neighbours(&mut self, rules: &AttractionRules, neighbours: &[Neighbour]) -> usize {
        let mut count = 0;
        for other in neighbours {
            let delta = self.pos - other.pos;
            let dist = delta.mag();
            if dist == 0.0 || dist >= self.perception {
                continue;
            }

            let attraction = rules.get(self.kind, other.kind);
            let force = attraction * ((self.mass * other.mass) / (dist * dist));
            let speed = self.agility * 25.0;

            self.pos.x += force * delta.x * speed;
            self.pos.y += force * delta.y * speed;

            count += 1;
        }
        count
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id: {}, name: \"{}\", kind: {:?}, status: {:?}, pos: {}, targ: {}}}",
            self.id, self.name, self.kind, self.status, self.pos, self.target
        )
    }
}
