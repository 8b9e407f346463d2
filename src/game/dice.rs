use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use super::globals::*;
use crate::error::{Result, SimulationError};

/// The source of every random event in a simulation: dice rolls and deck shuffles.
pub trait RandomSource {
    /// Roll one die, returning a face between 1 and 6 inclusive.
    fn roll_die(&mut self) -> u8;

    /// Shuffle `cards` into a uniformly random order.
    fn shuffle(&mut self, cards: &mut [Card]);

    /// Roll both dice.
    fn roll(&mut self) -> DiceRoll {
        let die1 = self.roll_die();
        let die2 = self.roll_die();
        DiceRoll::new(die1, die2)
    }
}

#[derive(Clone, Debug)]
/// A pair of fair dice backed by a small, fast generator.
pub struct Dice {
    rng: SmallRng,
}

impl Dice {
    /// Return dice seeded from the operating system.
    pub fn new() -> Dice {
        Dice {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Return dice that produce the same sequence for the same `seed`.
    pub fn seeded(seed: u64) -> Dice {
        Dice {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Dice {
    fn default() -> Self {
        Dice::new()
    }
}

impl RandomSource for Dice {
    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }

    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

#[derive(Clone, Debug)]
/// Dice that replay a fixed sequence of faces before falling back to
/// seeded random dice. Shuffles always use the fallback dice.
pub struct ScriptedDice {
    faces: VecDeque<u8>,
    fallback: Dice,
}

impl ScriptedDice {
    /// Return dice that produce `faces` in order, then random faces seeded by `seed`.
    pub fn new(faces: Vec<u8>, seed: u64) -> Result<ScriptedDice> {
        if let Some(&face) = faces.iter().find(|&&f| !(1..=6).contains(&f)) {
            return Err(SimulationError::InvalidDieFace { face });
        }

        Ok(ScriptedDice {
            faces: faces.into(),
            fallback: Dice::seeded(seed),
        })
    }

    /// Return dice that produce the rolls in `rolls` in order.
    pub fn from_rolls(rolls: &[(u8, u8)], seed: u64) -> Result<ScriptedDice> {
        let faces = rolls.iter().flat_map(|&(d1, d2)| [d1, d2]).collect();
        ScriptedDice::new(faces, seed)
    }

    /// The number of scripted faces that haven't been rolled yet.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl RandomSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        match self.faces.pop_front() {
            Some(face) => face,
            None => self.fallback.roll_die(),
        }
    }

    fn shuffle(&mut self, cards: &mut [Card]) {
        self.fallback.shuffle(cards);
    }
}
