mod globals;
pub use globals::*;

mod deck;
pub use deck::{CardDeck, Decks};

mod dice;
pub use dice::{Dice, RandomSource, ScriptedDice};

pub mod effects;

mod histogram;
pub use histogram::Histogram;

mod jail;
pub use jail::Jail;

use crate::error::{Result, SimulationError};

/// A single-player simulation of Monopoly that only tracks where the token lands.
pub struct Simulation<S: RandomSource = Dice> {
    /// Rolls the dice and shuffles the decks.
    source: S,
    /// The chance and community chest decks.
    decks: Decks,
    /// The jail corner.
    jail: Jail,
    /// The token's position around the board. 'Go' is at 0
    /// and 'Boardwalk' (the last tile going clockwise) is at 39.
    position: u8,
    /// The number of consecutive doubles rolled outside of jail.
    doubles_rolled: u8,
    /// How often each tile was the last one landed on in a turn.
    histogram: Histogram,
}

impl Simulation<Dice> {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return a new simulation with dice seeded from the operating system.
    pub fn new(policy: ReleasePolicy) -> Self {
        Simulation::with_source(policy, Dice::new())
    }

    /// Return a new simulation that plays out the same way for the same `seed`.
    pub fn seeded(policy: ReleasePolicy, seed: u64) -> Self {
        Simulation::with_source(policy, Dice::seeded(seed))
    }
}

impl<S: RandomSource> Simulation<S> {
    /// Return a new simulation with the token on 'Go', drawing randomness from `source`.
    pub fn with_source(policy: ReleasePolicy, mut source: S) -> Self {
        let decks = Decks::new(&mut source);
        Simulation::with_decks(policy, source, decks)
    }

    /// Return a new simulation with the token on 'Go' that draws from `decks`.
    pub(crate) fn with_decks(policy: ReleasePolicy, source: S, decks: Decks) -> Self {
        Simulation {
            source,
            decks,
            jail: Jail::new(policy),
            position: GO_POSITION,
            doubles_rolled: 0,
            histogram: Histogram::new(),
        }
    }

    /*********        PUBLIC INTERFACES        *********/

    /// Play one turn, returning the position the token ends the turn on.
    pub fn step(&mut self) -> Result<u8> {
        let roll = self.source.roll();
        self.play(roll)
    }

    /// Play `turns` turns, returning the position the token ends on.
    pub fn run(&mut self, turns: u64) -> Result<u8> {
        for _ in 0..turns {
            self.step()?;
        }

        Ok(self.position)
    }

    /*********        GETTERS        *********/

    pub fn position(&self) -> u8 {
        self.position
    }

    /// The number of turns played so far.
    pub fn turns(&self) -> u64 {
        self.histogram.total()
    }

    pub fn doubles_rolled(&self) -> u8 {
        self.doubles_rolled
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn jail(&self) -> &Jail {
        &self.jail
    }

    pub fn decks(&self) -> &Decks {
        &self.decks
    }

    pub fn policy(&self) -> ReleasePolicy {
        self.jail.policy()
    }

    /*********        HELPER FUNCTIONS        *********/

    /// Play one turn with `roll`.
    fn play(&mut self, roll: DiceRoll) -> Result<u8> {
        for face in [roll.die1, roll.die2] {
            if !(1..=6).contains(&face) {
                return Err(SimulationError::InvalidDieFace { face });
            }
        }

        let position = if self.jail.is_imprisoned() {
            // Doubles rolled in jail don't count towards the three doubles rule
            self.doubles_rolled = 0;
            self.jail.resolve_turn(roll, self.position, &mut self.decks)? % BOARD_SIZE
        } else {
            if roll.is_double() {
                self.doubles_rolled += 1;
            } else {
                self.doubles_rolled = 0;
            }

            // Go to jail after three consecutive doubles, without moving
            if self.doubles_rolled == DOUBLES_TO_JAIL {
                self.imprison()
            } else {
                let tentative = (self.position + roll.sum()) % BOARD_SIZE;

                match effects::resolve_landing(tentative, &mut self.decks, &mut self.source)? {
                    Landing::At(pos) => pos,
                    Landing::Jail => self.imprison(),
                }
            }
        };

        log::trace!("{:<32}{} {:>2} -> {:>2}", "turn", roll, self.position, position);

        self.decks.check_invariants()?;
        self.histogram.record(position)?;
        self.position = position;

        Ok(position)
    }

    /// Send the token to jail, returning the jail's position.
    fn imprison(&mut self) -> u8 {
        self.jail.send_to_jail();

        // Reset the doubles counter
        self.doubles_rolled = 0;

        JAIL_POSITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(policy: ReleasePolicy, rolls: &[(u8, u8)]) -> Simulation<ScriptedDice> {
        Simulation::with_source(policy, ScriptedDice::from_rolls(rolls, 99).unwrap())
    }

    /// A simulation whose `kind` deck deals a go to jail card first.
    fn jail_card_first(kind: DeckKind, rolls: &[(u8, u8)]) -> Simulation<ScriptedDice> {
        let mut dice = ScriptedDice::from_rolls(rolls, 99).unwrap();
        let mut decks = Decks::new(&mut dice);

        let mut order = kind.cards();
        let i = order.iter().position(|&c| c == Card::GoToJail).unwrap();
        let card = order.remove(i);
        order.insert(0, card);
        *decks.get_mut(kind) = CardDeck::stacked(kind, order).unwrap();

        Simulation::with_decks(ReleasePolicy::WaitForDoubles, dice, decks)
    }

    #[test]
    fn positions_stay_on_the_board() {
        for policy in [ReleasePolicy::ImmediatePay, ReleasePolicy::WaitForDoubles] {
            let mut sim = Simulation::seeded(policy, 1234);

            for _ in 0..20_000 {
                let pos = sim.step().unwrap();
                assert!(pos < BOARD_SIZE);
                assert_eq!(pos, sim.position());
                if !sim.jail().is_imprisoned() {
                    assert_eq!(sim.jail().turns_waited(), 0);
                }
            }
        }
    }

    #[test]
    fn histogram_counts_every_turn() {
        let mut sim = Simulation::seeded(ReleasePolicy::WaitForDoubles, 77);

        sim.run(5_000).unwrap();
        assert_eq!(sim.histogram().total(), 5_000);
        sim.run(2_500).unwrap();
        assert_eq!(sim.histogram().total(), 7_500);
        assert_eq!(sim.turns(), 7_500);
    }

    #[test]
    fn landing_on_go_to_jail() {
        let mut sim = scripted(ReleasePolicy::WaitForDoubles, &[(4, 5), (6, 5), (6, 4)]);

        assert_eq!(sim.step().unwrap(), 9);
        assert_eq!(sim.step().unwrap(), 20);
        assert_eq!(sim.step().unwrap(), JAIL_POSITION);
        assert!(sim.jail().is_imprisoned());
        assert_eq!(sim.histogram().count(JAIL_POSITION), 1);
        assert_eq!(sim.histogram().count(GO_TO_JAIL_POSITION), 0);
    }

    #[test]
    fn landing_on_go_to_jail_with_doubles() {
        let mut sim = scripted(ReleasePolicy::WaitForDoubles, &[(4, 5), (6, 5), (5, 5)]);
        sim.run(2).unwrap();

        assert_eq!(sim.step().unwrap(), JAIL_POSITION);
        assert!(sim.jail().is_imprisoned());
        assert_eq!(sim.doubles_rolled(), 0);
    }

    #[test]
    fn community_chest_go_to_jail_card() {
        let mut sim = jail_card_first(DeckKind::CommunityChest, &[(1, 1)]);

        assert_eq!(sim.step().unwrap(), JAIL_POSITION);
        assert!(sim.jail().is_imprisoned());
        assert_eq!(sim.doubles_rolled(), 0);
        assert_eq!(sim.decks().community_chest.discard_pile(), &[Card::GoToJail]);
        assert_eq!(sim.histogram().count(2), 0);
    }

    #[test]
    fn chance_go_to_jail_card() {
        let mut sim = jail_card_first(DeckKind::Chance, &[(3, 4), (1, 2)]);

        assert_eq!(sim.step().unwrap(), JAIL_POSITION);
        assert!(sim.jail().is_imprisoned());
        assert_eq!(sim.decks().chance.discard_pile(), &[Card::GoToJail]);

        // Waiting for doubles keeps the token in jail
        assert_eq!(sim.step().unwrap(), JAIL_POSITION);
        assert_eq!(sim.jail().turns_waited(), 1);
    }

    #[test]
    fn policy_comes_from_the_jail() {
        let sim = Simulation::seeded(ReleasePolicy::WaitForDoubles, 3);
        assert_eq!(sim.policy(), ReleasePolicy::WaitForDoubles);
        assert_eq!(sim.jail().policy(), sim.policy());
    }

    #[test]
    fn bad_die_faces_are_not_recorded() {
        let mut sim = Simulation::seeded(ReleasePolicy::ImmediatePay, 6);

        assert_eq!(
            sim.play(DiceRoll::new(0, 3)),
            Err(SimulationError::InvalidDieFace { face: 0 })
        );
        assert_eq!(sim.turns(), 0);
        assert_eq!(sim.position(), GO_POSITION);
    }

    #[test]
    fn three_doubles_go_to_jail() {
        let mut sim = scripted(ReleasePolicy::WaitForDoubles, &[(2, 2), (4, 4), (1, 1)]);

        assert_eq!(sim.step().unwrap(), 4);
        assert_eq!(sim.doubles_rolled(), 1);
        assert_eq!(sim.step().unwrap(), 12);
        assert_eq!(sim.doubles_rolled(), 2);

        // The third double doesn't move the token
        assert_eq!(sim.step().unwrap(), JAIL_POSITION);
        assert!(sim.jail().is_imprisoned());
        assert_eq!(sim.doubles_rolled(), 0);
    }

    #[test]
    fn broken_doubles_streak_resets() {
        let mut sim = scripted(ReleasePolicy::WaitForDoubles, &[(2, 2), (4, 4), (1, 2), (2, 2)]);

        sim.run(4).unwrap();
        assert_eq!(sim.position(), 19);
        assert_eq!(sim.doubles_rolled(), 1);
        assert!(!sim.jail().is_imprisoned());
    }

    #[test]
    fn doubles_in_jail_do_not_count() {
        let rolls = [(2, 2), (4, 4), (1, 1), (6, 6), (3, 3)];
        let mut sim = scripted(ReleasePolicy::WaitForDoubles, &rolls);
        sim.run(3).unwrap();

        // Leave jail with doubles, onto a chance tile which isn't resolved
        assert_eq!(sim.step().unwrap(), 22);
        assert!(!sim.jail().is_imprisoned());
        assert_eq!(sim.doubles_rolled(), 0);
        assert!(sim.decks().chance.discard_pile().is_empty());

        assert_eq!(sim.step().unwrap(), 28);
        assert_eq!(sim.doubles_rolled(), 1);
    }

    #[test]
    fn immediate_pay_leaves_on_next_turn() {
        let mut sim = scripted(ReleasePolicy::ImmediatePay, &[(4, 5), (6, 5), (6, 4), (2, 3)]);
        sim.run(3).unwrap();
        assert!(sim.jail().is_imprisoned());

        assert_eq!(sim.step().unwrap(), 15);
        assert!(!sim.jail().is_imprisoned());
        assert_eq!(sim.jail().turns_waited(), 0);
    }

    #[test]
    fn wait_for_doubles_stays_for_three_turns() {
        let rolls = [(4, 5), (6, 5), (6, 4), (1, 2), (1, 2), (1, 2)];
        let mut sim = scripted(ReleasePolicy::WaitForDoubles, &rolls);
        sim.run(3).unwrap();

        assert_eq!(sim.step().unwrap(), JAIL_POSITION);
        assert_eq!(sim.step().unwrap(), JAIL_POSITION);
        assert!(sim.jail().is_imprisoned());
        assert_eq!(sim.jail().turns_waited(), 2);

        assert_eq!(sim.step().unwrap(), 13);
        assert!(!sim.jail().is_imprisoned());
        assert_eq!(sim.histogram().count(JAIL_POSITION), 3);
    }

    #[test]
    fn visiting_jail_is_not_imprisonment() {
        let mut sim = scripted(ReleasePolicy::ImmediatePay, &[(6, 4), (1, 2)]);

        assert_eq!(sim.step().unwrap(), JAIL_POSITION);
        assert!(!sim.jail().is_imprisoned());
        assert_eq!(sim.step().unwrap(), 13);
    }

    #[test]
    fn seeded_simulations_are_reproducible() {
        let mut a = Simulation::seeded(ReleasePolicy::ImmediatePay, 5);
        let mut b = Simulation::seeded(ReleasePolicy::ImmediatePay, 5);

        a.run(10_000).unwrap();
        b.run(10_000).unwrap();
        assert_eq!(a.histogram(), b.histogram());
    }

    #[test]
    fn go_to_jail_tile_is_never_a_resting_place() {
        let mut sim = Simulation::seeded(ReleasePolicy::WaitForDoubles, 8);
        sim.run(50_000).unwrap();

        assert_eq!(sim.histogram().count(GO_TO_JAIL_POSITION), 0);
        assert_eq!(sim.histogram().most_visited(), JAIL_POSITION);
    }
}
