use super::deck::Decks;
use super::globals::*;
use crate::error::Result;

#[derive(Clone, Debug)]
/// The jail corner, which tracks whether the token is imprisoned and for how long.
pub struct Jail {
    /// How the player leaves jail when they have no get out of jail free card.
    policy: ReleasePolicy,
    /// Whether the token is imprisoned, as opposed to just visiting.
    imprisoned: bool,
    /// The number of turns waited in jail so far. Always 0 when not imprisoned.
    turns_waited: u8,
}

impl Jail {
    /// Return an empty jail that releases the player according to `policy`.
    pub fn new(policy: ReleasePolicy) -> Jail {
        Jail {
            policy,
            imprisoned: false,
            turns_waited: 0,
        }
    }

    pub fn policy(&self) -> ReleasePolicy {
        self.policy
    }

    pub fn is_imprisoned(&self) -> bool {
        self.imprisoned
    }

    pub fn turns_waited(&self) -> u8 {
        self.turns_waited
    }

    /// Imprison the token.
    pub fn send_to_jail(&mut self) {
        self.imprisoned = true;
        self.turns_waited = 0;
    }

    /// Play one turn from the jail corner at `position` with `roll`, returning
    /// the token's new position. A released token moves forward by the roll,
    /// without wrapping around the board.
    pub fn resolve_turn(&mut self, roll: DiceRoll, position: u8, decks: &mut Decks) -> Result<u8> {
        // Visitors stay where they are
        if !self.imprisoned {
            return Ok(JAIL_POSITION);
        }

        self.turns_waited += 1;

        // Get out of jail free cards and paying the fine are only options on the first turn
        if self.turns_waited == 1 {
            if decks.chance.holds_free_card() {
                decks.chance.consume_free_card()?;
                return Ok(self.release(roll, position, "chance card"));
            }
            if decks.community_chest.holds_free_card() {
                decks.community_chest.consume_free_card()?;
                return Ok(self.release(roll, position, "community chest card"));
            }
            if self.policy == ReleasePolicy::ImmediatePay {
                return Ok(self.release(roll, position, "paid fine"));
            }
        }

        if roll.is_double() {
            return Ok(self.release(roll, position, "doubles"));
        }
        if self.turns_waited == MAX_JAIL_TURNS {
            return Ok(self.release(roll, position, "served time"));
        }

        Ok(position)
    }

    /// Let the token out of jail and move it forward by `roll`.
    fn release(&mut self, roll: DiceRoll, position: u8, reason: &str) -> u8 {
        log::debug!("{:<32}{:<24}{}", "released from jail", reason, self.turns_waited);

        self.imprisoned = false;
        self.turns_waited = 0;

        position + roll.sum()
    }
}
