use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// The outcome of rolling both dice once.
pub struct DiceRoll {
    /// The face shown by the first die.
    pub die1: u8,
    /// The face shown by the second die.
    pub die2: u8,
}

impl DiceRoll {
    /// Create a new dice roll.
    pub fn new(die1: u8, die2: u8) -> DiceRoll {
        DiceRoll { die1, die2 }
    }

    /// The sum of the two dice.
    pub fn sum(&self) -> u8 {
        self.die1 + self.die2
    }

    /// Whether both the dice resulted in the same number.
    pub fn is_double(&self) -> bool {
        self.die1 == self.die2
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.die1, self.die2)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A card that can be drawn from the Chance or Community Chest deck.
///
/// Only the effect a card has on the token's position is modelled, so
/// every card that deals with money is a `NoEffect`.
pub enum Card {
    /// Move straight to the tile at the associated position.
    MoveToAbsolute(u8),
    /// Nothing happens to the token.
    NoEffect,
    /// Kept by the player until it's used to leave jail.
    GetOutOfJailFree,
    /// Go directly to jail.
    GoToJail,
    /// Move by the associated (possibly negative) amount of tiles.
    MoveRelative(i8),
    /// Advance to the next railroad.
    AdvanceToNearestRailroad,
    /// Advance to the next utility.
    AdvanceToNearestUtility,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Where the token ends up after a tile or card has been resolved.
pub enum Landing {
    /// The token rests at the associated position.
    At(u8),
    /// The token is sent to jail.
    Jail,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// The two card decks on the board.
pub enum DeckKind {
    Chance,
    CommunityChest,
}

impl DeckKind {
    /// Return the full set of cards in a fresh deck of this kind, unshuffled.
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(super::DECK_SIZE);

        match self {
            DeckKind::Chance => {
                cards.extend([Card::NoEffect; 5]);
                cards.extend([0, 5, 11, 24, 39].iter().map(|&c| Card::MoveToAbsolute(c)));
                cards.push(Card::GetOutOfJailFree);
                cards.push(Card::GoToJail);
                cards.push(Card::MoveRelative(-3));
                cards.extend([Card::AdvanceToNearestRailroad; 2]);
                cards.push(Card::AdvanceToNearestUtility);
            }
            DeckKind::CommunityChest => {
                cards.extend([Card::NoEffect; 13]);
                cards.push(Card::MoveToAbsolute(0));
                cards.push(Card::GetOutOfJailFree);
                cards.push(Card::GoToJail);
            }
        }

        cards
    }
}

impl fmt::Display for DeckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckKind::Chance => f.pad("chance"),
            DeckKind::CommunityChest => f.pad("community chest"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// How a player who has no get out of jail free card leaves jail.
pub enum ReleasePolicy {
    /// Pay the fine on the first turn in jail (strategy "a").
    ImmediatePay,
    /// Try to roll doubles for three turns, paying the fine on the third (strategy "b").
    WaitForDoubles,
}

impl ReleasePolicy {
    /// The strategy's short label.
    pub fn label(&self) -> &'static str {
        match self {
            ReleasePolicy::ImmediatePay => "a",
            ReleasePolicy::WaitForDoubles => "b",
        }
    }
}

impl fmt::Display for ReleasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleasePolicy::ImmediatePay => f.pad("immediate-pay"),
            ReleasePolicy::WaitForDoubles => f.pad("wait-for-doubles"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Tiles that do something when the token lands on them.
pub enum Tile {
    Chance,
    CommunityChest,
    /// The 'Go To Jail' corner.
    GoToJail,
    /// The jail corner, which is just visited unless the token was sent there.
    Jail,
}
