use super::dice::RandomSource;
use super::globals::*;
use crate::error::{Result, SimulationError};

impl Card {
    /// Return where the token ends up after this card is drawn on `position`.
    pub fn resolve(self, position: u8) -> Landing {
        match self {
            Card::NoEffect | Card::GetOutOfJailFree => Landing::At(position),
            Card::MoveToAbsolute(target) => Landing::At(target),
            Card::GoToJail => Landing::Jail,
            Card::MoveRelative(amount) => {
                let target = (position as i16 + amount as i16).rem_euclid(BOARD_SIZE as i16);
                Landing::At(target as u8)
            }
            Card::AdvanceToNearestRailroad => Landing::At(next_of(&RAILROAD_POSITIONS, position)),
            Card::AdvanceToNearestUtility => Landing::At(next_of(&UTILITY_POSITIONS, position)),
        }
    }
}

#[derive(Clone, Debug)]
/// A deck of Chance or Community Chest cards.
///
/// Drawn cards go to a discard pile, which is shuffled back into the
/// deck once the deck runs out. The get out of jail free card is kept
/// by the player until it's used, and only then goes to the discard pile.
pub struct CardDeck {
    kind: DeckKind,
    /// Cards that haven't been seen since the last reshuffle. Cards are drawn from the back.
    draw_pile: Vec<Card>,
    /// Cards that have been drawn and resolved.
    discard_pile: Vec<Card>,
    /// Whether the player is holding this deck's get out of jail free card.
    holds_free_card: bool,
}

impl CardDeck {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return a freshly shuffled deck.
    pub fn new<S: RandomSource + ?Sized>(kind: DeckKind, source: &mut S) -> CardDeck {
        let mut draw_pile = kind.cards();
        source.shuffle(&mut draw_pile);

        CardDeck {
            kind,
            draw_pile,
            discard_pile: Vec::with_capacity(DECK_SIZE),
            holds_free_card: false,
        }
    }

    /// Return a deck that deals `order` front to back before its first reshuffle.
    /// `order` must contain exactly the cards of a fresh deck of this kind.
    pub fn stacked(kind: DeckKind, order: Vec<Card>) -> Result<CardDeck> {
        let mut expected = kind.cards();
        let mut given = order.clone();
        expected.sort();
        given.sort();

        if expected != given {
            return Err(SimulationError::DeckCorrupted {
                deck: kind,
                cards: order.len(),
            });
        }

        let mut draw_pile = order;
        draw_pile.reverse();

        Ok(CardDeck {
            kind,
            draw_pile,
            discard_pile: Vec::with_capacity(DECK_SIZE),
            holds_free_card: false,
        })
    }

    /*********        GETTERS        *********/

    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Cards left to draw before the next reshuffle, the next card being last.
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Whether the player is holding this deck's get out of jail free card.
    pub fn holds_free_card(&self) -> bool {
        self.holds_free_card
    }

    /// The number of cards accounted for, including a held get out of jail free card.
    pub fn card_count(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.holds_free_card as usize
    }

    /// Fail if any card has been lost or duplicated.
    pub fn check_invariant(&self) -> Result<()> {
        let cards = self.card_count();

        if cards != DECK_SIZE {
            return Err(SimulationError::DeckCorrupted {
                deck: self.kind,
                cards,
            });
        }

        Ok(())
    }

    /*********        DECK OPERATIONS        *********/

    /// Draw the next card, reshuffling the discard pile into the deck first if it's empty.
    pub fn draw<S: RandomSource + ?Sized>(&mut self, source: &mut S) -> Result<Card> {
        if self.draw_pile.is_empty() {
            self.recycle(source);
        }

        let card = self
            .draw_pile
            .pop()
            .ok_or(SimulationError::DeckExhausted { deck: self.kind })?;

        // The get out of jail free card stays with the player until it's used
        if card == Card::GetOutOfJailFree {
            self.holds_free_card = true;
        } else {
            self.discard_pile.push(card);
        }

        Ok(card)
    }

    /// Use the held get out of jail free card, returning it to the discard pile.
    pub fn consume_free_card(&mut self) -> Result<()> {
        if !self.holds_free_card {
            return Err(SimulationError::InvalidOperation { deck: self.kind });
        }

        self.holds_free_card = false;
        self.discard_pile.push(Card::GetOutOfJailFree);

        Ok(())
    }

    /// Move the whole discard pile into the draw pile and shuffle it.
    fn recycle<S: RandomSource + ?Sized>(&mut self, source: &mut S) {
        log::debug!(
            "{:<32}{:<16}{}",
            "reshuffling deck",
            self.kind,
            self.discard_pile.len()
        );

        self.draw_pile.append(&mut self.discard_pile);
        source.shuffle(&mut self.draw_pile);
    }
}

#[derive(Clone, Debug)]
/// Both decks on the board.
pub struct Decks {
    pub chance: CardDeck,
    pub community_chest: CardDeck,
}

impl Decks {
    /// Return both decks, freshly shuffled.
    pub fn new<S: RandomSource + ?Sized>(source: &mut S) -> Decks {
        Decks {
            chance: CardDeck::new(DeckKind::Chance, source),
            community_chest: CardDeck::new(DeckKind::CommunityChest, source),
        }
    }

    /// A mutable reference to the deck of the specified kind.
    pub fn get_mut(&mut self, kind: DeckKind) -> &mut CardDeck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::CommunityChest => &mut self.community_chest,
        }
    }

    /// Fail if either deck has lost or duplicated a card.
    pub fn check_invariants(&self) -> Result<()> {
        self.chance.check_invariant()?;
        self.community_chest.check_invariant()
    }
}
