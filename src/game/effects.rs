use super::deck::Decks;
use super::dice::RandomSource;
use super::globals::*;
use crate::error::Result;

/// Apply the effect of the tile at `position`, drawing a card if it's a
/// chance or community chest tile. Return where the token ends up.
///
/// Card effects don't chain: a card that moves the token onto another
/// special tile leaves it there without applying that tile too.
pub fn resolve_landing<S: RandomSource + ?Sized>(
    position: u8,
    decks: &mut Decks,
    source: &mut S,
) -> Result<Landing> {
    let landing = match SPECIAL_TILES.get(&position) {
        Some(Tile::Chance) => decks.chance.draw(source)?.resolve(position),
        Some(Tile::CommunityChest) => decks.community_chest.draw(source)?.resolve(position),
        Some(Tile::GoToJail) => Landing::Jail,
        // The token is only visiting, prisoners never land on the jail tile
        Some(Tile::Jail) => Landing::At(JAIL_POSITION),
        None => Landing::At(position),
    };

    Ok(landing)
}
