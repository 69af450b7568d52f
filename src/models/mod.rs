//! Domain models
//!
//! Typed entities built from raw API records. Mapping never fails: absent or
//! mistyped fields fall back to empty strings, empty lists, or `-1` for
//! numeric price fields.

mod card;
mod legality;
mod market;
mod record;
mod set;

pub use card::{
    Ability, AncientTrait, Attack, Card, CardImages, ImageSize, PriceSource, TypeModifier,
};
pub use legality::{Format, Legality};
pub use market::{CardMarket, CardMarketPrices, PriceKind, TcgPlayer, TcgPlayerPrices, NO_PRICE};
pub use record::{FromRecord, RecordExt};
pub use set::{CardSet, SetImages};

#[cfg(test)]
mod tests;
