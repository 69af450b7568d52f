//! Card entity and its nested blocks

use super::legality::{Format, Legality};
use super::market::{CardMarket, PriceKind, TcgPlayer, NO_PRICE};
use super::record::{FromRecord, RecordExt};
use super::set::CardSet;
use crate::types::Record;
use serde::{Deserialize, Serialize};

/// Ancient Trait (Ancient Origins era)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncientTrait {
    pub name: String,
    pub text: String,
}

/// Ability printed on a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Attack printed on a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    pub cost: Vec<String>,
    pub converted_energy_cost: i64,
    pub damage: String,
    pub text: String,
}

/// Weakness or resistance entry, e.g. `{type: "Water", value: "×2"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeModifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Card image URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImages {
    pub small: String,
    pub large: String,
}

/// Image resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    Small,
    Large,
}

/// Where to read a price from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceSource {
    /// TCGplayer market price of a print variant (`normal`, `holofoil`, ...)
    TcgPlayer { variant: String },
    /// Cardmarket average sell price
    CardMarket,
}

/// A card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub supertype: String,
    pub subtypes: Vec<String>,
    pub level: String,
    pub hp: String,
    pub types: Vec<String>,
    pub evolves_from: String,
    pub evolves_to: Vec<String>,
    pub rules: Vec<String>,
    pub ancient_trait: Option<AncientTrait>,
    pub abilities: Vec<Ability>,
    pub attacks: Vec<Attack>,
    pub weaknesses: Vec<TypeModifier>,
    pub resistances: Vec<TypeModifier>,
    pub retreat_cost: Vec<String>,
    pub converted_retreat_cost: i64,
    pub set: CardSet,
    pub number: String,
    pub artist: String,
    pub rarity: String,
    pub flavor_text: String,
    pub national_pokedex_numbers: Vec<i64>,
    pub legalities: Legality,
    pub regulation_mark: String,
    pub images: CardImages,
    pub tcgplayer: TcgPlayer,
    pub cardmarket: CardMarket,
}

fn type_modifiers(record: &Record, key: &str) -> Vec<TypeModifier> {
    record
        .objects(key)
        .into_iter()
        .map(|m| TypeModifier {
            kind: m.str_or_empty("type"),
            value: m.str_or_empty("value"),
        })
        .collect()
}

impl FromRecord for Card {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.str_or_empty("id"),
            name: record.str_or_empty("name"),
            supertype: record.str_or_empty("supertype"),
            subtypes: record.strings("subtypes"),
            level: record.str_or_empty("level"),
            hp: record.str_or_empty("hp"),
            types: record.strings("types"),
            evolves_from: record.str_or_empty("evolvesFrom"),
            evolves_to: record.strings("evolvesTo"),
            rules: record.strings("rules"),
            ancient_trait: record.object("ancientTrait").map(|t| AncientTrait {
                name: t.str_or_empty("name"),
                text: t.str_or_empty("text"),
            }),
            abilities: record
                .objects("abilities")
                .into_iter()
                .map(|a| Ability {
                    name: a.str_or_empty("name"),
                    text: a.str_or_empty("text"),
                    kind: a.str_or_empty("type"),
                })
                .collect(),
            attacks: record
                .objects("attacks")
                .into_iter()
                .map(|a| Attack {
                    name: a.str_or_empty("name"),
                    cost: a.strings("cost"),
                    converted_energy_cost: a.i64_or("convertedEnergyCost", 0),
                    damage: a.str_or_empty("damage"),
                    text: a.str_or_empty("text"),
                })
                .collect(),
            weaknesses: type_modifiers(record, "weaknesses"),
            resistances: type_modifiers(record, "resistances"),
            retreat_cost: record.strings("retreatCost"),
            converted_retreat_cost: record.i64_or("convertedRetreatCost", -1),
            set: CardSet::from_optional(record.object("set")),
            number: record.str_or_empty("number"),
            artist: record.str_or_empty("artist"),
            rarity: record.str_or_empty("rarity"),
            flavor_text: record.str_or_empty("flavorText"),
            national_pokedex_numbers: record
                .get("nationalPokedexNumbers")
                .and_then(|v| v.as_array())
                .map(|n| n.iter().filter_map(serde_json::Value::as_i64).collect())
                .unwrap_or_default(),
            legalities: Legality::from_optional(record.object("legalities")),
            regulation_mark: record.str_or_empty("regulationMark"),
            images: record
                .object("images")
                .map(|i| CardImages {
                    small: i.str_or_empty("small"),
                    large: i.str_or_empty("large"),
                })
                .unwrap_or_default(),
            tcgplayer: TcgPlayer::from_optional(record.object("tcgplayer")),
            cardmarket: CardMarket::from_optional(record.object("cardmarket")),
        }
    }
}

impl Card {
    // ------------------------------------------------------------------------
    // Supertype
    // ------------------------------------------------------------------------

    pub fn is_pokemon(&self) -> bool {
        self.supertype == "Pokémon"
    }

    pub fn is_trainer(&self) -> bool {
        self.supertype == "Trainer"
    }

    pub fn is_energy(&self) -> bool {
        self.supertype == "Energy"
    }

    // ------------------------------------------------------------------------
    // Evolution stage / mechanic subtypes
    // ------------------------------------------------------------------------

    /// True when `subtypes` contains `subtype`
    pub fn has_subtype(&self, subtype: &str) -> bool {
        self.subtypes.iter().any(|s| s == subtype)
    }

    pub fn is_basic(&self) -> bool {
        self.has_subtype("Basic")
    }

    pub fn is_stage1(&self) -> bool {
        self.has_subtype("Stage 1")
    }

    pub fn is_stage2(&self) -> bool {
        self.has_subtype("Stage 2")
    }

    pub fn is_v(&self) -> bool {
        self.has_subtype("V")
    }

    pub fn is_vmax(&self) -> bool {
        self.has_subtype("VMAX")
    }

    pub fn is_vstar(&self) -> bool {
        self.has_subtype("VSTAR")
    }

    // ------------------------------------------------------------------------
    // Printed properties
    // ------------------------------------------------------------------------

    pub fn has_level(&self) -> bool {
        !self.level.is_empty()
    }

    pub fn has_ancient_trait(&self) -> bool {
        self.ancient_trait.is_some()
    }

    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    pub fn has_ability(&self) -> bool {
        !self.abilities.is_empty()
    }

    pub fn has_attack(&self) -> bool {
        !self.attacks.is_empty()
    }

    pub fn has_weakness(&self) -> bool {
        !self.weaknesses.is_empty()
    }

    pub fn has_resistance(&self) -> bool {
        !self.resistances.is_empty()
    }

    // ------------------------------------------------------------------------
    // Game mechanics
    // ------------------------------------------------------------------------

    pub fn is_legal(&self, format: Format) -> bool {
        self.legalities.is_legal(format)
    }

    /// Weakness value against an energy type
    pub fn weakness(&self, kind: &str) -> Option<&str> {
        self.weaknesses
            .iter()
            .find(|w| w.kind == kind)
            .map(|w| w.value.as_str())
    }

    /// Resistance value against an energy type
    pub fn resistance(&self, kind: &str) -> Option<&str> {
        self.resistances
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.value.as_str())
    }

    /// Energy cost of the attack at `index`; empty if there is no such attack
    pub fn attack_cost(&self, index: usize) -> &[String] {
        self.attacks
            .get(index)
            .map(|a| a.cost.as_slice())
            .unwrap_or_default()
    }

    pub fn attack_damage(&self, index: usize) -> Option<&str> {
        self.attacks.get(index).map(|a| a.damage.as_str())
    }

    pub fn attack_text(&self, index: usize) -> Option<&str> {
        self.attacks.get(index).map(|a| a.text.as_str())
    }

    // ------------------------------------------------------------------------
    // Market
    // ------------------------------------------------------------------------

    /// Price from `source`, or [`NO_PRICE`]
    pub fn price(&self, source: &PriceSource) -> f64 {
        match source {
            PriceSource::TcgPlayer { variant } => self
                .tcgplayer
                .variant(variant)
                .map_or(NO_PRICE, |p| p.get(PriceKind::Market)),
            PriceSource::CardMarket => self.cardmarket.prices.average_sell_price,
        }
    }

    // ------------------------------------------------------------------------
    // Images and set
    // ------------------------------------------------------------------------

    pub fn image_url(&self, size: ImageSize) -> &str {
        match size {
            ImageSize::Small => &self.images.small,
            ImageSize::Large => &self.images.large,
        }
    }

    pub fn set_symbol(&self) -> &str {
        self.set.symbol_url()
    }

    pub fn set_logo(&self) -> &str {
        self.set.logo_url()
    }

    pub fn set_name(&self) -> &str {
        &self.set.name
    }

    pub fn set_series(&self) -> &str {
        &self.set.series
    }

    pub fn set_release_date(&self) -> &str {
        &self.set.release_date
    }

    /// First National Pokédex number
    pub fn pokedex_number(&self) -> Option<i64> {
        self.national_pokedex_numbers.first().copied()
    }
}
