//! Tests for the record mapper

use super::*;
use crate::types::Record;
use pretty_assertions::assert_eq;
use serde_json::json;

fn as_record(value: serde_json::Value) -> Record {
    value.as_object().cloned().unwrap()
}

fn charizard() -> Record {
    as_record(json!({
        "id": "base1-4",
        "name": "Charizard",
        "supertype": "Pokémon",
        "subtypes": ["Stage 2"],
        "hp": "120",
        "types": ["Fire"],
        "evolvesFrom": "Charmeleon",
        "abilities": [
            {"name": "Energy Burn", "text": "As often as you like...", "type": "Pokémon Power"}
        ],
        "attacks": [
            {
                "name": "Fire Spin",
                "cost": ["Fire", "Fire", "Fire", "Fire"],
                "convertedEnergyCost": 4,
                "damage": "100",
                "text": "Discard 2 Energy cards attached to Charizard."
            }
        ],
        "weaknesses": [{"type": "Water", "value": "×2"}],
        "resistances": [{"type": "Fighting", "value": "-30"}],
        "retreatCost": ["Colorless", "Colorless", "Colorless"],
        "convertedRetreatCost": 3,
        "set": {
            "id": "base1",
            "name": "Base",
            "series": "Base",
            "printedTotal": 102,
            "total": 102,
            "legalities": {"unlimited": "Legal"},
            "ptcgoCode": "BS",
            "releaseDate": "1999/01/09",
            "updatedAt": "2022/10/10 15:12:00",
            "images": {
                "symbol": "https://images.pokemontcg.io/base1/symbol.png",
                "logo": "https://images.pokemontcg.io/base1/logo.png"
            }
        },
        "number": "4",
        "artist": "Mitsuhiro Arita",
        "rarity": "Rare Holo",
        "nationalPokedexNumbers": [6],
        "legalities": {"unlimited": "Legal"},
        "images": {
            "small": "https://images.pokemontcg.io/base1/4.png",
            "large": "https://images.pokemontcg.io/base1/4_hires.png"
        },
        "tcgplayer": {
            "url": "https://prices.pokemontcg.io/tcgplayer/base1-4",
            "updatedAt": "2024/01/01",
            "prices": {
                "holofoil": {"low": 250.0, "mid": 400.5, "high": 999.99, "market": 380.25}
            }
        },
        "cardmarket": {
            "url": "https://prices.pokemontcg.io/cardmarket/base1-4",
            "updatedAt": "2024/01/01",
            "prices": {"averageSellPrice": 310.5, "trendPrice": 300.0}
        }
    }))
}

// ============================================================================
// Card Tests
// ============================================================================

#[test]
fn test_card_maps_fields() {
    let card = Card::from_record(&charizard());

    assert_eq!(card.id, "base1-4");
    assert_eq!(card.name, "Charizard");
    assert!(card.is_pokemon());
    assert!(card.is_stage2());
    assert!(!card.is_basic());
    assert_eq!(card.evolves_from, "Charmeleon");
    assert_eq!(card.converted_retreat_cost, 3);
    assert_eq!(card.number, "4");
    assert_eq!(card.pokedex_number(), Some(6));
    assert_eq!(card.set.id, "base1");
    assert_eq!(card.set_name(), "Base");
    assert_eq!(card.image_url(ImageSize::Large), "https://images.pokemontcg.io/base1/4_hires.png");
}

#[test]
fn test_card_mechanics() {
    let card = Card::from_record(&charizard());

    assert!(card.has_ability());
    assert_eq!(card.abilities[0].kind, "Pokémon Power");
    assert_eq!(card.attack_cost(0).len(), 4);
    assert_eq!(card.attack_damage(0), Some("100"));
    assert!(card.attack_text(0).unwrap().starts_with("Discard"));
    assert!(card.attack_cost(5).is_empty());
    assert_eq!(card.attack_damage(5), None);
    assert_eq!(card.weakness("Water"), Some("×2"));
    assert_eq!(card.resistance("Fighting"), Some("-30"));
    assert_eq!(card.weakness("Grass"), None);
    assert!(card.is_legal(Format::Unlimited));
    assert!(!card.is_legal(Format::Standard));
}

#[test]
fn test_card_prices() {
    let card = Card::from_record(&charizard());

    let holo = PriceSource::TcgPlayer {
        variant: "holofoil".to_string(),
    };
    assert_eq!(card.price(&holo), 380.25);

    let normal = PriceSource::TcgPlayer {
        variant: "normal".to_string(),
    };
    assert_eq!(card.price(&normal), NO_PRICE);

    assert_eq!(card.price(&PriceSource::CardMarket), 310.5);
    assert_eq!(card.cardmarket.prices.low_price, NO_PRICE);
    assert!(!card.cardmarket.prices.is_empty());

    let prices = card.tcgplayer.variant("holofoil").unwrap();
    assert_eq!(prices.direct_low, NO_PRICE);
    assert_eq!(prices.get(PriceKind::Mid), 400.5);
}

#[test]
fn test_empty_record_gets_sentinels() {
    let card = Card::from_record(&Record::new());

    assert_eq!(card.id, "");
    assert!(card.subtypes.is_empty());
    assert!(card.attacks.is_empty());
    assert!(card.ancient_trait.is_none());
    assert!(!card.has_ancient_trait());
    assert_eq!(card.converted_retreat_cost, -1);
    assert_eq!(card.legalities, Legality::default());
    assert!(!card.legalities.any());
    assert!(card.tcgplayer.prices.is_empty());
    assert!(card.cardmarket.prices.is_empty());
    assert_eq!(card.cardmarket.prices.avg30, NO_PRICE);
    assert_eq!(card.set, CardSet::default());
}

#[test]
fn test_mistyped_fields_fall_back() {
    let record = as_record(json!({
        "id": 42,
        "subtypes": "Basic",
        "convertedRetreatCost": "two",
        "attacks": [null, {"name": "Tackle"}],
        "cardmarket": {"prices": {"avg1": "cheap"}},
        "set": "base1"
    }));
    let card = Card::from_record(&record);

    assert_eq!(card.id, "42");
    assert!(card.subtypes.is_empty());
    assert_eq!(card.converted_retreat_cost, -1);
    assert_eq!(card.attacks.len(), 1);
    assert_eq!(card.attacks[0].name, "Tackle");
    assert_eq!(card.cardmarket.prices.avg1, NO_PRICE);
    assert_eq!(card.set.id, "");
}

#[test]
fn test_ancient_trait_mapped_when_present() {
    let record = as_record(json!({
        "ancientTrait": {"name": "Θ Stop", "text": "Prevent all effects of attacks."}
    }));
    let card = Card::from_record(&record);
    assert_eq!(
        card.ancient_trait,
        Some(AncientTrait {
            name: "Θ Stop".to_string(),
            text: "Prevent all effects of attacks.".to_string(),
        })
    );
}

#[test]
fn test_card_serializes_camel_case() {
    let card = Card::from_record(&charizard());
    let value = serde_json::to_value(&card).unwrap();
    assert_eq!(value["evolvesFrom"], "Charmeleon");
    assert_eq!(value["convertedRetreatCost"], 3);
    assert_eq!(value["set"]["printedTotal"], 102);
}

// ============================================================================
// Set Tests
// ============================================================================

#[test]
fn test_set_dates() {
    let card = Card::from_record(&charizard());
    let set = &card.set;

    let released = set.release_date().unwrap();
    assert_eq!(released.to_string(), "1999-01-09");
    assert_eq!(set.updated_at().unwrap().to_string(), "2022-10-10 15:12:00");
    assert!(set.is_legal(Format::Unlimited));
    assert_eq!(set.ptcgo_code, "BS");
    assert!(set.symbol_url().ends_with("symbol.png"));
}

#[test]
fn test_set_unparseable_dates() {
    let set = CardSet::from_record(&as_record(json!({"releaseDate": "soon"})));
    assert!(set.release_date().is_none());
    assert!(set.updated_at().is_none());
    assert_eq!(set.printed_total, 0);
}

#[test]
fn test_raw_record_mapper_is_identity() {
    let record = charizard();
    assert_eq!(Record::from_record(&record), record);
}
