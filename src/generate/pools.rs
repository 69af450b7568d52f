//! Candidate pools for each category

use super::types::Category;
use crate::api::SearchParams;
use crate::client::PokemonTcgClient;
use crate::error::Result;
use crate::models::RecordExt;
use crate::sampling::CandidatePool;
use crate::types::Resource;
use tracing::{debug, warn};

/// Subtypes that only occur on Trainer cards
pub const TRAINER_SUBTYPES: &[&str] = &[
    "Item",
    "Supporter",
    "Stadium",
    "Pokémon Tool",
    "Pokémon Tool F",
    "Technical Machine",
    "Goldenrod Game Corner",
    "Rocket's Secret Machine",
    "ACE SPEC",
    "Future",
    "Ancient",
    "Team Plasma",
];

/// Subtypes that only occur on Energy cards
pub const ENERGY_SUBTYPES: &[&str] = &["Basic", "Special", "Team Plasma"];

/// True unless `subtype` appears in the Trainer or Energy tables
pub fn is_pokemon_subtype(subtype: &str) -> bool {
    !TRAINER_SUBTYPES.contains(&subtype) && !ENERGY_SUBTYPES.contains(&subtype)
}

const TRUNCATION_WARNING_LEN: usize = 250;

/// One pool per [`Category`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPools {
    pub supertypes: CandidatePool,
    pub subtypes: CandidatePool,
    pub types: CandidatePool,
    pub rarities: CandidatePool,
    pub sets: CandidatePool,
}

impl GenerationPools {
    /// Build pools from plain lists, dropping Trainer/Energy-only subtypes
    pub fn new(
        supertypes: Vec<String>,
        subtypes: Vec<String>,
        types: Vec<String>,
        rarities: Vec<String>,
        set_ids: Vec<String>,
    ) -> Self {
        let mut subtypes = CandidatePool::new(subtypes);
        subtypes.retain(|s| is_pokemon_subtype(s));

        Self {
            supertypes: supertypes.into(),
            subtypes,
            types: types.into(),
            rarities: rarities.into(),
            sets: set_ids.into(),
        }
    }

    /// Load every pool from the API
    pub async fn fetch(client: &PokemonTcgClient) -> Result<Self> {
        let supertypes = client.supertypes().await?;
        let subtypes = client.subtypes().await?;
        let types = client.types().await?;
        let rarities = client.rarities().await?;

        let set_ids: Vec<String> = client
            .raw(Resource::Sets)
            .all_records(&SearchParams::new().select(["id"]))
            .await?
            .iter()
            .map(|set| set.str_or_empty("id"))
            .filter(|id| !id.is_empty())
            .collect();
        if set_ids.len() >= TRUNCATION_WARNING_LEN {
            warn!("{} set ids loaded; more than one page of sets", set_ids.len());
        }

        let pools = Self::new(supertypes, subtypes, types, rarities, set_ids);
        debug!(
            "Pools: {} supertypes, {} subtypes, {} types, {} rarities, {} sets",
            pools.supertypes.len(),
            pools.subtypes.len(),
            pools.types.len(),
            pools.rarities.len(),
            pools.sets.len()
        );
        Ok(pools)
    }

    /// Pool backing `category`
    pub fn pool_mut(&mut self, category: Category) -> &mut CandidatePool {
        match category {
            Category::Supertype => &mut self.supertypes,
            Category::Subtype => &mut self.subtypes,
            Category::Type => &mut self.types,
            Category::Rarity => &mut self.rarities,
            Category::Set => &mut self.sets,
        }
    }
}
