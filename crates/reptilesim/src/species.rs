use crate::config::ViewerConfig;
use serde::{Deserialize, Serialize};

/// User-selectable species.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    #[default]
    Gecko,
    Snake,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Gecko, Species::Snake];

    /// Only the gecko ships an alternate limbless mesh.
    pub fn has_limb_toggle(self) -> bool {
        matches!(self, Species::Gecko)
    }
}

/// The concrete model asset that ends up on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKey {
    Gecko,
    Snake,
    GeckoNoLimbs,
}

impl VariantKey {
    /// Resolves a species selection plus the limb toggle to a variant.
    /// The limb toggle is ignored for species without a limbless mesh.
    pub fn resolve(species: Species, has_limbs: bool) -> Self {
        match (species, has_limbs) {
            (Species::Gecko, true) => VariantKey::Gecko,
            (Species::Gecko, false) => VariantKey::GeckoNoLimbs,
            (Species::Snake, _) => VariantKey::Snake,
        }
    }

    pub fn species(self) -> Species {
        match self {
            VariantKey::Gecko | VariantKey::GeckoNoLimbs => Species::Gecko,
            VariantKey::Snake => Species::Snake,
        }
    }

    /// The limbless gecko cannot walk; every other variant can.
    pub fn supports_locomotion(self) -> bool {
        !matches!(self, VariantKey::GeckoNoLimbs)
    }

    pub fn asset_path(self, config: &ViewerConfig) -> String {
        let species = config.species.get(self.species());
        match self {
            VariantKey::GeckoNoLimbs => species
                .limbless_asset
                .clone()
                .unwrap_or_else(|| species.asset.clone()),
            VariantKey::Gecko | VariantKey::Snake => species.asset.clone(),
        }
    }
}

/// Selection state held by the control surface: which species is chosen
/// and whether the limb toggle is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesSelection {
    pub species: Species,
    pub has_limbs: bool,
}

impl Default for SpeciesSelection {
    fn default() -> Self {
        Self {
            species: Species::Gecko,
            has_limbs: true,
        }
    }
}

impl SpeciesSelection {
    /// Switching away from the gecko re-checks the limb toggle.
    pub fn select(&mut self, species: Species) -> VariantKey {
        self.species = species;
        if !species.has_limb_toggle() {
            self.has_limbs = true;
        }
        self.variant()
    }

    pub fn set_limbs(&mut self, has_limbs: bool) -> VariantKey {
        self.has_limbs = has_limbs;
        self.variant()
    }

    pub fn variant(&self) -> VariantKey {
        VariantKey::resolve(self.species, self.has_limbs)
    }
}
