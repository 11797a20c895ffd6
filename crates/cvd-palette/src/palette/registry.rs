//! Id-keyed store of palettes and their simulated views.
//!
//! Each registered palette is stored as its `Normal` view. Simulated views
//! for every other vision model are derived on request.

use std::collections::BTreeMap;
use std::fmt;

use super::error::RegistryError;
use super::palette::Palette;
use crate::convert::BlindnessType;
use crate::evaluate::{Evaluation, PaletteEvaluator};

/// Identifier handed out by a [`PaletteRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaletteId(u64);

impl PaletteId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Palettes keyed by id, each with one view per vision model.
///
/// Ids come from a counter owned by the registry, so two registries never
/// interfere with each other.
///
/// # Example
///
/// ```
/// use cvd_palette::{BlindnessType, Palette, PaletteEvaluator, PaletteRegistry};
///
/// let mut registry = PaletteRegistry::new();
/// let id = registry.add(Palette::from_hex("bw", &["#000", "#FFF"]).unwrap());
///
/// registry.generate_deficiency_views(id).unwrap();
/// registry.evaluate(id, &PaletteEvaluator::new()).unwrap();
///
/// let tritan = registry.get(id, BlindnessType::Tritanopia).unwrap();
/// assert!(tritan.evaluation().is_some());
/// ```
#[derive(Debug, Default)]
pub struct PaletteRegistry {
    next_id: u64,
    entries: BTreeMap<PaletteId, BTreeMap<BlindnessType, Palette>>,
}

impl PaletteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `palette` as the `Normal` view under a fresh id.
    pub fn add(&mut self, palette: Palette) -> PaletteId {
        let id = PaletteId::new(self.next_id);
        self.next_id += 1;

        let mut views = BTreeMap::new();
        views.insert(BlindnessType::Normal, palette);
        self.entries.insert(id, views);
        id
    }

    /// Derive the simulated view for every non-`Normal` vision model,
    /// replacing any previously derived views.
    pub fn generate_deficiency_views(&mut self, id: PaletteId) -> Result<(), RegistryError> {
        let views = self
            .entries
            .get_mut(&id)
            .ok_or(RegistryError::UnknownPalette(id))?;
        let base = views
            .get(&BlindnessType::Normal)
            .cloned()
            .ok_or(RegistryError::UnknownPalette(id))?;

        for kind in BlindnessType::ALL {
            if kind != BlindnessType::Normal {
                views.insert(kind, base.simulate(kind));
            }
        }
        tracing::debug!(%id, views = views.len(), "Generated deficiency views");
        Ok(())
    }

    /// Evaluate every view stored under `id`.
    pub fn evaluate(
        &mut self,
        id: PaletteId,
        evaluator: &PaletteEvaluator,
    ) -> Result<Vec<(BlindnessType, Evaluation)>, RegistryError> {
        let views = self
            .entries
            .get_mut(&id)
            .ok_or(RegistryError::UnknownPalette(id))?;
        Ok(views
            .iter_mut()
            .map(|(&kind, palette)| (kind, palette.evaluate(evaluator)))
            .collect())
    }

    /// The view of palette `id` under `kind`, if present.
    pub fn get(&self, id: PaletteId, kind: BlindnessType) -> Option<&Palette> {
        self.entries.get(&id).and_then(|views| views.get(&kind))
    }

    /// All views stored under `id`, in vision-model order.
    pub fn views(
        &self,
        id: PaletteId,
    ) -> Result<impl Iterator<Item = (BlindnessType, &Palette)>, RegistryError> {
        self.entries
            .get(&id)
            .map(|views| views.iter().map(|(&kind, palette)| (kind, palette)))
            .ok_or(RegistryError::UnknownPalette(id))
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PaletteId> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered palettes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
