//! DropOffer - Post-fight choice of body parts

use super::PartCatalog;
use crate::error::HomunError;
use crate::types::PartId;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A handful of distinct catalog parts offered to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropOffer {
    offered: Vec<PartId>,
}

impl DropOffer {
    /// Offer up to `count` distinct parts (RNG handled internally)
    pub fn roll(catalog: &impl PartCatalog, count: usize) -> Self {
        let mut rng = rand::thread_rng();
        Self::roll_with_rng(catalog, count, &mut rng)
    }

    /// Offer up to `count` distinct parts drawn uniformly from the catalog
    pub fn roll_with_rng(catalog: &impl PartCatalog, count: usize, rng: &mut impl Rng) -> Self {
        let ids = catalog.part_ids();
        let offered: Vec<PartId> = ids.choose_multiple(rng, count).copied().collect();
        tracing::debug!(?offered, "rolled drop offer");
        DropOffer { offered }
    }

    /// Build an offer from explicit ids
    pub fn from_ids(offered: Vec<PartId>) -> Self {
        DropOffer { offered }
    }

    /// Parts on offer, in display order
    pub fn offered(&self) -> &[PartId] {
        &self.offered
    }

    /// Pick the part at `index`
    pub fn choose(&self, index: usize) -> Result<PartId, HomunError> {
        self.offered
            .get(index)
            .copied()
            .ok_or(HomunError::InvalidDropChoice {
                index,
                offered: self.offered.len(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.offered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BodyPartCatalog;
    use crate::source::BodyPart;
    use crate::types::PartCategory;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog(n: u32) -> BodyPartCatalog {
        let parts = (0..n)
            .map(|i| BodyPart::new(PartId(i), format!("part_{}", i), PartCategory::Accessory))
            .collect();
        BodyPartCatalog::from_parts(parts).unwrap()
    }

    #[test]
    fn test_offer_is_distinct() {
        let catalog = catalog(10);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let offer = DropOffer::roll_with_rng(&catalog, 3, &mut rng);

        assert_eq!(offer.offered().len(), 3);
        let mut ids = offer.offered().to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| catalog.part(*id).is_some()));
    }

    #[test]
    fn test_offer_capped_by_catalog_size() {
        let catalog = catalog(2);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let offer = DropOffer::roll_with_rng(&catalog, 5, &mut rng);
        assert_eq!(offer.offered().len(), 2);
    }

    #[test]
    fn test_offer_deterministic_for_seed() {
        let catalog = catalog(20);
        let a = DropOffer::roll_with_rng(&catalog, 3, &mut ChaCha8Rng::seed_from_u64(9));
        let b = DropOffer::roll_with_rng(&catalog, 3, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_choose_in_and_out_of_range() {
        let offer = DropOffer::from_ids(vec![PartId(4), PartId(8)]);
        assert_eq!(offer.choose(1).unwrap(), PartId(8));
        assert_eq!(
            offer.choose(2).unwrap_err(),
            HomunError::InvalidDropChoice { index: 2, offered: 2 }
        );
    }

    #[test]
    fn test_empty_catalog_gives_empty_offer() {
        let offer = DropOffer::roll_with_rng(&BodyPartCatalog::new(), 3, &mut ChaCha8Rng::seed_from_u64(0));
        assert!(offer.is_empty());
        assert!(offer.choose(0).is_err());
    }
}
