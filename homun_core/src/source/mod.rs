//! StatSource - Trait and implementations for stat providers

mod part;

pub use part::{BodyPart, OnHitModifiers};

use crate::stats::HomunStats;

/// Trait for anything that contributes stats to a Homun
///
/// Body parts add their fixed bundle; active modifiers fold flat and
/// percent increments against the running value.
pub trait StatSource: Send + Sync {
    /// Identifier for logs and breakdowns
    fn id(&self) -> &str;

    /// Apply this source's stats to the running bundle
    fn apply(&self, stats: &mut HomunStats);
}

/// Fold sources, in order, over a zeroed bundle
pub fn aggregate<'a, I, S>(sources: I) -> HomunStats
where
    I: IntoIterator<Item = &'a S>,
    S: StatSource + ?Sized + 'a,
{
    let mut stats = HomunStats::new();
    for source in sources {
        source.apply(&mut stats);
        tracing::trace!(source = source.id(), "applied stat source");
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::{ActiveModifier, ModifierData};
    use crate::stats::Stat;

    struct Fixed(HomunStats);

    impl StatSource for Fixed {
        fn id(&self) -> &str {
            "fixed"
        }

        fn apply(&self, stats: &mut HomunStats) {
            *stats += self.0;
        }
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let sources: Vec<Fixed> = Vec::new();
        assert!(aggregate(&sources).is_zero());
    }

    #[test]
    fn test_aggregate_mixed_sources_in_order() {
        let sources: Vec<Box<dyn StatSource>> = vec![
            Box::new(Fixed(HomunStats::new().with(Stat::Attack, 10.0))),
            Box::new(ActiveModifier::new(
                ModifierData::new("Frenzy", 1.0).with_percent(Stat::Attack, 0.5),
            )),
        ];

        let stats = aggregate(sources.iter().map(|s| &**s));
        assert!((stats.attack - 15.0).abs() < 0.01);
    }
}
