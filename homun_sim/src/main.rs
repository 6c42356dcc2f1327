//! homun_sim - Headless duel runner demonstrating homun_core
//!
//! Usage: `homun_sim [seed] [catalog.toml|catalog.json]`
//!
//! Builds a player and an opponent from random catalog parts, runs a
//! turn-based duel, then rolls a drop offer for the winner.

use homun_core::prelude::*;
use homun_core::{load_catalog, CatalogError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Duel pacing
#[derive(Debug, Clone)]
struct SimConfig {
    seed: u64,
    catalog_path: Option<PathBuf>,
    /// Seconds of modifier decay per turn
    turn_delta: f64,
    max_turns: u32,
    drop_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            seed: 7,
            catalog_path: None,
            turn_delta: 1.0,
            max_turns: 50,
            drop_count: 3,
        }
    }
}

impl SimConfig {
    fn from_args() -> Result<Self, String> {
        let mut config = SimConfig::default();
        let mut args = std::env::args().skip(1);

        if let Some(seed) = args.next() {
            config.seed = seed
                .parse()
                .map_err(|_| format!("seed must be an unsigned integer, got '{}'", seed))?;
        }
        config.catalog_path = args.next().map(PathBuf::from);

        Ok(config)
    }
}

fn load(config: &SimConfig) -> Result<BodyPartCatalog, CatalogError> {
    match &config.catalog_path {
        Some(path) => load_catalog(path),
        None => Ok(default_catalog()),
    }
}

/// Equip one random part per slot the catalog can fill
fn assemble(
    name: &str,
    catalog: &BodyPartCatalog,
    rng: &mut ChaCha8Rng,
) -> Result<Homun, HomunError> {
    let mut homun = Homun::new(name);

    for category in PartCategory::all() {
        let candidates: Vec<PartId> = catalog
            .iter()
            .filter(|p| p.category == *category)
            .map(|p| p.id)
            .collect();

        if let Some(id) = candidates.choose(rng) {
            homun.equip_body_part(catalog, *id)?;
        }
    }

    Ok(homun)
}

fn describe(homun: &Homun) {
    let parts: Vec<&str> = PartCategory::all()
        .iter()
        .filter_map(|category| homun.equipped(*category))
        .map(|p| p.name.as_str())
        .collect();
    let stats = homun.effective_stats();
    tracing::info!(
        homun = homun.name(),
        parts = ?parts,
        health = stats.health,
        attack = stats.attack,
        damage_reduction = stats.damage_reduction,
        speed = stats.speed,
        "ready"
    );
    for entry in homun.temporal_ledger().entries() {
        tracing::info!(
            homun = homun.name(),
            modifier = %entry.source.name,
            remaining_percent = entry.duration_percent(),
            "active modifier"
        );
    }
}

/// Run one exchange per turn until someone drops or the turn limit hits.
/// Returns true if the player won.
fn duel(
    player: &mut Homun,
    opponent: &mut Homun,
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
) -> Result<bool, HomunError> {
    for turn in 1..=config.max_turns {
        let player_first = player.effective_stats().speed >= opponent.effective_stats().speed;
        let (first, second) = if player_first {
            (&mut *player, &mut *opponent)
        } else {
            (&mut *opponent, &mut *player)
        };

        let result = first.attack_with_rng(second, rng)?;
        tracing::info!(turn, attacker = first.name(), "{}", result.summary());

        if second.health() > 0.0 {
            let result = second.attack_with_rng(first, rng)?;
            tracing::info!(turn, attacker = second.name(), "{}", result.summary());
        }

        for expired in first.tick(config.turn_delta) {
            tracing::info!(homun = first.name(), modifier = %expired.source.name, "wore off");
        }
        for expired in second.tick(config.turn_delta) {
            tracing::info!(homun = second.name(), modifier = %expired.source.name, "wore off");
        }

        if player.health() <= 0.0 || opponent.health() <= 0.0 {
            tracing::info!(
                turn,
                player_health = player.health(),
                opponent_health = opponent.health(),
                "knockout"
            );
            return Ok(player.health() > opponent.health());
        }
    }

    tracing::warn!(max_turns = config.max_turns, "turn limit reached");
    Ok(player.health() > opponent.health())
}

/// `RUST_LOG` directives when set and valid, otherwise `info`
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_args()?;
    let catalog = load(&config)?;
    tracing::info!(seed = config.seed, parts = catalog.len(), "catalog loaded");

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut player = assemble("Player", &catalog, &mut rng)?.player();
    let mut opponent = assemble("Opponent", &catalog, &mut rng)?;
    describe(&player);
    describe(&opponent);

    match duel(&mut player, &mut opponent, &config, &mut rng) {
        Ok(true) => {
            tracing::info!("player wins");
            let offer = DropOffer::roll_with_rng(&catalog, config.drop_count, &mut rng);
            for (index, id) in offer.offered().iter().enumerate() {
                if let Some(part) = catalog.part(*id) {
                    tracing::info!(index, part = %part.name, category = ?part.category, "drop offered");
                }
            }
            if !offer.is_empty() {
                let pick = offer.choose(0)?;
                player.equip_body_part(&catalog, pick)?;
                describe(&player);
            }
        }
        Ok(false) => tracing::info!("opponent wins"),
        Err(HomunError::MissingCore) => {
            tracing::error!("catalog has no core parts, nobody can attack");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
