use database::{DatabaseLoader, SaveStore, WorldGenerator};
use env_logger::Env;
use guildball_core::utils::TimeEstimation;
use guildball_core::{
    DayAdvanceRequest, GameConfig, LiveMatchEngine, MatchResult, SeededRng, StaffCollection,
    StaffRole, WorldSnapshot,
};
use log::{info, warn};
use std::env;
use std::str::FromStr;
use worker::SimulationWorker;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const LIVE_MATCH_SALT: u32 = 0x4c49_5645;

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!("ignoring unparsable {}={}", name, value);
            default
        }),
        Err(_) => default,
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seed = env_or("SEED", rand::random::<u32>());
    let days = env_or("DAYS", 14u32);
    let is_live_match = env::var("LIVE_MATCH") == Ok(String::from("1"));
    let save_store = env::var("SAVE_DIR").ok().map(SaveStore::new);

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let config = GameConfig::default();
    let nations = database.nations();
    let clubs = database.clubs()?;

    let managed_club_id = env_or("MANAGED_CLUB", clubs.first().map(|c| c.id).unwrap_or(1));

    let mut snapshot = match &save_store {
        Some(store) if store.exists(seed) => store.load(seed)?,
        _ => {
            let mut world = WorldGenerator::initialize_world_with(seed, &clubs, &nations, &config)?;
            world.reveal_club(managed_club_id);

            WorldSnapshot::new(
                managed_club_id,
                clubs,
                world.players,
                StaffCollection::new(world.staff),
                &config,
            )?
        }
    };

    match snapshot.managed_club() {
        Some(club) => {
            info!("⚽ managing {} (seed {})", club.name, seed);

            if let Some(manager) = snapshot.staff.find_role(club.id, StaffRole::Manager) {
                info!("👔 {} takes charge of {}", manager.full_name, club.short_name);
            }
        }
        None => warn!("managed club {} is not part of the league", managed_club_id),
    }

    let worker = SimulationWorker::new(nations, config);

    for _ in 0..days {
        let played = if is_live_match {
            play_live(&snapshot, worker.config())?.into_iter().collect()
        } else {
            Vec::new()
        };

        let response = worker
            .advance_day(DayAdvanceRequest::new(snapshot).with_played(played))
            .await?;

        for message in &response.messages {
            info!("✉ {} | {}: {}", message.sender, message.subject, message.body);
        }

        snapshot = response.snapshot;
    }

    for row in &snapshot.league_table.rows {
        let name = snapshot.club(row.club_id).map(|c| c.short_name.as_str()).unwrap_or("???");
        info!(
            "{:>2}. {:<4} P{:>2} W{:>2} D{:>2} L{:>2} {:>+4} {:>3} pts",
            row.position, name, row.played, row.won, row.drawn, row.lost, row.goal_difference, row.points
        );
    }

    if let Some(store) = save_store {
        store.save(seed, &snapshot)?;
    }

    Ok(())
}

/// Plays the managed club's fixture of the coming day through the live engine.
fn play_live(snapshot: &WorldSnapshot, config: &GameConfig) -> color_eyre::Result<Option<MatchResult>> {
    let (date, _) = snapshot.date.next(config.season_length_days);

    let Some(fixture) = snapshot
        .fixtures_on(date.day)
        .into_iter()
        .find(|f| f.involves(snapshot.managed_club_id))
    else {
        return Ok(None);
    };

    let (Some(home), Some(away)) = (
        snapshot.club(fixture.home_club_id),
        snapshot.club(fixture.away_club_id),
    ) else {
        return Ok(None);
    };

    let rng = SeededRng::for_day(date.season, date.day).derive(LIVE_MATCH_SALT);
    let mut engine = LiveMatchEngine::new(rng);

    engine.initialize(fixture, &snapshot.players, home, away)?;

    loop {
        let chunk = engine.simulate_next_chunk()?;

        for event in chunk.new_events.iter().filter(|e| e.is_goal()) {
            info!("🔴 LIVE {}", event.description);
        }

        if chunk.match_over {
            break;
        }
    }

    let result = engine.finish()?;

    info!("🏁 full time: {} {} {}", home.short_name, result.score, away.short_name);

    Ok(Some(result))
}
