use crate::WorkerError;
use guildball_core::{
    DayAdvanceRequest, DayAdvanceResponse, FootballSimulator, GameConfig, NationCollection,
    SimulationContext,
};
use log::{debug, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Runs day advances on the blocking pool so the caller's runtime stays
/// responsive. Requests cross the boundary as JSON, the same payload a
/// remote front end would send.
#[derive(Clone)]
pub struct SimulationWorker {
    nations: Arc<NationCollection>,
    config: Arc<GameConfig>,
    in_flight: Arc<AtomicBool>,
}

struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SimulationWorker {
    pub fn new(nations: NationCollection, config: GameConfig) -> Self {
        SimulationWorker {
            nations: Arc::new(nations),
            config: Arc::new(config),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn nations(&self) -> &NationCollection {
        &self.nations
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fails fast with `WorkerError::Busy` while another advance is running.
    pub async fn advance_day(
        &self,
        request: DayAdvanceRequest,
    ) -> Result<DayAdvanceResponse, WorkerError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(WorkerError::Busy);
        }

        let _guard = InFlightGuard(Arc::clone(&self.in_flight));

        let payload = serde_json::to_vec(&request)?;
        debug!("worker request: {} bytes", payload.len());

        let nations = Arc::clone(&self.nations);
        let config = Arc::clone(&self.config);

        let encoded = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, WorkerError> {
            let request: DayAdvanceRequest = serde_json::from_slice(&payload)?;
            let ctx = SimulationContext::new(&nations, &config);

            let response = FootballSimulator::process(request, ctx)?;

            Ok(serde_json::to_vec(&response)?)
        })
        .await??;

        let response: DayAdvanceResponse = serde_json::from_slice(&encoded)?;

        info!(
            "🗓 worker advanced to {}: {} results, {} messages",
            response.snapshot.date,
            response.match_results.len(),
            response.messages.len()
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{DatabaseLoader, WorldGenerator};
    use guildball_core::{StaffCollection, WorldSnapshot};

    fn setup() -> (SimulationWorker, WorldSnapshot) {
        let database = DatabaseLoader::load().unwrap();
        let nations = database.nations();
        let clubs = database.clubs().unwrap();
        let config = GameConfig::default();

        let world = WorldGenerator::initialize_world(99, &clubs, &nations).unwrap();
        let snapshot = WorldSnapshot::new(
            clubs[0].id,
            clubs,
            world.players,
            StaffCollection::new(world.staff),
            &config,
        )
        .unwrap();

        (SimulationWorker::new(nations, config), snapshot)
    }

    #[tokio::test]
    async fn test_worker_matches_in_thread_advance() {
        let (worker, mut snapshot) = setup();

        for _ in 0..7 {
            let ctx = SimulationContext::new(worker.nations(), worker.config());
            let expected = FootballSimulator::advance_day(snapshot.clone(), ctx).unwrap();

            let response = worker
                .advance_day(DayAdvanceRequest::new(snapshot))
                .await
                .unwrap();

            assert_eq!(response, expected);
            snapshot = response.snapshot;
        }

        assert_eq!(snapshot.date.day, 8);
        assert!(!worker.is_busy());
    }

    #[tokio::test]
    async fn test_busy_worker_rejects_second_request() {
        let (worker, snapshot) = setup();

        worker.in_flight.store(true, Ordering::Release);

        let result = worker.advance_day(DayAdvanceRequest::new(snapshot.clone())).await;
        assert!(matches!(result, Err(WorkerError::Busy)));

        worker.in_flight.store(false, Ordering::Release);

        assert!(worker.advance_day(DayAdvanceRequest::new(snapshot)).await.is_ok());
        assert!(!worker.is_busy());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_clones_share_the_in_flight_flag() {
        let (worker, _) = setup();
        let clone = worker.clone();

        worker.in_flight.store(true, Ordering::Release);

        assert!(clone.is_busy());
    }

    #[tokio::test]
    async fn test_engine_error_is_returned_and_releases_the_worker() {
        let (worker, mut snapshot) = setup();

        snapshot.date.day = worker.config().season_length_days;
        let short_season = SimulationWorker::new(
            worker.nations().clone(),
            GameConfig {
                round_interval_days: 60,
                ..worker.config().clone()
            },
        );

        let result = short_season.advance_day(DayAdvanceRequest::new(snapshot)).await;

        assert!(matches!(result, Err(WorkerError::Simulation(_))));
        assert!(!short_season.is_busy());
    }
}
