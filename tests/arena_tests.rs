//! Batch harness integration tests.

use pyramid_rummy::agents::Move;
use pyramid_rummy::arena::{AgentKind, BatchStats, MatchConfig, MatchRunner};
use pyramid_rummy::core::{PlayerId, SamplingConfig};
use pyramid_rummy::error::{ConfigError, Error};
use pyramid_rummy::rules::TOTAL_PLAYS;

fn quick_config() -> MatchConfig {
    MatchConfig::new()
        .with_games(6)
        .with_seed(2024)
        .with_sampling(
            SamplingConfig::default()
                .with_iterations(20)
                .with_draw_iterations(4),
        )
}

#[test]
fn test_parallel_matches_sequential() {
    let config = quick_config().with_agent(PlayerId::TWO, AgentKind::Reflex);
    let runner = MatchRunner::from_config(&config);

    let sequential = runner.play_batch(&config).unwrap();
    let parallel = runner.play_batch(&config.clone().with_parallel(true)).unwrap();

    assert_eq!(sequential.len(), 6);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_batch_records_are_complete() {
    let config = quick_config()
        .with_agent(PlayerId::ONE, AgentKind::Random)
        .with_agent(PlayerId::TWO, AgentKind::Sampling);
    let records = MatchRunner::from_config(&config).play_batch(&config).unwrap();

    for record in &records {
        assert!(record.status.is_over());
        let plays = record
            .moves
            .iter()
            .filter(|m| matches!(m.mv, Move::PlayAt(_)))
            .count();
        assert_eq!(plays, TOTAL_PLAYS);
    }

    let mut seeds: Vec<_> = records.iter().map(|r| r.seed).collect();
    seeds.sort_unstable();
    seeds.dedup();
    assert_eq!(seeds.len(), records.len(), "every game gets its own seed");
}

#[test]
fn test_run_batch_tally() {
    let config = quick_config()
        .with_agent(PlayerId::ONE, AgentKind::Reflex)
        .with_agent(PlayerId::TWO, AgentKind::Random);
    let runner = MatchRunner::from_config(&config);

    let stats = runner.run_batch(&config).unwrap();
    let records = runner.play_batch(&config).unwrap();

    assert_eq!(stats.games, 6);
    assert_eq!(
        stats.wins[PlayerId::ONE] + stats.wins[PlayerId::TWO] + stats.draws,
        6
    );
    assert_eq!(stats, BatchStats::from_records(&records));
}

#[test]
fn test_batch_seed_changes_games() {
    let config = quick_config().with_agent(PlayerId::ONE, AgentKind::Reflex);
    let runner = MatchRunner::from_config(&config);

    let a = runner.play_batch(&config).unwrap();
    let b = runner.play_batch(&config.clone().with_seed(2025)).unwrap();
    assert_ne!(a[0].seed, b[0].seed);
}

#[test]
fn test_invalid_config_rejected() {
    let runner = MatchRunner::new(200);

    let err = runner.run_batch(&MatchConfig::new().with_games(0)).unwrap_err();
    assert_eq!(err, Error::Config(ConfigError::ZeroGames));

    let bad = MatchConfig::new().with_sampling(SamplingConfig::default().with_draw_iterations(0));
    let err = runner.run_batch(&bad).unwrap_err();
    assert_eq!(err, Error::Config(ConfigError::ZeroDrawIterations));
}

#[test]
fn test_stats_serialize() {
    let config = quick_config()
        .with_games(2)
        .with_agent(PlayerId::ONE, AgentKind::Reflex)
        .with_agent(PlayerId::TWO, AgentKind::Reflex);
    let stats = MatchRunner::from_config(&config).run_batch(&config).unwrap();

    let json = serde_json::to_string(&stats).unwrap();
    let back: BatchStats = serde_json::from_str(&json).unwrap();
    assert_eq!(stats, back);
}
