//! Integration tests for flock-sim.

use flock_agent::{AgentStore, AgentStoreBuilder};
use flock_behavior::{BallisticModel, ClassWeights, CoefficientTable, FlockingModel};
use flock_core::{BoundaryKind, ClassId, DVec2, FlockConfig, MagnitudeRange};

use crate::{Sim, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(agent_count: usize, class_count: usize) -> FlockConfig {
    FlockConfig {
        agent_count,
        class_count,
        field_width:             1.0,
        perception_radius:       0.08,
        v_range:                 MagnitudeRange::new(0.0, 10.0),
        a_range:                 MagnitudeRange::new(0.0, 100.0),
        dt:                      0.1,
        boundary:                BoundaryKind::Bounce,
        seed:                    42,
        num_threads:             Some(1),
        snapshot_interval_ticks: 1,
    }
}

fn vecs(points: &[(f64, f64)]) -> Vec<DVec2> {
    points.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
}

fn close(a: DVec2, b: DVec2) -> bool {
    (a - b).length() < 1e-12
}

/// A single ballistic agent with the given state.
fn lone_agent(boundary: BoundaryKind, p: (f64, f64), v: (f64, f64)) -> Sim<BallisticModel> {
    let config = FlockConfig { boundary, ..test_config(1, 1) };
    SimBuilder::new(config, BallisticModel)
        .initial_state(vecs(&[p]), vecs(&[v]), vec![ClassId(0)])
        .build()
        .unwrap()
}

/// The three-agent triangle with a cohesion-only table.
fn cohesion_triangle(perception_radius: f64) -> Sim<FlockingModel> {
    let config = FlockConfig { perception_radius, ..test_config(3, 1) };
    let table = CoefficientTable::uniform(1, ClassWeights::new(0.0, 1.0, 0.0), 0.0).unwrap();
    SimBuilder::flocking(config, table)
        .initial_state(
            vecs(&[(0.5, 0.5), (0.5, 0.55), (0.54, 0.525)]),
            vec![DVec2::ZERO; 3],
            vec![ClassId(0); 3],
        )
        .build()
        .unwrap()
}

fn two_species_table() -> CoefficientTable {
    CoefficientTable::from_rows(
        vec![
            vec![ClassWeights::new(1.0, 0.5, 0.5), ClassWeights::new(2.0, -0.5, 0.0)],
            vec![ClassWeights::new(0.5, 1.0, 0.0), ClassWeights::new(1.0, 0.5, 0.5)],
        ],
        vec![0.05, 0.05],
    )
    .unwrap()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use flock_agent::AgentError;
    use flock_core::{AgentId, ConfigError};

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_random_flock_from_defaults() {
        let config = FlockConfig::default();
        let sim = SimBuilder::flocking(config.clone(), two_species_table()).build().unwrap();
        assert_eq!(sim.agents.count, config.agent_count);
        assert!(sim.class_ids().iter().all(|c| c.index() < 2));
        assert!(sim.agents.positions.iter().all(|&p| config.field().contains(p)));
    }

    #[test]
    fn same_seed_same_initial_flock() {
        let a = SimBuilder::flocking(test_config(40, 2), two_species_table()).build().unwrap();
        let b = SimBuilder::flocking(test_config(40, 2), two_species_table()).build().unwrap();
        assert_eq!(a.agents, b.agents);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = FlockConfig { agent_count: 0, ..test_config(1, 1) };
        let err = SimBuilder::new(config, BallisticModel).build().err().unwrap();
        assert!(matches!(err, SimError::Config(ConfigError::EmptyPopulation)));

        let config = FlockConfig { dt: -0.1, ..test_config(1, 1) };
        let err = SimBuilder::new(config, BallisticModel).build().err().unwrap();
        assert!(matches!(err, SimError::Config(ConfigError::NonPositive { what: "dt", .. })));
    }

    #[test]
    fn table_must_match_class_count() {
        let table = CoefficientTable::zeros(3).unwrap();
        let err = SimBuilder::flocking(test_config(10, 2), table).build().err().unwrap();
        assert!(matches!(err, SimError::Config(ConfigError::TableShape { expected: 2, .. })));
    }

    #[test]
    fn store_count_mismatch_errors() {
        let store = AgentStoreBuilder::new(5, 0).build();
        let err = SimBuilder::new(test_config(6, 1), BallisticModel)
            .agents(store)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::AgentCountMismatch { expected: 6, got: 5, .. }));
    }

    #[test]
    fn store_class_out_of_range_errors() {
        let store = AgentStoreBuilder::new(200, 0).classes(3).build();
        let err = SimBuilder::new(test_config(200, 2), BallisticModel)
            .agents(store)
            .build()
            .err()
            .unwrap();
        match err {
            SimError::ClassOutOfRange { class, classes, .. } => {
                assert_eq!(class, ClassId(2));
                assert_eq!(classes, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn initial_state_is_validated() {
        let err = SimBuilder::new(test_config(2, 1), BallisticModel)
            .initial_state(vec![DVec2::ZERO; 2], vec![DVec2::ZERO; 1], vec![ClassId(0); 2])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Agents(AgentError::LengthMismatch { what: "velocities", .. })));

        let err = SimBuilder::new(test_config(1, 1), BallisticModel)
            .initial_state(vec![DVec2::ZERO], vec![DVec2::ZERO], vec![ClassId(1)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SimError::Agents(AgentError::ClassOutOfRange { agent: AgentId(0), .. })
        ));
    }

    #[test]
    fn negative_magnitude_bands_are_rejected() {
        let band = MagnitudeRange::new(-1.0, -0.5);
        let config = FlockConfig { a_range: band, v_range: band, ..test_config(1, 1) };
        let err = SimBuilder::flocking(config, CoefficientTable::zeros(1).unwrap())
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(ConfigError::NegativeMagnitude { .. })));
    }

    #[test]
    fn non_finite_store_is_rejected_like_initial_state() {
        let positions = vecs(&[(0.2, 0.2), (f64::NAN, 0.2)]);
        let velocities = vec![DVec2::ZERO; 2];
        let classes = vec![ClassId(0); 2];

        let from_parts = SimBuilder::new(test_config(2, 1), BallisticModel)
            .initial_state(positions.clone(), velocities.clone(), classes)
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            from_parts,
            SimError::Agents(AgentError::NonFinite { agent: AgentId(1), what: "position" })
        ));

        let mut store = AgentStoreBuilder::new(2, 0).build();
        store.positions = positions;
        store.velocities = velocities;
        let from_store = SimBuilder::new(test_config(2, 1), BallisticModel)
            .agents(store.clone())
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            from_store,
            SimError::Agents(AgentError::NonFinite { agent: AgentId(1), what: "position" })
        ));

        store.positions[1] = DVec2::new(0.4, 0.2);
        store.velocities[0] = DVec2::new(0.0, f64::INFINITY);
        let err = SimBuilder::new(test_config(2, 1), BallisticModel)
            .agents(store)
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SimError::Agents(AgentError::NonFinite { agent: AgentId(0), what: "velocity" })
        ));
    }

    #[test]
    fn explicit_store_is_kept() {
        let store = AgentStore::from_parts(
            vecs(&[(0.2, 0.2), (0.8, 0.8)]),
            vecs(&[(0.01, 0.0), (0.0, 0.01)]),
            vec![ClassId(0), ClassId(0)],
            1,
        )
        .unwrap();
        let sim = SimBuilder::new(test_config(2, 1), BallisticModel)
            .agents(store.clone())
            .build()
            .unwrap();
        assert_eq!(sim.agents, store);
    }
}

// ── Tick semantics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use flock_behavior::{FlockContext, SteeringModel};
    use flock_core::{AgentId, Tick};
    use flock_motion::{Kinematics, contain};

    use super::*;
    use crate::SimError;

    #[test]
    fn zero_weights_are_ballistic() {
        let positions = vecs(&[(0.3, 0.3), (0.32, 0.31), (0.6, 0.5), (0.61, 0.52)]);
        let velocities = vecs(&[(0.1, 0.0), (0.0, -0.1), (0.05, 0.05), (-0.02, 0.03)]);
        let table = CoefficientTable::zeros(1).unwrap();
        let mut sim = SimBuilder::flocking(test_config(4, 1), table)
            .initial_state(positions.clone(), velocities.clone(), vec![ClassId(0); 4])
            .build()
            .unwrap();

        for dt in [0.1, 0.37, 0.01] {
            let before_p = sim.agents.positions.clone();
            let before_v = sim.agents.velocities.clone();
            sim.tick_with(dt).unwrap();
            for i in 0..4 {
                assert_eq!(sim.agents.velocities[i], before_v[i], "agent {i} dt {dt}");
                assert!(close(sim.agents.positions[i], before_p[i] + before_v[i] * dt));
                assert_eq!(sim.agents.accelerations[i], DVec2::ZERO);
            }
        }
    }

    #[test]
    fn cohesion_pulls_toward_centroid_of_others() {
        let mut sim = cohesion_triangle(0.08);
        sim.tick();

        let dt = 0.1;
        let p0 = DVec2::new(0.5, 0.5);
        let expected_a0 = DVec2::new(0.52, 0.5375) - p0;
        assert!(close(sim.agents.accelerations[0], expected_a0), "{:?}", sim.agents.accelerations[0]);
        assert!(close(sim.agents.velocities[0], expected_a0 * dt));
        assert!(close(sim.agents.positions[0], p0 + expected_a0 * dt * dt));

        // Agent 1 is pulled toward the midpoint of agents 0 and 2.
        let expected_a1 = DVec2::new(0.52, 0.5125) - DVec2::new(0.5, 0.55);
        assert!(close(sim.agents.accelerations[1], expected_a1));
    }

    #[test]
    fn neighbors_inside_separation_radius_get_no_cohesion() {
        // Perception 1.0 puts the whole triangle inside the separation radius.
        let mut sim = cohesion_triangle(1.0);
        let before = sim.agents.positions.clone();
        sim.tick();
        assert!(sim.agents.accelerations.iter().all(|a| *a == DVec2::ZERO));
        assert_eq!(sim.agents.positions, before);
    }

    #[test]
    fn bounce_reflects_before_integration() {
        let mut sim = lone_agent(BoundaryKind::Bounce, (0.5, 1.02), (0.0, 0.5));
        sim.tick();
        assert_eq!(sim.agents.velocities[0], DVec2::new(0.0, -0.5));
        assert!((sim.agents.positions[0].y - (0.999 - 0.05)).abs() < 1e-12);
    }

    #[test]
    fn wrap_teleports_before_integration() {
        let mut sim = lone_agent(BoundaryKind::Wrap, (1.01, 0.5), (0.1, 0.0));
        sim.tick();
        assert_eq!(sim.agents.velocities[0], DVec2::new(0.1, 0.0));
        assert!((sim.agents.positions[0].x - 0.01).abs() < 1e-12);
        assert_eq!(sim.agents.positions[0].y, 0.5);
    }

    #[test]
    fn result_independent_of_processing_order() {
        let config = FlockConfig {
            perception_radius: 0.2,
            v_range: MagnitudeRange::new(0.0, 0.2),
            a_range: MagnitudeRange::new(0.0, 2.0),
            boundary: BoundaryKind::Bounce,
            ..test_config(120, 2)
        };
        let mut sim = SimBuilder::flocking(config, two_species_table()).build().unwrap();
        // Push a few agents over the edges so boundary correction matters.
        sim.agents.positions[0].y = 1.01;
        sim.agents.positions[7].x = -0.02;

        let pre = sim.agents.clone();
        let ctx = FlockContext::from_config(&pre, &sim.config);
        let mut expected = vec![Kinematics::default(); pre.count];
        for i in (0..pre.count).rev() {
            let a = sim.model.steer(AgentId(i as u32), &ctx);
            let k = contain(sim.config.boundary, &sim.config.field(), Kinematics::new(pre.positions[i], pre.velocities[i]));
            expected[i] = sim.integrator.step(k, a, sim.config.dt);
        }

        sim.tick();
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(sim.agents.positions[i], want.position, "agent {i}");
            assert_eq!(sim.agents.velocities[i], want.velocity, "agent {i}");
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn thread_count_does_not_change_results() {
        let run = |threads: usize| {
            let config = FlockConfig {
                perception_radius: 0.15,
                v_range: MagnitudeRange::new(0.0, 0.2),
                a_range: MagnitudeRange::new(0.0, 2.0),
                num_threads: Some(threads),
                ..test_config(300, 2)
            };
            let mut sim = SimBuilder::flocking(config, two_species_table()).build().unwrap();
            for _ in 0..15 {
                sim.tick();
            }
            sim.agents
        };
        let single = run(1);
        for threads in [2, 4, 8] {
            assert_eq!(run(threads), single, "{threads} threads");
        }
    }

    #[test]
    fn identical_runs_are_identical() {
        let run = || {
            let mut sim = SimBuilder::flocking(test_config(80, 2), two_species_table()).build().unwrap();
            for _ in 0..25 {
                sim.tick();
            }
            sim.agents
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn speeds_stay_in_band() {
        let config = FlockConfig {
            v_range: MagnitudeRange::new(0.02, 0.1),
            a_range: MagnitudeRange::new(0.0, 2.0),
            perception_radius: 0.1,
            ..test_config(150, 2)
        };
        let v_range = config.v_range;
        let mut sim = SimBuilder::flocking(config, two_species_table()).build().unwrap();
        for _ in 0..40 {
            sim.tick();
            for v in &sim.agents.velocities {
                let s = v.length();
                assert!(s >= v_range.min - 1e-12 && s <= v_range.max + 1e-12, "speed {s}");
            }
        }
    }

    #[test]
    fn wrap_keeps_flock_near_field() {
        let config = FlockConfig {
            boundary: BoundaryKind::Wrap,
            v_range: MagnitudeRange::new(0.0, 0.1),
            a_range: MagnitudeRange::new(0.0, 2.0),
            ..test_config(60, 2)
        };
        let dt = config.dt;
        let mut sim = SimBuilder::flocking(config, two_species_table()).build().unwrap();
        for _ in 0..100 {
            sim.tick();
        }
        // At most one tick of travel past an edge before the next correction.
        let slack = 0.1 * dt + 1e-12;
        for p in &sim.agents.positions {
            assert!(p.x >= -slack && p.x <= 1.0 + slack && p.y >= -slack && p.y <= 1.0 + slack, "{p:?}");
        }
    }

    #[test]
    fn invalid_timestep_leaves_state_untouched() {
        let mut sim = lone_agent(BoundaryKind::Bounce, (0.5, 0.5), (0.1, 0.0));
        let before = sim.agents.clone();
        for dt in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(sim.tick_with(dt), Err(SimError::InvalidTimestep(_))));
        }
        assert_eq!(sim.agents, before);
        assert_eq!(sim.current_tick(), Tick::ZERO);
    }

    #[test]
    fn clock_tracks_ticks_and_time() {
        let mut sim = lone_agent(BoundaryKind::Bounce, (0.5, 0.5), (0.0, 0.0));
        sim.tick();
        sim.tick_with(0.25).unwrap();
        assert_eq!(sim.current_tick(), Tick(2));
        assert!((sim.clock.elapsed - 0.35).abs() < 1e-12);
    }
}

// ── Snapshots and observers ───────────────────────────────────────────────────

#[cfg(test)]
mod output_tests {
    use flock_core::Tick;

    use super::*;
    use crate::{NoopObserver, SimObserver, TickStats, TracingObserver};

    #[test]
    fn snapshot_views_are_ordered() {
        let mut sim = lone_agent(BoundaryKind::Bounce, (0.25, 0.75), (0.1, -0.2));
        assert_eq!(sim.snapshot_positions(), vec![[0.25, 0.75]]);
        sim.tick();
        let p = sim.agents.positions[0];
        let v = sim.agents.velocities[0];
        let seg = sim.snapshot_segments(0.5)[0];
        assert!(close(DVec2::new(seg[0], seg[1]), p - v * 0.5));
        assert_eq!([seg[2], seg[3]], [p.x, p.y]);
        assert_eq!(sim.class_ids(), &[ClassId(0)]);
    }

    #[derive(Default)]
    struct Counter {
        starts:    usize,
        ends:      usize,
        snapshots: Vec<Tick>,
        finished:  Option<Tick>,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _t: Tick) { self.starts += 1; }
        fn on_tick_end(&mut self, _t: Tick, _s: &TickStats) { self.ends += 1; }
        fn on_snapshot(&mut self, t: Tick, agents: &AgentStore) {
            assert_eq!(agents.count, 3);
            self.snapshots.push(t);
        }
        fn on_run_end(&mut self, t: Tick) { self.finished = Some(t); }
    }

    #[test]
    fn observer_called_correct_number_of_times() {
        let config = FlockConfig { snapshot_interval_ticks: 2, ..test_config(3, 1) };
        let mut sim = SimBuilder::flocking(config, CoefficientTable::zeros(1).unwrap()).build().unwrap();
        let mut obs = Counter::default();
        sim.run_ticks(5, &mut obs);
        assert_eq!(obs.starts, 5);
        assert_eq!(obs.ends, 5);
        assert_eq!(obs.snapshots, vec![Tick(0), Tick(2), Tick(4)]);
        assert_eq!(obs.finished, Some(Tick(5)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = FlockConfig { snapshot_interval_ticks: 0, ..test_config(3, 1) };
        let mut sim = SimBuilder::flocking(config, CoefficientTable::zeros(1).unwrap()).build().unwrap();
        let mut obs = Counter::default();
        sim.run_ticks(4, &mut obs);
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn tracing_and_noop_observers_run() {
        let mut sim = SimBuilder::flocking(test_config(20, 2), two_species_table()).build().unwrap();
        sim.run_ticks(3, &mut TracingObserver::new(1));
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.current_tick(), Tick(6));
    }

    #[test]
    fn tick_stats_summarize_store() {
        let store = AgentStore::from_parts(
            vecs(&[(0.0, 0.0), (1.0, 0.5)]),
            vecs(&[(0.3, 0.4), (0.0, 0.1)]),
            vec![ClassId(0); 2],
            1,
        )
        .unwrap();
        let stats = TickStats::from_store(Tick(3), &store);
        assert_eq!(stats.tick, Tick(3));
        assert!((stats.mean_speed - 0.3).abs() < 1e-12);
        assert!((stats.max_speed - 0.5).abs() < 1e-12);
        assert_eq!(stats.mean_acceleration, 0.0);
        assert!(close(stats.centroid, DVec2::new(0.5, 0.25)));
    }

    #[test]
    fn tick_returns_stats_for_committed_tick() {
        let mut sim = lone_agent(BoundaryKind::Bounce, (0.5, 0.5), (0.0, 0.1));
        let stats = sim.tick();
        assert_eq!(stats.tick, Tick(0));
        assert!((stats.mean_speed - 0.1).abs() < 1e-12);
    }
}
