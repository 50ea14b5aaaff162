use approx::assert_relative_eq;
use orbit_sim::gnc::OrbitController;
use orbit_sim::sim::{self, linspace};
use orbit_sim::vehicle::{presets, ShipParameters};
use orbit_sim::{simulate_orbit, SimConfig, SimError};
use test_log::test;

// Reference triples at dt=0.1, rad_tol=0.001, interval=200, thresh=20.

#[test]
fn harpy_ab_at_1500m() {
    let r = simulate_orbit(&presets::harpy_ab(), &SimConfig::default()).unwrap();
    assert_relative_eq!(r.stable_radius, 2226.5532260904206, max_relative = 1e-3);
    assert_relative_eq!(r.stable_speed, 578.4168451147759, max_relative = 1e-3);
    assert_relative_eq!(r.angular_velocity, 0.25978127912549903, max_relative = 1e-3);
    assert_eq!(r.iterations, 4600);
}

#[test]
fn harpy_ab_at_5000m() {
    let ship = presets::harpy_ab().with_radius(5000.0);
    let r = simulate_orbit(&ship, &SimConfig::default()).unwrap();
    assert_relative_eq!(r.stable_radius, 5680.028999299793, max_relative = 1e-3);
    assert_relative_eq!(r.stable_speed, 740.147074830777, max_relative = 1e-3);
}

#[test]
fn harpy_ab_half_throttle() {
    let ship = presets::harpy_ab().with_throttle(0.5);
    let r = simulate_orbit(&ship, &SimConfig::default()).unwrap();
    assert_relative_eq!(r.stable_radius, 1875.7515067872691, max_relative = 1e-3);
    assert_relative_eq!(r.stable_speed, 338.3471715759996, max_relative = 1e-3);
}

#[test]
fn heavy_sluggish_ship() {
    let ship = ShipParameters::new(300.0, 10.0, 0.5, 2500.0);
    let r = simulate_orbit(&ship, &SimConfig::default()).unwrap();
    assert_relative_eq!(r.stable_radius, 2786.6059603246376, max_relative = 1e-3);
    assert_relative_eq!(r.stable_speed, 270.42111669875527, max_relative = 1e-3);
}

#[test]
fn valid_inputs_terminate_with_positive_radius() {
    let ships = [
        ShipParameters::new(835.0, 1.655, 2.452, 100.0),
        ShipParameters::new(1500.0, 1.0, 1.0, 10_000.0),
        ShipParameters::new(835.0, 1.655, 2.452, 1500.0).with_throttle(0.1),
        ShipParameters::new(120.0, 100.0, 5.0, 20_000.0),
    ];
    for ship in ships {
        let r = simulate_orbit(&ship, &SimConfig::default()).unwrap();
        assert!(r.stable_radius > 0.0, "{ship:?}");
        assert_eq!(r.angular_velocity, r.stable_speed / r.stable_radius);
    }
}

#[test]
fn stable_speed_rises_with_throttle() {
    let ship = presets::harpy_ab();
    let speeds: Vec<f64> = [0.1, 0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|&t| {
            simulate_orbit(&ship.with_throttle(t), &SimConfig::default())
                .unwrap()
                .stable_speed
        })
        .collect();
    for pair in speeds.windows(2) {
        assert!(pair[1] > pair[0], "speeds {speeds:?}");
    }
}

#[test]
fn iteration_cap_does_not_change_converged_result() {
    let ship = presets::harpy_ab();
    let loose = simulate_orbit(&ship, &SimConfig::default()).unwrap();
    let tight = simulate_orbit(
        &ship,
        &SimConfig { max_iterations: loose.iterations, ..Default::default() },
    )
    .unwrap();
    assert_eq!(loose, tight);

    let too_tight = simulate_orbit(
        &ship,
        &SimConfig { max_iterations: loose.iterations - 1, ..Default::default() },
    );
    assert!(matches!(too_tight, Err(SimError::DidNotConverge { .. })));
}

#[test]
fn invalid_parameters_reported() {
    let config = SimConfig::default();
    let cases = [
        (ShipParameters::new(0.0, 1.0, 1.0, 1000.0), "max_speed"),
        (ShipParameters::new(100.0, -1.0, 1.0, 1000.0), "mass"),
        (ShipParameters::new(100.0, 1.0, 0.0, 1000.0), "agility"),
        (ShipParameters::new(100.0, 1.0, 1.0, f64::NAN), "commanded_radius"),
        (ShipParameters::new(100.0, 1.0, 1.0, 1000.0).with_throttle(1.5), "throttle"),
    ];
    for (ship, field) in cases {
        match simulate_orbit(&ship, &config) {
            Err(SimError::InvalidParameter { name, .. }) => assert_eq!(name, field),
            other => panic!("expected InvalidParameter({field}), got {other:?}"),
        }
    }
}

#[test]
fn sweep_matches_reference_points() {
    let radii = linspace(1500.0, 3500.0, 3);
    let rows = sim::sweep(&presets::harpy_ab(), &radii, &SimConfig::default()).unwrap();
    let expected = [2226.5532260904206, 3257.1645671170572, 4238.672325341322];
    for (row, want) in rows.iter().zip(expected) {
        assert_relative_eq!(row.actual_radius, want, max_relative = 1e-3);
        assert_relative_eq!(row.difference, want - row.prescribed_radius, max_relative = 1e-2);
    }
}

#[test]
fn recorded_track_settles_on_result_radius() {
    let config = SimConfig { record_history: true, ..Default::default() };
    let run = sim::simulate_with(&presets::harpy_ab(), &config, &mut OrbitController::new())
        .unwrap();
    let tail = &run.trajectory[run.trajectory.len() - 500..];
    for s in tail {
        assert_relative_eq!(s.radius(), run.result.stable_radius, max_relative = 0.01);
        assert_relative_eq!(s.time, s.iteration as f64 * config.dt, epsilon = 1e-9);
    }
}
