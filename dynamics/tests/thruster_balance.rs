use dynamics::{presets, DynamicsModel, ThrusterArray, VehicleGeometry};

fn hulls() -> Vec<VehicleGeometry> {
    let mut hulls = vec![presets::training_hull(), presets::survey_hull()];
    for k in 1..6 {
        let mut g = presets::training_hull();
        g.alpha = k as f64 * 0.3;
        g.horizontal_distance = 0.2 * k as f64;
        g.vertical_distance = 1.5 / k as f64;
        hulls.push(g);
    }
    hulls
}

#[test]
fn idle_thrusters_give_exactly_zero_acceleration() {
    for geometry in hulls() {
        for k in 0..12 {
            let theta = k as f64 * 0.55 - 1.0;
            let (lin, ang) = DynamicsModel::evaluate(&ThrusterArray::IDLE, &geometry, theta).unwrap();
            assert_eq!(lin.x, 0.0, "ax for {geometry:?} at {theta}");
            assert_eq!(lin.y, 0.0, "ay for {geometry:?} at {theta}");
            assert_eq!(ang, 0.0, "alpha for {geometry:?}");
        }
    }
}

#[test]
fn balanced_commands_cancel_force_and_torque() {
    // Equal thrust on every unit matches the sign pattern and nets out.
    for geometry in hulls() {
        for magnitude in [0.5, 12.0, -40.0, 1e3] {
            let t = ThrusterArray::new([magnitude; 4]);
            let (lin, ang) = DynamicsModel::evaluate(&t, &geometry, 2.1).unwrap();
            assert!(lin.length() < 1e-6, "net force leaked: {lin:?} for {geometry:?}");
            assert!(ang.abs() < 1e-6, "net torque leaked: {ang} for {geometry:?}");
        }
    }
}

#[test]
fn reversing_every_thruster_reverses_the_motion() {
    let geometry = presets::survey_hull();
    let fwd = ThrusterArray::new([3.0, -1.0, 0.5, 2.0]);
    let rev = ThrusterArray::new(fwd.forces().map(|f| -f));
    let (lin_f, ang_f) = DynamicsModel::evaluate(&fwd, &geometry, 0.7).unwrap();
    let (lin_r, ang_r) = DynamicsModel::evaluate(&rev, &geometry, 0.7).unwrap();
    assert!((lin_f + lin_r).length() < 1e-12);
    assert!((ang_f + ang_r).abs() < 1e-12);
}

#[test]
fn worked_angular_acceleration() {
    let t = ThrusterArray::new([10.0, 0.0, 0.0, 0.0]);
    let (_, alpha) = DynamicsModel::evaluate(&t, &presets::training_hull(), 0.0).unwrap();
    let expected = 10.0 * std::f64::consts::SQRT_2 / 100.0;
    assert!((alpha - expected).abs() < 1e-12, "alpha={alpha}");
    assert!((alpha - 0.14142).abs() < 1e-5);
}
