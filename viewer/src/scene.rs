use bevy::math::{DVec2, Isometry2d};
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use dynamics::{body_to_world, Trajectory, VehicleGeometry};

use crate::playback::{Playback, PlaybackSet};
use crate::LoadedRun;

const PATH_COLOR: Color = Color::srgb(0.35, 0.55, 0.9);
const HULL_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
const HEADING_COLOR: Color = Color::srgb(1.0, 0.8, 0.2);
const VELOCITY_COLOR: Color = Color::srgb(0.2, 1.0, 0.2);
const THRUST_COLOR: Color = Color::srgb(1.0, 0.35, 0.25);

/// Where a thruster sits on the hull and which way it pushes, both in the body frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrusterMount {
    pub position: DVec2,
    pub direction: DVec2,
}

/// The four mounts implied by the force pattern: starboard-bow, port-bow,
/// port-stern, starboard-stern, at `(±horizontal, ±vertical)` from the center of mass.
pub fn thruster_mounts(geometry: &VehicleGeometry) -> [ThrusterMount; 4] {
    let (s, c) = geometry.alpha.sin_cos();
    let h = geometry.horizontal_distance;
    let v = geometry.vertical_distance;
    [
        (DVec2::new(h, -v), DVec2::new(c, s)),
        (DVec2::new(h, v), DVec2::new(c, -s)),
        (DVec2::new(-h, v), DVec2::new(-c, -s)),
        (DVec2::new(-h, -v), DVec2::new(-c, s)),
    ]
    .map(|(position, direction)| ThrusterMount {
        position,
        direction,
    })
}

/// Axis-aligned box around the whole path, padded by `margin` on every side.
pub fn path_bounds(trajectory: &Trajectory, margin: f64) -> (DVec2, DVec2) {
    let (min, max) = trajectory
        .positions()
        .fold(None, |acc: Option<(DVec2, DVec2)>, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
        .unwrap_or((DVec2::ZERO, DVec2::ZERO));
    (min - DVec2::splat(margin), max + DVec2::splat(margin))
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, (draw_path, draw_vehicle).after(PlaybackSet));
    }
}

fn hull_margin(geometry: &VehicleGeometry) -> f64 {
    2.0 * geometry.horizontal_distance.hypot(geometry.vertical_distance) + 1.0
}

fn spawn_camera(mut commands: Commands, run: Res<LoadedRun>) {
    let (min, max) = path_bounds(&run.trajectory, hull_margin(&run.geometry));
    let center = (min + max) / 2.0;
    let size = (max - min).as_vec2();
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: size.x,
                min_height: size.y,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(center.x as f32, center.y as f32, 0.0),
        Name::new("Viewer Camera"),
    ));
}

fn draw_path(mut gizmos: Gizmos, run: Res<LoadedRun>) {
    gizmos.linestrip_2d(run.trajectory.positions().map(|p| p.as_vec2()), PATH_COLOR);
    if let Some(first) = run.trajectory.get(0) {
        let start = first.state.position.as_vec2();
        gizmos.circle_2d(Isometry2d::from_translation(start), 0.15, PATH_COLOR);
    }
}

fn draw_vehicle(mut gizmos: Gizmos, run: Res<LoadedRun>, playback: Res<Playback>) {
    let Some(sample) = run.trajectory.sample_at(playback.clock) else { return; };
    let state = sample.state;
    let to_world = |body: DVec2| (state.position + body_to_world(body, state.theta)).as_vec2();

    let h = run.geometry.horizontal_distance;
    let v = run.geometry.vertical_distance;
    let corners = [
        DVec2::new(h, v),
        DVec2::new(-h, v),
        DVec2::new(-h, -v),
        DVec2::new(h, -v),
        DVec2::new(h, v),
    ];
    gizmos.linestrip_2d(corners.map(&to_world), HULL_COLOR);

    let center = state.position.as_vec2();
    gizmos.arrow_2d(center, to_world(DVec2::new(1.5 * h, 0.0)), HEADING_COLOR);
    if state.speed() >= 1e-3 {
        gizmos.arrow_2d(center, (state.position + state.velocity).as_vec2(), VELOCITY_COLOR);
    }

    // Arrow length is relative to the strongest thruster.
    let forces = run.thrusters.forces();
    let peak = forces.iter().fold(0.0_f64, |m, f| m.max(f.abs()));
    let scale = if peak > 0.0 { h / peak } else { 0.0 };
    for (mount, force) in thruster_mounts(&run.geometry).iter().zip(forces) {
        let at = to_world(mount.position);
        gizmos.circle_2d(Isometry2d::from_translation(at), 0.08 * h as f32, THRUST_COLOR);
        if *force != 0.0 {
            let tip = to_world(mount.position + mount.direction * (*force * scale));
            gizmos.arrow_2d(at, tip, THRUST_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use dynamics::{presets, Simulation, ThrusterArray, ThrusterLayout};

    use super::*;

    fn cross(a: DVec2, b: DVec2) -> f64 {
        a.x * b.y - a.y * b.x
    }

    #[test]
    fn mounts_reproduce_force_and_torque() {
        let geometry = presets::survey_hull();
        let layout = ThrusterLayout::from_geometry(&geometry).unwrap();
        let thrusters = ThrusterArray::new([3.0, -1.5, 7.0, 2.0]);

        let mounts = thruster_mounts(&geometry);
        let mut force = DVec2::ZERO;
        let mut torque = 0.0;
        for (m, t) in mounts.iter().zip(thrusters.forces()) {
            force += m.direction * *t;
            torque += cross(m.position, m.direction * *t);
        }

        assert!((force - layout.body_force(&thrusters)).length() < 1e-12);
        assert!((torque - layout.torque(&thrusters)).abs() < 1e-12);
        for m in &mounts {
            assert!((m.position.length() - layout.moment_arm()).abs() < 1e-12);
        }
    }

    #[test]
    fn bounds_cover_path_plus_margin() {
        let traj = Simulation::new(presets::ten_second_run([10.0, 10.0, 0.0, 0.0]))
            .unwrap()
            .run()
            .unwrap();
        let (min, max) = path_bounds(&traj, 1.0);
        for p in traj.positions() {
            assert!(p.x >= min.x + 1.0 - 1e-12 && p.x <= max.x - 1.0 + 1e-12);
            assert!(p.y >= min.y + 1.0 - 1e-12 && p.y <= max.y - 1.0 + 1e-12);
        }
        assert!(max.x - min.x > 2.0);
    }

    #[test]
    fn empty_path_centers_on_origin() {
        let (min, max) = path_bounds(&Trajectory::default(), 2.0);
        assert_eq!(min, DVec2::splat(-2.0));
        assert_eq!(max, DVec2::splat(2.0));
    }
}
