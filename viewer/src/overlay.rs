use bevy::prelude::*;
use dynamics::TrajectorySample;

use crate::playback::{Playback, PlaybackSet};
use crate::LoadedRun;

#[derive(Component)]
struct OverlayNode;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_overlay)
            .add_systems(Update, update_overlay.after(PlaybackSet));
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..Default::default()
        },
        Text::new(String::new()),
        TextFont {
            font_size: 16.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        OverlayNode,
        Name::new("Run Overlay"),
    ));
}

fn update_overlay(
    run: Res<LoadedRun>,
    playback: Res<Playback>,
    mut q_text: Query<&mut Text, With<OverlayNode>>,
) {
    let Ok(mut text) = q_text.single_mut() else { return; };
    text.0 = match run.trajectory.sample_at(playback.clock) {
        Some(sample) => overlay_text(&run.name, &sample, &playback),
        None => format!("{}\n(no samples)", run.name),
    };
}

pub fn overlay_text(name: &str, sample: &TrajectorySample, playback: &Playback) -> String {
    let s = &sample.state;
    format!(
        "{}{name}  x{:.2}\nT    {:6.2} s\nPOS  {:8.2} {:8.2} m\nHDG  {:6.1} deg\nSPD  {:6.3} m/s\nOMG  {:+6.3} rad/s",
        if playback.paused { "PAUSED\n" } else { "" },
        playback.speed,
        sample.time,
        s.position.x,
        s.position.y,
        s.theta.to_degrees(),
        s.speed(),
        s.omega,
    )
}
