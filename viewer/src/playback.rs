use bevy::prelude::*;

/// Systems that move the playback clock. Drawing runs after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackSet;

/// Position of the animation within the run, in simulated seconds.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    pub clock: f64,
    pub speed: f64,
    pub duration: f64,
    pub paused: bool,
}

impl Playback {
    pub fn new(duration: f64, speed: f64) -> Self {
        Self {
            clock: 0.0,
            speed,
            duration,
            paused: false,
        }
    }

    /// Move forward by `dt` wall-clock seconds, looping back to the start.
    pub fn advance(&mut self, dt: f64) {
        if self.paused || self.duration <= 0.0 {
            return;
        }
        self.clock = (self.clock + dt * self.speed).rem_euclid(self.duration);
        if self.clock >= self.duration {
            self.clock = 0.0;
        }
    }
}

pub struct PlaybackPlugin;

impl Plugin for PlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (toggle_pause, advance_playback).chain().in_set(PlaybackSet),
        );
    }
}

fn toggle_pause(keys: Option<Res<ButtonInput<KeyCode>>>, mut playback: ResMut<Playback>) {
    let Some(keys) = keys else { return; };
    if keys.just_pressed(KeyCode::Space) {
        playback.paused = !playback.paused;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        playback.clock = 0.0;
    }
}

fn advance_playback(time: Res<Time>, mut playback: ResMut<Playback>) {
    playback.advance(time.delta_secs_f64());
}
