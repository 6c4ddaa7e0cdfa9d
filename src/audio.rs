//! Sound effects and menu music
//!
//! The simulation only reports `GameEvent`s; this module decides which sound
//! each event plays and at what volume. Playback itself goes through raylib
//! when the `window` feature is enabled.

use crate::mode::GameMode;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle (per-mode sample)
    Collision(GameMode),
    /// Point scored
    Goal,
    /// Win score reached
    GameEnd,
}

impl SoundEffect {
    /// Sound triggered by an event, if any
    pub fn for_event(event: &GameEvent, mode: GameMode) -> Option<Self> {
        match event {
            GameEvent::PaddleHit(_) => Some(SoundEffect::Collision(mode)),
            GameEvent::Goal { .. } => Some(SoundEffect::Goal),
            GameEvent::MatchOver { .. } => Some(SoundEffect::GameEnd),
            _ => None,
        }
    }
}

/// Volume levels derived from settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixer {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Mixer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Get effective sound effect volume
    pub fn sfx(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Get effective music volume
    pub fn music(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }
}

#[cfg(feature = "window")]
pub use backend::SoundBank;

#[cfg(feature = "window")]
mod backend {
    use raylib::core::audio::{Music, RaylibAudio, Sound};

    use super::{Mixer, SoundEffect};
    use crate::error::{Error, Result};
    use crate::mode::{AssetCatalog, GameMode};

    /// All sounds and the menu music, loaded once at startup
    pub struct SoundBank<'aud> {
        collisions: Vec<Sound<'aud>>,
        goal: Sound<'aud>,
        game_end: Sound<'aud>,
        menu_music: Music<'aud>,
        music_playing: bool,
        mixer: Mixer,
    }

    impl<'aud> SoundBank<'aud> {
        pub fn load(audio: &'aud RaylibAudio, catalog: &AssetCatalog, mixer: Mixer) -> Result<Self> {
            let sound = |file: &str| -> Result<Sound<'aud>> {
                let path = catalog.path(file);
                let sound = audio
                    .new_sound(&path.to_string_lossy())
                    .map_err(|e| Error::asset(&path, e))?;
                sound.set_volume(mixer.sfx());
                Ok(sound)
            };

            let collisions = GameMode::ALL
                .iter()
                .map(|mode| sound(mode.bundle().collision_sound))
                .collect::<Result<Vec<_>>>()?;
            let goal = sound(catalog.goal_sound)?;
            let game_end = sound(catalog.game_end_sound)?;

            let music_path = catalog.path(catalog.menu_music);
            let menu_music = audio
                .new_music(&music_path.to_string_lossy())
                .map_err(|e| Error::asset(&music_path, e))?;
            menu_music.set_volume(mixer.music());

            log::info!("Loaded {} sounds and menu music", collisions.len() + 2);

            Ok(Self {
                collisions,
                goal,
                game_end,
                menu_music,
                music_playing: false,
                mixer,
            })
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.mixer.sfx() <= 0.0 {
                return;
            }
            match effect {
                SoundEffect::Collision(mode) => self.collisions[mode.index()].play(),
                SoundEffect::Goal => self.goal.play(),
                SoundEffect::GameEnd => self.game_end.play(),
            }
        }

        /// Keep the menu music streaming while `active`, stop it once not
        pub fn update_music(&mut self, active: bool) {
            match (active, self.music_playing) {
                (true, false) => {
                    self.menu_music.play_stream();
                    self.music_playing = true;
                }
                (false, true) => {
                    self.menu_music.stop_stream();
                    self.music_playing = false;
                }
                _ => {}
            }
            if self.music_playing {
                self.menu_music.update_stream();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_event_sounds() {
        let mode = GameMode::TableTennis;
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PaddleHit(Side::Right), mode),
            Some(SoundEffect::Collision(GameMode::TableTennis))
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Goal { scorer: Side::Left }, mode),
            Some(SoundEffect::Goal)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::MatchOver { winner: Side::Left }, mode),
            Some(SoundEffect::GameEnd)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Served { toward: Side::Left }, mode),
            None
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::Paused, mode), None);
    }

    #[test]
    fn test_mixer_volumes() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            music_volume: 2.0,
            ..Default::default()
        };
        let mixer = Mixer::from_settings(&settings);
        assert_eq!(mixer.sfx(), 0.25);
        assert_eq!(mixer.music(), 0.5);

        let muted = Mixer::from_settings(&Settings {
            muted: true,
            ..settings
        });
        assert_eq!(muted.sfx(), 0.0);
        assert_eq!(muted.music(), 0.0);
    }
}
