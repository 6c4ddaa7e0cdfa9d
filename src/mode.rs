//! Game modes and their asset bundles
//!
//! Modes are purely cosmetic: every mode plays by the same rules and only
//! swaps the background, sprites and paddle-hit sound.

use std::path::{Path, PathBuf};

use crate::consts::INSTRUCTION_PAGES;

/// Cosmetic variant chosen on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Tennis,
    TableTennis,
    AirHockey,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Tennis, GameMode::TableTennis, GameMode::AirHockey];

    /// Name shown under the court
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Tennis => "Tennis",
            GameMode::TableTennis => "Table Tennis",
            GameMode::AirHockey => "Air Hockey",
        }
    }

    /// Mode bound to the digit keys 1, 2 and 3 on the home screen
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(GameMode::Tennis),
            2 => Some(GameMode::TableTennis),
            3 => Some(GameMode::AirHockey),
            _ => None,
        }
    }

    /// Asset bundle for this mode
    pub fn bundle(&self) -> AssetBundle {
        match self {
            GameMode::Tennis => AssetBundle {
                background: "background.png",
                paddle: "Tennispaddle.png",
                ball: "ballsmall.png",
                collision_sound: "collision.ogg",
            },
            GameMode::TableTennis => AssetBundle {
                background: "table_tennis_background.png",
                paddle: "table_tennis_paddle.png",
                ball: "table_tennis_ball.png",
                collision_sound: "table_tennis_collision.ogg",
            },
            GameMode::AirHockey => AssetBundle {
                background: "air_hockey_background.png",
                paddle: "air_hockey_paddle.png",
                ball: "air_hockey_ball.png",
                collision_sound: "air_hockey_collision.ogg",
            },
        }
    }

    /// Position in `ALL`, used to index per-mode resources
    pub fn index(&self) -> usize {
        match self {
            GameMode::Tennis => 0,
            GameMode::TableTennis => 1,
            GameMode::AirHockey => 2,
        }
    }
}

/// Filenames of the per-mode assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetBundle {
    pub background: &'static str,
    pub paddle: &'static str,
    pub ball: &'static str,
    pub collision_sound: &'static str,
}

/// Filenames shared by every mode
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    root: PathBuf,
    pub home_screen: &'static str,
    pub instructions: [&'static str; INSTRUCTION_PAGES],
    pub menu_music: &'static str,
    pub goal_sound: &'static str,
    pub game_end_sound: &'static str,
    pub font: &'static str,
}

impl AssetCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            home_screen: "homescreen.png",
            instructions: [
                "instructions1.png",
                "instructions2.png",
                "instructions3.png",
                "instructions4.png",
                "instructions5.png",
            ],
            menu_music: "homescreen_music.ogg",
            goal_sound: "goal_sound.ogg",
            game_end_sound: "gameend.ogg",
            font: "cartoon.ttf",
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of an asset filename under the catalog root
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_modes() {
        assert_eq!(GameMode::from_digit(1), Some(GameMode::Tennis));
        assert_eq!(GameMode::from_digit(2), Some(GameMode::TableTennis));
        assert_eq!(GameMode::from_digit(3), Some(GameMode::AirHockey));
        assert_eq!(GameMode::from_digit(0), None);
        assert_eq!(GameMode::from_digit(4), None);
    }

    #[test]
    fn test_bundles_are_distinct() {
        let bundles: Vec<_> = GameMode::ALL.iter().map(|m| m.bundle()).collect();
        for (i, a) in bundles.iter().enumerate() {
            for b in &bundles[i + 1..] {
                assert_ne!(a.background, b.background);
                assert_ne!(a.collision_sound, b.collision_sound);
            }
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = GameMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["Tennis", "Table Tennis", "Air Hockey"]);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, mode) in GameMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn test_catalog_paths() {
        let catalog = AssetCatalog::new("assets");
        assert_eq!(
            catalog.path(catalog.font),
            PathBuf::from("assets").join("cartoon.ttf")
        );
        assert_eq!(catalog.instructions.len(), INSTRUCTION_PAGES);
    }
}
