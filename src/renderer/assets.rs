//! Textures and font, loaded once at startup and freed on drop

use std::collections::HashMap;

use raylib::prelude::*;

use crate::error::{Error, Result};
use crate::mode::{AssetCatalog, GameMode};

pub struct Assets {
    home: Texture2D,
    instructions: Vec<Texture2D>,
    /// Per-mode textures keyed by filename
    textures: HashMap<&'static str, Texture2D>,
    font: Font,
}

impl Assets {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, catalog: &AssetCatalog) -> Result<Self> {
        let mut texture = |file: &str| -> Result<Texture2D> {
            let path = catalog.path(file);
            rl.load_texture(thread, &path.to_string_lossy())
                .map_err(|e| Error::asset(&path, e))
        };

        let home = texture(catalog.home_screen)?;
        let instructions = catalog
            .instructions
            .iter()
            .map(|file| texture(*file))
            .collect::<Result<Vec<_>>>()?;

        let mut textures = HashMap::new();
        for mode in GameMode::ALL {
            let bundle = mode.bundle();
            for file in [bundle.background, bundle.paddle, bundle.ball] {
                textures.insert(file, texture(file)?);
            }
        }

        let font_path = catalog.path(catalog.font);
        let font = rl
            .load_font(thread, &font_path.to_string_lossy())
            .map_err(|e| Error::asset(&font_path, e))?;

        log::info!(
            "Loaded {} textures from {}",
            textures.len() + instructions.len() + 1,
            catalog.root().display()
        );

        Ok(Self {
            home,
            instructions,
            textures,
            font,
        })
    }

    pub fn home(&self) -> &Texture2D {
        &self.home
    }

    pub fn instruction_page(&self, page: usize) -> Option<&Texture2D> {
        self.instructions.get(page)
    }

    /// Texture loaded from `file`, if it belongs to a mode bundle
    pub fn texture(&self, file: &str) -> Option<&Texture2D> {
        self.textures.get(file)
    }

    pub fn font(&self) -> &Font {
        &self.font
    }
}
