//! Pongiverse entry point
//!
//! Opens the window, loads assets and runs the frame loop.

use std::process::ExitCode;

use raylib::core::audio::RaylibAudio;

use pongiverse::audio::{Mixer, SoundBank, SoundEffect};
use pongiverse::renderer::{self, Assets};
use pongiverse::{App, AssetCatalog, Error, FrameOutcome, Settings, platform};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pongiverse starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> pongiverse::Result<()> {
    let settings = Settings::load()?;
    let rules = settings.rules.clone();

    let (mut rl, thread) = raylib::init()
        .size(rules.screen_width as i32, rules.screen_height as i32)
        .title(&settings.window_title)
        .build();
    rl.set_target_fps(settings.target_fps);

    let audio = RaylibAudio::init_audio_device().map_err(|e| Error::Audio(format!("{e:?}")))?;
    let catalog = AssetCatalog::new(&settings.asset_dir);
    let assets = Assets::load(&mut rl, &thread, &catalog)?;
    let mut sounds = SoundBank::load(&audio, &catalog, Mixer::from_settings(&settings))?;

    let mut app = App::new(rules);
    loop {
        sounds.update_music(app.menu_music_active());

        let input = platform::poll(&rl);
        let outcome = app.frame(&input);
        for event in app.drain_events() {
            if let Some(effect) = SoundEffect::for_event(&event, app.mode()) {
                sounds.play(effect);
            }
        }
        if outcome == FrameOutcome::Quit {
            break;
        }

        let mut d = rl.begin_drawing(&thread);
        renderer::draw(&mut d, &app, &assets);
    }

    log::info!("Pongiverse exiting");
    Ok(())
}
