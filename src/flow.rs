//! Screen state machine
//!
//! Sequences the home screen, instruction pages and the match, and owns the
//! pause and game-over overlays. One `App::frame` call is one rendered frame.

use glam::Vec2;

use crate::consts::INSTRUCTION_PAGES;
use crate::mode::{AssetBundle, GameMode};
use crate::sim::{GameEvent, MatchConfig, MatchState, Rect, TickInput, tick};

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Instructions { page: usize },
    Playing,
    Paused,
    GameOver,
}

/// Actions that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectMode(GameMode),
    NextPage,
    PreviousPage,
    Confirm,
    TogglePause,
    MatchOver,
    Restart,
}

/// Keys pressed (edge-triggered) this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressedKeys {
    /// Digit key 1-3 on the home screen
    pub digit: Option<u8>,
    pub next_page: bool,
    pub previous_page: bool,
    pub confirm: bool,
    pub toggle_pause: bool,
    pub quit: bool,
}

/// Everything the window reported for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub dt: f32,
    pub close_requested: bool,
    pub pressed: PressedKeys,
    /// Held paddle keys
    pub held: TickInput,
    /// Pointer position if the primary button was pressed this frame
    pub click: Option<Vec2>,
}

/// Whether the main loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Game-over panel with its Restart and Quit buttons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOverPanel {
    pub panel: Rect,
    pub restart: Rect,
    pub quit: Rect,
}

impl GameOverPanel {
    pub const WIDTH: f32 = 400.0;
    pub const HEIGHT: f32 = 150.0;
    const BUTTON_WIDTH: f32 = 120.0;
    const BUTTON_HEIGHT: f32 = 40.0;

    /// Panel centred on a screen of the given size
    pub fn centered(screen_width: f32, screen_height: f32) -> Self {
        let x = (screen_width - Self::WIDTH) / 2.0;
        let y = (screen_height - Self::HEIGHT) / 2.0;
        Self {
            panel: Rect::new(x, y, Self::WIDTH, Self::HEIGHT),
            restart: Rect::new(x + 50.0, y + 60.0, Self::BUTTON_WIDTH, Self::BUTTON_HEIGHT),
            quit: Rect::new(x + 230.0, y + 60.0, Self::BUTTON_WIDTH, Self::BUTTON_HEIGHT),
        }
    }
}

/// Screen flow controller holding the chosen mode and the current match
pub struct App {
    screen: Screen,
    mode: GameMode,
    bundle: AssetBundle,
    config: MatchConfig,
    game: MatchState,
    panel: GameOverPanel,
    events: Vec<GameEvent>,
}

impl App {
    pub fn new(config: MatchConfig) -> Self {
        let mode = GameMode::default();
        Self {
            screen: Screen::Home,
            mode,
            bundle: mode.bundle(),
            panel: GameOverPanel::centered(config.screen_width, config.screen_height),
            game: MatchState::new(config.clone()),
            config,
            events: Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Assets of the selected mode (chosen when the mode changes)
    pub fn bundle(&self) -> &AssetBundle {
        &self.bundle
    }

    pub fn game(&self) -> &MatchState {
        &self.game
    }

    pub fn game_over_panel(&self) -> &GameOverPanel {
        &self.panel
    }

    /// Menu music plays until the match starts
    pub fn menu_music_active(&self) -> bool {
        matches!(self.screen, Screen::Home | Screen::Instructions { .. })
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Attempt a transition; returns false if the action does not apply
    pub fn transition(&mut self, action: Action) -> bool {
        let Some(next) = next_screen(self.screen, action) else {
            return false;
        };
        log::info!("{:?} --{:?}--> {:?}", self.screen, action, next);

        match action {
            Action::SelectMode(mode) => {
                self.mode = mode;
                self.bundle = mode.bundle();
                log::info!("Mode selected: {}", mode.label());
                self.events.push(GameEvent::ModeSelected(mode));
            }
            Action::Confirm => {
                self.game = MatchState::new(self.config.clone());
                self.events.push(GameEvent::MatchStarted);
            }
            Action::TogglePause => {
                self.events.push(if next == Screen::Paused {
                    GameEvent::Paused
                } else {
                    GameEvent::Resumed
                });
            }
            Action::Restart => {
                self.game.restart();
                self.events.extend(self.game.drain_events());
            }
            Action::NextPage | Action::PreviousPage | Action::MatchOver => {}
        }

        self.screen = next;
        true
    }

    /// Run one frame of the active screen
    pub fn frame(&mut self, input: &FrameInput) -> FrameOutcome {
        if input.close_requested {
            log::info!("Window closed");
            return FrameOutcome::Quit;
        }

        match self.screen {
            Screen::Home => {
                if let Some(mode) = input.pressed.digit.and_then(GameMode::from_digit) {
                    self.transition(Action::SelectMode(mode));
                }
                FrameOutcome::Continue
            }
            Screen::Instructions { .. } => {
                if input.pressed.next_page {
                    self.transition(Action::NextPage);
                }
                if input.pressed.previous_page {
                    self.transition(Action::PreviousPage);
                }
                if input.pressed.confirm {
                    self.transition(Action::Confirm);
                }
                FrameOutcome::Continue
            }
            Screen::Paused => {
                if input.pressed.toggle_pause {
                    self.transition(Action::TogglePause);
                    return self.match_frame(input);
                }
                if input.pressed.quit {
                    log::info!("Quit from pause menu");
                    return FrameOutcome::Quit;
                }
                FrameOutcome::Continue
            }
            Screen::Playing | Screen::GameOver => {
                if input.pressed.toggle_pause {
                    self.transition(Action::TogglePause);
                    return FrameOutcome::Continue;
                }
                self.match_frame(input)
            }
        }
    }

    /// Simulate the match, then handle the game-over buttons
    fn match_frame(&mut self, input: &FrameInput) -> FrameOutcome {
        tick(&mut self.game, &input.held, input.dt);
        self.events.extend(self.game.drain_events());

        if self.game.is_over() && self.screen == Screen::Playing {
            self.transition(Action::MatchOver);
        }

        if self.screen == Screen::GameOver {
            if let Some(point) = input.click {
                if self.panel.restart.contains(point) {
                    self.transition(Action::Restart);
                } else if self.panel.quit.contains(point) {
                    log::info!("Quit from game over panel");
                    return FrameOutcome::Quit;
                }
            }
        }

        FrameOutcome::Continue
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

/// Get next screen for a given action (if valid)
fn next_screen(screen: Screen, action: Action) -> Option<Screen> {
    let last_page = INSTRUCTION_PAGES - 1;
    match (screen, action) {
        (Screen::Home, Action::SelectMode(_)) => Some(Screen::Instructions { page: 0 }),

        // Pages clamp at both ends
        (Screen::Instructions { page }, Action::NextPage) => Some(Screen::Instructions {
            page: (page + 1).min(last_page),
        }),
        (Screen::Instructions { page }, Action::PreviousPage) => Some(Screen::Instructions {
            page: page.saturating_sub(1),
        }),
        (Screen::Instructions { .. }, Action::Confirm) => Some(Screen::Playing),

        (Screen::Playing, Action::TogglePause) => Some(Screen::Paused),
        (Screen::GameOver, Action::TogglePause) => Some(Screen::Paused),
        // Resuming a finished match lands back on the panel on the next tick
        (Screen::Paused, Action::TogglePause) => Some(Screen::Playing),

        (Screen::Playing, Action::MatchOver) => Some(Screen::GameOver),
        (Screen::GameOver, Action::Restart) => Some(Screen::Playing),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::sim::{MatchPhase, Score, Side};

    fn pressed(keys: PressedKeys) -> FrameInput {
        FrameInput {
            dt: FRAME_DT,
            pressed: keys,
            ..Default::default()
        }
    }

    fn idle() -> FrameInput {
        pressed(PressedKeys::default())
    }

    fn app_in_play(mode_digit: u8) -> App {
        let mut app = App::default();
        app.frame(&pressed(PressedKeys {
            digit: Some(mode_digit),
            ..Default::default()
        }));
        app.frame(&pressed(PressedKeys {
            confirm: true,
            ..Default::default()
        }));
        assert_eq!(app.screen(), Screen::Playing);
        app
    }

    #[test]
    fn test_initial_screen() {
        let app = App::default();
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.menu_music_active());
    }

    #[test]
    fn test_mode_selection_picks_bundle() {
        let mut app = App::default();
        app.frame(&pressed(PressedKeys {
            digit: Some(3),
            ..Default::default()
        }));
        assert_eq!(app.screen(), Screen::Instructions { page: 0 });
        assert_eq!(app.mode(), GameMode::AirHockey);
        assert_eq!(*app.bundle(), GameMode::AirHockey.bundle());
        assert_eq!(app.drain_events(), vec![GameEvent::ModeSelected(GameMode::AirHockey)]);
    }

    #[test]
    fn test_unbound_digit_stays_home() {
        let mut app = App::default();
        app.frame(&pressed(PressedKeys {
            digit: Some(9),
            ..Default::default()
        }));
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn test_instruction_pages_clamp() {
        let mut app = App::default();
        app.transition(Action::SelectMode(GameMode::Tennis));

        app.frame(&pressed(PressedKeys {
            previous_page: true,
            ..Default::default()
        }));
        assert_eq!(app.screen(), Screen::Instructions { page: 0 });

        for _ in 0..10 {
            app.frame(&pressed(PressedKeys {
                next_page: true,
                ..Default::default()
            }));
        }
        assert_eq!(app.screen(), Screen::Instructions { page: 4 });
    }

    #[test]
    fn test_confirm_starts_fresh_match() {
        let mut app = app_in_play(2);
        assert!(!app.menu_music_active());
        assert_eq!(app.game().score, Score::default());
        assert!(app.drain_events().contains(&GameEvent::MatchStarted));
    }

    #[test]
    fn test_pause_freezes_match() {
        let mut app = app_in_play(1);
        app.frame(&pressed(PressedKeys {
            toggle_pause: true,
            ..Default::default()
        }));
        assert_eq!(app.screen(), Screen::Paused);

        let ball = app.game().ball.clone();
        for _ in 0..50 {
            app.frame(&idle());
        }
        assert_eq!(app.game().ball, ball);

        app.frame(&pressed(PressedKeys {
            toggle_pause: true,
            ..Default::default()
        }));
        assert_eq!(app.screen(), Screen::Playing);
        assert_ne!(app.game().ball, ball);
    }

    #[test]
    fn test_quit_only_while_paused() {
        let mut app = app_in_play(1);
        let quit = pressed(PressedKeys {
            quit: true,
            ..Default::default()
        });
        assert_eq!(app.frame(&quit), FrameOutcome::Continue);

        app.transition(Action::TogglePause);
        assert_eq!(app.frame(&quit), FrameOutcome::Quit);
    }

    #[test]
    fn test_close_requested_quits_anywhere() {
        let close = FrameInput {
            close_requested: true,
            ..Default::default()
        };
        let mut home = App::default();
        assert_eq!(home.frame(&close), FrameOutcome::Quit);

        let mut instructions = App::default();
        instructions.transition(Action::SelectMode(GameMode::Tennis));
        instructions.transition(Action::NextPage);
        assert_eq!(instructions.screen(), Screen::Instructions { page: 1 });
        assert_eq!(instructions.frame(&close), FrameOutcome::Quit);

        let mut playing = app_in_play(1);
        assert_eq!(playing.frame(&close), FrameOutcome::Quit);

        let mut paused = app_in_play(2);
        paused.transition(Action::TogglePause);
        assert_eq!(paused.screen(), Screen::Paused);
        assert_eq!(paused.frame(&close), FrameOutcome::Quit);

        let mut game_over = app_in_play(3);
        game_over.game.score = Score { player1: 0, player2: 7 };
        game_over.frame(&idle());
        assert_eq!(game_over.screen(), Screen::GameOver);
        assert_eq!(game_over.frame(&close), FrameOutcome::Quit);
    }

    #[test]
    fn test_game_over_panel_layout() {
        let panel = GameOverPanel::centered(1200.0, 800.0);
        assert_eq!(panel.panel, Rect::new(400.0, 325.0, 400.0, 150.0));
        assert_eq!(panel.restart, Rect::new(450.0, 385.0, 120.0, 40.0));
        assert_eq!(panel.quit, Rect::new(630.0, 385.0, 120.0, 40.0));
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut app = App::default();
        assert!(!app.transition(Action::Confirm));
        assert!(!app.transition(Action::Restart));
        assert!(!app.transition(Action::TogglePause));
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn test_pause_during_game_over_returns_to_panel() {
        let mut app = app_in_play(1);
        app.game.score = Score { player1: 7, player2: 0 };
        app.frame(&idle());
        assert_eq!(app.screen(), Screen::GameOver);
        assert_eq!(app.game().phase, MatchPhase::GameOver { winner: Side::Left });

        let toggle = pressed(PressedKeys {
            toggle_pause: true,
            ..Default::default()
        });
        app.frame(&toggle);
        assert_eq!(app.screen(), Screen::Paused);
        app.frame(&toggle);
        assert_eq!(app.screen(), Screen::GameOver);
    }

    fn click(x: f32, y: f32) -> FrameInput {
        FrameInput {
            dt: FRAME_DT,
            click: Some(Vec2::new(x, y)),
            ..Default::default()
        }
    }

    /// Feed the ball into the right goal whenever it is in play
    fn play_until_over(app: &mut App) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..10_000 {
            if app.game().ball_active() {
                app.game.ball.pos = Vec2::new(1199.0, 100.0);
                app.game.ball.vel = Vec2::new(600.0, 0.0);
            }
            app.frame(&idle());
            events.extend(app.drain_events());
            if app.screen() == Screen::GameOver {
                break;
            }
        }
        events
    }

    #[test]
    fn test_seven_goals_end_the_match() {
        let mut app = app_in_play(1);
        app.drain_events();
        let events = play_until_over(&mut app);

        assert_eq!(app.screen(), Screen::GameOver);
        assert_eq!(app.game().score, Score { player1: 7, player2: 0 });
        let goals = events.iter().filter(|e| matches!(e, GameEvent::Goal { .. })).count();
        let overs = events.iter().filter(|e| matches!(e, GameEvent::MatchOver { .. })).count();
        assert_eq!(goals, 7);
        assert_eq!(overs, 1);
    }

    #[test]
    fn test_restart_button_resets_match() {
        let mut app = app_in_play(2);
        play_until_over(&mut app);

        assert_eq!(app.frame(&click(500.0, 400.0)), FrameOutcome::Continue);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.mode(), GameMode::TableTennis);
        assert_eq!(app.game().score, Score::default());
        assert!(app.game().ball_active());
        assert_eq!(app.game().ball.pos, app.game().config.ball_center_position());
        assert!(app.drain_events().contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_quit_button_and_missed_clicks() {
        let mut app = app_in_play(1);
        play_until_over(&mut app);

        assert_eq!(app.frame(&click(20.0, 20.0)), FrameOutcome::Continue);
        assert_eq!(app.screen(), Screen::GameOver);
        assert_eq!(app.frame(&click(700.0, 400.0)), FrameOutcome::Quit);
    }

    #[test]
    fn test_clicks_ignored_while_playing() {
        let mut app = app_in_play(1);
        let score = app.game().score;
        assert_eq!(app.frame(&click(700.0, 400.0)), FrameOutcome::Continue);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.game().score, score);
    }
}
