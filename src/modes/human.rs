use anyhow::{Context, Result};
use crossterm::{
    event::{
        Event, EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use futures::StreamExt;
use log::{debug, error, info};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Flex, Layout, Rect},
};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, GameEngine, GameState, StepOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::render::{PlayfieldView, Renderer};

/// Accepted frame rates
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 1_000;

/// Interactive play in the terminal.
///
/// `new` sets the game up, `run` drives one frame per timer tick until the
/// player quits and then restores the terminal.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_interval: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>, fps: u32) -> Self {
        let mut engine = match seed {
            Some(seed) => GameEngine::seeded(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine.new_game();

        Self {
            engine,
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::default(),
            frame_interval: frame_interval(fps),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        // Release events are only reported with the kitty keyboard protocol
        let enhanced = supports_keyboard_enhancement().unwrap_or(false);
        debug!("keyboard enhancement supported: {enhanced}");
        if enhanced {
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable key release reporting")?;
        }
        self.input_handler = InputHandler::new(enhanced);

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal even when the loop failed
        if let Err(err) = self.cleanup_terminal(&mut terminal, enhanced) {
            error!("failed to restore terminal: {err:#}");
            if result.is_ok() {
                return Err(err);
            }
        }

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(self.frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // One frame: input, simulation, draw
                _ = frame_timer.tick() => {
                    let now = Instant::now();
                    let delta = now - last_frame;
                    last_frame = now;

                    self.run_frame(delta);

                    terminal.draw(|frame| {
                        let area = centered(frame.area(), &self.state);
                        frame.render_widget(PlayfieldView::new(&self.state, &self.renderer), area);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit requested, final length {}", self.state.snake.len());
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if self.input_handler.handle_key_event(key) == KeyAction::Quit {
                self.should_quit = true;
            }
        }
    }

    fn run_frame(&mut self, delta: Duration) -> Option<StepOutcome> {
        let keys = self.input_handler.keys();
        let outcome = self.engine.frame(&mut self.state, delta, keys);
        self.input_handler.end_frame();
        outcome
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        enhanced: bool,
    ) -> Result<()> {
        if enhanced {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
                .context("Failed to restore keyboard flags")?;
        }
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Time between frames, with the rate kept in `MIN_FPS..=MAX_FPS`
fn frame_interval(fps: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(fps.clamp(MIN_FPS, MAX_FPS)))
}

/// Center the playfield view, shrinking it if the terminal is too small
fn centered(area: Rect, state: &GameState) -> Rect {
    let (width, height) = PlayfieldView::required_size(&state.playfield);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [view] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    view
}
