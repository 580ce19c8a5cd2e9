//! Terminal runner (default binary).
//!
//! Drives one [`GameSession`] from a fixed-step frame loop: key input first,
//! then held-key repeats, then the session clock. Renders through the
//! framebuffer-based terminal renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetramino::core::{GameConfig, GameSession, SessionState};
use tetramino::input::{key_action, should_quit, InputHandler};
use tetramino::records::{unix_now, Records, RecordsConfig};
use tetramino::term::{FrameBuffer, GameView, RecordsView, TerminalRenderer, Viewport};
use tetramino::types::{GameAction, GameEvent, TICK_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let records_config = RecordsConfig::from_env();
    let mut log = Vec::new();
    let records = if records_config.enabled {
        match Records::load_existing(&records_config.path) {
            Ok(records) => records.unwrap_or_default(),
            Err(err) => {
                log.push(format!("[records] starting empty: {err:#}"));
                Records::default()
            }
        }
    } else {
        Records::default()
    };

    let mut app = App {
        session: GameSession::new(config),
        input: InputHandler::new(),
        records,
        records_config,
        log,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    for line in &app.log {
        eprintln!("{line}");
    }
    result
}

struct App {
    session: GameSession,
    input: InputHandler,
    records: Records,
    records_config: RecordsConfig,
    /// Lines printed to stderr once the alternate screen is gone.
    log: Vec<String>,
}

impl App {
    fn apply(&mut self, action: GameAction) {
        if self.session.apply_action(action) {
            match action {
                GameAction::Pause => {
                    self.input
                        .set_paused(self.session.state() == SessionState::Paused);
                }
                GameAction::Start | GameAction::Restart => self.input.reset(),
                _ => {}
            }
        }
    }

    fn handle_events(&mut self) {
        for ev in self.session.drain_events() {
            if ev == GameEvent::GameOver {
                self.input.reset();
                self.record_game();
            }
        }
    }

    fn record_game(&mut self) {
        let Some(stats) = self.session.final_stats() else {
            return;
        };
        if let Some(rank) = self.records.record(&stats, unix_now()) {
            self.log.push(format!(
                "[records] new high score #{}: {}",
                rank + 1,
                stats.score
            ));
        }
        if !self.records_config.enabled {
            return;
        }
        // Persistence failures never interrupt play.
        if let Err(err) = self.records.save(&self.records_config.path) {
            self.log.push(format!("[records] save failed: {err:#}"));
        }
    }

    fn records_view(&self) -> RecordsView {
        RecordsView {
            best_score: self.records.best_score(),
            games_played: self.records.lifetime.games,
        }
    }
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    if term.key_release_events() {
        // Real releases arrive; no need to guess them from silence.
        app.input = InputHandler::new().with_key_release_timeout_ms(u32::MAX);
    } else {
        app.log.push(format!(
            "[term] no key release events; held keys release after {}ms of silence",
            app.input.key_release_timeout_ms()
        ));
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = app.session.snapshot();
        let records = app.records_view();
        view.render_into_with_records(&snap, Some(&records), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = app.input.handle_key_press(key.code) {
                            app.apply(action);
                        } else if let Some(action) = key_action(key, app.session.state()) {
                            match action {
                                // Held keys belong to the input handler.
                                GameAction::MoveLeft
                                | GameAction::MoveRight
                                | GameAction::FastDropOn => {}
                                _ => app.apply(action),
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Auto-repeat is timed by the input handler.
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = app.input.handle_key_release(key.code) {
                            app.apply(action);
                        }
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in app.input.update(TICK_MS) {
                app.apply(action);
            }
            app.session.tick(TICK_MS);
        }

        app.handle_events();
    }
}
