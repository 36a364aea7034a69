/// The event loop: draw, wait for input, translate keys into intents.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::game::engine::{GameEngine, Intent, Notice};
use crate::ui;

/// How long a transient notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(3);

pub struct App {
    engine: GameEngine,
    notice: Option<(String, Instant)>,
}

impl App {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            notice: None,
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut events = EventStream::new();

        loop {
            if let Some((_, shown_at)) = &self.notice {
                if shown_at.elapsed() >= NOTICE_TTL {
                    self.notice = None;
                }
            }

            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.engine,
                    self.notice.as_ref().map(|(text, _)| text.as_str()),
                )
            })?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if !self.handle_key(key) {
                                break;
                            }
                        }
                        // Resizes and other events just trigger a redraw.
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }

                // Periodic wake so expired notices disappear without input.
                _ = tokio::time::sleep(Duration::from_millis(250)) => {}
            }
        }

        Ok(())
    }

    /// Returns false when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let intent = match key.code {
            KeyCode::Esc => return false,
            KeyCode::Char('n') | KeyCode::Char('N')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(Intent::NewRound)
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Intent::Select(c)),
            KeyCode::Enter => Some(Intent::Submit),
            KeyCode::Tab => Some(Intent::Hint),
            _ => None,
        };

        if let Some(intent) = intent {
            debug!(?intent, "dispatching intent");
            if matches!(intent, Intent::NewRound) {
                self.notice = None;
            }
            for notice in self.engine.apply(intent) {
                self.show(notice);
            }
        }
        true
    }

    fn show(&mut self, notice: Notice) {
        let text = match notice {
            Notice::HintUnavailable => "Hint not available".to_string(),
            Notice::HintExhausted => "No more hints available".to_string(),
            Notice::Won => "You Win!".to_string(),
            Notice::Lost { word } => format!("You Lose! The word was {word}"),
        };
        self.notice = Some((text, Instant::now()));
    }
}
