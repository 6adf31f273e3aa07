//! Terminal front-end driving the search orchestrator.

mod input;
mod render;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use crate::backend::GithubBackend;
use crate::search::{self, DebounceSignal, Debouncer, SearchOrchestrator};
use crate::settings::ResolvedSettings;
use input::SearchInput;

/// Run the interactive search UI to completion.
pub fn run(settings: ResolvedSettings) -> Result<()> {
    let backend = GithubBackend::new(
        settings.endpoint.clone(),
        settings.token.clone(),
        settings.search.request_timeout,
    )
    .map_err(|err| anyhow!("failed to construct search backend: {err}"))?;

    let (command_tx, reply_rx, latest_generation) = search::spawn(Box::new(backend));
    let orchestrator =
        SearchOrchestrator::new(command_tx, reply_rx, latest_generation, &settings.search);
    let mut app = App::new(orchestrator, settings.search.debouncer(), &settings.initial_query);
    app.run()
}

/// Aggregate state of the terminal front-end.
pub(crate) struct App {
    pub(crate) orchestrator: SearchOrchestrator,
    pub(crate) debouncer: Debouncer,
    pub(crate) input: SearchInput,
    pub(crate) table_state: TableState,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) show_logs: bool,
}

impl App {
    pub(crate) fn new(
        orchestrator: SearchOrchestrator,
        debouncer: Debouncer,
        initial_query: &str,
    ) -> Self {
        let mut app = Self {
            orchestrator,
            debouncer,
            input: SearchInput::with_text(initial_query),
            table_state: TableState::default(),
            throbber_state: ThrobberState::default(),
            show_logs: false,
        };
        // A pre-populated query of sufficient length searches once
        // immediately, without the debounce delay.
        if let Some(signal) = app.debouncer.prime(initial_query) {
            app.apply_signal(signal);
        }
        app
    }

    /// Pump the terminal event loop until the user exits.
    pub(crate) fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(Duration::from_millis(50))? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let result: Result<()> = 'event_loop: loop {
            self.tick(Instant::now());

            terminal.draw(|frame| self.draw(frame))?;

            loop {
                match event_rx.try_recv() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            break 'event_loop Ok(());
                        }
                    }
                    Ok(_) => {}
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            thread::sleep(Duration::from_millis(16));
        };

        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }

    /// Advance time-driven state: apply incoming replies, emit a settled
    /// debounce term, keep the selection and spinner in step.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.orchestrator.pump();
        if let Some(signal) = self.debouncer.poll(now) {
            self.apply_signal(signal);
        }
        self.throbber_state.calc_next();
        self.clamp_selection();
    }

    /// Handle one key press; returns true when the app should exit.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('r') if ctrl => self.orchestrator.refetch(),
            KeyCode::Char('o') if ctrl => self.show_logs = !self.show_logs,
            KeyCode::Esc => {
                if self.input.is_empty() {
                    return true;
                }
                self.input.clear();
                self.apply_signal(DebounceSignal::Cleared);
                self.debouncer.cancel();
            }
            KeyCode::Enter => {
                // Explicit submit bypasses the debounce entirely.
                self.debouncer.cancel();
                self.orchestrator.search(self.input.text());
            }
            KeyCode::PageDown => self.orchestrator.load_more(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Backspace => {
                self.input.backspace();
                self.input_changed();
            }
            KeyCode::Delete => {
                self.input.delete();
                self.input_changed();
            }
            KeyCode::Char(ch) if !ctrl => {
                self.input.insert(ch);
                self.input_changed();
            }
            _ => {}
        }
        false
    }

    fn input_changed(&mut self) {
        if let Some(signal) = self.debouncer.on_change(self.input.text(), Instant::now()) {
            self.apply_signal(signal);
        }
    }

    fn apply_signal(&mut self, signal: DebounceSignal) {
        match signal {
            DebounceSignal::Cleared => self.orchestrator.search(""),
            DebounceSignal::Settled(term) => self.orchestrator.search(&term),
        }
    }

    fn select_previous(&mut self) {
        let selected = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(selected.saturating_sub(1)));
    }

    fn select_next(&mut self) {
        let len = self.orchestrator.snapshot().items.len();
        if len == 0 {
            return;
        }
        let selected = self.table_state.selected().map_or(0, |s| s + 1);
        self.table_state.select(Some(selected.min(len - 1)));
    }

    fn clamp_selection(&mut self) {
        let len = self.orchestrator.snapshot().items.len();
        match self.table_state.selected() {
            Some(_) if len == 0 => self.table_state.select(None),
            Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
            _ => {}
        }
    }
}
