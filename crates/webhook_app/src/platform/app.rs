use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use session_logging::{session_info, session_warn};
use webhook_core::{update, AppState, Msg};
use webhook_engine::EngineHandle;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{self, Command, HELP};
use super::ui::render;
use super::ui::viewport::{SentinelObserver, Viewport};

/// How long the loop waits for input before polling the engine again.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

enum Input {
    Line(String),
    Closed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::initialize(config.log_destination);
    session_info!("starting against {}", config.api.base_url);

    let engine = EngineHandle::new(config.api.clone()).context("failed to start engine")?;
    let (input_tx, input_rx) = mpsc::channel::<Input>();
    spawn_stdin_reader(input_tx)?;

    let mut session = Session::new(EffectRunner::new(engine), Viewport::new(config.page_rows));
    session.dispatch(Msg::Mounted);

    let mut out = io::stdout();
    writeln!(out, "{HELP}")?;
    loop {
        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Input::Line(line)) => match commands::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(out, "{HELP}")?,
                Ok(command) => session.handle_command(command),
                Err(problem) => writeln!(out, "?? {problem}")?,
            },
            Ok(Input::Closed) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        session.pump_engine();
        session.render_if_dirty(&mut out)?;
        session.report_visibility();
    }

    session.dispatch(Msg::Unmounted);
    session_info!("session closed");
    Ok(())
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                if input_tx.send(Input::Line(line)).is_err() {
                    return;
                }
            }
            let _ = input_tx.send(Input::Closed);
        })?;
    Ok(())
}

/// One browsing session: the core state plus everything that drives it.
struct Session {
    state: AppState,
    effects: EffectRunner,
    viewport: Viewport,
    sentinel: SentinelObserver,
    dispatch_seq: u64,
    /// Layout changed since the sentinel was last measured.
    visibility_stale: bool,
    force_render: bool,
}

impl Session {
    fn new(effects: EffectRunner, viewport: Viewport) -> Self {
        Self {
            state: AppState::new(),
            effects,
            viewport,
            sentinel: SentinelObserver::default(),
            dispatch_seq: 0,
            visibility_stale: false,
            force_render: false,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        self.dispatch_seq += 1;
        session_logging::set_dispatch_seq(self.dispatch_seq);

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let was_attached = self.sentinel.is_attached();
        self.effects.run(effects, &mut self.sentinel);
        if self.sentinel.is_attached() && !was_attached {
            self.visibility_stale = true;
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::ScrollDown(lines) => {
                let view = self.state.view();
                let line_count = view.rows.len() + usize::from(view.show_sentinel);
                self.viewport.scroll_down(lines, line_count);
                self.scrolled();
            }
            Command::ScrollUp(lines) => {
                self.viewport.scroll_up(lines);
                self.scrolled();
            }
            Command::Toggle(id) => self.dispatch(Msg::WebhookToggled(id)),
            Command::Generate => self.dispatch(Msg::GenerateClicked),
            Command::Copy => self.dispatch(Msg::CopyClicked),
            Command::Dismiss => self.dispatch(Msg::DismissClicked),
            Command::LoadMore => self.dispatch(Msg::LoadMoreRequested),
            Command::Help | Command::Quit => {}
        }
    }

    fn scrolled(&mut self) {
        // Scrolling changes what is on screen without touching the core.
        self.visibility_stale = true;
        self.force_render = true;
    }

    fn pump_engine(&mut self) {
        while let Some(msg) = self.effects.try_recv() {
            if let Msg::PageFailed { reason, .. } = &msg {
                session_warn!("page load failed: {}", reason);
            }
            self.dispatch(msg);
        }
    }

    fn render_if_dirty(&mut self, out: &mut impl Write) -> io::Result<()> {
        let dirty = self.state.consume_dirty();
        let forced = std::mem::take(&mut self.force_render);
        if !dirty && !forced {
            return Ok(());
        }
        let view = self.state.view();
        for line in render::render(&view, &self.viewport) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        self.visibility_stale = true;
        Ok(())
    }

    /// Feeds the sentinel's current visibility back into the core after the
    /// layout changed.
    fn report_visibility(&mut self) {
        if !std::mem::take(&mut self.visibility_stale) {
            return;
        }
        let row_count = self.state.view().rows.len();
        if let Some(ratio) = self.sentinel.measure(&self.viewport, row_count) {
            self.dispatch(Msg::SentinelVisibility { ratio });
        }
    }
}
