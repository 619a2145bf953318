mod logging;
mod ui;

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
};
use ratatui::{DefaultTerminal, Frame};
use skyfall_background::{FrameClock, Stage};
use skyfall_config::{Config, LinkConfig};

/// How often to wake up for input while frames are paused.
const PAUSED_POLL: Duration = Duration::from_millis(250);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init(&config)?;

    let terminal = ratatui::init();
    execute!(io::stdout(), EnableFocusChange)?;
    let result = App::new(config).run(terminal);
    let _ = execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Something other than a frame changed since the last draw.
    dirty: bool,
    /// Speed, background selection and the mounted backdrop.
    stage: Stage,
    /// Frame pacing.
    clock: FrameClock,
    /// Stop animating while the terminal is unfocused.
    pause_when_unfocused: bool,
    /// Heading text.
    title: String,
    /// Link shown under the heading.
    link: LinkConfig,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let stage = Stage::new(
            config.background,
            config.initial_speed(),
            config.cell,
            config.seed,
        );
        Self {
            running: false,
            dirty: true,
            stage,
            clock: FrameClock::new(config.frame_interval(), Instant::now()),
            pause_when_unfocused: config.pause_when_unfocused,
            title: config.title,
            link: config.link,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.stage.resize(size.width, size.height);

        self.running = true;
        while self.running {
            let frame_due = self.clock.take_due(Instant::now());
            if frame_due {
                self.stage.tick();
            }
            if frame_due || self.dirty {
                terminal.draw(|frame| self.render(frame))?;
                self.dirty = false;
            }
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface: backdrop first, content on top.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(&self.stage, area);
        ui::render_foreground(frame, area, &self.title, &self.link, &self.stage);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .clock
            .timeout(Instant::now())
            .unwrap_or(PAUSED_POLL);
        if event::poll(timeout)? {
            self.on_event(event::read()?);
        }
        Ok(())
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Resize(cols, rows) => self.stage.resize(cols, rows),
            Event::FocusLost if self.pause_when_unfocused => {
                log::debug!("focus lost, pausing frames");
                self.clock.pause();
            }
            Event::FocusGained => self.clock.resume(Instant::now()),
            _ => return,
        }
        self.dirty = true;
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m') | KeyCode::Char(' ') | KeyCode::Tab) => {
                self.stage.toggle_background()
            }
            (_, KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_')) => self.stage.slower(),
            (_, KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=')) => self.stage.faster(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
