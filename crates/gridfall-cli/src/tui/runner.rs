use std::io;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, terminal,
};

use crate::tui::{
    App,
    event_loop::{EventLoop, TuiEvent},
};

/// TUI application runtime.
///
/// Manages the event loop and executes applications that implement the
/// [`App`] trait inside ratatui's terminal lifecycle. Mouse capture is
/// always enabled for gesture input; key-release reporting is enabled
/// when the terminal supports the keyboard enhancement protocol.
#[derive(Debug)]
pub struct Tui {
    events: EventLoop,
    key_release_supported: bool,
}

impl Tui {
    /// Creates a new Tui ticking `tick_rate` times per second.
    pub fn new(tick_rate: f64) -> Self {
        Self {
            events: EventLoop::new(tick_rate),
            key_release_supported: false,
        }
    }

    /// Whether the terminal reports key releases (kitty keyboard
    /// protocol). Only meaningful once `run()` has set the terminal up;
    /// apps read it from `App::init`.
    pub fn supports_key_release(&self) -> bool {
        self.key_release_supported
    }

    /// Runs the application.
    ///
    /// 1. Sets the terminal up and probes its capabilities
    /// 2. Calls `app.init()`
    /// 3. Runs the event loop until `app.should_exit()` returns true
    ///    - `TuiEvent::Tick`: calls `app.update()`, marking the screen
    ///      dirty when it reports a change
    ///    - `TuiEvent::Render`: calls `app.draw()`
    ///    - `TuiEvent::Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            self.key_release_supported =
                terminal::supports_keyboard_enhancement().unwrap_or(false);

            execute!(io::stdout(), EnableMouseCapture)?;
            if self.key_release_supported {
                execute!(
                    io::stdout(),
                    PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
                )?;
            }

            app.init(&self);
            let result = self.event_loop(terminal, app);

            if self.key_release_supported {
                execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            }
            execute!(io::stdout(), DisableMouseCapture)?;

            result
        })
    }

    fn event_loop<A>(
        &mut self,
        terminal: &mut ratatui::DefaultTerminal,
        app: &mut A,
    ) -> anyhow::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.events.next()? {
                TuiEvent::Tick(elapsed) => {
                    if app.update(elapsed) {
                        self.events.mark_dirty();
                    }
                }
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Crossterm(event) => {
                    app.handle_event(&event);
                }
            }
        }
        Ok(())
    }
}
