use std::time::{Duration, Instant};

use crossterm::event::{self, Event};

/// Events produced by the [`EventLoop`].
#[derive(Debug)]
pub(super) enum TuiEvent {
    /// Advance game time by the measured elapsed duration.
    Tick(Duration),
    /// Redraw the screen.
    Render,
    /// A terminal event to hand to the application.
    Crossterm(Event),
}

/// Tick/render/input multiplexer.
///
/// Ticks fire on a fixed cadence and carry the measured time since the
/// previous tick, which can exceed the cadence when a frame runs long.
/// Renders are dirty-driven: terminal events always mark the screen
/// dirty, ticks only through [`mark_dirty`](Self::mark_dirty).
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    last_tick: Instant,
    dirty: bool,
}

impl EventLoop {
    /// Creates an event loop ticking `tick_rate` times per second.
    pub(super) fn new(tick_rate: f64) -> Self {
        Self {
            tick_interval: Duration::from_secs_f64(1.0 / tick_rate),
            last_tick: Instant::now(),
            dirty: true, // initial render is required on startup
        }
    }

    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the next event.
    ///
    /// Blocks until the tick time is reached or a crossterm event occurs,
    /// whichever comes first.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            let since_tick = now.duration_since(self.last_tick);
            if since_tick >= self.tick_interval {
                self.last_tick = now;
                return Ok(TuiEvent::Tick(since_tick));
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let timeout = (self.last_tick + self.tick_interval).saturating_duration_since(now);
            if event::poll(timeout)? {
                self.dirty = true;
                return Ok(TuiEvent::Crossterm(event::read()?));
            }
        }
    }
}
