#[cfg(target_arch = "wasm32")]
use js_sys;

/// Wall-clock reading, wasm or native.
#[derive(Clone, Copy)]
struct Stamp {
    #[cfg(target_arch = "wasm32")]
    ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    at: std::time::Instant,
}

impl Stamp {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Stamp { ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Stamp { at: std::time::Instant::now() }
        }
    }

    fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.at.elapsed().as_secs_f64() * 1000.0
        }
    }
}

#[derive(Clone, Copy)]
enum State {
    Idle,
    Running(Stamp),
    Stopped(f64),
}

/// The run timer. Armed by the first move of a run, frozen by the win,
/// back to idle on reset.
pub(super) struct RunClock {
    state: State,
}

impl RunClock {
    pub(super) fn new() -> Self {
        RunClock { state: State::Idle }
    }

    pub(super) fn reset(&mut self) {
        self.state = State::Idle;
    }

    /// Arm the clock. Only the first call after a reset has an effect.
    pub(super) fn start(&mut self) {
        if let State::Idle = self.state {
            self.state = State::Running(Stamp::now());
        }
    }

    /// Freeze the elapsed time. No effect unless running.
    pub(super) fn stop(&mut self) {
        if let State::Running(stamp) = self.state {
            self.state = State::Stopped(stamp.elapsed_ms());
        }
    }

    /// Whether the clock has ever been armed this run.
    pub(super) fn started(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// 0 while idle, live while running, frozen once stopped.
    pub(super) fn elapsed_ms(&self) -> f64 {
        match self.state {
            State::Idle => 0.0,
            State::Running(stamp) => stamp.elapsed_ms(),
            State::Stopped(ms) => ms,
        }
    }
}
