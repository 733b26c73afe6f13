//! Cross-platform run clock
//!
//! `std::time::Instant::now()` panics with "time not implemented on this
//! platform" on `wasm32`, so the run clock falls back to
//! `js_sys::Date::now()` there.

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::time::Instant;

    #[derive(Debug, Clone)]
    pub struct RunClock {
        started: Instant,
    }

    impl RunClock {
        pub fn start() -> Self {
            Self {
                started: Instant::now(),
            }
        }

        pub fn elapsed_ms(&self) -> f64 {
            self.started.elapsed().as_secs_f64() * 1000.0
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    #[derive(Debug, Clone)]
    pub struct RunClock {
        started_ms: f64,
    }

    impl RunClock {
        pub fn start() -> Self {
            Self {
                started_ms: js_sys::Date::now(),
            }
        }

        pub fn elapsed_ms(&self) -> f64 {
            js_sys::Date::now() - self.started_ms
        }
    }
}

pub use imp::RunClock;
