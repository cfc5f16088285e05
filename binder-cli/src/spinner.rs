//! Spinner shown while a blocking store call is in flight.

use std::borrow::Cow;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub(crate) struct Spinner {
    hidden: bool,
    style: Option<ProgressStyle>,
}

impl Spinner {
    /// When `hidden` is true nothing is drawn (quiet mode, local store).
    pub(crate) fn new(hidden: bool) -> Self {
        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .ok()
            .map(|s| s.tick_chars("/-\\|"));
        Self { hidden, style }
    }

    /// Run `f` with the spinner ticking, then clear the line.
    pub(crate) fn run<T>(&self, msg: impl Into<Cow<'static, str>>, f: impl FnOnce() -> T) -> T {
        let pb = if self.hidden {
            ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new_spinner()
        };
        if let Some(style) = &self.style {
            pb.set_style(style.clone());
        }
        pb.set_message(msg);
        pb.enable_steady_tick(Duration::from_millis(100));

        let out = f();

        pb.disable_steady_tick();
        pb.finish_and_clear();
        out
    }
}
