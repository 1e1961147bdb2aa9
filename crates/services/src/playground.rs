//! Simulated code runner for `code` units.
//!
//! Nothing is compiled or executed. A run waits a fixed delay and then
//! reports the first `System.debug('...')` literal found in the source.

use std::time::Duration;

/// Output shown while a run is pending.
pub const RUNNING_LABEL: &str = "> Running...";

const DEBUG_OPEN: &str = "System.debug('";
const DEBUG_CLOSE: &str = "')";

/// Finished run output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutput {
    Debug(String),
    Success,
}

impl RunOutput {
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            RunOutput::Debug(literal) => format!("> DEBUG|{literal}\n> Success"),
            RunOutput::Success => "> Success: Executed.".to_owned(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlaygroundService {
    delay: Duration,
}

impl Default for PlaygroundService {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

impl PlaygroundService {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Compute the output immediately, without the delay.
    #[must_use]
    pub fn simulate(source: &str) -> RunOutput {
        match first_debug_literal(source) {
            Some(literal) if !literal.is_empty() => RunOutput::Debug(literal.to_owned()),
            _ => RunOutput::Success,
        }
    }

    /// Wait the configured delay, then report the simulated output.
    pub async fn run(&self, source: &str) -> RunOutput {
        tokio::time::sleep(self.delay).await;
        let output = Self::simulate(source);
        tracing::debug!(?output, "playground run finished");
        output
    }
}

/// First literal of a single-line `System.debug('...')` call.
fn first_debug_literal(source: &str) -> Option<&str> {
    let mut rest = source;
    while let Some(start) = rest.find(DEBUG_OPEN) {
        let after = &rest[start + DEBUG_OPEN.len()..];
        let line = after.split('\n').next().unwrap_or_default();
        if let Some(end) = line.find(DEBUG_CLOSE) {
            return Some(&line[..end]);
        }
        rest = &rest[start + 1..];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_literal_is_reported() {
        let out = PlaygroundService::simulate("System.debug('hi');");
        assert_eq!(out, RunOutput::Debug("hi".into()));
        assert_eq!(out.render(), "> DEBUG|hi\n> Success");
    }

    #[test]
    fn source_without_debug_succeeds() {
        let out = PlaygroundService::simulate("Integer x = 1;");
        assert_eq!(out.render(), "> Success: Executed.");
    }

    #[test]
    fn first_call_wins_and_stops_at_first_close() {
        let src = "System.debug('a') ; System.debug('b')";
        assert_eq!(PlaygroundService::simulate(src), RunOutput::Debug("a".into()));
    }

    #[test]
    fn call_spanning_lines_is_skipped() {
        let src = "System.debug('broken\n'); System.debug('ok');";
        assert_eq!(PlaygroundService::simulate(src), RunOutput::Debug("ok".into()));
    }

    #[test]
    fn empty_literal_counts_as_plain_success() {
        assert_eq!(
            PlaygroundService::simulate("System.debug('')"),
            RunOutput::Success
        );
    }

    #[tokio::test(start_paused = true)]
    async fn run_waits_for_the_delay() {
        let svc = PlaygroundService::default();
        let started = tokio::time::Instant::now();
        let out = svc.run("System.debug('x')").await;
        assert!(started.elapsed() >= Duration::from_millis(600));
        assert_eq!(out, RunOutput::Debug("x".into()));
    }
}
