use std::sync::Arc;
use std::time::Duration;

use dominator::{html, Dom};
use futures_signals::signal::Mutable;

use crate::runtime::{sleep, spawn_abortable, TaskHandle};

const TICK: Duration = Duration::from_secs(1);

/// Seconds left on a one-time passcode. Never goes below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Advances one second and reports whether the countdown has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_expired()
    }

    pub fn display(&self) -> String {
        format_remaining(self.remaining)
    }
}

/// `M:SS`, minutes unpadded.
pub fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Drives the timer text and the resend control of the OTP panel.
pub struct OtpTimer {
    duration_secs: u32,
    pub display: Mutable<String>,
    pub resend_enabled: Mutable<bool>,
    task: Mutable<Option<TaskHandle>>,
}

impl OtpTimer {
    pub fn new(duration_secs: u32) -> Arc<Self> {
        Arc::new(Self {
            duration_secs,
            display: Mutable::new(format_remaining(duration_secs)),
            resend_enabled: Mutable::new(false),
            task: Mutable::new(None),
        })
    }

    /// Restarts from the full duration, cancelling any countdown already running.
    pub fn start(self: &Arc<Self>) {
        self.stop();

        let mut countdown = Countdown::new(self.duration_secs);
        self.display.set(countdown.display());

        if countdown.is_expired() {
            self.resend_enabled.set_neq(true);
            return;
        }
        self.resend_enabled.set_neq(false);

        log::debug!("OTP timer started at {}", countdown.display());
        let timer = self.clone();
        let task = spawn_abortable(async move {
            loop {
                sleep(TICK).await;
                let expired = countdown.tick();
                timer.display.set(countdown.display());
                if expired {
                    log::debug!("OTP timer expired, resend enabled");
                    timer.resend_enabled.set_neq(true);
                    timer.task.set(None);
                    break;
                }
            }
        });
        self.task.set(Some(task));
    }

    pub fn stop(&self) {
        if let Some(task) = self.task.replace(None) {
            task.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.lock_ref().is_some()
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        html!("span", {
            .attribute("id", "timer")
            .class("otp-timer")
            .text_signal(self.display.signal_cloned())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tokio::task::LocalSet;

    #[rstest]
    #[case(600, "10:00")]
    #[case(599, "9:59")]
    #[case(61, "1:01")]
    #[case(60, "1:00")]
    #[case(9, "0:09")]
    #[case(0, "0:00")]
    fn formats_minutes_and_padded_seconds(#[case] seconds: u32, #[case] expected: &str) {
        assert_eq!(format_remaining(seconds), expected);
    }

    #[test]
    fn countdown_stops_at_zero() {
        let mut countdown = Countdown::new(600);
        for _ in 0..599 {
            assert!(!countdown.tick());
        }
        assert_eq!(countdown.display(), "0:01");
        assert!(countdown.tick());
        assert_eq!(countdown.display(), "0:00");
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn runs_down_and_enables_resend() {
        LocalSet::new()
            .run_until(async {
                let timer = OtpTimer::new(600);
                timer.start();
                assert_eq!(timer.display.get_cloned(), "10:00");
                assert!(!timer.resend_enabled.get());
                assert!(timer.is_running());

                sleep(Duration::from_millis(1500)).await;
                assert_eq!(timer.display.get_cloned(), "9:59");

                sleep(Duration::from_secs(598)).await;
                assert_eq!(timer.display.get_cloned(), "0:01");
                assert!(!timer.resend_enabled.get());

                sleep(Duration::from_secs(1)).await;
                assert_eq!(timer.display.get_cloned(), "0:00");
                assert!(timer.resend_enabled.get());
                assert!(!timer.is_running());

                sleep(Duration::from_secs(5)).await;
                assert_eq!(timer.display.get_cloned(), "0:00");
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_running_countdown() {
        LocalSet::new()
            .run_until(async {
                let timer = OtpTimer::new(600);
                timer.start();
                sleep(Duration::from_millis(5500)).await;
                assert_eq!(timer.display.get_cloned(), "9:55");

                timer.start();
                assert_eq!(timer.display.get_cloned(), "10:00");

                // The first countdown would have expired at 600s.
                sleep(Duration::from_millis(594_700)).await;
                assert_eq!(timer.display.get_cloned(), "0:06");
                assert!(!timer.resend_enabled.get());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn stop_freezes_display() {
        LocalSet::new()
            .run_until(async {
                let timer = OtpTimer::new(120);
                timer.start();
                sleep(Duration::from_millis(2500)).await;
                timer.stop();
                sleep(Duration::from_secs(10)).await;

                assert_eq!(timer.display.get_cloned(), "1:58");
                assert!(!timer.is_running());
                assert!(!timer.resend_enabled.get());
            })
            .await;
    }

    #[tokio::test]
    async fn zero_duration_expires_immediately() {
        let timer = OtpTimer::new(0);
        timer.start();
        assert_eq!(timer.display.get_cloned(), "0:00");
        assert!(timer.resend_enabled.get());
        assert!(!timer.is_running());
    }
}
