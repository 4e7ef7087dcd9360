//! Graceful-shutdown signal for the auth server.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::signal;
use tokio::sync::Notify;

/// Completes on ctrl-c, SIGTERM, or a programmatic trigger.
pub struct ShutdownSignal {
    shutdown: AtomicBool,
    notify: Notify,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self {
            shutdown: AtomicBool::new(false),
            notify: Notify::new(),
        }
    }

    pub async fn wait(&self) {
        if self.is_shutdown() {
            return;
        }

        #[cfg(unix)]
        {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = signal::ctrl_c() => {},
                        _ = sigterm.recv() => {},
                        _ = self.notify.notified() => {},
                    }
                }
                Err(_) => {
                    tokio::select! {
                        _ = signal::ctrl_c() => {},
                        _ = self.notify.notified() => {},
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = self.notify.notified() => {},
            }
        }

        self.shutdown.store(true, Ordering::SeqCst);
    }

    pub fn trigger(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
