use std::sync::Mutex;

/// Performs full-page navigation on behalf of the session
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// Navigator for headless use: only logs the target
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, location: &str) {
        tracing::info!("Navigating to {}", location);
    }
}

/// Remembers every navigation, for embedders that poll instead of redirecting
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.visited
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(location.to_string());
    }
}
