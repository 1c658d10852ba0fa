use std::sync::{Arc, Mutex};

use github_scm_connector::config::GitHubConfig;
use github_scm_connector::github::GitHubClient;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

pub const TEST_TOKEN: &str = "test-token";

pub fn test_config(api_url: &str) -> GitHubConfig {
    GitHubConfig {
        api_url: api_url.to_string(),
        ..GitHubConfig::default()
    }
}

pub fn test_client(config: GitHubConfig) -> GitHubClient {
    GitHubClient::new(config).expect("failed to build client")
}

/// Captures log messages emitted while a test runs, so tests can check
/// which level an event was routed to.
#[derive(Clone, Default)]
pub struct LogSpy {
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

impl LogSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }

    pub fn count_at(&self, level: Level) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for LogSpy {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.records
                .lock()
                .unwrap()
                .push((*event.metadata().level(), message));
        }
    }
}
