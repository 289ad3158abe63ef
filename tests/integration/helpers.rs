use async_trait::async_trait;
use code_assist::agent::{CallError, RepoRef, RepositoryFetcher, RequestExecutor};
use code_assist::app::{Language, Mode, Session};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Executor returning a canned outcome and recording every prompt.
pub struct FakeExecutor {
    outcome: Result<String, CallError>,
    prompts: Mutex<Vec<String>>,
}

impl FakeExecutor {
    pub fn replying(text: &str) -> Self {
        Self { outcome: Ok(text.to_owned()), prompts: Mutex::new(Vec::new()) }
    }

    pub fn failing(message: &str) -> Self {
        Self { outcome: Err(CallError::new(message)), prompts: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl RequestExecutor for FakeExecutor {
    async fn execute(&self, prompt: &str) -> Result<String, CallError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.outcome.clone()
    }
}

/// Repository fetcher with per-stage canned outcomes.
pub struct FakeFetcher {
    readme_url: Result<String, CallError>,
    content: Result<String, CallError>,
    pub metadata_calls: AtomicUsize,
    pub content_calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn serving(content: &str) -> Self {
        Self::with(Ok("https://raw.example/README.md".to_owned()), Ok(content.to_owned()))
    }

    pub fn with(readme_url: Result<String, CallError>, content: Result<String, CallError>) -> Self {
        Self {
            readme_url,
            content,
            metadata_calls: AtomicUsize::new(0),
            content_calls: AtomicUsize::new(0),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst) + self.content_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositoryFetcher for FakeFetcher {
    async fn readme_url(&self, _repo: &RepoRef) -> Result<String, CallError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        self.readme_url.clone()
    }

    async fn fetch_text(&self, _url: &str) -> Result<String, CallError> {
        self.content_calls.fetch_add(1, Ordering::SeqCst);
        self.content.clone()
    }
}

pub fn session(mode: Mode) -> Session {
    Session::new(mode, Language::Python)
}
