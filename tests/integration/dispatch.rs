// =====
// TESTS: 11
// =====
//
// Mode dispatcher integration tests.
// Validates required inputs, snapshot capture, and the repository analysis flow
// against fake collaborators that count external calls.

use code_assist::agent::CallError;
use code_assist::app::{Draft, Language, Mode, ValidationError, dispatch};
use code_assist::response::RenderBlock;
use pretty_assertions::assert_eq;
use std::sync::atomic::Ordering;

use crate::helpers::{FakeExecutor, FakeFetcher, session};

fn full_draft() -> Draft {
    Draft {
        code: "x = 1".to_owned(),
        description: "make it faster".to_owned(),
        repo_url: "https://github.com/owner/repo".to_owned(),
    }
}

// --- Validation ---

#[tokio::test]
async fn every_mode_rejects_each_missing_required_field_without_calls() {
    for mode in Mode::ALL {
        for field in mode.required_inputs() {
            let mut draft = full_draft();
            match field {
                code_assist::app::InputField::Code => draft.code.clear(),
                code_assist::app::InputField::Description => draft.description = "   ".to_owned(),
                code_assist::app::InputField::RepoUrl => draft.repo_url.clear(),
            }
            let mut s = session(mode);
            s.draft = draft;
            let executor = FakeExecutor::replying("unused");
            let fetcher = FakeFetcher::serving("unused");

            let result = dispatch(&mut s, &executor, &fetcher).await;

            assert!(result.is_err(), "{mode} accepted a draft missing {field:?}");
            assert_eq!(executor.calls(), 0, "{mode} called the executor");
            assert_eq!(fetcher.total_calls(), 0, "{mode} called the fetcher");
            assert!(!s.is_busy());
            assert!(s.original().is_none());
            assert!(s.error().is_some());
        }
    }
}

#[tokio::test]
async fn assist_without_problem_is_rejected() {
    let mut s = session(Mode::Assist);
    s.draft.code = "x=1".to_owned();
    let executor = FakeExecutor::replying("unused");
    let fetcher = FakeFetcher::serving("unused");

    let err = dispatch(&mut s, &executor, &fetcher).await.unwrap_err();

    assert_eq!(err, ValidationError::AssistInputsMissing);
    assert_eq!(executor.calls(), 0);
    assert!(s.response().is_none());
}

#[tokio::test]
async fn analyze_repo_with_foreign_url_does_not_fetch() {
    let mut s = session(Mode::AnalyzeRepo);
    s.draft.repo_url = "https://example.com/not-github".to_owned();
    let executor = FakeExecutor::replying("unused");
    let fetcher = FakeFetcher::serving("unused");

    let err = dispatch(&mut s, &executor, &fetcher).await.unwrap_err();

    assert_eq!(err, ValidationError::RepoUrlInvalid);
    assert_eq!(fetcher.total_calls(), 0);
    assert_eq!(executor.calls(), 0);
}

// --- Snapshot and diff pairing ---

#[tokio::test]
async fn refactor_response_renders_as_diff_against_submitted_code() {
    let mut s = session(Mode::Refactor);
    s.draft.code = "def f(): pass".to_owned();
    let executor = FakeExecutor::replying("```python\ndef f():\n    return None\n```");
    let fetcher = FakeFetcher::serving("unused");

    assert_eq!(dispatch(&mut s, &executor, &fetcher).await, Ok(true));

    assert_eq!(executor.calls(), 1);
    assert!(executor.last_prompt().unwrap().contains("def f(): pass"));
    assert_eq!(
        s.render_plan(),
        vec![RenderBlock::Diff {
            language: Language::Python,
            original: "def f(): pass".to_owned(),
            updated: "def f():\n    return None".to_owned(),
        }]
    );
}

#[tokio::test]
async fn review_response_never_renders_a_diff() {
    let mut s = session(Mode::Review);
    s.draft.code = "def f(): pass".to_owned();
    let executor = FakeExecutor::replying("**Issues**\n* none\n```python\ndef f(): pass\n```");
    let fetcher = FakeFetcher::serving("unused");

    dispatch(&mut s, &executor, &fetcher).await.unwrap();

    assert!(s.original().is_none());
    assert!(!s.render_plan().iter().any(|b| matches!(b, RenderBlock::Diff { .. })));
}

#[tokio::test]
async fn executor_failure_is_surfaced_verbatim() {
    let mut s = session(Mode::Debug);
    s.draft.code = "print(x)".to_owned();
    let executor = FakeExecutor::failing("API key not valid. Please pass a valid API key.");
    let fetcher = FakeFetcher::serving("unused");

    assert_eq!(dispatch(&mut s, &executor, &fetcher).await, Ok(true));

    assert_eq!(s.error(), Some("API key not valid. Please pass a valid API key."));
    assert!(s.response().is_none());
    assert!(s.original().is_none());
    assert!(s.render_plan().is_empty());
}

#[tokio::test]
async fn mode_switch_clears_previous_result() {
    let mut s = session(Mode::Refactor);
    s.draft.code = "a".to_owned();
    let executor = FakeExecutor::replying("```\nb\n```");
    let fetcher = FakeFetcher::serving("unused");
    dispatch(&mut s, &executor, &fetcher).await.unwrap();
    assert!(s.original().is_some());

    s.switch_mode(Mode::Generate);

    assert!(s.response().is_none());
    assert!(s.error().is_none());
    assert!(s.original().is_none());
    assert_eq!(s.draft, Draft::default());
}

// --- Repository analysis ---

#[tokio::test]
async fn analyze_repo_fetches_then_summarizes() {
    let mut s = session(Mode::AnalyzeRepo);
    s.draft.repo_url = "https://github.com/owner/repo".to_owned();
    let executor = FakeExecutor::replying("**Purpose**\n* a demo");
    let fetcher = FakeFetcher::serving("# Demo\nA demo project.");

    assert_eq!(dispatch(&mut s, &executor, &fetcher).await, Ok(true));

    assert_eq!(fetcher.metadata_calls.load(Ordering::SeqCst), 1);
    assert_eq!(fetcher.content_calls.load(Ordering::SeqCst), 1);
    let prompt = executor.last_prompt().unwrap();
    assert!(prompt.contains("owner/repo"));
    assert!(prompt.contains("A demo project."));
    assert_eq!(s.response(), Some("**Purpose**\n* a demo"));
}

#[tokio::test]
async fn analyze_repo_metadata_failure_aborts_before_content_fetch() {
    let mut s = session(Mode::AnalyzeRepo);
    s.draft.repo_url = "github.com/owner/missing".to_owned();
    let executor = FakeExecutor::replying("unused");
    let fetcher = FakeFetcher::with(
        Err(CallError::with_status("GitHub API error: 404 Not Found", 404)),
        Ok("unused".to_owned()),
    );

    dispatch(&mut s, &executor, &fetcher).await.unwrap();

    assert_eq!(s.error(), Some("GitHub API error: 404 Not Found"));
    assert_eq!(fetcher.content_calls.load(Ordering::SeqCst), 0);
    assert_eq!(executor.calls(), 0);
    assert!(s.response().is_none());
}

#[tokio::test]
async fn analyze_repo_content_failure_leaves_no_partial_response() {
    let mut s = session(Mode::AnalyzeRepo);
    s.draft.repo_url = "github.com/owner/repo".to_owned();
    let executor = FakeExecutor::replying("unused");
    let fetcher = FakeFetcher::with(
        Ok("https://raw.example/README.md".to_owned()),
        Err(CallError::with_status("GitHub API error: 500 Internal Server Error", 500)),
    );

    dispatch(&mut s, &executor, &fetcher).await.unwrap();

    assert_eq!(s.error(), Some("GitHub API error: 500 Internal Server Error"));
    assert_eq!(executor.calls(), 0);
    assert!(s.response().is_none());
    assert!(!s.is_busy());
}

// --- Superseded dispatch ---

#[tokio::test]
async fn response_for_superseded_generation_is_dropped() {
    let mut s = session(Mode::Debug);
    s.draft.code = "x".to_owned();
    let ticket = s.begin_dispatch().unwrap();
    s.switch_mode(Mode::Debug);

    assert!(!s.complete(ticket, Ok("stale".to_owned())));
    assert!(s.response().is_none());
}
