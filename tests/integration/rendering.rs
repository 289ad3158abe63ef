// =====
// TESTS: 5
// =====
//
// End-to-end rendering: response text to render plan to terminal output.
// Output is written unstyled so assertions compare plain text.

use code_assist::app::Language;
use code_assist::response::{OriginalSnapshot, parse_segments, plan_render};
use code_assist::ui::{Theme, print_lines, render_error, render_plan_lines};
use pretty_assertions::assert_eq;

fn render_to_string(response: &str, original: Option<&OriginalSnapshot>, theme: Theme) -> String {
    let blocks = plan_render(&parse_segments(response), original);
    let lines = render_plan_lines(&blocks, &theme.palette());
    let mut out = Vec::new();
    print_lines(&mut out, &lines, false).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn refactor_response_prints_prose_diff_and_bullets() {
    let original = OriginalSnapshot { code: "def f(): pass".to_owned(), language: Language::Python };
    let output = render_to_string(
        "Refactored:\n```python\ndef f():\n    return None\n```\n* removed **pass**",
        Some(&original),
        Theme::Dark,
    );
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Refactored:");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "── python changes +2 -1");
    assert!(lines[3].starts_with("@@"));
    assert!(lines.contains(&"- def f(): pass"));
    assert!(lines.contains(&"+ def f():"));
    assert!(lines.contains(&"+     return None"));
    assert_eq!(lines.last(), Some(&"  • removed pass"));
}

#[test]
fn unchanged_file_input_prints_no_changes() {
    let original =
        OriginalSnapshot { code: "def f():\n    return 1\n".to_owned(), language: Language::Python };
    let output = render_to_string(
        "```python\ndef f():\n    return 1\n```",
        Some(&original),
        Theme::Dark,
    );
    assert_eq!(output, "── python changes +0 -0\n  (no changes)\n");
}

#[test]
fn plain_code_block_prints_framed() {
    let output = render_to_string("```rust\nfn main() {}\n```", None, Theme::Light);
    assert_eq!(output, "── rust \n  fn main() {}\n────────\n");
}

#[test]
fn themes_change_colors_not_text() {
    let response = "**Issues**\n* none\n```go\nfunc main() {}\n```";
    assert_eq!(
        render_to_string(response, None, Theme::Dark),
        render_to_string(response, None, Theme::Light)
    );
}

#[test]
fn error_output_is_prefixed() {
    let lines = render_error("GitHub API error: 404 Not Found", &Theme::Dark.palette());
    let mut out = Vec::new();
    print_lines(&mut out, &lines, false).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "✗ GitHub API error: 404 Not Found\n");
}
