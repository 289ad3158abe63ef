// =====
// TESTS: 8
// =====
//
// Response segmentation and diff pairing through the public API.
// Covers reconstruction of realistic responses and the one-diff rule.

use code_assist::app::Language;
use code_assist::response::{
    OriginalSnapshot, RenderBlock, Run, SegmentKind, parse_segments, plan_render, reconstruct,
};
use pretty_assertions::assert_eq;

const MIXED_RESPONSE: &str = "\
**Summary**: the loop was *off by one*.

* fixed the bound
- renamed `i` to `index`

```python
for index in range(len(items)):
    print(items[index])
```

Alternative with **enumerate**:
```python  title=alt.py
for index, item in enumerate(items):
    print(item)
```
trailing ```inline``` note
";

fn kinds(text: &str) -> Vec<SegmentKind> {
    parse_segments(text).into_iter().map(|s| s.kind).collect()
}

fn prose(text: &str) -> SegmentKind {
    SegmentKind::Prose { runs: vec![Run::Plain(text.to_owned())] }
}

fn diff_count(blocks: &[RenderBlock]) -> usize {
    blocks.iter().filter(|b| matches!(b, RenderBlock::Diff { .. })).count()
}

#[test]
fn prose_code_prose() {
    assert_eq!(
        kinds("Here is code:\n```python\nprint(1)\n```\ndone"),
        vec![
            prose("Here is code:"),
            SegmentKind::Code {
                declared_language: "python".to_owned(),
                body: "print(1)".to_owned(),
                terminated: true,
            },
            prose("done"),
        ]
    );
}

#[test]
fn list_then_prose() {
    assert_eq!(
        kinds("* item one\n* item two\n\nmore text"),
        vec![
            SegmentKind::List { items: vec!["item one".to_owned(), "item two".to_owned()] },
            prose("more text"),
        ]
    );
}

#[test]
fn unterminated_fence_is_a_single_code_segment() {
    assert_eq!(
        kinds("```js\nconsole.log(1)"),
        vec![SegmentKind::Code {
            declared_language: "js".to_owned(),
            body: "console.log(1)".to_owned(),
            terminated: false,
        }]
    );
}

#[test]
fn mixed_response_reconstructs_exactly() {
    let segments = parse_segments(MIXED_RESPONSE);
    assert_eq!(reconstruct(MIXED_RESPONSE, &segments), MIXED_RESPONSE);

    let mut cursor = 0;
    for segment in &segments {
        assert_eq!(segment.span.start, cursor);
        cursor = segment.span.end;
    }
    assert_eq!(cursor, MIXED_RESPONSE.len());
}

#[test]
fn mixed_response_segment_order() {
    let segments = parse_segments(MIXED_RESPONSE);
    let shape: Vec<&str> = segments
        .iter()
        .map(|s| match s.kind {
            SegmentKind::Prose { .. } => "prose",
            SegmentKind::List { .. } => "list",
            SegmentKind::Code { .. } => "code",
        })
        .collect();
    assert_eq!(shape, vec!["prose", "list", "code", "prose", "code", "prose", "code", "prose"]);

    let SegmentKind::Code { declared_language, .. } = &segments[4].kind else {
        panic!("expected code segment");
    };
    assert_eq!(declared_language, "python");
}

#[test]
fn at_most_one_diff_and_it_is_the_first_code_block() {
    let original = OriginalSnapshot {
        code: "for i in range(len(items)+1):\n    print(items[i])".to_owned(),
        language: Language::Python,
    };
    let blocks = plan_render(&parse_segments(MIXED_RESPONSE), Some(&original));

    assert_eq!(diff_count(&blocks), 1);
    let first_code = blocks
        .iter()
        .position(|b| matches!(b, RenderBlock::Code { .. } | RenderBlock::Diff { .. }))
        .unwrap();
    assert!(matches!(blocks[first_code], RenderBlock::Diff { .. }));
    let plain_code = blocks.iter().filter(|b| matches!(b, RenderBlock::Code { .. })).count();
    assert_eq!(plain_code, 2);
}

#[test]
fn without_original_nothing_is_diffed() {
    let blocks = plan_render(&parse_segments(MIXED_RESPONSE), None);
    assert_eq!(diff_count(&blocks), 0);
}

#[test]
fn response_without_code_ignores_original() {
    let original = OriginalSnapshot { code: "x = 1".to_owned(), language: Language::Python };
    let blocks = plan_render(&parse_segments("Looks fine.\n* nothing to change"), Some(&original));
    assert_eq!(
        blocks,
        vec![
            RenderBlock::Prose(vec![Run::Plain("Looks fine.".to_owned())]),
            RenderBlock::List(vec!["nothing to change".to_owned()]),
        ]
    );
}
