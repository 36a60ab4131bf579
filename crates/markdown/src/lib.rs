//! Markdown passes for octodoc.
//!
//! Three line-oriented transforms over plain text:
//! - [`extract_code_blocks`] — pull tagged fenced code back out of Markdown
//! - [`fence_examples`] — turn indented doc-comment examples into fences
//! - [`cross_link`] — rewrite backticked names into Markdown links

mod fences;
mod links;

pub use fences::fence_examples;
pub use links::cross_link;

/// Extract the contents of every fenced code block tagged with `label`.
///
/// A line whose trimmed content is exactly ```` ```<label> ```` opens a
/// block; a line whose trimmed content is exactly ```` ``` ```` closes it.
/// Neither marker line is emitted. Lines inside an open block are emitted
/// verbatim; everything else — prose, and fences with any other or no
/// label — is dropped. An unterminated fence runs to end of input.
pub fn extract_code_blocks(markdown: &str, label: &str) -> String {
    let fence_open = format!("```{label}");

    let mut in_code = false;
    let mut code = String::new();

    for line in markdown.lines() {
        if in_code {
            if line.trim() == "```" {
                in_code = false;
            } else {
                code.push_str(line);
                code.push('\n');
            }
        } else if line.trim() == fence_open {
            in_code = true;
        }
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_exactly_the_enclosed_lines() {
        let markdown = "\
# Title

Some prose.

```matlab
x = 1;
y = x + 1;
```

More prose.
";
        assert_eq!(
            extract_code_blocks(markdown, "matlab"),
            "x = 1;\ny = x + 1;\n"
        );
    }

    #[test]
    fn ignores_blocks_with_other_labels() {
        let markdown = "```python\nprint(1)\n```\n\n```matlab\ndisp(1)\n```\n";
        assert_eq!(extract_code_blocks(markdown, "matlab"), "disp(1)\n");
    }

    #[test]
    fn ignores_untagged_blocks() {
        let markdown = "```\nplain fence\n```\n";
        assert_eq!(extract_code_blocks(markdown, "matlab"), "");
    }

    #[test]
    fn concatenates_multiple_blocks() {
        let markdown = "```matlab\na;\n```\nprose\n```matlab\nb;\n```\n";
        assert_eq!(extract_code_blocks(markdown, "matlab"), "a;\nb;\n");
    }

    #[test]
    fn open_marker_match_is_exact_after_trim() {
        // A fence opener with trailing attributes is a different marker.
        let markdown = "```matlab {linenos}\nskipped();\n```\n";
        assert_eq!(extract_code_blocks(markdown, "matlab"), "");
    }

    #[test]
    fn indented_markers_still_match() {
        let markdown = "  ```matlab\n  kept();\n  ```\n";
        assert_eq!(extract_code_blocks(markdown, "matlab"), "  kept();\n");
    }

    #[test]
    fn unterminated_fence_runs_to_end_of_input() {
        let markdown = "```matlab\nstill code\nmore code";
        assert_eq!(
            extract_code_blocks(markdown, "matlab"),
            "still code\nmore code\n"
        );
    }

    #[test]
    fn no_blocks_yields_empty_output() {
        let markdown = "Just prose.\n\nNo code anywhere.\n";
        assert_eq!(extract_code_blocks(markdown, "matlab"), "");
    }
}
