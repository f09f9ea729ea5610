use std::borrow::Cow;

const FENCE: &str = "```";

/// Remove a Markdown code fence wrapped around model output.
///
/// Content that does not start with a fence is returned untouched. Otherwise
/// the opening line (with any language tag) is dropped, the closing line is
/// dropped if it is a bare fence, and the rest is trimmed. Nested fences are
/// peeled until the result no longer starts with one, so applying this to
/// its own output is a no-op.
pub fn strip_code_fence(content: &str) -> Cow<'_, str> {
    if !content.starts_with(FENCE) {
        return Cow::Borrowed(content);
    }

    let mut current = peel(content);
    while current.starts_with(FENCE) {
        current = peel(&current);
    }
    Cow::Owned(current)
}

fn peel(content: &str) -> String {
    let mut lines = content.split('\n').skip(1).collect::<Vec<_>>();
    if lines.last().is_some_and(|line| line.trim() == FENCE) {
        lines.pop();
    }
    lines.join("\n").trim().to_owned()
}
