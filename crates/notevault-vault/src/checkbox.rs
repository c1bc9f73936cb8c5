//! Task-list checkbox toggling inside note content.
//!
//! The preview renders task lists as interactive checkboxes; clicking one
//! sends the line's text back so the stored Markdown can be flipped
//! between `[ ]` and `[x]` without a full editor round trip.

/// Toggle the checkbox on the first task line whose text matches
/// `checkbox_text` (after the marker, trimmed). Returns the updated
/// content, or `None` when no matching task line exists.
pub fn toggle(content: &str, checkbox_text: &str) -> Option<String> {
    let target = checkbox_text.trim();
    let mut toggled = false;

    let lines: Vec<String> = content
        .lines()
        .map(|line| {
            if toggled {
                return line.to_string();
            }
            match split_task_line(line) {
                Some((prefix, state, text)) if text.trim() == target => {
                    toggled = true;
                    let flipped = if state == ' ' { 'x' } else { ' ' };
                    format!("{prefix}[{flipped}]{text}")
                }
                _ => line.to_string(),
            }
        })
        .collect();

    if !toggled {
        return None;
    }

    let mut updated = lines.join("\n");
    if content.ends_with('\n') {
        updated.push('\n');
    }
    Some(updated)
}

/// Split a Markdown task line into (list prefix, checkbox state, rest).
/// Accepts `-`, `*`, and `+` bullets with arbitrary leading indentation.
fn split_task_line(line: &str) -> Option<(&str, char, &str)> {
    let trimmed = line.trim_start();
    let indent_len = line.len() - trimmed.len();

    let rest = trimmed.strip_prefix(['-', '*', '+'])?;
    let rest = rest.strip_prefix(' ')?;

    let state = match rest.get(..3) {
        Some("[ ]") => ' ',
        Some("[x]") | Some("[X]") => 'x',
        _ => return None,
    };

    // prefix covers indentation, bullet, and the space before `[`.
    let prefix_len = indent_len + (trimmed.len() - rest.len());
    Some((&line[..prefix_len], state, &rest[3..]))
}
