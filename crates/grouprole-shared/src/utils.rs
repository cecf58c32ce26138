//! Utility functions

/// Reduces submitted form input to plain text: drops anything between
/// angle brackets, turns control characters into spaces, collapses
/// whitespace runs, and trims the ends.
pub fn sanitize_text_field(input: &str) -> String {
    let mut plain = String::with_capacity(input.len());
    let mut in_tag = false;

    for ch in input.chars() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
            }
            continue;
        }
        if ch == '<' {
            in_tag = true;
            continue;
        }
        plain.push(if ch.is_control() { ' ' } else { ch });
    }

    plain.split_whitespace().collect::<Vec<_>>().join(" ")
}
