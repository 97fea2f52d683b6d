//! Shared rendering utilities.
//!
//! All widths are measured in characters, not bytes, so multi-byte text lines
//! up in columns.

/// Ellipsis appended to truncated cell text.
const ELLIPSIS: &str = "...";

/// Returns the number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `width` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use searchlist::ui::helpers::truncate;
///
/// assert_eq!(truncate("Umbrella Corporation", 10), "Umbrell...");
/// assert_eq!(truncate("Acme", 10), "Acme");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_width(text) <= width {
        return text.to_string();
    }
    if width <= ELLIPSIS.len() {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Truncates or right-pads `text` to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let padding = width.saturating_sub(char_width(&cut));
    format!("{cut}{}", " ".repeat(padding))
}

/// Centers `text` within `cols` characters; overflowing text is truncated.
///
/// When the padding cannot be split evenly the extra space goes on the right.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let cut = truncate(text, cols);
    let padding = cols.saturating_sub(char_width(&cut)) / 2;
    format!("{}{cut}", " ".repeat(padding))
}

/// Horizontal separator line.
#[must_use]
pub fn rule(cols: usize) -> String {
    "─".repeat(cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Zürich Größe AG", 8), "Züric...");
        assert_eq!(char_width(&truncate("Zürich Größe AG", 8)), 8);
    }

    #[test]
    fn truncate_tiny_width_drops_ellipsis() {
        assert_eq!(truncate("Globex", 2), "Gl");
    }

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit("Acme", 6), "Acme  ");
        assert_eq!(fit("Initech", 6), "Ini...");
    }

    #[test]
    fn center_puts_extra_space_right() {
        assert_eq!(center("ab", 5), " ab");
    }
}
