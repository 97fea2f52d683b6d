//! Page message component renderer.

use crate::ui::helpers::center;
use crate::ui::viewmodel::MessageBanner;

/// Renders the alert banner: an icon-tagged title and the summary.
///
/// The icon identifier is shown without its `utility:` namespace. The summary
/// wraps at `cols` characters.
#[must_use]
pub fn render_message(banner: &MessageBanner, cols: usize) -> Vec<String> {
    let icon = banner.icon.rsplit(':').next().unwrap_or(&banner.icon);
    let mut lines = vec![center(&format!("[{icon}] {}", banner.title), cols)];

    if cols == 0 {
        lines.push(banner.summary.clone());
        return lines;
    }

    let chars: Vec<char> = banner.summary.chars().collect();
    lines.extend(chars.chunks(cols).map(|chunk| chunk.iter().collect::<String>()));
    lines
}
