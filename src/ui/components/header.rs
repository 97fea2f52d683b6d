//! Header component renderer.

use crate::ui::helpers::center;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title line, e.g. `Accounts (450)`.
///
/// # Example
///
/// ```rust
/// use searchlist::ui::components::render_header;
/// use searchlist::ui::viewmodel::HeaderInfo;
///
/// let header = HeaderInfo { title: "Accounts (3)".to_string() };
/// assert_eq!(render_header(&header, 16), vec!["  Accounts (3)".to_string()]);
/// ```
#[must_use]
pub fn render_header(header: &HeaderInfo, cols: usize) -> Vec<String> {
    vec![center(&header.title, cols)]
}
