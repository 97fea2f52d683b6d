//! Pager component renderer.

use crate::ui::helpers::center;
use crate::ui::viewmodel::PagerInfo;

/// Renders page position and navigation buttons.
///
/// Disabled buttons are blanked out so the line keeps its shape.
#[must_use]
pub fn render_pager(pager: &PagerInfo, cols: usize) -> Vec<String> {
    let button = |label: &'static str, enabled: bool| {
        if enabled {
            label.to_string()
        } else {
            " ".repeat(label.len())
        }
    };

    let line = format!(
        "{} {}  Page {} of {} ({}-{} of {})  {} {}",
        button("<<", pager.back_enabled),
        button("<", pager.back_enabled),
        pager.current_page,
        pager.total_pages,
        pager.begin_index,
        pager.end_index,
        pager.record_count,
        button(">", pager.forward_enabled),
        button(">>", pager.forward_enabled),
    );
    vec![center(&line, cols)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_blanks_back_buttons() {
        let pager = PagerInfo {
            begin_index: 1,
            end_index: 200,
            record_count: 450,
            current_page: 1,
            total_pages: 3,
            back_enabled: false,
            forward_enabled: true,
        };
        let lines = render_pager(&pager, 80);
        assert_eq!(lines[0].trim_start(), "Page 1 of 3 (1-200 of 450)  > >>");
        assert!(!lines[0].contains('<'));
    }
}
