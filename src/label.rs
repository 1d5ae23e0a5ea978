//! Page labels shown inside the bars.

/// Page position of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLabel {
    /// 1-based page currently at the start of the viewport
    pub current_page: u32,
    /// Total number of pages
    pub pages: u32,
}

impl PageLabel {
    /// Compute the page position from the scroll offset, the maximum scroll
    /// offset and the visible length. `bigger_pages` rounds partial pages up.
    pub fn compute(scroll: f32, max_scroll: f32, page: f32, bigger_pages: bool) -> Self {
        if page <= 0.0 {
            return Self {
                current_page: 1,
                pages: 1,
            };
        }
        let round = |value: f32| -> u32 {
            let value = if bigger_pages {
                value.ceil()
            } else {
                value.floor()
            };
            value.max(0.0) as u32
        };
        Self {
            current_page: round(scroll.max(0.0) / page + 1.0).max(1),
            pages: round(max_scroll.max(0.0) / page) + 1,
        }
    }

    /// Substitute `{currentPage}` and `{pages}` in a template
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{currentPage}", &self.current_page.to_string())
            .replace("{pages}", &self.pages.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let label = PageLabel::compute(0.0, 400.0, 200.0, false);
        assert_eq!(label.current_page, 1);
        assert_eq!(label.pages, 3);
    }

    #[test]
    fn test_partial_pages() {
        // 500px of travel over a 200px page: two full pages plus a remainder
        let label = PageLabel::compute(300.0, 500.0, 200.0, false);
        assert_eq!(label.current_page, 2);
        assert_eq!(label.pages, 3);

        let label = PageLabel::compute(300.0, 500.0, 200.0, true);
        assert_eq!(label.current_page, 3);
        assert_eq!(label.pages, 4);
    }

    #[test]
    fn test_zero_page_size() {
        let label = PageLabel::compute(10.0, 100.0, 0.0, false);
        assert_eq!(label, PageLabel { current_page: 1, pages: 1 });
    }

    #[test]
    fn test_render_template() {
        let label = PageLabel {
            current_page: 2,
            pages: 5,
        };
        assert_eq!(
            label.render("<strong>{currentPage}</strong>{pages}"),
            "<strong>2</strong>5"
        );
    }
}
