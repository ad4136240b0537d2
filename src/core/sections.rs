// Section geometry for the navigation controller. Nothing here touches the
// DOM: spans are captured from layout by the caller and handed over as plain
// numbers so the selection rules can be tested on the host.

/// Vertical extent of a page section in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    /// Distance from the document top to the section top.
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `scroll_y` falls inside the span once it is shifted up by `lookahead`.
    #[inline]
    pub fn contains(&self, scroll_y: f64, lookahead: f64) -> bool {
        let top = self.top - lookahead;
        let bottom = top + self.height;
        scroll_y >= top && scroll_y < bottom
    }
}

/// First section, in document order, whose shifted span contains `scroll_y`.
pub fn active_section(spans: &[SectionSpan], scroll_y: f64, lookahead: f64) -> Option<&str> {
    spans
        .iter()
        .find(|s| s.contains(scroll_y, lookahead))
        .map(|s| s.id.as_str())
}

/// Document offset to scroll to so the target's top sits `offset` below the viewport top.
///
/// `rect_top` is the target's viewport-relative top, `scroll_y` the current page offset.
#[inline]
pub fn scroll_target_top(rect_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (rect_top + scroll_y - offset).max(0.0)
}

/// In-page fragment of a link href (`"#about"` -> `Some("about")`).
///
/// Bare `"#"` and anything not starting with `#` yield `None`.
#[inline]
pub fn href_fragment(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Whether a nav link with `href` should carry the active classes.
#[inline]
pub fn link_is_active(href: Option<&str>, active_id: &str) -> bool {
    if active_id.is_empty() {
        return false;
    }
    href.and_then(href_fragment) == Some(active_id)
}
