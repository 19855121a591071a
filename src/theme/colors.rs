//! Color constants for the greeting pages.

pub const INDIGO: &str = "#667eea";
pub const VIOLET: &str = "#764ba2";

/// Inline `background` for a full-window page.
///
/// Without a GIF the stylesheet's gradient applies, so nothing is emitted.
pub fn page_background(gif: Option<&str>) -> String {
    match gif {
        Some(gif) => format!(
            "background: url('{gif}') center/cover, linear-gradient(135deg, {INDIGO} 0%, {VIOLET} 100%);"
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_without_gif_is_empty() {
        assert!(page_background(None).is_empty());
    }

    #[test]
    fn test_background_layers_gif_over_gradient() {
        let css = page_background(Some("assets/party.gif"));
        assert!(css.starts_with("background: url('assets/party.gif')"));
        assert!(css.contains(INDIGO));
        assert!(css.contains(VIOLET));
    }
}
