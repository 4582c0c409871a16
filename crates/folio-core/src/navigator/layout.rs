//! Container height fitting

/// Fit the container height to the active slide's content height,
/// optionally capped at a fraction of the viewport height. Card carousels
/// cap at 72% of the viewport so tall cards scroll internally; the skills
/// swapper is uncapped.
pub fn fit_height(content: f32, viewport: f32, cap_fraction: Option<f32>) -> f32 {
    match cap_fraction {
        Some(fraction) => content.min((viewport * fraction).round()),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncapped_height_follows_content() {
        assert_eq!(fit_height(980.0, 800.0, None), 980.0);
    }

    #[test]
    fn test_cap_applies_at_viewport_fraction() {
        // 72% of 1000 = 720
        assert_eq!(fit_height(980.0, 1000.0, Some(0.72)), 720.0);
        assert_eq!(fit_height(300.0, 1000.0, Some(0.72)), 300.0);
    }
}
