//! Entrance animation timings for the home page sections.
//!
//! The rendering layer receives these explicitly (as CSS custom properties)
//! instead of embedding literals in markup.

use std::time::Duration;

/// Easing curve, named after the CSS timing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// CSS `animation-timing-function` value.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Timing for staggered section reveals and the hero cross-fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Delay between consecutive items in a grid.
    pub stagger: Duration,
    /// Delay before the first item of a section starts.
    pub delay_children: Duration,
    /// Duration of a single item's reveal.
    pub item_duration: Duration,
    pub item_easing: Easing,
    /// Cross-fade between hero slides.
    pub slide_fade: Duration,
    pub slide_easing: Easing,
    /// Delay before the hero overlay (copy, dots, arrows) fades in.
    pub overlay_delay: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(100),
            delay_children: Duration::from_millis(200),
            item_duration: Duration::from_millis(500),
            item_easing: Easing::EaseOut,
            slide_fade: Duration::from_millis(800),
            slide_easing: Easing::EaseInOut,
            overlay_delay: Duration::from_millis(500),
        }
    }
}

impl AnimationConfig {
    /// No motion at all, for users who prefer reduced motion.
    #[must_use]
    pub const fn reduced() -> Self {
        Self {
            stagger: Duration::ZERO,
            delay_children: Duration::ZERO,
            item_duration: Duration::ZERO,
            item_easing: Easing::Linear,
            slide_fade: Duration::ZERO,
            slide_easing: Easing::Linear,
            overlay_delay: Duration::ZERO,
        }
    }

    /// Start offset of the `index`-th item in a staggered section.
    #[must_use]
    pub fn item_delay(&self, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children
            .saturating_add(self.stagger.saturating_mul(steps))
    }

    /// Inline style declaring the section's timing variables.
    #[must_use]
    pub fn section_style(&self) -> String {
        format!(
            "--stagger-ms: {}; --delay-ms: {}; --item-ms: {}; --item-ease: {};",
            self.stagger.as_millis(),
            self.delay_children.as_millis(),
            self.item_duration.as_millis(),
            self.item_easing.css(),
        )
    }

    /// Inline style declaring the hero's timing variables.
    #[must_use]
    pub fn hero_style(&self) -> String {
        format!(
            "--fade-ms: {}; --fade-ease: {}; --overlay-delay-ms: {};",
            self.slide_fade.as_millis(),
            self.slide_easing.css(),
            self.overlay_delay.as_millis(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_delay_staggers() {
        let config = AnimationConfig::default();
        assert_eq!(config.item_delay(0), Duration::from_millis(200));
        assert_eq!(config.item_delay(3), Duration::from_millis(500));
    }

    #[test]
    fn test_section_style() {
        assert_eq!(
            AnimationConfig::default().section_style(),
            "--stagger-ms: 100; --delay-ms: 200; --item-ms: 500; --item-ease: ease-out;"
        );
    }

    #[test]
    fn test_reduced_has_no_delay() {
        assert_eq!(AnimationConfig::reduced().item_delay(10), Duration::ZERO);
    }
}
