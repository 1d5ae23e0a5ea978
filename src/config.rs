//! Overlay configuration.
//!
//! Options are resolved once, at construction, from three layers: explicit
//! [`OverlayBuilder`] overrides, then the container's data attributes, then
//! the defaults below. The resolved [`OverlayConfig`] never changes afterwards.

use std::collections::HashMap;
use std::time::Duration;

use crate::animation::{TimingFunction, Transition};
use crate::error::{Error, Result};
use crate::geometry::Axis;
use crate::host::Overflow;

/// Base class used when neither the builder nor the dataset names one
pub const DEFAULT_BASE_CLASS: &str = "scrolling";

/// Delay before the active class is removed once scrolling stops
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(500);

/// Dataset key holding the base class
pub const DATA_BASE: &str = "scrolling";
/// Dataset key whose presence enables interactive bars
pub const DATA_INTERACTIVE: &str = "scrolling-interactive";
/// Dataset key holding the hide delay in milliseconds
pub const DATA_HIDE_DELAY: &str = "scrolling-hide-delay";
/// Dataset key holding the horizontal overflow override
pub const DATA_HORIZONTAL: &str = "scrolling-horizontal";
/// Dataset key holding the vertical overflow override
pub const DATA_VERTICAL: &str = "scrolling-vertical";
/// Dataset key holding the bar visibility policy
pub const DATA_INDICATOR: &str = "scrolling-indicator";
/// Dataset key naming the easing curve of animated track jumps
pub const DATA_TRANSITION: &str = "scrolling-transition";
/// Dataset key holding the duration of animated track jumps in milliseconds
pub const DATA_DURATION: &str = "scrolling-duration";

/// CSS class names written by the overlay.
///
/// Every name derives from the base class unless overridden. Axis specific
/// track classes derive from the track class, so overriding the track class
/// also renames `-x`, `-y` and `-xy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    base: String,
    area: Option<String>,
    active: Option<String>,
    track: Option<String>,
    bar: Option<String>,
    interactive: Option<String>,
}

impl ClassNames {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            area: None,
            active: None,
            track: None,
            bar: None,
            interactive: None,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Class on the scrolling area (`{base}-area`)
    pub fn area(&self) -> String {
        self.derived(&self.area, "area")
    }

    /// Class toggled on the container while scrolling (`{base}-active`)
    pub fn active(&self) -> String {
        self.derived(&self.active, "active")
    }

    /// Class on every track (`{base}-track`)
    pub fn track(&self) -> String {
        self.derived(&self.track, "track")
    }

    /// Class on the track of one axis (`{track}-x` / `{track}-y`)
    pub fn track_axis(&self, axis: Axis) -> String {
        format!("{}-{}", self.track(), axis.suffix())
    }

    /// Class on both tracks when both axes scroll (`{track}-xy`)
    pub fn track_both(&self) -> String {
        format!("{}-xy", self.track())
    }

    /// Class on every bar (`{base}-bar`)
    pub fn bar(&self) -> String {
        self.derived(&self.bar, "bar")
    }

    /// Class on the container in interactive mode (`{base}-interactive`)
    pub fn interactive(&self) -> String {
        self.derived(&self.interactive, "interactive")
    }

    pub fn with_area(mut self, name: impl Into<String>) -> Self {
        self.area = Some(name.into());
        self
    }

    pub fn with_active(mut self, name: impl Into<String>) -> Self {
        self.active = Some(name.into());
        self
    }

    pub fn with_track(mut self, name: impl Into<String>) -> Self {
        self.track = Some(name.into());
        self
    }

    pub fn with_bar(mut self, name: impl Into<String>) -> Self {
        self.bar = Some(name.into());
        self
    }

    pub fn with_interactive(mut self, name: impl Into<String>) -> Self {
        self.interactive = Some(name.into());
        self
    }

    fn derived(&self, explicit: &Option<String>, suffix: &str) -> String {
        match explicit {
            Some(name) => name.clone(),
            None => format!("{}-{}", self.base, suffix),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_CLASS)
    }
}

/// How the overlay decides which axes get a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisDetection {
    /// An axis scrolls when the host reserves a native scrollbar gutter for
    /// it and its content overflows
    #[default]
    Gutter,
    /// An axis scrolls when its overflow style is `scroll`, or `auto` with
    /// overflowing content. Per-axis overrides take precedence over the
    /// host's computed style.
    Overflow,
}

/// What a click on the empty part of a track does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackClick {
    /// Jump so the bar is centered on the click point
    #[default]
    Center,
    /// Move one visible page towards the click point
    Page,
}

/// When the tracks are shown at all.
///
/// Independent of the active class: an indicator decides whether a renderer
/// draws the tracks, the active class styles them while scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    #[default]
    Always,
    /// Shown while scrolling, hidden after the hide delay
    Scroll,
    /// Shown while the pointer is over the area, hidden after the hide delay
    /// once it leaves
    Hover,
}

impl Indicator {
    /// Parse `always` (or `true`), `scroll` or `hover`
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "always" | "true" | "" => Some(Indicator::Always),
            "scroll" => Some(Indicator::Scroll),
            "hover" => Some(Indicator::Hover),
            _ => None,
        }
    }
}

/// Placement of the tracks inside the scrolling area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    /// Cross-axis size of a track
    pub thickness: f32,
    /// Gap between a track and the area edges
    pub margin: f32,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            thickness: 8.0,
            margin: 0.0,
        }
    }
}

/// Resolved, immutable overlay configuration
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Show click- and draggable bars
    pub interactive: bool,
    pub classes: ClassNames,
    /// Idle time after the last scroll before the active class is removed
    pub hide_delay: Duration,
    pub detection: AxisDetection,
    pub indicator: Indicator,
    /// Overflow override for the x axis
    pub horizontal: Option<Overflow>,
    /// Overflow override for the y axis
    pub vertical: Option<Overflow>,
    pub track_click: TrackClick,
    /// Animate track click jumps; `None` jumps immediately
    pub animation: Option<Transition>,
    /// Page label template with `{currentPage}` and `{pages}` placeholders
    pub label: Option<String>,
    /// Round page numbers up instead of down
    pub bigger_pages: bool,
    pub track: TrackLayout,
    /// Lower bound for the bar length, still clamped to the track length
    pub min_bar_size: f32,
}

impl OverlayConfig {
    /// Overflow override configured for an axis
    pub fn overflow_override(&self, axis: Axis) -> Option<Overflow> {
        match axis {
            Axis::X => self.horizontal,
            Axis::Y => self.vertical,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            interactive: false,
            classes: ClassNames::default(),
            hide_delay: DEFAULT_HIDE_DELAY,
            detection: AxisDetection::default(),
            indicator: Indicator::default(),
            horizontal: None,
            vertical: None,
            track_click: TrackClick::default(),
            animation: None,
            label: None,
            bigger_pages: false,
            track: TrackLayout::default(),
            min_bar_size: 0.0,
        }
    }
}

/// Builder collecting explicit overrides for an overlay
#[derive(Debug, Clone, Default)]
pub struct OverlayBuilder {
    interactive: Option<bool>,
    base_class: Option<String>,
    area_class: Option<String>,
    active_class: Option<String>,
    track_class: Option<String>,
    bar_class: Option<String>,
    interactive_class: Option<String>,
    hide_delay: Option<Duration>,
    detection: Option<AxisDetection>,
    indicator: Option<Indicator>,
    horizontal: Option<Overflow>,
    vertical: Option<Overflow>,
    track_click: Option<TrackClick>,
    animation: Option<Transition>,
    label: Option<String>,
    bigger_pages: Option<bool>,
    track: Option<TrackLayout>,
    min_bar_size: Option<f32>,
}

impl OverlayBuilder {
    /// Create a builder without overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable draggable/clickable bars
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = Some(interactive);
        self
    }

    /// Set the base class all other classes derive from
    pub fn base_class(mut self, name: impl Into<String>) -> Self {
        self.base_class = Some(name.into());
        self
    }

    pub fn area_class(mut self, name: impl Into<String>) -> Self {
        self.area_class = Some(name.into());
        self
    }

    pub fn active_class(mut self, name: impl Into<String>) -> Self {
        self.active_class = Some(name.into());
        self
    }

    pub fn track_class(mut self, name: impl Into<String>) -> Self {
        self.track_class = Some(name.into());
        self
    }

    pub fn bar_class(mut self, name: impl Into<String>) -> Self {
        self.bar_class = Some(name.into());
        self
    }

    pub fn interactive_class(mut self, name: impl Into<String>) -> Self {
        self.interactive_class = Some(name.into());
        self
    }

    /// Set the idle time before the active class is removed
    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.hide_delay = Some(delay);
        self
    }

    /// Choose the axis detection strategy
    pub fn detection(mut self, detection: AxisDetection) -> Self {
        self.detection = Some(detection);
        self
    }

    /// Choose when the tracks are shown
    pub fn indicator(mut self, indicator: Indicator) -> Self {
        self.indicator = Some(indicator);
        self
    }

    /// Override the horizontal overflow (only used by overflow detection)
    pub fn horizontal(mut self, overflow: Overflow) -> Self {
        self.horizontal = Some(overflow);
        self
    }

    /// Override the vertical overflow (only used by overflow detection)
    pub fn vertical(mut self, overflow: Overflow) -> Self {
        self.vertical = Some(overflow);
        self
    }

    pub fn track_click(mut self, track_click: TrackClick) -> Self {
        self.track_click = Some(track_click);
        self
    }

    /// Animate track click jumps with the given transition
    pub fn animate(mut self, transition: Transition) -> Self {
        self.animation = Some(transition);
        self
    }

    /// Render a page label, e.g. `"<strong>{currentPage}</strong>{pages}"`
    pub fn label(mut self, template: impl Into<String>) -> Self {
        self.label = Some(template.into());
        self
    }

    pub fn bigger_pages(mut self, bigger: bool) -> Self {
        self.bigger_pages = Some(bigger);
        self
    }

    pub fn track_layout(mut self, layout: TrackLayout) -> Self {
        self.track = Some(layout);
        self
    }

    pub fn min_bar_size(mut self, size: f32) -> Self {
        self.min_bar_size = Some(size);
        self
    }

    /// Merge the overrides over the container's data attributes and the
    /// defaults.
    pub fn resolve(self, dataset: &HashMap<String, String>) -> Result<OverlayConfig> {
        for key in dataset.keys() {
            if key.starts_with("scrolling-") && !is_known_key(key) {
                log::warn!("Ignoring unknown data attribute `{}`", key);
            }
        }

        let base = self
            .base_class
            .or_else(|| {
                dataset
                    .get(DATA_BASE)
                    .filter(|base| !base.trim().is_empty())
                    .map(|base| base.trim().to_string())
            })
            .unwrap_or_else(|| DEFAULT_BASE_CLASS.to_string());

        let mut classes = ClassNames::new(base);
        if let Some(name) = self.area_class {
            classes = classes.with_area(name);
        }
        if let Some(name) = self.active_class {
            classes = classes.with_active(name);
        }
        if let Some(name) = self.track_class {
            classes = classes.with_track(name);
        }
        if let Some(name) = self.bar_class {
            classes = classes.with_bar(name);
        }
        if let Some(name) = self.interactive_class {
            classes = classes.with_interactive(name);
        }

        let interactive = self
            .interactive
            .unwrap_or_else(|| dataset.contains_key(DATA_INTERACTIVE));

        let hide_delay = match self.hide_delay {
            Some(delay) => delay,
            None => match dataset.get(DATA_HIDE_DELAY) {
                Some(value) => parse_millis(DATA_HIDE_DELAY, value)?,
                None => DEFAULT_HIDE_DELAY,
            },
        };

        let horizontal = match self.horizontal {
            Some(overflow) => Some(overflow),
            None => parse_overflow(dataset, DATA_HORIZONTAL)?,
        };
        let vertical = match self.vertical {
            Some(overflow) => Some(overflow),
            None => parse_overflow(dataset, DATA_VERTICAL)?,
        };

        let indicator = match self.indicator {
            Some(indicator) => indicator,
            None => match dataset.get(DATA_INDICATOR) {
                Some(value) => Indicator::from_keyword(value)
                    .ok_or_else(|| invalid(DATA_INDICATOR, value))?,
                None => Indicator::default(),
            },
        };

        let animation = match self.animation {
            Some(transition) => Some(transition),
            None => parse_transition(dataset)?,
        };

        let defaults = OverlayConfig::default();
        Ok(OverlayConfig {
            interactive,
            classes,
            hide_delay,
            detection: self.detection.unwrap_or(defaults.detection),
            indicator,
            horizontal,
            vertical,
            track_click: self.track_click.unwrap_or(defaults.track_click),
            animation,
            label: self.label,
            bigger_pages: self.bigger_pages.unwrap_or(defaults.bigger_pages),
            track: self.track.unwrap_or(defaults.track),
            min_bar_size: self.min_bar_size.unwrap_or(defaults.min_bar_size).max(0.0),
        })
    }
}

fn is_known_key(key: &str) -> bool {
    matches!(
        key,
        DATA_INTERACTIVE
            | DATA_HIDE_DELAY
            | DATA_HORIZONTAL
            | DATA_VERTICAL
            | DATA_INDICATOR
            | DATA_TRANSITION
            | DATA_DURATION
            | "scrolling-area"
    )
}

fn invalid(key: &str, value: &str) -> Error {
    Error::InvalidOption {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| invalid(key, value))
}

fn parse_overflow(dataset: &HashMap<String, String>, key: &str) -> Result<Option<Overflow>> {
    match dataset.get(key) {
        None => Ok(None),
        Some(value) => Overflow::from_keyword(value)
            .map(Some)
            .ok_or_else(|| invalid(key, value)),
    }
}

/// Either key enables animated jumps; the other one keeps its default
fn parse_transition(dataset: &HashMap<String, String>) -> Result<Option<Transition>> {
    let timing = dataset
        .get(DATA_TRANSITION)
        .map(|value| {
            TimingFunction::from_keyword(value).ok_or_else(|| invalid(DATA_TRANSITION, value))
        })
        .transpose()?;
    let duration = dataset
        .get(DATA_DURATION)
        .map(|value| parse_millis(DATA_DURATION, value))
        .transpose()?;
    if timing.is_none() && duration.is_none() {
        return Ok(None);
    }

    let mut transition = Transition::default();
    if let Some(timing) = timing {
        transition = transition.timing(timing);
    }
    if let Some(duration) = duration {
        transition = transition.duration(duration);
    }
    Ok(Some(transition))
}
