//! Display options and the merge that resolves them.
//!
//! # Layers
//!
//! A display is configured from two [`DisplayOptions`] layers: what the
//! caller supplied and a defaults layer (normally
//! [`default_options`](super::defaults::default_options)). [`configure`]
//! fills every option the caller left unset from the defaults, one level
//! deep. `events` is a single option: a caller-supplied handler bundle
//! replaces the default bundle wholesale, it is not merged handler by
//! handler.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use log::debug;

use super::defaults::DEFAULT_DURATION;
use crate::error::{DisplayError, Result, ShapeError};
use crate::interaction::EventHandlers;
use crate::layout::CellTemplate;
use crate::matrix::RawMatrix;
use crate::surface::CanvasSource;

/// Produces the template every cell is cloned from.
pub type TemplateFactory = Rc<dyn Fn() -> CellTemplate>;

// =============================================================================
// DisplayOptions
// =============================================================================

/// One configuration layer. Every option is optional.
pub struct DisplayOptions<S> {
    /// Where to render.
    pub canvas: Option<CanvasSource<S>>,
    /// What to render.
    pub matrix: Option<RawMatrix>,
    /// Cell styling.
    pub element: Option<TemplateFactory>,
    /// Per-cell pointer handlers.
    pub events: Option<EventHandlers>,
    /// Cycle through frames.
    pub animation: Option<bool>,
    /// Time each frame stays up while animating.
    pub duration: Option<Duration>,
    /// Carried, no effect.
    pub debug: Option<bool>,
    /// Carried, no effect.
    pub auto_resize: Option<bool>,
}

impl<S> Default for DisplayOptions<S> {
    fn default() -> Self {
        Self {
            canvas: None,
            matrix: None,
            element: None,
            events: None,
            animation: None,
            duration: None,
            debug: None,
            auto_resize: None,
        }
    }
}

impl<S> DisplayOptions<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn canvas(mut self, canvas: impl Into<CanvasSource<S>>) -> Self {
        self.canvas = Some(canvas.into());
        self
    }

    pub fn matrix(mut self, matrix: RawMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    pub fn element<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> CellTemplate + 'static,
    {
        self.element = Some(Rc::new(factory));
        self
    }

    /// Shorthand for a factory that always returns `template`.
    pub fn template(self, template: CellTemplate) -> Self {
        self.element(move || template)
    }

    pub fn events(mut self, events: EventHandlers) -> Self {
        self.events = Some(events);
        self
    }

    pub fn animation(mut self, animation: bool) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn auto_resize(mut self, auto_resize: bool) -> Self {
        self.auto_resize = Some(auto_resize);
        self
    }
}

impl<S> fmt::Debug for DisplayOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayOptions")
            .field("canvas", &self.canvas)
            .field("matrix", &self.matrix.as_ref().map(|m| m.frames().len()))
            .field("element", &self.element.is_some())
            .field("events", &self.events)
            .field("animation", &self.animation)
            .field("duration", &self.duration)
            .field("debug", &self.debug)
            .field("auto_resize", &self.auto_resize)
            .finish()
    }
}

// =============================================================================
// DisplayConfig
// =============================================================================

/// Fully resolved options.
pub struct DisplayConfig<S> {
    pub canvas: CanvasSource<S>,
    pub matrix: RawMatrix,
    pub element: TemplateFactory,
    pub events: EventHandlers,
    pub animation: bool,
    pub duration: Duration,
    pub debug: bool,
    pub auto_resize: bool,
}

impl<S> fmt::Debug for DisplayConfig<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayConfig")
            .field("canvas", &self.canvas)
            .field("frames", &self.matrix.frames().len())
            .field("events", &self.events)
            .field("animation", &self.animation)
            .field("duration", &self.duration)
            .field("debug", &self.debug)
            .field("auto_resize", &self.auto_resize)
            .finish()
    }
}

/// Merge `user` over `defaults`.
///
/// # Errors
///
/// - [`DisplayError::MissingTemplate`] if neither layer has `element`
/// - [`DisplayError::Shape`] if neither layer has `matrix`, or the chosen
///   matrix is not a non-empty rectangular grid of equal frames
pub fn configure<S: Default>(
    user: DisplayOptions<S>,
    defaults: DisplayOptions<S>,
) -> Result<DisplayConfig<S>> {
    let matrix = user
        .matrix
        .or(defaults.matrix)
        .ok_or(DisplayError::Shape(ShapeError::NoFrames))?;
    let (cols, rows) = matrix.validate()?;
    let element = user
        .element
        .or(defaults.element)
        .ok_or(DisplayError::MissingTemplate)?;

    let config = DisplayConfig {
        canvas: user
            .canvas
            .or(defaults.canvas)
            .unwrap_or_else(|| CanvasSource::Surface(S::default())),
        matrix,
        element,
        events: user.events.or(defaults.events).unwrap_or_default(),
        animation: user.animation.or(defaults.animation).unwrap_or(false),
        duration: user
            .duration
            .or(defaults.duration)
            .unwrap_or(DEFAULT_DURATION),
        debug: user.debug.or(defaults.debug).unwrap_or(false),
        auto_resize: user.auto_resize.or(defaults.auto_resize).unwrap_or(false),
    };

    debug!(
        "display configured: {cols}x{rows}, {} frame(s), animation {}",
        config.matrix.frames().len(),
        config.animation
    );
    Ok(config)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::defaults::default_options;
    use crate::matrix::RawCell;
    use crate::surface::MemorySurface;
    use crate::types::Rgba;

    type Options = DisplayOptions<MemorySurface>;

    #[test]
    fn test_empty_user_takes_defaults() {
        let config = configure(Options::new(), default_options()).unwrap();
        assert_eq!(config.matrix.validate(), Ok((23, 11)));
        assert_eq!((config.element)(), CellTemplate::default());
        assert!(config.events.is_empty());
        assert!(!config.animation);
        assert_eq!(config.duration, DEFAULT_DURATION);
        assert!(matches!(config.canvas, CanvasSource::Surface(_)));
    }

    #[test]
    fn test_user_values_win() {
        let user = Options::new()
            .matrix(RawMatrix::filled(2, 2, RawCell::Lit))
            .template(CellTemplate::new(4, 0, 1).with_background(Rgba::RED))
            .animation(true)
            .duration(Duration::from_millis(250))
            .debug(true);

        let config = configure(user, default_options()).unwrap();
        assert_eq!(config.matrix.validate(), Ok((2, 2)));
        assert_eq!((config.element)().background, Rgba::RED);
        assert!(config.animation);
        assert_eq!(config.duration, Duration::from_millis(250));
        assert!(config.debug);
        assert!(!config.auto_resize);
    }

    #[test]
    fn test_events_replaced_wholesale() {
        let defaults = Options {
            events: Some(EventHandlers::new().on_click(|_| {}).on_hover(|_| {})),
            ..default_options()
        };
        let user = Options::new().events(EventHandlers::new().on_hover(|_| false));

        let config = configure(user, defaults).unwrap();
        assert!(!config.events.has_click());
        assert!(config.events.has_hover());
    }

    #[test]
    fn test_missing_template() {
        let defaults = Options {
            element: None,
            ..default_options()
        };
        let err = configure(Options::new(), defaults).unwrap_err();
        assert!(matches!(err, DisplayError::MissingTemplate));
    }

    #[test]
    fn test_missing_or_bad_matrix() {
        let err = configure(Options::new(), Options::new()).unwrap_err();
        assert!(matches!(err, DisplayError::Shape(ShapeError::NoFrames)));

        let ragged = RawMatrix::from_json("[[[1, 1], [1]]]").unwrap();
        let err = configure(Options::new().matrix(ragged), default_options()).unwrap_err();
        assert!(matches!(err, DisplayError::Shape(ShapeError::RaggedRow { .. })));
    }

    #[test]
    fn test_debug_output_omits_closures() {
        let options = Options::new().template(CellTemplate::default());
        let text = format!("{options:?}");
        assert!(text.contains("element: true"));
        assert!(text.contains("canvas: None"));
    }
}
