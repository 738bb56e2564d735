//! Display Controller - configuration, lifecycle, events and animation.
//!
//! # Lifecycle
//!
//! ```text
//! new / with_defaults   merge options, validate the matrix
//!        │
//!      init             resolve canvas → render grid → bind handlers → refresh
//!        │
//!  refresh / dispatch / tick / pause / resume
//!        │
//!      clear            empty the canvas, drop bindings (init rebuilds)
//! ```
//!
//! Every fallible step validates before it touches the surface, so an error
//! from `init` leaves the canvas as it was.
//!
//! # Example
//!
//! ```
//! use spark_matrix::display::{Display, DisplayOptions};
//! use spark_matrix::interaction::{EventHandlers, PointerEvent, Suppress};
//! use spark_matrix::matrix::{RawCell, RawMatrix};
//! use spark_matrix::surface::{MemorySurface, Surface};
//!
//! let options = DisplayOptions::new()
//!     .matrix(RawMatrix::filled(3, 1, RawCell::Lit))
//!     .events(EventHandlers::new().on_click(|cell| {
//!         cell.toggle();
//!         false
//!     }));
//!
//! let mut display: Display<MemorySurface> = Display::new(options).unwrap();
//! display.init().unwrap();
//! assert_eq!(display.surface().unwrap().len(), 3);
//!
//! let element = display.element_at(1, 0).unwrap();
//! assert_eq!(display.dispatch(PointerEvent::click(element)), Suppress::all());
//!
//! display.refresh().unwrap();
//! assert_eq!(display.surface().unwrap().visible_count(), 2);
//! ```

pub mod defaults;
mod options;

pub use defaults::{banner_matrix, default_options, DEFAULT_DURATION};
pub use options::{configure, DisplayConfig, DisplayOptions, TemplateFactory};

use std::time::Duration;

use log::{debug, trace};
use spark_signals::{signal, Signal};

use crate::error::{DisplayError, Result};
use crate::grid::Grid;
use crate::interaction::{
    Bindings, EventHandlers, HoverTracker, PointerEvent, PointerKind, PointerTarget, Suppress,
};
use crate::layout::GridGeometry;
use crate::matrix::{Matrix, RawMatrix};
use crate::surface::{CanvasSource, ElementId, Surface};

/// A dot-matrix display bound to one host surface.
pub struct Display<S> {
    /// Unresolved canvas; taken by the first `init`.
    canvas: Option<CanvasSource<S>>,
    /// Lookup key that failed to resolve. Later `init` calls report it again.
    unresolved: Option<String>,
    raw: RawMatrix,
    element: TemplateFactory,
    events: EventHandlers,
    animation: bool,
    duration: Duration,
    debug: bool,
    auto_resize: bool,

    grid: Option<Grid<S>>,
    bindings: Bindings,
    hover: HoverTracker,

    paused: bool,
    elapsed: Duration,
    frame: Signal<usize>,
}

impl<S: Surface + Default> Display<S> {
    /// Configure over the built-in defaults.
    pub fn new(options: DisplayOptions<S>) -> Result<Self> {
        Self::with_defaults(options, default_options())
    }

    /// Configure over a caller-supplied defaults layer.
    pub fn with_defaults(options: DisplayOptions<S>, defaults: DisplayOptions<S>) -> Result<Self> {
        Ok(Self::from_config(configure(options, defaults)?))
    }
}

impl<S: Surface> Display<S> {
    pub fn from_config(config: DisplayConfig<S>) -> Self {
        Self {
            canvas: Some(config.canvas),
            unresolved: None,
            raw: config.matrix,
            element: config.element,
            events: config.events,
            animation: config.animation,
            duration: config.duration,
            debug: config.debug,
            auto_resize: config.auto_resize,
            grid: None,
            bindings: Bindings::new(),
            hover: HoverTracker::new(),
            paused: false,
            elapsed: Duration::ZERO,
            frame: signal(0),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Render the matrix onto the canvas and bind the configured handlers.
    ///
    /// The canvas is resolved on the first call only. Calling `init` again
    /// clears the canvas and rebuilds from the configured matrix.
    pub fn init(&mut self) -> Result<()> {
        self.raw.validate()?;
        let template = (self.element)();

        let mut grid = match self.grid.take() {
            Some(mut previous) => {
                previous.clear();
                Grid::new(previous.into_surface(), self.raw.clone())
            }
            None => Grid::new(self.resolve_canvas()?, self.raw.clone()),
        };

        if let Err(err) = grid.render(template) {
            self.grid = Some(grid);
            return Err(err.into());
        }

        self.bindings.clear();
        self.hover.reset();
        if let Some(matrix) = grid.matrix() {
            let bindings = &mut self.bindings;
            let events = &self.events;
            matrix.traverse(matrix.active_frame(), |cell, x, y, _| {
                if let Some(id) = cell.element() {
                    bindings.bind(id, x, y, events);
                }
            });
        }
        grid.refresh()?;

        debug!(
            "display initialized: {} element(s), {} bound",
            grid.surface().len(),
            self.bindings.len()
        );

        self.elapsed = Duration::ZERO;
        self.frame.set(0);
        self.grid = Some(grid);
        Ok(())
    }

    /// Resolve the configured canvas, remembering a failed lookup.
    fn resolve_canvas(&mut self) -> Result<S> {
        let Some(canvas) = self.canvas.take() else {
            return Err(match &self.unresolved {
                Some(key) => DisplayError::HostUnavailable { key: key.clone() },
                None => DisplayError::NotInitialized,
            });
        };
        canvas.prepare().inspect_err(|err| {
            if let DisplayError::HostUnavailable { key } = err {
                self.unresolved = Some(key.clone());
            }
        })
    }

    /// Push cell state to the canvas.
    pub fn refresh(&mut self) -> Result<()> {
        self.grid
            .as_mut()
            .ok_or(DisplayError::NotInitialized)?
            .refresh()
    }

    /// Empty the canvas and drop every binding.
    ///
    /// The surface is kept; `init` renders onto it again.
    pub fn clear(&mut self) {
        if let Some(grid) = self.grid.as_mut() {
            grid.clear();
        }
        self.bindings.clear();
        self.hover.reset();
        debug!("display cleared");
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route a host pointer event to its cell's handler.
    ///
    /// Returns the flags the host must honor. Events that resolve to no
    /// bound cell return no flags.
    pub fn dispatch(&mut self, event: PointerEvent) -> Suppress {
        let Some((x, y)) = self.resolve(event) else {
            trace!("pointer event {event:?} resolved to no bound cell");
            return Suppress::empty();
        };
        let Some(handler) = self.events.handler_for(event.kind).cloned() else {
            return Suppress::empty();
        };
        let Some(cell) = self
            .grid
            .as_mut()
            .and_then(Grid::matrix_mut)
            .and_then(|matrix| matrix.cell_mut(x, y))
        else {
            return Suppress::empty();
        };

        let verdict = handler(cell);
        trace!("{:?} on cell ({x}, {y}) → {verdict:?}", event.kind);
        verdict.suppress()
    }

    /// Cell the event should fire on, updating hover state on the way.
    fn resolve(&mut self, event: PointerEvent) -> Option<(usize, usize)> {
        let grid = self.grid.as_ref()?;
        let (hit, bound) = match event.target {
            PointerTarget::Element(id) => {
                let cell = self.bindings.resolve(id, event.kind);
                (cell, cell)
            }
            PointerTarget::Canvas(point) => {
                let hit = grid.cell_at(point);
                let bound = hit.filter(|&(x, y)| {
                    grid.element_at(x, y)
                        .is_some_and(|id| self.bindings.resolve(id, event.kind).is_some())
                });
                (hit, bound)
            }
        };

        match event.kind {
            PointerKind::Click => bound,
            PointerKind::HoverEnter => {
                self.hover.update(hit);
                bound
            }
            PointerKind::Move => self.hover.update(hit).and(bound),
        }
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Advance animation time by `elapsed`.
    ///
    /// Every full `duration` moves the active frame forward (wrapping) and
    /// refreshes. Returns whether the frame changed. Does nothing while
    /// animation is off, paused, or before `init`.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.animation || self.paused {
            return false;
        }
        let Some(grid) = self.grid.as_mut() else {
            return false;
        };
        let Some(matrix) = grid.matrix_mut() else {
            return false;
        };

        self.elapsed = self.elapsed.saturating_add(elapsed);
        let period = self.duration.as_nanos().max(1);
        let steps = self.elapsed.as_nanos() / period;
        if steps == 0 {
            return false;
        }
        self.elapsed = Duration::from_nanos(u64::try_from(self.elapsed.as_nanos() % period).unwrap_or(0));

        let count = matrix.frame_count();
        let skip = usize::try_from(steps % count as u128).unwrap_or(0);
        let next = (matrix.active_frame() + skip) % count;
        if matrix.set_active_frame(next).is_err() {
            return false;
        }
        if grid.refresh().is_err() {
            return false;
        }

        trace!("animation advanced to frame {next}");
        self.frame.set(next);
        true
    }

    /// Show frame `index` and refresh.
    pub fn set_frame(&mut self, index: usize) -> Result<()> {
        let grid = self.grid.as_mut().ok_or(DisplayError::NotInitialized)?;
        grid.matrix_mut()
            .ok_or(DisplayError::NotInitialized)?
            .set_active_frame(index)?;
        grid.refresh()?;
        self.frame.set(index);
        Ok(())
    }

    /// Stop animation time. No effect when animation is off.
    pub fn pause(&mut self) {
        if !self.animation {
            return;
        }
        self.paused = true;
        debug!("animation paused");
    }

    pub fn resume(&mut self) {
        if self.paused {
            debug!("animation resumed");
        }
        self.paused = false;
    }

    /// Reactive active-frame index.
    pub fn frame_signal(&self) -> Signal<usize> {
        self.frame.clone()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_initialized(&self) -> bool {
        self.grid.as_ref().is_some_and(Grid::is_rendered)
    }

    pub fn is_animated(&self) -> bool {
        self.animation
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    pub fn events(&self) -> &EventHandlers {
        &self.events
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// The normalized matrix, once initialized.
    pub fn matrix(&self) -> Option<&Matrix> {
        self.grid.as_ref()?.matrix()
    }

    /// Mutable matrix access. Changes reach the canvas on the next
    /// [`refresh`](Self::refresh).
    pub fn matrix_mut(&mut self) -> Option<&mut Matrix> {
        self.grid.as_mut()?.matrix_mut()
    }

    pub fn geometry(&self) -> Option<&GridGeometry> {
        self.grid.as_ref()?.geometry()
    }

    /// The resolved surface, once `init` has resolved it.
    pub fn surface(&self) -> Option<&S> {
        self.grid.as_ref().map(Grid::surface)
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.grid.as_mut().map(Grid::surface_mut)
    }

    /// Element rendered for cell `(x, y)`.
    pub fn element_at(&self, x: usize, y: usize) -> Option<ElementId> {
        self.grid.as_ref()?.element_at(x, y)
    }
}

// =============================================================================
// TESTS
// =============================================================================
