//! Process-wide registry of active figures.
//!
//! Operations without an explicit surface land on the active figure, one per
//! dimensionality. Handles are stable across select/clear; closing the last
//! figure re-seeds a fresh default so the active handle always resolves.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::OnceCell;

use crate::error::{PlotError, PlotResult};
use crate::plots::{Figure2, Figure3};

/// Identifier of a registered figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FigureHandle(u32);

impl FigureHandle {
    pub fn as_u32(self) -> u32 {
        self.0
    }

    fn next(self) -> FigureHandle {
        FigureHandle(self.0 + 1)
    }
}

impl From<u32> for FigureHandle {
    fn from(value: u32) -> Self {
        FigureHandle(value.max(1))
    }
}

impl Default for FigureHandle {
    fn default() -> Self {
        FigureHandle(1)
    }
}

struct FigureRegistry<F> {
    current: FigureHandle,
    next_handle: FigureHandle,
    figures: HashMap<FigureHandle, F>,
}

impl<F: Default> Default for FigureRegistry<F> {
    fn default() -> Self {
        Self {
            current: FigureHandle::default(),
            next_handle: FigureHandle::default().next(),
            figures: HashMap::new(),
        }
    }
}

impl<F: Default + Clone> FigureRegistry<F> {
    fn current_mut(&mut self) -> &mut F {
        self.figures.entry(self.current).or_default()
    }

    fn select(&mut self, handle: FigureHandle) {
        self.current = handle;
        self.figures.entry(handle).or_default();
    }

    fn new_handle(&mut self) -> FigureHandle {
        let handle = self.next_handle;
        self.next_handle = self.next_handle.next();
        self.current = handle;
        self.figures.entry(handle).or_default();
        handle
    }

    fn snapshot(&self, handle: FigureHandle) -> Option<F> {
        self.figures.get(&handle).cloned()
    }

    fn replace_current(&mut self, figure: F) {
        self.figures.insert(self.current, figure);
    }

    fn clear(&mut self, target: Option<FigureHandle>) -> PlotResult<FigureHandle> {
        let handle = target.unwrap_or(self.current);
        match self.figures.get_mut(&handle) {
            Some(figure) => {
                *figure = F::default();
                Ok(handle)
            }
            None => Err(PlotError::UnknownFigure {
                handle: handle.as_u32(),
            }),
        }
    }

    fn close(&mut self, target: Option<FigureHandle>) -> PlotResult<FigureHandle> {
        let handle = target.unwrap_or(self.current);
        if self.figures.remove(&handle).is_none() {
            return Err(PlotError::UnknownFigure {
                handle: handle.as_u32(),
            });
        }
        if self.current == handle {
            if let Some(&next) = self.figures.keys().next() {
                self.current = next;
            } else {
                let default = FigureHandle::default();
                self.current = default;
                self.next_handle = default.next();
                self.figures.insert(default, F::default());
            }
        }
        Ok(handle)
    }
}

static REGISTRY2: OnceCell<Mutex<FigureRegistry<Figure2>>> = OnceCell::new();
static REGISTRY3: OnceCell<Mutex<FigureRegistry<Figure3>>> = OnceCell::new();

fn registry2() -> MutexGuard<'static, FigureRegistry<Figure2>> {
    REGISTRY2
        .get_or_init(|| Mutex::new(FigureRegistry::default()))
        .lock()
        .expect("figure registry poisoned")
}

fn registry3() -> MutexGuard<'static, FigureRegistry<Figure3>> {
    REGISTRY3
        .get_or_init(|| Mutex::new(FigureRegistry::default()))
        .lock()
        .expect("figure registry poisoned")
}

/// Create a fresh 2D figure and make it active.
pub fn new_figure2() -> FigureHandle {
    registry2().new_handle()
}

/// Create a fresh 3D figure and make it active.
pub fn new_figure3() -> FigureHandle {
    registry3().new_handle()
}

/// Make `handle` the active 2D figure, creating it if needed.
pub fn select_figure2(handle: FigureHandle) {
    registry2().select(handle);
}

/// Make `handle` the active 3D figure, creating it if needed.
pub fn select_figure3(handle: FigureHandle) {
    registry3().select(handle);
}

pub fn active_figure2_handle() -> FigureHandle {
    registry2().current
}

pub fn active_figure3_handle() -> FigureHandle {
    registry3().current
}

/// Snapshot of a registered 2D figure, if it exists.
pub fn figure2(handle: FigureHandle) -> Option<Figure2> {
    registry2().snapshot(handle)
}

/// Snapshot of a registered 3D figure, if it exists.
pub fn figure3(handle: FigureHandle) -> Option<Figure3> {
    registry3().snapshot(handle)
}

/// Snapshot of the active 2D figure.
pub fn active_figure2() -> Figure2 {
    let mut reg = registry2();
    reg.current_mut().clone()
}

/// Snapshot of the active 3D figure.
pub fn active_figure3() -> Figure3 {
    let mut reg = registry3();
    reg.current_mut().clone()
}

/// Replace the active 2D figure wholesale (canvas helpers use this).
pub fn set_active_figure2(figure: Figure2) {
    registry2().replace_current(figure);
}

/// Replace the active 3D figure wholesale.
pub fn set_active_figure3(figure: Figure3) {
    registry3().replace_current(figure);
}

/// Reset a figure to a fresh default, dropping primitives and settings.
pub fn clear_figure2(target: Option<FigureHandle>) -> PlotResult<FigureHandle> {
    registry2().clear(target)
}

pub fn clear_figure3(target: Option<FigureHandle>) -> PlotResult<FigureHandle> {
    registry3().clear(target)
}

/// Remove a figure from the registry.
pub fn close_figure2(target: Option<FigureHandle>) -> PlotResult<FigureHandle> {
    registry2().close(target)
}

pub fn close_figure3(target: Option<FigureHandle>) -> PlotResult<FigureHandle> {
    registry3().close(target)
}

pub(crate) fn with_active_figure2<R>(f: impl FnOnce(&mut Figure2) -> R) -> R {
    let mut reg = registry2();
    f(reg.current_mut())
}

pub(crate) fn with_active_figure3<R>(f: impl FnOnce(&mut Figure3) -> R) -> R {
    let mut reg = registry3();
    f(reg.current_mut())
}
