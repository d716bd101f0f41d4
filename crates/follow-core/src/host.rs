//! Host scene contract.
//!
//! The controller only needs five things from the compositing host: find a
//! layer by name, read its size, set its scale and position, and list layer
//! names for the settings UI. Host handles are tick-scoped values; dropping
//! one gives it back to the host.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// The part of the host scene graph the follow controller drives.
pub trait SceneHost {
    /// Handle to a resolved layer. Released when dropped.
    type Layer;

    /// Look up a layer by name in the active scene, including nested groups.
    fn resolve_layer(&self, name: &str) -> Option<Self::Layer>;

    /// Source dimensions of the layer; `(0, 0)` when not known yet.
    fn layer_dimensions(&self, layer: &Self::Layer) -> (u32, u32);

    fn set_layer_scale(&mut self, layer: &Self::Layer, scale_x: f64, scale_y: f64);

    fn set_layer_offset(&mut self, layer: &Self::Layer, x: f64, y: f64);

    /// Names of all layers, for populating the target selection list.
    fn enumerate_layer_names(&self) -> Vec<String>;
}

/// A host object that must be handed back when the holder is done with it.
///
/// Wraps values from acquire/release style host APIs (scene references,
/// source lists) so that release runs on every exit path, early returns and
/// panics included.
pub struct Scoped<T> {
    value: T,
    release: Option<Box<dyn FnOnce(&mut T)>>,
}

impl<T> Scoped<T> {
    /// Take ownership of an acquired `value`; `release` runs on drop.
    pub fn new(value: T, release: impl FnOnce(&mut T) + 'static) -> Self {
        Self {
            value,
            release: Some(Box::new(release)),
        }
    }
}

impl<T> Deref for Scoped<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Scoped<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Drop for Scoped<T> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&mut self.value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Scoped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoped")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counted(counter: &Rc<Cell<u32>>) -> Scoped<&'static str> {
        let counter = Rc::clone(counter);
        Scoped::new("scene", move |_| counter.set(counter.get() + 1))
    }

    #[test]
    fn releases_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        {
            let scene = counted(&released);
            assert_eq!(*scene, "scene");
            assert_eq!(released.get(), 0);
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn releases_on_early_return() {
        fn find(scene: Scoped<&'static str>, wanted: &str) -> Option<usize> {
            if *scene != wanted {
                return None;
            }
            Some(scene.len())
        }

        let released = Rc::new(Cell::new(0));
        assert_eq!(find(counted(&released), "other"), None);
        assert_eq!(find(counted(&released), "scene"), Some(5));
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn release_sees_value() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let mut list = Scoped::new(vec![1, 2, 3], move |v: &mut Vec<i32>| sink.set(v.len()));
        list.push(4);
        drop(list);
        assert_eq!(seen.get(), 4);
    }
}
