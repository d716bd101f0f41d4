//! In-memory scene host.
//!
//! Stands in for the compositing application in tests and in the CLI
//! simulator. Each resolved layer handle holds a reference on the scene, the
//! way real hosts hand out a scene reference per lookup, and the host counts
//! outstanding references so leaks show up in assertions.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;

use crate::host::{SceneHost, Scoped};

/// A layer in the in-memory scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryLayer {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub scale: (f64, f64),
    pub offset: (f64, f64),
}

/// A write the controller made to the scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    SetScale { layer: String, x: f64, y: f64 },
    SetOffset { layer: String, x: f64, y: f64 },
}

/// Handle to a layer in a [`MemoryHost`].
pub type MemoryLayerRef = Scoped<usize>;

/// Scene graph held in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    layers: Vec<MemoryLayer>,
    calls: Vec<HostCall>,
    outstanding: Rc<Cell<usize>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MemoryHost::add_layer`].
    pub fn with_layer(mut self, name: impl Into<String>, width: u32, height: u32) -> Self {
        self.add_layer(name, width, height);
        self
    }

    /// Add a layer at identity transform.
    pub fn add_layer(&mut self, name: impl Into<String>, width: u32, height: u32) {
        self.layers.push(MemoryLayer {
            name: name.into(),
            width,
            height,
            scale: (1.0, 1.0),
            offset: (0.0, 0.0),
        });
    }

    /// Remove a layer. Returns whether it existed.
    pub fn remove_layer(&mut self, name: &str) -> bool {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.name != name);
        self.layers.len() != before
    }

    /// Rename a layer. Returns whether it existed.
    pub fn rename_layer(&mut self, from: &str, to: impl Into<String>) -> bool {
        match self.layers.iter_mut().find(|layer| layer.name == from) {
            Some(layer) => {
                layer.name = to.into();
                true
            }
            None => false,
        }
    }

    /// Change the size the host reports for a layer.
    pub fn set_dimensions(&mut self, name: &str, width: u32, height: u32) -> bool {
        match self.layers.iter_mut().find(|layer| layer.name == name) {
            Some(layer) => {
                layer.width = width;
                layer.height = height;
                true
            }
            None => false,
        }
    }

    pub fn layer(&self, name: &str) -> Option<&MemoryLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// All writes so far, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Drain recorded writes.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Scene references handed out and not yet released.
    pub fn outstanding_handles(&self) -> usize {
        self.outstanding.get()
    }

    fn acquire(&self, index: usize) -> MemoryLayerRef {
        let outstanding = Rc::clone(&self.outstanding);
        outstanding.set(outstanding.get() + 1);
        Scoped::new(index, move |_| outstanding.set(outstanding.get() - 1))
    }

    fn layer_mut(&mut self, handle: &MemoryLayerRef) -> Option<&mut MemoryLayer> {
        self.layers.get_mut(**handle)
    }
}

impl SceneHost for MemoryHost {
    type Layer = MemoryLayerRef;

    fn resolve_layer(&self, name: &str) -> Option<Self::Layer> {
        self.layers
            .iter()
            .position(|layer| layer.name == name)
            .map(|index| self.acquire(index))
    }

    fn layer_dimensions(&self, layer: &Self::Layer) -> (u32, u32) {
        self.layers
            .get(**layer)
            .map_or((0, 0), |layer| (layer.width, layer.height))
    }

    fn set_layer_scale(&mut self, layer: &Self::Layer, scale_x: f64, scale_y: f64) {
        if let Some(target) = self.layer_mut(layer) {
            target.scale = (scale_x, scale_y);
            let name = target.name.clone();
            self.calls.push(HostCall::SetScale {
                layer: name,
                x: scale_x,
                y: scale_y,
            });
        }
    }

    fn set_layer_offset(&mut self, layer: &Self::Layer, x: f64, y: f64) {
        if let Some(target) = self.layer_mut(layer) {
            target.offset = (x, y);
            let name = target.name.clone();
            self.calls.push(HostCall::SetOffset { layer: name, x, y });
        }
    }

    fn enumerate_layer_names(&self) -> Vec<String> {
        self.layers.iter().map(|layer| layer.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_exact_name() {
        let host = MemoryHost::new()
            .with_layer("Display Capture", 1920, 1080)
            .with_layer("Webcam", 640, 480);

        let layer = host.resolve_layer("Webcam").expect("layer should resolve");
        assert_eq!(host.layer_dimensions(&layer), (640, 480));
        assert!(host.resolve_layer("webcam").is_none());
    }

    #[test]
    fn handles_are_counted_until_dropped() {
        let host = MemoryHost::new().with_layer("Screen", 1920, 1080);
        let first = host.resolve_layer("Screen");
        let second = host.resolve_layer("Screen");
        assert_eq!(host.outstanding_handles(), 2);

        drop(first);
        drop(second);
        assert_eq!(host.outstanding_handles(), 0);
    }

    #[test]
    fn writes_are_recorded_and_applied() {
        let mut host = MemoryHost::new().with_layer("Screen", 1920, 1080);
        let layer = host.resolve_layer("Screen").unwrap();
        host.set_layer_scale(&layer, 2.0, 2.0);
        host.set_layer_offset(&layer, -960.0, -540.0);
        drop(layer);

        let state = host.layer("Screen").unwrap();
        assert_eq!(state.scale, (2.0, 2.0));
        assert_eq!(state.offset, (-960.0, -540.0));
        assert_eq!(host.take_calls().len(), 2);
        assert!(host.calls().is_empty());
    }

    #[test]
    fn rename_and_remove() {
        let mut host = MemoryHost::new().with_layer("Screen", 1920, 1080);
        assert!(host.rename_layer("Screen", "Monitor 2"));
        assert!(host.resolve_layer("Screen").is_none());
        assert!(host.remove_layer("Monitor 2"));
        assert!(!host.remove_layer("Monitor 2"));
        assert!(host.enumerate_layer_names().is_empty());
    }
}
