//! Authoritative live collection of paths and shapes.

use super::shape::ShapeConfig;
use super::stroke::DrawingRecord;

/// The in-memory source of truth for currently active paths and shapes.
///
/// Items are kept in insertion order (first = oldest). The registry only
/// does bookkeeping; pairing mutations with history pushes and native
/// surface commands is the editor's job.
#[derive(Debug, Default)]
pub struct Registry {
    paths: Vec<DrawingRecord>,
    shapes: Vec<ShapeConfig>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record unless a path with the same stroke id is already
    /// registered. Returns whether the record was inserted.
    pub fn insert_path(&mut self, record: DrawingRecord) -> bool {
        if self.find_path(record.stroke.id).is_some() {
            return false;
        }
        self.paths.push(record);
        true
    }

    /// Appends a record without duplicate suppression.
    ///
    /// Used when sealing a gesture, whose freshly generated id cannot
    /// collide with a registered one.
    pub fn push_path(&mut self, record: DrawingRecord) {
        self.paths.push(record);
    }

    /// Removes a path by stroke id. Returns whether anything was removed.
    pub fn remove_path(&mut self, id: u32) -> bool {
        let before = self.paths.len();
        self.paths.retain(|record| record.stroke.id != id);
        self.paths.len() != before
    }

    pub fn find_path(&self, id: u32) -> Option<&DrawingRecord> {
        self.paths.iter().find(|record| record.stroke.id == id)
    }

    pub fn paths(&self) -> &[DrawingRecord] {
        &self.paths
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Drops all paths, leaving shapes untouched.
    pub fn clear_paths(&mut self) {
        self.paths.clear();
    }

    /// Appends a shape descriptor. The caller guarantees the id is set.
    pub fn insert_shape(&mut self, shape: ShapeConfig) {
        self.shapes.push(shape);
    }

    /// Removes a shape by id. Returns whether anything was removed.
    pub fn remove_shape(&mut self, id: &str) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|shape| shape.id() != Some(id));
        self.shapes.len() != before
    }

    pub fn find_shape(&self, id: &str) -> Option<&ShapeConfig> {
        self.shapes.iter().find(|shape| shape.id() == Some(id))
    }

    pub fn shapes(&self) -> &[ShapeConfig] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Removes and returns all shapes in insertion order.
    pub fn take_shapes(&mut self) -> Vec<ShapeConfig> {
        std::mem::take(&mut self.shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::draw::shape::{ShapeConfig, ShapeType};
    use crate::draw::stroke::{CanvasSize, Stroke};

    fn record(id: u32) -> DrawingRecord {
        DrawingRecord {
            stroke: Stroke::new(id, BLACK, 3.0),
            size: CanvasSize::new(200.0, 100.0),
            author: Some("tester".to_string()),
        }
    }

    fn shape(id: &str) -> ShapeConfig {
        ShapeConfig {
            id: Some(id.to_string()),
            ..ShapeConfig::new(ShapeType::Circle)
        }
    }

    #[test]
    fn duplicate_path_ids_are_suppressed() {
        let mut registry = Registry::new();
        assert!(registry.insert_path(record(1)));
        assert!(!registry.insert_path(record(1)));
        assert_eq!(registry.path_count(), 1);
    }

    #[test]
    fn remove_path_reports_whether_anything_went_away() {
        let mut registry = Registry::new();
        registry.insert_path(record(1));

        assert!(registry.remove_path(1));
        assert!(!registry.remove_path(1));
        assert_eq!(registry.path_count(), 0);
    }

    #[test]
    fn shapes_keep_insertion_order() {
        let mut registry = Registry::new();
        registry.insert_shape(shape("a"));
        registry.insert_shape(shape("b"));
        registry.insert_shape(shape("c"));

        registry.remove_shape("b");
        let ids: Vec<_> = registry.shapes().iter().filter_map(|s| s.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let drained: Vec<_> = registry
            .take_shapes()
            .into_iter()
            .filter_map(|s| s.id)
            .collect();
        assert_eq!(drained, vec!["a", "c"]);
        assert_eq!(registry.shape_count(), 0);
    }

    #[test]
    fn clear_paths_leaves_shapes_alone() {
        let mut registry = Registry::new();
        registry.insert_path(record(1));
        registry.insert_shape(shape("a"));

        registry.clear_paths();

        assert_eq!(registry.path_count(), 0);
        assert_eq!(registry.shape_count(), 1);
    }
}
