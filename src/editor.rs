//! The annotation editor component.
//!
//! One `AnnotationEditor` instance owns the registries, the undo/redo
//! stacks, and the gesture state machine for a single mounted drawing
//! view, and talks to the native side exclusively through the
//! [`DrawingSurface`] capability. All mutations happen on host UI
//! callbacks, which arrive in temporal order and never interleave, so the
//! editor is deliberately free of locking.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::{Config, enums::ColorSpec};
use crate::draw::stroke::{parse_point, random_stroke_id};
use crate::draw::{
    CanvasSize, DrawingRecord, HistoryEntry, HistoryStack, Registry, ShapeConfig, Stroke,
    UndoneEntry, generate_shape_id,
};
use crate::input::normalize::{Offset, round2};
use crate::input::{GestureSpace, GestureStart, GestureState};
use crate::observer::{EditorObserver, NullObserver};
use crate::permissions::PermissionProbe;
use crate::surface::{
    ChangePayload, DrawingSurface, ExportQuery, SaveRequest, SurfaceError, SurfaceEvent,
    SurfaceSettings,
};

/// Freehand-drawing and shape-annotation state bridge.
pub struct AnnotationEditor {
    config: Config,
    surface: Arc<dyn DrawingSurface>,
    observer: Arc<dyn EditorObserver>,
    registry: Registry,
    history: HistoryStack,
    gesture: GestureState,
    /// Records received before the first layout, replayed once a size is known
    pending: Vec<DrawingRecord>,
    canvas_size: CanvasSize,
    initialized: bool,
    /// Set by `mount()`; gesture events are dropped until then
    gesture_armed: bool,
    screen_scale: f64,
}

impl AnnotationEditor {
    /// Creates an editor bound to a native surface.
    ///
    /// Gesture handling stays disarmed until [`mount`](Self::mount)
    /// resolves the permission probe.
    pub fn new(config: Config, surface: Arc<dyn DrawingSurface>) -> Self {
        let screen_scale = config
            .platform
            .platform
            .screen_scale(config.platform.pixel_ratio);

        Self {
            config,
            surface,
            observer: Arc::new(NullObserver),
            registry: Registry::new(),
            history: HistoryStack::new(),
            gesture: GestureState::Idle,
            pending: Vec::new(),
            canvas_size: CanvasSize::default(),
            initialized: false,
            gesture_armed: false,
            screen_scale,
        }
    }

    /// Replaces the observer. Typically called once, before `mount`.
    pub fn with_observer(mut self, observer: Arc<dyn EditorObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Awaits the permission probe, pushes the static surface settings,
    /// and arms gesture handling.
    ///
    /// A denied permission is logged but does not block gesture
    /// attachment; saving is what actually needs the grant, and the
    /// native side reports that failure through the change channel.
    pub async fn mount(&mut self, probe: &dyn PermissionProbe) {
        let granted = probe
            .request_access(
                &self.config.permissions.dialog_title,
                &self.config.permissions.dialog_message,
            )
            .await;

        if !granted {
            warn!("storage permission denied; gesture input attached anyway");
        }

        self.surface.configure(&self.surface_settings());
        self.gesture_armed = true;
        info!("editor mounted (permission granted: {granted})");
    }

    /// Layout callback: records the canvas size and replays any records
    /// that arrived before the first layout.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_size = CanvasSize::new(width, height);
        self.initialized = true;

        if !self.pending.is_empty() {
            debug!("replaying {} queued path(s) after layout", self.pending.len());
            for record in std::mem::take(&mut self.pending) {
                self.add_path(record);
            }
        }
    }

    /// Current canvas size as reported by the last layout.
    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    /// Read access to the registered drawing records.
    pub fn paths(&self) -> &[DrawingRecord] {
        self.registry.paths()
    }

    /// Read access to the registered shape descriptors.
    pub fn shapes(&self) -> &[ShapeConfig] {
        self.registry.shapes()
    }

    // ------------------------------------------------------------------
    // Runtime prop updates
    // ------------------------------------------------------------------

    /// Updates the pen used by subsequent gestures.
    pub fn update_stroke(&mut self, color: ColorSpec, width: f64) {
        self.config.stroke.color = color;
        self.config.stroke.width = width;
    }

    /// Updates the view transform applied to subsequent gestures.
    pub fn set_transform(&mut self, scale: f64, rotation: f64) {
        self.config.gesture.scale = scale;
        self.config.gesture.rotation = rotation;
    }

    /// Enables or disables touch input delivery.
    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.config.gesture.touch_enabled = enabled;
    }

    // ------------------------------------------------------------------
    // Gesture lifecycle
    // ------------------------------------------------------------------

    /// Gesture-start callback: allocates a stroke and dispatches its
    /// first point.
    pub fn gesture_start(&mut self, start: GestureStart) {
        if !self.accepts_touch() {
            return;
        }

        let offset = Offset {
            x: start.page_x - start.local_x,
            y: start.page_y - start.local_y,
        };
        let space = GestureSpace {
            origin_x: start.page_x,
            origin_y: start.page_y,
            offset,
            scale: self.config.gesture.scale,
            rotation: self.config.gesture.rotation,
        };

        let color = self.config.stroke.color.to_color();
        let mut stroke = Stroke::new(random_stroke_id(), color, self.config.stroke.width);

        let (x, y) = space.start_point();
        self.surface
            .new_path(stroke.id, color.to_argb(), stroke.width * self.screen_scale);
        // The start point is re-rounded before density scaling; move
        // points are not. Preserved from the host component.
        self.surface
            .add_point(round2(x) * self.screen_scale, round2(y) * self.screen_scale, true);

        stroke.push_point(x, y);
        self.observer.stroke_started(x, y);
        self.gesture = GestureState::Active { stroke, space };
    }

    /// Gesture-move callback: appends a point unless the raw delta falls
    /// under the noise gate.
    pub fn gesture_move(&mut self, dx: f64, dy: f64) {
        if !self.accepts_touch() {
            return;
        }

        if let GestureState::Active { stroke, space } = &mut self.gesture {
            if let Some((x, y)) = space.project(dx, dy) {
                self.surface
                    .add_point(x * self.screen_scale, y * self.screen_scale, true);
                stroke.push_point(x, y);
                self.observer.stroke_changed(x, y);
            }
        }
    }

    /// Gesture-release callback: seals the stroke into the registry and
    /// the history stack.
    pub fn gesture_release(&mut self) {
        if !self.accepts_touch() {
            return;
        }

        if let GestureState::Active { stroke, .. } =
            std::mem::replace(&mut self.gesture, GestureState::Idle)
        {
            let record = DrawingRecord {
                stroke,
                size: self.canvas_size,
                author: self.config.author.clone(),
            };
            self.observer.stroke_ended(&record);
            self.history.record(HistoryEntry::Path {
                id: record.stroke.id,
            });
            // Freshly generated id; no duplicate to suppress.
            self.registry.push_path(record);
        }
        self.surface.end_path();
    }

    fn accepts_touch(&self) -> bool {
        self.gesture_armed && self.config.gesture.touch_enabled
    }

    // ------------------------------------------------------------------
    // Registry operations
    // ------------------------------------------------------------------

    /// Registers a drawing record and replays it onto the surface,
    /// rescaled from its captured canvas size to the current one.
    ///
    /// A record whose stroke id is already registered leaves the registry
    /// and history untouched (duplicate suppression), but is still
    /// replayed natively. Records arriving before the first layout are
    /// queued and replayed by [`set_canvas_size`](Self::set_canvas_size).
    pub fn add_path(&mut self, record: DrawingRecord) {
        if !self.initialized {
            if !self
                .pending
                .iter()
                .any(|queued| queued.stroke.id == record.stroke.id)
            {
                self.pending.push(record);
            }
            return;
        }

        let id = record.stroke.id;
        if self.registry.insert_path(record.clone()) {
            self.history.record(HistoryEntry::Path { id });
        } else {
            debug!("path {id} already registered; replaying without history push");
        }

        let points = self.rescale_points(&record);
        self.surface.add_path(
            id,
            record.stroke.color.to_argb(),
            record.stroke.width * self.screen_scale,
            &points,
        );
    }

    /// Removes a path locally and natively. No-op locally when the id is
    /// unknown; the native delete is dispatched regardless.
    pub fn delete_path(&mut self, id: u32) {
        self.registry.remove_path(id);
        self.surface.delete_path(id);
    }

    /// Registers a shape, generating an id when the descriptor has none,
    /// and instantiates it natively.
    pub fn add_shape(&mut self, mut config: ShapeConfig) {
        let id = config.id.take().unwrap_or_else(generate_shape_id);
        config.id = Some(id.clone());

        self.registry.insert_shape(config.clone());
        self.history.record(HistoryEntry::Shape { id });
        self.surface.add_shape(&config);
    }

    /// Removes a shape locally and natively. No-op locally when the id is
    /// unknown; the native delete is dispatched regardless.
    pub fn delete_shape_by_id(&mut self, id: &str) {
        self.registry.remove_shape(id);
        self.surface.delete_shape_by_id(id);
    }

    // ------------------------------------------------------------------
    // Undo / redo / clear
    // ------------------------------------------------------------------

    /// Undoes the most recent addition.
    ///
    /// No-op when the history is empty. When the referenced item has
    /// already left the registry (deleted directly, or swept by `clear`),
    /// the popped entry is discarded silently - accepted data loss, not
    /// an error.
    pub fn undo(&mut self) {
        match self.history.pop_last() {
            Some(HistoryEntry::Path { id }) => {
                if let Some(record) = self.registry.find_path(id).cloned() {
                    self.history.record_undone(UndoneEntry::Path(record));
                    self.delete_path(id);
                }
            }
            Some(HistoryEntry::Shape { id }) => {
                if let Some(shape) = self.registry.find_shape(&id).cloned() {
                    self.history.record_undone(UndoneEntry::Shape(shape));
                    self.delete_shape_by_id(&id);
                }
            }
            None => {}
        }
    }

    /// Re-applies the most recent undo. No-op when nothing was undone.
    pub fn redo(&mut self) {
        match self.history.pop_undone() {
            Some(UndoneEntry::Path(record)) => self.add_path(record),
            Some(UndoneEntry::Shape(shape)) => self.add_shape(shape),
            None => {}
        }
    }

    /// Empties the registry and the native canvas.
    ///
    /// Shapes are deleted one by one, in insertion order, so the native
    /// side can release per-shape resources. The history stacks are
    /// deliberately left alone: a later undo referencing a swept item is
    /// absorbed by the missing-item rule in [`undo`](Self::undo).
    pub fn clear(&mut self) {
        self.registry.clear_paths();
        self.gesture = GestureState::Idle;
        self.surface.clear();

        for shape in self.registry.take_shapes() {
            if let Some(id) = shape.id() {
                self.surface.delete_shape_by_id(id);
            }
        }
    }

    // ------------------------------------------------------------------
    // Shape selection passthroughs
    // ------------------------------------------------------------------

    /// Deletes whichever shape is natively selected.
    pub fn delete_selected_shape(&self) {
        self.surface.delete_selected_shape();
    }

    /// Drops the native shape selection.
    pub fn unselect_shape(&self) {
        self.surface.unselect_shape();
    }

    /// Grows the selected text shape's font by the native step.
    pub fn increase_selected_shape_fontsize(&self) {
        self.surface.increase_shape_fontsize();
    }

    /// Shrinks the selected text shape's font by the native step.
    pub fn decrease_selected_shape_fontsize(&self) {
        self.surface.decrease_shape_fontsize();
    }

    /// Replaces the selected text shape's content.
    pub fn change_selected_shape_text(&self, text: &str) {
        self.surface.change_shape_text(text);
    }

    // ------------------------------------------------------------------
    // Save / export / inbound events
    // ------------------------------------------------------------------

    /// Forwards a save request to the native surface. Completion arrives
    /// through [`handle_change`](Self::handle_change).
    pub fn save(&self, request: &SaveRequest) {
        debug!(
            "dispatching save ({}/{}.{})",
            request.folder,
            request.filename,
            request.format.as_str()
        );
        self.surface.save(request);
    }

    /// Runs the asynchronous base64 export query.
    pub async fn transfer_to_base64(&self, query: &ExportQuery) -> Result<String, SurfaceError> {
        self.surface.transfer_to_base64(query).await
    }

    /// Routes a raw native change payload to the observer.
    pub fn handle_change(&self, payload: ChangePayload) {
        match payload.classify() {
            SurfaceEvent::PathsUpdate(count) => self.observer.paths_changed(count),
            SurfaceEvent::SaveCompleted { success, path } => {
                self.observer.save_completed(success, path.as_deref())
            }
            SurfaceEvent::ShapeSelectionChanged { selected, text } => self
                .observer
                .shape_selection_changed(selected, text.as_deref()),
            SurfaceEvent::Unrecognized => {
                debug!("ignoring unrecognized change payload");
            }
        }
    }

    // ------------------------------------------------------------------

    fn surface_settings(&self) -> SurfaceSettings {
        let mut shape_style = self.config.shape.clone();
        // The native shape layer follows the pen, not its own section.
        shape_style.color = self.config.stroke.color.clone();
        shape_style.stroke_width = self.config.stroke.width;

        SurfaceSettings {
            shape_style,
            source_image: self.config.source_image.clone(),
            text_overlays: self.config.text.clone(),
        }
    }

    /// Maps a record's normalized points into device coordinates for the
    /// current layout. Records captured against an unknown (zero) size
    /// pass through unscaled.
    fn rescale_points(&self, record: &DrawingRecord) -> Vec<String> {
        let width_ratio = if record.size.width > 0.0 {
            self.canvas_size.width / record.size.width
        } else {
            1.0
        };
        let height_ratio = if record.size.height > 0.0 {
            self.canvas_size.height / record.size.height
        } else {
            1.0
        };

        record
            .stroke
            .data
            .iter()
            .filter_map(|label| parse_point(label))
            .map(|(x, y)| {
                format!(
                    "{},{}",
                    x * self.screen_scale * width_ratio,
                    y * self.screen_scale * height_ratio
                )
            })
            .collect()
    }
}
