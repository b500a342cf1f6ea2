//! Save/export plumbing.
//!
//! Saving is a fire-and-forget surface command; base64 export is an
//! asynchronous surface query. [`ExportManager`] bridges that async query
//! into the synchronous host-callback world: requests are non-blocking,
//! the transfer runs on a background task, and the outcome is polled from
//! wherever the host finds convenient.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tokio::sync::{Mutex, mpsc};

use crate::config::enums::ImageFormat;
use crate::config::types::ExportConfig;
use crate::surface::{DrawingSurface, ExportQuery, SaveRequest, SurfaceError};

/// Status of the current export operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// No export started or the last one has been acknowledged.
    Idle,
    /// A transfer is running on the native side.
    InProgress,
    /// The last transfer completed.
    Success,
    /// The last transfer failed.
    Failed(String),
}

/// Outcome of the last export (success carries the base64 payload).
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Success(String),
    Failed(String),
}

/// Shared state for managing async export operations.
///
/// Bridges the async surface query with the synchronous host event loop.
#[derive(Clone)]
pub struct ExportManager {
    /// Channel for sending export requests.
    request_tx: mpsc::UnboundedSender<ExportQuery>,
    /// Shared status of the current export operation.
    status: Arc<Mutex<ExportStatus>>,
    /// Shared result of the last export (if any).
    last_result: Arc<Mutex<Option<ExportOutcome>>>,
}

impl ExportManager {
    /// Creates an export manager.
    ///
    /// This spawns a background task that performs the surface transfers.
    ///
    /// # Arguments
    /// * `runtime_handle` - Tokio runtime handle for spawning async tasks
    /// * `surface` - The native surface to query
    pub fn new(
        runtime_handle: &tokio::runtime::Handle,
        surface: Arc<dyn DrawingSurface>,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ExportQuery>();
        let status = Arc::new(Mutex::new(ExportStatus::Idle));
        let last_result = Arc::new(Mutex::new(None));

        let status_clone = status.clone();
        let result_clone = last_result.clone();

        // Background task draining export requests one at a time
        runtime_handle.spawn(async move {
            while let Some(query) = request_rx.recv().await {
                log::debug!("Processing export request: {:?}", query);

                *status_clone.lock().await = ExportStatus::InProgress;

                match surface.transfer_to_base64(&query).await {
                    Ok(base64) => {
                        log::info!("Export successful ({} bytes of base64)", base64.len());
                        *status_clone.lock().await = ExportStatus::Success;
                        *result_clone.lock().await = Some(ExportOutcome::Success(base64));
                    }
                    Err(e) => {
                        let error_message = e.to_string();
                        log::error!("Export failed: {}", error_message);
                        *status_clone.lock().await = ExportStatus::Failed(error_message.clone());
                        *result_clone.lock().await = Some(ExportOutcome::Failed(error_message));
                    }
                }
            }
        });

        Self {
            request_tx,
            status,
            last_result,
        }
    }

    /// Requests a base64 export.
    ///
    /// Non-blocking; the transfer happens asynchronously in the
    /// background.
    pub fn request_export(&self, query: ExportQuery) -> Result<(), SurfaceError> {
        self.request_tx
            .send(query)
            .map_err(|_| SurfaceError::ManagerStopped)?;

        Ok(())
    }

    /// Get the current export status.
    pub async fn status(&self) -> ExportStatus {
        self.status.lock().await.clone()
    }

    /// Get the result of the last export and clear it.
    pub async fn take_result(&self) -> Option<ExportOutcome> {
        self.last_result.lock().await.take()
    }

    /// Try to get the result without waiting (non-blocking).
    pub fn try_take_result(&self) -> Option<ExportOutcome> {
        self.last_result.try_lock().ok().and_then(|mut r| r.take())
    }

    /// Reset status to idle.
    pub async fn reset(&self) {
        *self.status.lock().await = ExportStatus::Idle;
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - Image format supplying the extension
pub fn generate_filename(template: &str, format: ImageFormat) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format.as_str())
}

/// Default directory the host is asked to save into when the config
/// doesn't name one.
pub fn default_save_directory() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join("Sketchbridge")
}

impl SaveRequest {
    /// Builds a save request from the export defaults, stamping a fresh
    /// filename from the configured template.
    ///
    /// The filename carries no extension; the native surface appends one
    /// based on the format.
    pub fn from_config(config: &ExportConfig) -> Self {
        let now = Local::now();
        Self {
            format: config.format,
            folder: config.folder.clone(),
            filename: now.format(&config.filename_template).to_string(),
            transparent: config.transparent,
            include_image: config.include_image,
            include_text: config.include_text,
            crop_to_image_size: config.crop_to_image_size,
        }
    }
}

impl ExportQuery {
    /// Builds an export query from the export defaults.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            format: config.format,
            transparent: config.transparent,
            include_image: config.include_image,
            include_text: config.include_text,
            crop_to_image_size: config.crop_to_image_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ShapeConfig;
    use crate::surface::SurfaceSettings;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Surface whose export either succeeds with a fixed payload or fails.
    struct ExportOnlySurface {
        response: Result<String, String>,
    }

    #[async_trait]
    impl DrawingSurface for ExportOnlySurface {
        fn configure(&self, _settings: &SurfaceSettings) {}
        fn clear(&self) {}
        fn new_path(&self, _id: u32, _color: u32, _width: f64) {}
        fn add_point(&self, _x: f64, _y: f64, _is_move: bool) {}
        fn end_path(&self) {}
        fn add_path(&self, _id: u32, _color: u32, _width: f64, _points: &[String]) {}
        fn delete_path(&self, _id: u32) {}
        fn add_shape(&self, _shape: &ShapeConfig) {}
        fn delete_shape_by_id(&self, _id: &str) {}
        fn delete_selected_shape(&self) {}
        fn unselect_shape(&self) {}
        fn increase_shape_fontsize(&self) {}
        fn decrease_shape_fontsize(&self) {}
        fn change_shape_text(&self, _text: &str) {}
        fn save(&self, _request: &SaveRequest) {}

        async fn transfer_to_base64(&self, _query: &ExportQuery) -> Result<String, SurfaceError> {
            self.response
                .clone()
                .map_err(SurfaceError::TransferFailed)
        }
    }

    fn query() -> ExportQuery {
        ExportQuery::from_config(&ExportConfig::default())
    }

    async fn settle(manager: &ExportManager) -> ExportOutcome {
        for _ in 0..50 {
            if let Some(outcome) = manager.take_result().await {
                return outcome;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("export never completed");
    }

    #[tokio::test]
    async fn successful_export_reports_payload_and_status() {
        let surface = Arc::new(ExportOnlySurface {
            response: Ok("aGVsbG8=".to_string()),
        });
        let manager = ExportManager::new(&tokio::runtime::Handle::current(), surface);

        manager.request_export(query()).unwrap();

        match settle(&manager).await {
            ExportOutcome::Success(base64) => assert_eq!(base64, "aGVsbG8="),
            ExportOutcome::Failed(e) => panic!("unexpected failure: {e}"),
        }
        assert_eq!(manager.status().await, ExportStatus::Success);

        manager.reset().await;
        assert_eq!(manager.status().await, ExportStatus::Idle);
    }

    #[tokio::test]
    async fn failed_export_carries_the_error_message() {
        let surface = Arc::new(ExportOnlySurface {
            response: Err("renderer gone".to_string()),
        });
        let manager = ExportManager::new(&tokio::runtime::Handle::current(), surface);

        manager.request_export(query()).unwrap();

        match settle(&manager).await {
            ExportOutcome::Failed(message) => {
                assert!(message.contains("renderer gone"));
            }
            ExportOutcome::Success(_) => panic!("expected failure"),
        }
        assert!(matches!(
            manager.status().await,
            ExportStatus::Failed(_)
        ));
    }

    #[test]
    fn filenames_follow_the_template_and_format() {
        let filename = generate_filename("sketch_%Y%m%d", ImageFormat::Png);
        assert!(filename.starts_with("sketch_"));
        assert!(filename.ends_with(".png"));
        assert!(filename.contains("202"));
    }

    #[test]
    fn save_request_inherits_export_defaults() {
        let config = ExportConfig::default();
        let request = SaveRequest::from_config(&config);

        assert_eq!(request.folder, "Sketchbridge");
        assert_eq!(request.format, ImageFormat::Png);
        assert!(request.filename.starts_with("sketch_"));
        assert!(request.include_image);
        assert!(!request.transparent);
    }

    #[test]
    fn default_save_directory_is_under_pictures() {
        let dir = default_save_directory();
        assert!(dir.to_string_lossy().contains("Sketchbridge"));
    }
}
