/// View layer
///
/// - `upload.rs` - drop zone and file picker
/// - `result.rs` - classification result panel
/// - `alert.rs` - error banner and loading indicator
///
/// Every view takes the `Palette` explicitly.

pub mod alert;
pub mod result;
pub mod upload;

pub use upload::{UploadZone, ZoneEvent};
