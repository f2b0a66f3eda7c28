//! Per-frame records exchanged with the external frame classifier.

use serde::{Deserialize, Serialize};

/// Voxel coordinates locating a frame within the study volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialCoords {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One classified image frame.
///
/// Produced by the external classifier, consumed by the aggregator.
/// `frame_index` is unique within its `series_uid`; multi-frame DICOM
/// files contribute one record per slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    /// DICOM series the frame belongs to.
    pub series_uid: String,
    /// Position of the frame within its source.
    pub frame_index: u32,
    /// Frame-level pathology probability in [0.0, 1.0].
    pub probability: f64,
    /// Classifier-supplied finding label, when the classifier is
    /// multi-class at frame level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathology_type: Option<String>,
    /// Location of the frame within the study volume. Only consulted
    /// when the frame is judged positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spatial_coords: Option<SpatialCoords>,
}

impl FrameResult {
    /// Create a frame result with no label and no coordinates.
    pub fn new(series_uid: impl Into<String>, frame_index: u32, probability: f64) -> Self {
        Self {
            series_uid: series_uid.into(),
            frame_index,
            probability,
            pathology_type: None,
            spatial_coords: None,
        }
    }
}

/// A windowed pixel frame handed to the classifier.
///
/// Pixels are the 8-bit output of the external DICOM windowing step.
#[derive(Debug, Clone)]
pub struct FrameImage {
    pub series_uid: String,
    pub frame_index: u32,
    pub pixels: Vec<u8>,
}

/// Reference to a frame within a study, without its pixel data.
///
/// Downstream consumers use these to locate the source DICOM slices
/// of positive frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameLocator {
    pub series_uid: String,
    pub frame_index: u32,
}
