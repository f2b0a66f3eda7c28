//! Study-level records: manifests in, aggregate verdicts out.

use serde::{Deserialize, Serialize};

use super::frame::FrameLocator;

/// Processing outcome of a study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    /// Every frame of the selected series was classified.
    Success,
    /// Some frames were skipped (corrupt DICOM, classifier failures);
    /// the verdict covers the frames that survived.
    Partial,
    /// Classification never produced a usable frame set.
    Failed,
}

impl ProcessingStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Partial => "partial",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis-aligned bounding volume over positive frames' coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl BoundingBox {
    /// Whether the point lies inside the box (inclusive on all faces).
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        x >= self.x_min
            && x <= self.x_max
            && y >= self.y_min
            && y <= self.y_max
            && z >= self.z_min
            && z <= self.z_max
    }
}

/// Aggregate outcome for one study.
///
/// Immutable once computed. The orchestration layer applies elapsed time
/// and a downgraded status through the consuming `with_*` methods before
/// the record reaches the persistence layer; the statistical fields are
/// never touched after aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyResult {
    pub study_uid: String,
    /// The series selected for analysis.
    pub series_uid: String,
    /// Study-level pathology probability.
    pub probability_of_pathology: f64,
    /// Binary verdict: 1 = pathology present.
    pub pathology: u8,
    /// Two-sided confidence interval (lower, upper) for
    /// `probability_of_pathology`, clipped to [0, 1].
    pub ci_95: (f64, f64),
    /// Most severe finding among positive frames. Present only when
    /// `pathology == 1` and the classifier supplied per-frame labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_dangerous_pathology_type: Option<String>,
    /// Bounding volume enclosing all positive frames' coordinates.
    /// Present only when `pathology == 1` and coordinates were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathology_localization: Option<BoundingBox>,
    pub processing_status: ProcessingStatus,
    /// Elapsed seconds for classification + aggregation.
    pub time_of_processing: f64,
    /// Frames the verdict was computed over.
    pub n_frames: u32,
    /// Fraction of frames at or above the frame threshold.
    pub positive_fraction: f64,
    /// The positive frames, for downstream DICOM export.
    pub pathology_frames: Vec<FrameLocator>,
}

impl StudyResult {
    /// Apply the orchestrator-measured processing time.
    pub fn with_processing_time(mut self, seconds: f64) -> Self {
        self.time_of_processing = seconds;
        self
    }

    /// Downgrade the processing status (Success -> Partial).
    pub fn with_status(mut self, status: ProcessingStatus) -> Self {
        self.processing_status = status;
        self
    }
}

/// Descriptor of one series within a study manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub series_uid: String,
    pub frame_count: u32,
    /// DICOM series description, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// What the orchestration layer knows about a study before processing:
/// its identity and the series available for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyManifest {
    pub study_uid: String,
    pub series: Vec<SeriesDescriptor>,
}

impl StudyManifest {
    /// Total frame count across all series.
    pub fn total_frames(&self) -> u32 {
        self.series.iter().map(|s| s.frame_count).sum()
    }

    /// Look up a series descriptor by uid.
    pub fn series(&self, series_uid: &str) -> Option<&SeriesDescriptor> {
        self.series.iter().find(|s| s.series_uid == series_uid)
    }
}
