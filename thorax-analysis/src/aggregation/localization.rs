//! Bounding-volume localization over positive frames.

use thorax_core::types::{BoundingBox, FrameResult};

/// Compute the axis-aligned bounding volume enclosing every positive
/// frame's coordinates.
///
/// Frames without coordinates do not contribute. Returns `None` when no
/// positive frame carries coordinates; the result serializes as absent,
/// never as a zeroed box.
pub fn bounding_volume(positive_frames: &[&FrameResult]) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;

    for frame in positive_frames {
        let Some(coords) = frame.spatial_coords else {
            continue;
        };
        match bbox.as_mut() {
            None => {
                bbox = Some(BoundingBox {
                    x_min: coords.x,
                    x_max: coords.x,
                    y_min: coords.y,
                    y_max: coords.y,
                    z_min: coords.z,
                    z_max: coords.z,
                });
            }
            Some(b) => {
                b.x_min = b.x_min.min(coords.x);
                b.x_max = b.x_max.max(coords.x);
                b.y_min = b.y_min.min(coords.y);
                b.y_max = b.y_max.max(coords.y);
                b.z_min = b.z_min.min(coords.z);
                b.z_max = b.z_max.max(coords.z);
            }
        }
    }

    bbox
}
