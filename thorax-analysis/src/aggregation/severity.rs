//! Fixed severity ranking over chest-CT finding labels.
//!
//! The classifier's labels are free-form strings; the ranking table
//! below is the single source of truth for which finding dominates a
//! study. Unknown labels rank below every known one.

use rustc_hash::FxHashMap;

use thorax_core::types::FrameResult;

/// Known finding labels, most severe first.
///
/// Rank values leave gaps so new findings can slot in without
/// renumbering stored results.
const SEVERITY_RANKING: &[(&str, u8)] = &[
    ("malignant_neoplasm", 90),
    ("pulmonary_embolism", 80),
    ("pneumothorax", 70),
    ("aortic_dissection", 60),
    ("pneumonia", 50),
    ("covid_pattern", 40),
    ("pleural_effusion", 30),
    ("nodule", 20),
    ("atelectasis", 10),
];

/// Severity rank of a finding label. Unknown labels rank 0.
pub fn severity_rank(label: &str) -> u8 {
    SEVERITY_RANKING
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

/// Pick the most severe finding among positive frames.
///
/// Ordering: severity rank, then mean probability of the label's
/// frames, then the lexicographically smallest label. Fully
/// deterministic for a given frame set. Returns `None` when no
/// positive frame carries a label.
pub fn most_dangerous(positive_frames: &[&FrameResult]) -> Option<String> {
    let mut by_label: FxHashMap<&str, (f64, u32)> = FxHashMap::default();
    for frame in positive_frames {
        if let Some(label) = frame.pathology_type.as_deref() {
            let entry = by_label.entry(label).or_insert((0.0, 0));
            entry.0 += frame.probability;
            entry.1 += 1;
        }
    }

    by_label
        .into_iter()
        .map(|(label, (sum, count))| (label, severity_rank(label), sum / count as f64))
        .max_by(|(label_a, rank_a, mean_a), (label_b, rank_b, mean_b)| {
            rank_a
                .cmp(rank_b)
                .then(mean_a.total_cmp(mean_b))
                // Prefer the lexicographically smaller label on a full tie.
                .then_with(|| label_b.cmp(label_a))
        })
        .map(|(label, _, _)| label.to_string())
}
