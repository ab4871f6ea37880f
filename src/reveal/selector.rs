use crate::foundation::core::ShapeId;
use crate::reveal::sampler::ShapeSample;

/// Shapes chosen for the outline draw, ranked longest first, plus the measured shapes that stay
/// hidden.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SilhouetteSet {
    members: Vec<ShapeSample>,
    hidden: Vec<ShapeId>,
}

impl SilhouetteSet {
    /// Members in rank order (rank 0 is the longest shape).
    pub fn members(&self) -> &[ShapeSample] {
        &self.members
    }

    /// Measured shapes that did not make the cut, in document order.
    pub fn hidden(&self) -> &[ShapeId] {
        &self.hidden
    }

    /// Number of ranked members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` when nothing was measurable.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Rank `samples` by length and keep the top `keep` (at least one when any sample exists).
///
/// The sort is stable, so equal lengths keep the document order they were sampled in.
pub fn select(samples: &[ShapeSample], keep: usize) -> SilhouetteSet {
    if samples.is_empty() {
        return SilhouetteSet::default();
    }

    let mut ranked = samples.to_vec();
    ranked.sort_by(|a, b| b.length.total_cmp(&a.length));

    let k = keep.max(1).min(ranked.len());
    let mut hidden: Vec<ShapeId> = ranked.split_off(k).into_iter().map(|s| s.shape).collect();
    hidden.sort_unstable();

    SilhouetteSet {
        members: ranked,
        hidden,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/selector.rs"]
mod tests;
