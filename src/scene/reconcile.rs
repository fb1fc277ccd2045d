use crate::{
    layout::scales::{Scales, Target},
    scene::model::Scene,
    text::ranker::RankedList,
};

/// Where one ranked word should go in the new steady state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    pub word: String,
    pub count: u32,
    /// Index in the new ranked list.
    pub rank: usize,
    pub target: Target,
}

/// Keyed difference between a scene and a ranked list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Delta {
    /// Words that need a fresh entity.
    pub enter: Vec<Placement>,
    /// Live words whose placement changed.
    pub update: Vec<Placement>,
    /// Live words absent from the new list.
    pub exit: Vec<String>,
    /// Live words whose placement is unchanged; their animations are left untouched.
    pub retained: Vec<String>,
}

impl Delta {
    /// Nothing enters, moves or leaves.
    pub fn is_empty(&self) -> bool {
        self.enter.is_empty() && self.update.is_empty() && self.exit.is_empty()
    }
}

/// Outcome of diffing a scene against a ranked list.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reconciliation {
    /// The list is empty: drop every entity at once, without animation.
    Reset { removed: Vec<String> },
    Diff(Delta),
}

impl Reconciliation {
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Reset { removed } => removed.is_empty(),
            Self::Diff(delta) => delta.is_empty(),
        }
    }
}

/// Partition `list` against `scene` by word.
///
/// Entities are matched by key, never by rank, so a word that only changed rank lands in
/// `update` and keeps its entity. An entity that is already exiting is never revived: if
/// its word comes back it is entered again as a new entity.
///
/// `scales` must be the scales built from `list`. An empty list, or missing scales,
/// yields [`Reconciliation::Reset`].
pub fn reconcile(scene: &Scene, list: &RankedList, scales: Option<&Scales>) -> Reconciliation {
    let Some(scales) = scales.filter(|_| !list.is_empty()) else {
        return Reconciliation::Reset {
            removed: scene.words().map(str::to_owned).collect(),
        };
    };

    let mut delta = Delta::default();
    for (rank, wc) in list.iter().enumerate() {
        let placement = Placement {
            word: wc.word.clone(),
            count: wc.count,
            rank,
            target: scales.target(rank, wc.count),
        };

        match scene.get(&wc.word) {
            Some(entity) if entity.lifecycle.is_live() => {
                let current = Target {
                    position: entity.target_position,
                    font_size: entity.target_font_size,
                };
                let unchanged = current.approx_eq(&placement.target)
                    && entity.count == wc.count
                    && entity.rank == rank;
                if unchanged {
                    delta.retained.push(placement.word);
                } else {
                    delta.update.push(placement);
                }
            }
            _ => delta.enter.push(placement),
        }
    }

    delta.exit = scene
        .iter()
        .filter(|e| e.lifecycle.is_live() && !list.contains(&e.word))
        .map(|e| e.word.clone())
        .collect();

    Reconciliation::Diff(delta)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/reconcile.rs"]
mod tests;
