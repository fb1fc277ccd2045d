use std::collections::BTreeMap;

use crate::{
    animation::{ease::Ease, tween::Tween},
    foundation::core::{Millis, Point},
    scene::{
        model::{EntityId, Lifecycle, Scene, SceneEntity},
        reconcile::{Placement, Reconciliation},
    },
};

/// Durations and curves for the three kinds of transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingSpec {
    pub exit_duration: Millis,
    /// Shared by enter and update transitions.
    pub transition_duration: Millis,
    pub enter_ease: Ease,
    pub update_ease: Ease,
    pub exit_ease: Ease,
    /// Font size entering words grow from and exiting words shrink to.
    pub min_font_size: f64,
}

impl Default for TimingSpec {
    fn default() -> Self {
        Self {
            exit_duration: Millis(600),
            transition_duration: Millis(900),
            enter_ease: Ease::CubicOut,
            update_ease: Ease::CubicInOut,
            exit_ease: Ease::CubicInOut,
            min_font_size: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Enter,
    Update,
    Exit,
}

/// The in-flight animation of one entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub entity: EntityId,
    pub position: Tween<Point>,
    pub font_size: Tween<f64>,
    pub opacity: Tween<f64>,
}

impl Transition {
    fn is_finished(&self, now: Millis) -> bool {
        self.position.is_finished(now)
            && self.font_size.is_finished(now)
            && self.opacity.is_finished(now)
    }

    fn sample_into(&self, entity: &mut SceneEntity, now: Millis) {
        entity.position = self.position.value_at(now);
        entity.font_size = self.font_size.value_at(now);
        entity.opacity = self.opacity.value_at(now);
    }
}

/// What changed while advancing the clock.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TickReport {
    /// Words whose enter or update transition completed.
    pub settled: Vec<String>,
    /// Words whose entity left the scene.
    pub removed: Vec<String>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.settled.is_empty() && self.removed.is_empty()
    }

    fn absorb(&mut self, other: TickReport) {
        self.settled.extend(other.settled);
        self.removed.extend(other.removed);
    }
}

/// Turns reconciliation results into timed transitions and advances them.
///
/// Holds at most one transition per word. Starting a new transition for a word replaces
/// the old record; the new one starts from whatever value the old one had reached.
#[derive(Clone, Debug, Default)]
pub struct AnimationDriver {
    timing: TimingSpec,
    transitions: BTreeMap<String, Transition>,
}

impl AnimationDriver {
    pub fn new(timing: TimingSpec) -> Self {
        Self {
            timing,
            transitions: BTreeMap::new(),
        }
    }

    pub fn timing(&self) -> &TimingSpec {
        &self.timing
    }

    pub fn is_idle(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.transitions.len()
    }

    pub fn transition(&self, word: &str) -> Option<&Transition> {
        self.transitions.get(word)
    }

    /// Start the transitions described by `rec` at time `now`.
    ///
    /// In-flight transitions are first advanced to `now`, so superseded animations hand
    /// over their interpolated values. Transitions that complete by `now` (including
    /// zero-length ones) are settled before returning.
    pub fn apply(&mut self, scene: &mut Scene, rec: &Reconciliation, now: Millis) -> TickReport {
        let mut report = self.tick(scene, now);

        match rec {
            Reconciliation::Reset { .. } => {
                self.transitions.clear();
                let removed = scene.clear();
                tracing::debug!(count = removed.len(), "scene reset");
                report.removed.extend(removed.into_iter().map(|e| e.word));
            }
            Reconciliation::Diff(delta) => {
                for word in &delta.exit {
                    self.start_exit(scene, word, now);
                }
                for placement in &delta.enter {
                    self.start_enter(scene, placement, now);
                }
                for placement in &delta.update {
                    self.start_update(scene, placement, now);
                }
            }
        }

        report.absorb(self.tick(scene, now));
        report
    }

    /// Sample every in-flight transition at `now` and retire the finished ones.
    ///
    /// Finished enter/update transitions leave their entity `Active`; finished exits
    /// delete the entity from the scene.
    pub fn tick(&mut self, scene: &mut Scene, now: Millis) -> TickReport {
        let mut report = TickReport::default();
        let mut retired = Vec::new();

        for (word, tr) in &self.transitions {
            let Some(entity) = scene.get_mut(word).filter(|e| e.id == tr.entity) else {
                // The entity this record animated is gone.
                retired.push(word.clone());
                continue;
            };
            tr.sample_into(entity, now);
            if !tr.is_finished(now) {
                continue;
            }

            retired.push(word.clone());
            match tr.kind {
                TransitionKind::Exit => {
                    scene.remove(word);
                    tracing::debug!(word = %word, id = tr.entity.0, "entity removed");
                    report.removed.push(word.clone());
                }
                TransitionKind::Enter | TransitionKind::Update => {
                    if entity.lifecycle == Lifecycle::Entering {
                        entity.lifecycle = Lifecycle::Active;
                    }
                    report.settled.push(word.clone());
                }
            }
        }

        for word in retired {
            self.transitions.remove(&word);
        }
        if !report.is_empty() {
            tracing::trace!(
                settled = report.settled.len(),
                removed = report.removed.len(),
                in_flight = self.transitions.len(),
                "tick"
            );
        }
        report
    }

    fn start_enter(&mut self, scene: &mut Scene, p: &Placement, now: Millis) {
        let t = self.timing;
        let (id, evicted) = scene.spawn(&p.word, p.target.position, t.min_font_size, 0.0);
        if let Some(old) = evicted {
            tracing::debug!(word = %p.word, old = old.id.0, new = id.0, "replaced exiting entity");
        }
        if let Some(entity) = scene.get_mut(&p.word) {
            set_placement(entity, p);
        }

        // Enters grow in place at their final slot; no horizontal travel.
        let tr = Transition {
            kind: TransitionKind::Enter,
            entity: id,
            position: Tween::hold(p.target.position, now),
            font_size: Tween::new(
                t.min_font_size,
                p.target.font_size,
                now,
                t.transition_duration,
                t.enter_ease,
            ),
            opacity: Tween::new(0.0, 1.0, now, t.transition_duration, t.enter_ease),
        };
        tracing::debug!(word = %p.word, id = id.0, rank = p.rank, "entity entering");
        self.transitions.insert(p.word.clone(), tr);
    }

    fn start_update(&mut self, scene: &mut Scene, p: &Placement, now: Millis) {
        let t = self.timing;
        let Some(entity) = scene.get_mut(&p.word) else {
            tracing::debug!(word = %p.word, "update for missing entity skipped");
            return;
        };
        set_placement(entity, p);

        let tr = Transition {
            kind: TransitionKind::Update,
            entity: entity.id,
            position: Tween::new(
                entity.position,
                p.target.position,
                now,
                t.transition_duration,
                t.update_ease,
            ),
            font_size: Tween::new(
                entity.font_size,
                p.target.font_size,
                now,
                t.transition_duration,
                t.update_ease,
            ),
            opacity: Tween::new(entity.opacity, 1.0, now, t.transition_duration, t.update_ease),
        };
        if let Some(prev) = self.transitions.insert(p.word.clone(), tr) {
            tracing::debug!(word = %p.word, superseded = ?prev.kind, "transition superseded");
        }
    }

    fn start_exit(&mut self, scene: &mut Scene, word: &str, now: Millis) {
        let t = self.timing;
        let Some(entity) = scene.get_mut(word) else {
            tracing::debug!(word = %word, "exit for missing entity skipped");
            return;
        };
        entity.lifecycle = Lifecycle::Exiting;

        let tr = Transition {
            kind: TransitionKind::Exit,
            entity: entity.id,
            position: Tween::hold(entity.position, now),
            font_size: Tween::new(
                entity.font_size,
                t.min_font_size,
                now,
                t.exit_duration,
                t.exit_ease,
            ),
            opacity: Tween::new(entity.opacity, 0.0, now, t.exit_duration, t.exit_ease),
        };
        tracing::debug!(word = %word, id = entity.id.0, "entity exiting");
        self.transitions.insert(word.to_owned(), tr);
    }
}

fn set_placement(entity: &mut SceneEntity, p: &Placement) {
    entity.count = p.count;
    entity.rank = p.rank;
    entity.target_position = p.target.position;
    entity.target_font_size = p.target.font_size;
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
