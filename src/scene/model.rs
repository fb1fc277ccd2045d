use std::collections::BTreeMap;

use crate::foundation::core::Point;

/// Identity of one scene entity.
///
/// Allocated fresh every time a word enters the scene; stable for as long as that word
/// stays in consecutive ranked lists.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EntityId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Entering,
    Active,
    Exiting,
    /// Terminal. Only observed on entities handed back after leaving the scene.
    Removed,
}

impl Lifecycle {
    /// Still part of the live ranking (not on its way out).
    pub fn is_live(self) -> bool {
        matches!(self, Self::Entering | Self::Active)
    }
}

/// One word on screen.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneEntity {
    pub id: EntityId,
    pub word: String,
    pub position: Point,
    pub font_size: f64,
    pub opacity: f64,
    pub lifecycle: Lifecycle,
    /// Count this entity was last placed for.
    pub count: u32,
    /// Rank index this entity was last placed at.
    pub rank: usize,
    /// Final position of the most recent placement.
    pub target_position: Point,
    /// Final font size of the most recent placement.
    pub target_font_size: f64,
}

/// Keyed set of on-screen words.
///
/// Entities live in a map keyed by word; rank changes never move them within storage,
/// they only change the entity's target values.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    entities: BTreeMap<String, SceneEntity>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&SceneEntity> {
        self.entities.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entities.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneEntity> {
        self.entities.values()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub(crate) fn get_mut(&mut self, word: &str) -> Option<&mut SceneEntity> {
        self.entities.get_mut(word)
    }

    /// Insert a brand-new entity for `word` in the `Entering` state.
    ///
    /// Any entity already held under `word` is evicted and returned marked `Removed`.
    pub(crate) fn spawn(
        &mut self,
        word: &str,
        position: Point,
        font_size: f64,
        opacity: f64,
    ) -> (EntityId, Option<SceneEntity>) {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let entity = SceneEntity {
            id,
            word: word.to_owned(),
            position,
            font_size,
            opacity,
            lifecycle: Lifecycle::Entering,
            count: 0,
            rank: 0,
            target_position: position,
            target_font_size: font_size,
        };
        let evicted = self
            .entities
            .insert(word.to_owned(), entity)
            .map(mark_removed);
        (id, evicted)
    }

    pub(crate) fn remove(&mut self, word: &str) -> Option<SceneEntity> {
        self.entities.remove(word).map(mark_removed)
    }

    /// Drop every entity, returning them marked `Removed`.
    pub(crate) fn clear(&mut self) -> Vec<SceneEntity> {
        std::mem::take(&mut self.entities)
            .into_values()
            .map(mark_removed)
            .collect()
    }
}

fn mark_removed(mut e: SceneEntity) -> SceneEntity {
    e.lifecycle = Lifecycle::Removed;
    e
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
