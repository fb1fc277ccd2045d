use crate::{
    foundation::core::{Canvas, Millis},
    scene::model::{EntityId, Lifecycle, Scene},
};

/// Drawable state of one entity at a point in time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EntityFrame {
    pub id: EntityId,
    pub word: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub opacity: f64,
    pub lifecycle: Lifecycle,
}

/// Snapshot of a scene, ordered left to right.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    pub time: Millis,
    pub canvas: Canvas,
    pub entities: Vec<EntityFrame>,
}

impl SceneFrame {
    pub fn capture(scene: &Scene, canvas: Canvas, time: Millis) -> Self {
        let mut entities: Vec<EntityFrame> = scene
            .iter()
            .map(|e| EntityFrame {
                id: e.id,
                word: e.word.clone(),
                x: e.position.x,
                y: e.position.y,
                font_size: e.font_size,
                opacity: e.opacity,
                lifecycle: e.lifecycle,
            })
            .collect();
        entities.sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.word.cmp(&b.word)));
        Self {
            time,
            canvas,
            entities,
        }
    }

    /// Words in left-to-right order.
    pub fn words(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.word.as_str()).collect()
    }

    pub fn get(&self, word: &str) -> Option<&EntityFrame> {
        self.entities.iter().find(|e| e.word == word)
    }
}
