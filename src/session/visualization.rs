use crate::{
    animation::driver::{AnimationDriver, TickReport},
    config::model::VizConfig,
    foundation::core::Millis,
    foundation::error::WordrankResult,
    layout::scales::build_scales,
    render::frame::SceneFrame,
    scene::{
        model::Scene,
        reconcile::{Reconciliation, reconcile},
    },
    text::ranker::{FrequencyRanker, RankedList},
};

/// Result of one [`Visualization::render`] call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderReport {
    pub reconciliation: Reconciliation,
    /// Transitions that completed or entities that left while applying the render.
    pub tick: TickReport,
}

/// One animated word-frequency display.
///
/// Owns the only [`Scene`] of the display together with the driver that animates it. All
/// mutation goes through `&mut self`, so updates are serialized by construction; time
/// advances only when the host passes a later `now`.
#[derive(Debug)]
pub struct Visualization {
    config: VizConfig,
    ranker: FrequencyRanker,
    scene: Scene,
    driver: AnimationDriver,
    clock: Millis,
}

impl Visualization {
    pub fn new(config: VizConfig) -> WordrankResult<Self> {
        Self::with_ranker(config, FrequencyRanker::default())
    }

    pub fn with_ranker(config: VizConfig, ranker: FrequencyRanker) -> WordrankResult<Self> {
        config.validate()?;
        let driver = AnimationDriver::new(config.timing());
        Ok(Self {
            config,
            ranker,
            scene: Scene::new(),
            driver,
            clock: Millis::ZERO,
        })
    }

    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Latest clock value seen.
    pub fn clock(&self) -> Millis {
        self.clock
    }

    /// Every transition has finished.
    pub fn is_settled(&self) -> bool {
        self.driver.is_idle()
    }

    /// Reconcile `list` against the scene and start the resulting animations at `now`.
    #[tracing::instrument(skip(self, list), fields(words = list.len()))]
    pub fn render(&mut self, list: &RankedList, now: Millis) -> RenderReport {
        let now = self.advance_clock(now);
        // Bring in-flight values up to `now` before diffing against them.
        let mut tick = self.driver.tick(&mut self.scene, now);

        let scales = build_scales(list, &self.config.layout());
        let reconciliation = reconcile(&self.scene, list, scales.as_ref());
        if let Reconciliation::Diff(delta) = &reconciliation {
            tracing::debug!(
                enter = delta.enter.len(),
                update = delta.update.len(),
                exit = delta.exit.len(),
                retained = delta.retained.len(),
                "reconciled"
            );
        }

        let applied = self.driver.apply(&mut self.scene, &reconciliation, now);
        tick.settled.extend(applied.settled);
        tick.removed.extend(applied.removed);

        RenderReport {
            reconciliation,
            tick,
        }
    }

    /// Rank `text` and render the result. Returns the ranked list that was rendered.
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn submit_text(&mut self, text: &str, now: Millis) -> RankedList {
        let list = self.ranker.rank(text);
        self.render(&list, now);
        list
    }

    /// Advance animations to `now`.
    pub fn tick(&mut self, now: Millis) -> TickReport {
        let now = self.advance_clock(now);
        self.driver.tick(&mut self.scene, now)
    }

    /// Advance to `now` and snapshot the scene.
    pub fn frame(&mut self, now: Millis) -> SceneFrame {
        self.tick(now);
        SceneFrame::capture(&self.scene, self.config.canvas(), self.clock)
    }

    /// Earliest time at which every current transition is done.
    pub fn settles_at(&self) -> Millis {
        self.scene
            .words()
            .filter_map(|w| self.driver.transition(w))
            .map(|tr| tr.position.end().max(tr.font_size.end()).max(tr.opacity.end()))
            .max()
            .unwrap_or(self.clock)
    }

    // Host clocks are expected to be monotonic; an earlier reading is treated as "now".
    fn advance_clock(&mut self, now: Millis) -> Millis {
        if now < self.clock {
            tracing::debug!(now = now.0, clock = self.clock.0, "clock went backwards");
        }
        self.clock = self.clock.max(now);
        self.clock
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/visualization.rs"]
mod tests;
