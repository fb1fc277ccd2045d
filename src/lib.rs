//! wordrank turns free-form text into an animated ranking of its most frequent words.
//!
//! Word size encodes frequency and horizontal position encodes rank. Whenever the ranking
//! changes, words that are still present slide and resize in place instead of being
//! recreated; new words fade in at their slot and dropped words fade out.
//!
//! # Pipeline overview
//!
//! 1. **Rank**: `&str -> RankedList` (top five non-stopword words, see [`rank`])
//! 2. **Scale**: `RankedList -> Scales` (font size by count, x by rank, see [`build_scales`])
//! 3. **Reconcile**: `Scene + RankedList -> Reconciliation` (keyed enter/update/exit, see [`reconcile`])
//! 4. **Animate**: `AnimationDriver::apply` then `AnimationDriver::tick(now)` until idle
//!
//! [`Visualization`] bundles steps 1–4 around the single [`Scene`] it owns. Output is a
//! [`SceneFrame`] snapshot, which can be serialized to SVG ([`frame_to_svg`]) and
//! rasterized ([`rasterize_svg`]).
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: ranking and reconciliation are pure; animation is a pure function
//!   of the clock values the host passes in.
//! - **Total core**: ranking, reconciliation and animation never fail. Only configuration
//!   loading and rasterization return [`WordrankResult`].
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod layout;
mod render;
mod scene;
mod session;
mod text;

/// Shared scalar mapping helpers.
pub mod transform;

pub use animation::driver::{AnimationDriver, TickReport, TimingSpec, Transition, TransitionKind};
pub use animation::ease::Ease;
pub use animation::tween::{Lerp, Tween};
pub use config::model::VizConfig;
pub use foundation::core::{Canvas, Millis, Point};
pub use foundation::error::{WordrankError, WordrankResult};
pub use layout::scales::{LayoutSpec, Scales, Target, build_scales};
pub use render::frame::{EntityFrame, SceneFrame};
pub use render::raster::{FrameRGBA, rasterize_svg};
pub use render::svg::{SvgStyle, frame_to_svg};
pub use scene::model::{EntityId, Lifecycle, Scene, SceneEntity};
pub use scene::reconcile::{Delta, Placement, Reconciliation, reconcile};
pub use session::visualization::{RenderReport, Visualization};
pub use text::ranker::{FrequencyRanker, RANK_LIMIT, RankedList, WordCount, rank, tokenize};
pub use text::stopwords::{DEFAULT_STOPWORDS, Stopwords};
pub use transform::linear::LinearScale;
