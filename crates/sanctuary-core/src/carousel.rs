//! Release card carousel.
//!
//! Cards sit in a horizontally scrollable container. Every card's look is a
//! pure function of its distance from the container midpoint:
//!
//! ```text
//!            container mid
//!                 │
//!   ┌──┐  ┌───┐ ┌─────┐ ┌───┐  ┌──┐
//!   │  │  │   │ │     │ │   │  │  │     t = |cardMid − mid| / (0.7 × width)
//!   └──┘  └───┘ └─────┘ └───┘  └──┘     scale = 1 − 0.45t, opacity = 1 − 0.5t
//!  tilt−              0              tilt+
//! ```
//!
//! At most one card is the showcase. A showcase card is also flipped, renders
//! at full size on top, and shows its back face.

use crate::config::Tuning;
use crate::content::Release;
use crate::geometry::{Layout, Rect};

/// A carousel card as tracked by behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    /// Devotion toggled when this card is clicked
    pub devotion_id: Option<String>,
    /// Marked as the showcase before any interaction
    pub preselected: bool,
}

impl From<&Release> for Card {
    fn from(release: &Release) -> Self {
        Self {
            id: release.id.clone(),
            devotion_id: release.devotion_id.clone(),
            preselected: release.showcase,
        }
    }
}

/// Interaction state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Normal,
    /// Centered, enlarged and flipped
    Showcase,
}

impl CardState {
    pub fn is_showcase(&self) -> bool {
        matches!(self, CardState::Showcase)
    }

    /// Showcase cards always show their back face.
    pub fn is_flipped(&self) -> bool {
        self.is_showcase()
    }
}

/// Orientation of a card's inner face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Face {
    Flipped,
    /// Y-axis tilt in degrees
    Tilt(f64),
}

impl Face {
    pub fn transform_css(&self) -> String {
        match self {
            Face::Flipped => "rotateY(180deg)".to_string(),
            Face::Tilt(deg) => format!("rotateY({}deg)", deg),
        }
    }
}

/// Computed inline styles for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    /// Normalized distance from the container midpoint, in [0, 1]
    pub t: f64,
    pub scale: f64,
    pub opacity: f64,
    /// `translateZ` in px
    pub depth: f64,
    pub z_index: i32,
    pub face: Face,
}

impl CardVisual {
    /// Visual for a card rectangle inside a container rectangle.
    pub fn compute(container: Rect, card: Rect, state: CardState, tuning: &Tuning) -> Self {
        let container_mid = container.mid_x();
        let card_mid = card.mid_x();
        let offset = card_mid - container_mid;
        let max_distance = container.width * tuning.max_distance_ratio;

        // Zero-width container: anything off-center is fully off-center.
        let (t, signed) = if max_distance > 0.0 {
            let signed = (offset / max_distance).clamp(-1.0, 1.0);
            ((offset.abs() / max_distance).min(1.0), signed)
        } else if offset == 0.0 {
            (0.0, 0.0)
        } else {
            (1.0, offset.signum())
        };

        let (scale, opacity, z_index) = match state {
            CardState::Showcase => (1.0, 1.0, tuning.showcase_z_index),
            CardState::Normal => (
                1.0 - t * tuning.max_shrink,
                1.0 - t * tuning.max_fade,
                tuning.card_z_index,
            ),
        };

        let face = if state.is_flipped() {
            Face::Flipped
        } else {
            Face::Tilt(signed * tuning.max_tilt_deg)
        };

        Self {
            t,
            scale,
            opacity,
            depth: tuning.depth_near - t * tuning.depth_span,
            z_index,
            face,
        }
    }

    pub fn transform_css(&self) -> String {
        format!("scale({}) translateZ({}px)", self.scale, self.depth)
    }

    /// Inline style for the card element.
    pub fn card_style(&self) -> String {
        format!(
            "transform: {}; opacity: {}; z-index: {};",
            self.transform_css(),
            self.opacity,
            self.z_index
        )
    }

    /// Inline style for the card's inner face.
    pub fn face_style(&self) -> String {
        format!("transform: {};", self.face.transform_css())
    }
}

/// Carousel arrow button direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Horizontal scroll delta for one button press.
    pub fn step(&self, visible_width: f64, ratio: f64) -> f64 {
        let step = visible_width * ratio;
        match self {
            Direction::Left => -step,
            Direction::Right => step,
        }
    }
}

/// Result of clicking a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardClick {
    /// Horizontal scroll that centers the card under the container midpoint
    pub scroll_delta: f64,
    pub devotion_id: Option<String>,
}

/// Scroll delta that puts `card`'s midpoint on `container`'s midpoint.
pub fn center_delta(container: Rect, card: Rect) -> f64 {
    card.left - container.left - container.width / 2.0 + card.width / 2.0
}

/// Ordered card list plus the single showcase selection.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    cards: Vec<Card>,
    showcase: Option<usize>,
    visuals: Vec<Option<CardVisual>>,
}

impl Carousel {
    pub fn new(cards: Vec<Card>) -> Self {
        let mut carousel = Self::default();
        carousel.enumerate(cards);
        carousel
    }

    /// Replace the tracked card list.
    ///
    /// A showcase that still exists (matched by id) is kept. Otherwise the
    /// first preselected card becomes the showcase.
    pub fn enumerate(&mut self, cards: Vec<Card>) {
        let previous = self.showcase_card().map(|c| c.id.clone());
        self.showcase = previous
            .and_then(|id| cards.iter().position(|c| c.id == id))
            .or_else(|| cards.iter().position(|c| c.preselected));
        self.visuals = vec![None; cards.len()];
        self.cards = cards;
        tracing::debug!(
            cards = self.cards.len(),
            showcase = ?self.showcase,
            "Carousel cards enumerated"
        );
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn showcase_index(&self) -> Option<usize> {
        self.showcase
    }

    pub fn showcase_card(&self) -> Option<&Card> {
        self.showcase.and_then(|i| self.cards.get(i))
    }

    pub fn state(&self, index: usize) -> CardState {
        if self.showcase == Some(index) {
            CardState::Showcase
        } else {
            CardState::Normal
        }
    }

    /// Last computed visual for a card.
    pub fn visual(&self, index: usize) -> Option<&CardVisual> {
        self.visuals.get(index).and_then(|v| v.as_ref())
    }

    /// Clear every card and make `index` the only showcase.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.cards.len() {
            return false;
        }
        self.showcase = Some(index);
        true
    }

    /// Recompute every card's visual from current geometry.
    ///
    /// Returns `false` when the container is missing.
    pub fn recompute(&mut self, layout: &impl Layout, tuning: &Tuning) -> bool {
        let Some(container) = layout.carousel() else {
            tracing::trace!("Carousel container missing, skipping recompute");
            return false;
        };

        for index in 0..self.cards.len() {
            let state = self.state(index);
            self.visuals[index] = layout
                .card(index)
                .map(|rect| CardVisual::compute(container, rect, state, tuning));
        }
        tracing::trace!(cards = self.cards.len(), "Carousel visuals recomputed");
        true
    }

    /// Handle a click on the card at `index`.
    ///
    /// Selects the card, recomputes visuals immediately, and reports the
    /// centering scroll plus any linked devotion. `None` for clicks that do
    /// not land on a tracked card.
    pub fn click(&mut self, index: usize, layout: &impl Layout, tuning: &Tuning) -> Option<CardClick> {
        let container = layout.carousel()?;
        let card_rect = layout.card(index)?;
        if !self.select(index) {
            return None;
        }

        let scroll_delta = center_delta(container, card_rect);
        let devotion_id = self.cards[index].devotion_id.clone();
        tracing::debug!(
            card = %self.cards[index].id,
            scroll_delta,
            devotion = ?devotion_id,
            "Card selected"
        );

        self.recompute(layout, tuning);
        Some(CardClick {
            scroll_delta,
            devotion_id,
        })
    }
}
