//! Page-level event dispatch.
//!
//! [`Page`] owns every behavior component. The host feeds it [`PageEvent`]s
//! together with a [`Layout`] measured at event time; the page updates its
//! state and returns the imperative [`Command`]s the host must perform
//! (scrolling, frame scheduling, delayed scroll-into-view). Rendering reads
//! the resulting state back through the accessors.
//!
//! ```text
//!   host event ──▶ Page::dispatch(event, layout) ──▶ Vec<Command> ──▶ host
//!                         │
//!                         ├── NavMenu
//!                         ├── BackgroundGradient  (FrameThrottle: window)
//!                         ├── Carousel            (FrameThrottle: carousel)
//!                         └── Accordion
//! ```

use std::time::Duration;

use crate::carousel::{Card, CardState, CardVisual, Carousel, Direction};
use crate::config::Tuning;
use crate::content::SiteContent;
use crate::devotion::{Accordion, PanelState, Toggle};
use crate::geometry::Layout;
use crate::gradient::BackgroundGradient;
use crate::nav::{resolve_anchor, AnchorTarget, NavMenu};
use crate::throttle::{FrameTarget, FrameThrottle};

/// Scroll animation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

impl ScrollBehavior {
    /// Value for the DOM `behavior` option.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

/// Input delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Page finished loading
    Load,
    /// Window resized
    Resize,
    WindowScroll,
    CarouselScroll,
    /// A previously requested animation frame is running
    Frame(FrameTarget),
    /// Menu toggle control clicked (never reaches the outside-click handler)
    MenuToggle,
    /// Click anywhere outside the nav region
    OutsideNavClick,
    /// Navigation link clicked
    NavLinkClick { href: String },
    /// Click inside the carousel resolved to the card at `index`
    CardClick { index: usize },
    CarouselButton(Direction),
    /// Click anywhere on a devotion panel
    DevotionClick { id: String },
}

impl PageEvent {
    /// Whether handling this event reads geometry.
    pub fn needs_layout(&self) -> bool {
        !matches!(
            self,
            PageEvent::WindowScroll
                | PageEvent::CarouselScroll
                | PageEvent::MenuToggle
                | PageEvent::OutsideNavClick
        )
    }
}

/// Imperative action the host performs after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ScrollWindowTo { top: f64, behavior: ScrollBehavior },
    ScrollCarouselTo { left: f64, behavior: ScrollBehavior },
    ScrollCarouselBy { left: f64, behavior: ScrollBehavior },
    /// Schedule one animation frame, then deliver `PageEvent::Frame(target)`
    RequestFrame(FrameTarget),
    /// After `delay`, smoothly scroll the devotion panel to the top of the view
    ScrollIntoView { id: String, delay: Duration },
}

/// All interactive state of the page.
#[derive(Debug, Clone)]
pub struct Page {
    tuning: Tuning,
    card_source: Vec<Card>,
    nav: NavMenu,
    background: BackgroundGradient,
    carousel: Carousel,
    devotions: Accordion,
    window_frames: FrameThrottle,
    carousel_frames: FrameThrottle,
}

impl Page {
    pub fn new(content: &SiteContent) -> Self {
        let card_source: Vec<Card> = content.releases.iter().map(Card::from).collect();
        Self {
            tuning: content.tuning.clone(),
            carousel: Carousel::new(card_source.clone()),
            card_source,
            nav: NavMenu::new(),
            background: BackgroundGradient::new(),
            devotions: Accordion::new(content.devotion_ids()),
            window_frames: FrameThrottle::new(),
            carousel_frames: FrameThrottle::new(),
        }
    }

    /// Handle one event and return the host commands it produced.
    pub fn dispatch(&mut self, event: PageEvent, layout: &impl Layout) -> Vec<Command> {
        let mut commands = Vec::new();

        match event {
            PageEvent::Load => {
                self.update_background(layout);
                self.carousel.enumerate(self.card_source.clone());
                commands.push(Command::ScrollCarouselTo {
                    left: 0.0,
                    behavior: ScrollBehavior::Instant,
                });
                self.carousel.recompute(layout, &self.tuning);
                // Geometry above predates the scroll reset.
                if self.carousel_frames.request() {
                    commands.push(Command::RequestFrame(FrameTarget::Carousel));
                }
                tracing::info!(cards = self.carousel.len(), "Page loaded");
            }
            PageEvent::Resize => {
                self.carousel.enumerate(self.card_source.clone());
                self.carousel.recompute(layout, &self.tuning);
            }
            PageEvent::WindowScroll => {
                if self.window_frames.request() {
                    commands.push(Command::RequestFrame(FrameTarget::Window));
                }
            }
            PageEvent::CarouselScroll => {
                if self.carousel_frames.request() {
                    commands.push(Command::RequestFrame(FrameTarget::Carousel));
                }
            }
            PageEvent::Frame(FrameTarget::Window) => {
                self.window_frames.complete();
                self.update_background(layout);
            }
            PageEvent::Frame(FrameTarget::Carousel) => {
                self.carousel_frames.complete();
                self.carousel.recompute(layout, &self.tuning);
            }
            PageEvent::MenuToggle => self.nav.toggle(),
            PageEvent::OutsideNavClick => self.nav.close(),
            PageEvent::NavLinkClick { href } => match resolve_anchor(&href, layout) {
                AnchorTarget::ScrollTo(top) => {
                    commands.push(Command::ScrollWindowTo {
                        top,
                        behavior: ScrollBehavior::Smooth,
                    });
                    self.nav.close();
                }
                AnchorTarget::Missing | AnchorTarget::External => {}
            },
            PageEvent::CardClick { index } => {
                if let Some(click) = self.carousel.click(index, layout, &self.tuning) {
                    commands.push(Command::ScrollCarouselBy {
                        left: click.scroll_delta,
                        behavior: ScrollBehavior::Smooth,
                    });
                    if let Some(id) = click.devotion_id {
                        commands.extend(self.toggle_devotion(&id, layout));
                    }
                }
            }
            PageEvent::CarouselButton(direction) => {
                if let Some(container) = layout.carousel() {
                    commands.push(Command::ScrollCarouselBy {
                        left: direction.step(container.width, self.tuning.nav_step_ratio),
                        behavior: ScrollBehavior::Smooth,
                    });
                }
            }
            PageEvent::DevotionClick { id } => {
                commands.extend(self.toggle_devotion(&id, layout));
            }
        }

        commands
    }

    fn update_background(&mut self, layout: &impl Layout) {
        self.background
            .update(&layout.window(), self.tuning.gradient_exponent);
    }

    fn toggle_devotion(&mut self, id: &str, layout: &impl Layout) -> Option<Command> {
        let height = layout.panel_content_height(id);
        match self.devotions.toggle(id, height) {
            Toggle::Opened { id } => Some(Command::ScrollIntoView {
                id,
                delay: self.tuning.scroll_into_view_delay(),
            }),
            Toggle::Closed { .. } | Toggle::Unknown => None,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    /// CSS background, `None` until a scrollable layout has been seen.
    pub fn background_css(&self) -> Option<String> {
        self.background.css()
    }

    pub fn background(&self) -> &BackgroundGradient {
        &self.background
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn card_state(&self, index: usize) -> CardState {
        self.carousel.state(index)
    }

    pub fn card_visual(&self, index: usize) -> Option<&CardVisual> {
        self.carousel.visual(index)
    }

    pub fn devotions(&self) -> &Accordion {
        &self.devotions
    }

    pub fn panel_state(&self, id: &str) -> PanelState {
        self.devotions.state(id)
    }

    pub fn devotions_active(&self) -> bool {
        self.devotions.section_active()
    }

    /// Whether a frame for `target` is scheduled and not yet run.
    pub fn frame_pending(&self, target: FrameTarget) -> bool {
        match target {
            FrameTarget::Window => self.window_frames.is_pending(),
            FrameTarget::Carousel => self.carousel_frames.is_pending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LayoutSnapshot;

    #[test]
    fn needs_layout_classification() {
        assert!(!PageEvent::WindowScroll.needs_layout());
        assert!(!PageEvent::MenuToggle.needs_layout());
        assert!(PageEvent::Load.needs_layout());
        assert!(PageEvent::CardClick { index: 0 }.needs_layout());
        assert!(PageEvent::Frame(FrameTarget::Window).needs_layout());
    }

    #[test]
    fn menu_events() {
        let mut page = Page::new(&SiteContent::default());
        let layout = LayoutSnapshot::default();

        assert!(page.dispatch(PageEvent::MenuToggle, &layout).is_empty());
        assert!(page.nav_open());
        page.dispatch(PageEvent::OutsideNavClick, &layout);
        assert!(!page.nav_open());
        page.dispatch(PageEvent::OutsideNavClick, &layout);
        assert!(!page.nav_open());
    }

    #[test]
    fn scroll_behavior_strings() {
        assert_eq!(ScrollBehavior::Smooth.as_str(), "smooth");
        assert_eq!(ScrollBehavior::Instant.as_str(), "instant");
    }
}
