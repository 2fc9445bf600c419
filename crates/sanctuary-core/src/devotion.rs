//! Devotion accordion.
//!
//! Panels are either closed or open; at most one is open, enforced by storing
//! the open panel as a single optional slot. Every toggle first closes all
//! panels, then opens the target if it was closed before the toggle.

/// State of a single devotion panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    /// Open and active. `max_height` is the expanded body height override,
    /// absent when the body could not be measured.
    Open { max_height: Option<f64> },
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        matches!(self, PanelState::Open { .. })
    }

    /// Inline `max-height` for the panel body.
    pub fn body_style(&self) -> Option<String> {
        match self {
            PanelState::Open {
                max_height: Some(height),
            } => Some(format!("max-height: {}px;", height)),
            _ => None,
        }
    }
}

/// Outcome of a toggle request.
#[derive(Debug, Clone, PartialEq)]
pub enum Toggle {
    /// Target was closed and is now the only open panel
    Opened { id: String },
    /// Target was open; every panel is now closed
    Closed { id: String },
    /// No panel with that id
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
struct OpenPanel {
    index: usize,
    max_height: Option<f64>,
}

/// Ordered set of devotion panels with accordion semantics.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    panels: Vec<String>,
    open: Option<OpenPanel>,
}

impl Accordion {
    pub fn new(panels: Vec<String>) -> Self {
        Self { panels, open: None }
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    pub fn state(&self, id: &str) -> PanelState {
        match &self.open {
            Some(open) if self.panels.get(open.index).map(String::as_str) == Some(id) => {
                PanelState::Open {
                    max_height: open.max_height,
                }
            }
            _ => PanelState::Closed,
        }
    }

    pub fn open_panel(&self) -> Option<&str> {
        self.open
            .as_ref()
            .and_then(|o| self.panels.get(o.index))
            .map(String::as_str)
    }

    /// The devotions section is active exactly while a panel is open.
    pub fn section_active(&self) -> bool {
        self.open.is_some()
    }

    /// Close every panel and clear height overrides.
    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Toggle the panel with `id`.
    ///
    /// `content_height` is the measured natural height of the target body,
    /// used as the expanded height when opening.
    pub fn toggle(&mut self, id: &str, content_height: Option<f64>) -> Toggle {
        let Some(index) = self.panels.iter().position(|p| p == id) else {
            tracing::debug!(id, "Devotion panel not found");
            return Toggle::Unknown;
        };

        let opening = !self.state(id).is_open();
        self.close_all();

        if opening {
            self.open = Some(OpenPanel {
                index,
                max_height: content_height,
            });
            tracing::debug!(id, height = ?content_height, "Devotion opened");
            Toggle::Opened { id: id.to_string() }
        } else {
            tracing::debug!(id, "Devotion closed");
            Toggle::Closed { id: id.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion() -> Accordion {
        Accordion::new(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    }

    #[test]
    fn opening_one_closes_the_other() {
        let mut acc = accordion();
        assert_eq!(acc.toggle("b", Some(240.0)), Toggle::Opened { id: "b".into() });
        assert_eq!(acc.toggle("a", Some(180.0)), Toggle::Opened { id: "a".into() });

        assert_eq!(acc.state("b"), PanelState::Closed);
        assert_eq!(acc.state("b").body_style(), None);
        assert_eq!(
            acc.state("a"),
            PanelState::Open {
                max_height: Some(180.0)
            }
        );
        assert_eq!(acc.state("a").body_style().as_deref(), Some("max-height: 180px;"));
        assert!(acc.section_active());
    }

    #[test]
    fn toggling_open_panel_closes_everything() {
        let mut acc = accordion();
        acc.toggle("c", Some(90.0));
        assert_eq!(acc.toggle("c", Some(90.0)), Toggle::Closed { id: "c".into() });
        assert_eq!(acc.open_panel(), None);
        assert!(!acc.section_active());
    }

    #[test]
    fn unknown_panel_is_noop() {
        let mut acc = accordion();
        acc.toggle("a", None);
        assert_eq!(acc.toggle("zzz", Some(1.0)), Toggle::Unknown);
        assert_eq!(acc.open_panel(), Some("a"));
    }

    #[test]
    fn unmeasured_body_opens_without_height() {
        let mut acc = accordion();
        acc.toggle("a", None);
        assert!(acc.state("a").is_open());
        assert_eq!(acc.state("a").body_style(), None);
    }
}
