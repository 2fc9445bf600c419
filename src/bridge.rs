//! Webview bridge between the page state machine and the rendered DOM.
//!
//! The bridge does three things:
//!
//! - forwards high-frequency DOM events (window scroll, carousel scroll,
//!   resize, load) into [`Page::dispatch`]
//! - measures a [`LayoutSnapshot`] whenever an event needs geometry
//! - performs the [`Command`]s a dispatch returns
//!
//! ```text
//!   webview ──"window_scroll"──▶ dispatch ──RequestFrame──▶ requestAnimationFrame
//!      ▲                                                         │
//!      └──────────── scrollTo / scrollBy ◀── Frame(layout) ◀─────┘
//! ```
//!
//! Bridge failures are logged and the event is dropped; the page stays
//! usable, only static.

use dioxus::document;
use dioxus::prelude::*;
use sanctuary_core::{
    Command, FrameTarget, LayoutSnapshot, Page, PageError, PageEvent, PageResult,
};
use serde::Deserialize;

/// JS helper returning a [`LayoutSnapshot`]-shaped object.
const MEASURE_JS: &str = r##"
const measure = () => {
  const rect = (el) => {
    const r = el.getBoundingClientRect();
    return { left: r.left, top: r.top, width: r.width, height: r.height };
  };
  const nav = document.querySelector("nav");
  const container = document.querySelector(".music-scroll");

  const anchors = {};
  document.querySelectorAll('nav a[href^="#"]').forEach((a) => {
    const id = a.getAttribute("href").slice(1);
    const target = id ? document.getElementById(id) : null;
    if (target) anchors[id] = target.getBoundingClientRect().top;
  });

  const panel_heights = {};
  document.querySelectorAll(".devotion").forEach((dev) => {
    const body = dev.querySelector(".devotion-body");
    if (dev.id && body) panel_heights[dev.id] = body.scrollHeight;
  });

  return {
    window: {
      scroll_y: window.scrollY,
      document_height: document.documentElement.scrollHeight,
      viewport_height: window.innerHeight,
    },
    nav_height: nav ? nav.offsetHeight : 0,
    anchors,
    container: container ? rect(container) : null,
    cards: container ? Array.from(container.querySelectorAll(".release-card")).map(rect) : [],
    panel_heights,
  };
};
"##;

/// Installs DOM listeners that stream signals back to Rust.
const LISTENERS_JS: &str = r#"
const send = (kind) => dioxus.send(kind);
window.addEventListener("scroll", () => send("window_scroll"), { passive: true });
window.addEventListener("resize", () => send("resize"));
const container = document.querySelector(".music-scroll");
if (container) {
  container.addEventListener("scroll", () => send("carousel_scroll"), { passive: true });
}
if (document.readyState === "complete") {
  send("load");
} else {
  window.addEventListener("load", () => send("load"));
}
await new Promise(() => {});
"#;

/// Signals sent by [`LISTENERS_JS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum HostSignal {
    WindowScroll,
    CarouselScroll,
    Resize,
    Load,
}

impl From<HostSignal> for PageEvent {
    fn from(signal: HostSignal) -> Self {
        match signal {
            HostSignal::WindowScroll => PageEvent::WindowScroll,
            HostSignal::CarouselScroll => PageEvent::CarouselScroll,
            HostSignal::Resize => PageEvent::Resize,
            HostSignal::Load => PageEvent::Load,
        }
    }
}

/// Start forwarding window and carousel events into the page.
///
/// Call once after the page markup is mounted.
pub fn install_listeners(page: Signal<Page>) {
    spawn(async move {
        let mut eval = document::eval(LISTENERS_JS);
        tracing::debug!("DOM listeners installed");
        loop {
            match eval.recv::<HostSignal>().await {
                Ok(signal) => dispatch(page, signal.into()),
                Err(e) => {
                    tracing::warn!("Listener channel closed: {:?}", e);
                    break;
                }
            }
        }
    });
}

/// Measure the current page geometry.
pub async fn measure_layout() -> PageResult<LayoutSnapshot> {
    let script = format!("{MEASURE_JS}\nreturn measure();");
    let value = document::eval(&script)
        .await
        .map_err(|e| PageError::Bridge(format!("{:?}", e)))?;
    Ok(serde_json::from_value(value)?)
}

/// Wait for the next animation frame and measure inside it.
async fn next_frame() -> PageResult<LayoutSnapshot> {
    let script = format!("{MEASURE_JS}\nrequestAnimationFrame(() => dioxus.send(measure()));");
    let mut eval = document::eval(&script);
    eval.recv::<LayoutSnapshot>()
        .await
        .map_err(|e| PageError::Bridge(format!("{:?}", e)))
}

/// Deliver an event to the page, measuring geometry first when needed.
pub fn dispatch(page: Signal<Page>, event: PageEvent) {
    if !event.needs_layout() {
        apply(page, event, &LayoutSnapshot::default());
        return;
    }

    spawn(async move {
        match measure_layout().await {
            Ok(layout) => apply(page, event, &layout),
            Err(e) => tracing::warn!(?event, "Dropping event, layout unavailable: {}", e),
        }
    });
}

fn apply(mut page: Signal<Page>, event: PageEvent, layout: &LayoutSnapshot) {
    tracing::trace!(?event, "Dispatching");
    let commands = page.write().dispatch(event, layout);
    for command in commands {
        execute(page, command);
    }
}

fn execute(page: Signal<Page>, command: Command) {
    match command {
        Command::ScrollWindowTo { top, behavior } => run_js(format!(
            "window.scrollTo({{ top: {top}, behavior: \"{}\" }});",
            behavior.as_str()
        )),
        Command::ScrollCarouselTo { left, behavior } => run_js(format!(
            "const c = document.querySelector(\".music-scroll\"); \
             if (c) c.scrollTo({{ left: {left}, behavior: \"{}\" }});",
            behavior.as_str()
        )),
        Command::ScrollCarouselBy { left, behavior } => run_js(format!(
            "const c = document.querySelector(\".music-scroll\"); \
             if (c) c.scrollBy({{ left: {left}, behavior: \"{}\" }});",
            behavior.as_str()
        )),
        Command::RequestFrame(target) => request_frame(page, target),
        Command::ScrollIntoView { id, delay } => {
            let id = match serde_json::to_string(&id) {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!("Cannot encode devotion id: {}", e);
                    return;
                }
            };
            // Not cancelled if the panel closes before it fires.
            spawn(async move {
                tokio::time::sleep(delay).await;
                run_js(format!(
                    "const el = document.getElementById({id}); \
                     if (el) el.scrollIntoView({{ behavior: \"smooth\", block: \"start\" }});"
                ));
            });
        }
    }
}

fn request_frame(page: Signal<Page>, target: FrameTarget) {
    spawn(async move {
        let layout = match next_frame().await {
            Ok(layout) => layout,
            Err(e) => {
                // An empty layout still completes the frame so the throttle
                // does not stay pending.
                tracing::warn!(?target, "Frame measurement failed: {}", e);
                LayoutSnapshot::default()
            }
        };
        apply(page, PageEvent::Frame(target), &layout);
    });
}

fn run_js(script: String) {
    spawn(async move {
        if let Err(e) = document::eval(&script).await {
            tracing::warn!("Script failed: {:?}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_signals_map_to_events() {
        let signal: HostSignal = serde_json::from_str("\"carousel_scroll\"").unwrap();
        assert_eq!(PageEvent::from(signal), PageEvent::CarouselScroll);

        let signal: HostSignal = serde_json::from_str("\"load\"").unwrap();
        assert_eq!(PageEvent::from(signal), PageEvent::Load);

        assert!(serde_json::from_str::<HostSignal>("\"click\"").is_err());
    }

    #[test]
    fn measure_script_defines_snapshot_fields() {
        for field in ["scroll_y", "document_height", "viewport_height", "nav_height", "panel_heights"] {
            assert!(MEASURE_JS.contains(field), "missing {field}");
        }
    }
}
