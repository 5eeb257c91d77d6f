use log::{debug, warn};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config::ScrollConfig;
use crate::dom::{self, EventListener};
use crate::nav::NavItem;

/// Where a navigable section starts, measured from the top of the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub is_scrolled: bool,
    pub active_section: Option<&'static str>,
}

impl ScrollState {
    pub fn derive(offset: f64, sections: &[SectionBounds], config: &ScrollConfig) -> Self {
        Self {
            is_scrolled: is_scrolled(offset, config.scrolled_threshold),
            active_section: active_section(offset, sections, config.lookahead),
        }
    }
}

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// The last section, in the order given, whose top is within `lookahead`
/// pixels below the current offset.
pub fn active_section(offset: f64, sections: &[SectionBounds], lookahead: f64) -> Option<&'static str> {
    let mut current = None;
    for section in sections {
        if section.top <= offset + lookahead {
            current = Some(section.id);
        }
    }
    current
}

fn read_scroll_state(items: &[NavItem], config: &ScrollConfig) -> Result<ScrollState, JsValue> {
    let offset = dom::scroll_offset()?;
    let sections = dom::section_bounds(items)?;
    Ok(ScrollState::derive(offset, &sections, config))
}

/// Tracks the header state and the active section for `items`, recomputing
/// on every window scroll for as long as the calling component is mounted.
#[hook]
pub fn use_scroll_tracker(items: &'static [NavItem], config: ScrollConfig) -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |config| {
                let config = *config;
                let recompute = move || match read_scroll_state(items, &config) {
                    Ok(next) => state.set(next),
                    Err(err) => warn!("Failed to read scroll position: {:?}", err),
                };
                recompute();

                let listener = dom::window()
                    .and_then(|window| EventListener::new(&window, "scroll", move |_| recompute()));
                if let Err(err) = &listener {
                    warn!("Failed to attach scroll listener: {:?}", err);
                }

                move || drop(listener)
            },
            config,
        );
    }

    use_effect_with_deps(
        |active| {
            debug!("Active section: {:?}", active);
            || ()
        },
        state.active_section,
    );

    *state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "about", top: 800.0 },
            SectionBounds { id: "importance", top: 2000.0 },
            SectionBounds { id: "courses", top: 3200.0 },
        ]
    }

    #[test]
    fn header_compacts_only_past_threshold() {
        let threshold = ScrollConfig::default().scrolled_threshold;
        assert!(!is_scrolled(0.0, threshold));
        assert!(!is_scrolled(19.0, threshold));
        assert!(!is_scrolled(19.99, threshold));
        assert!(!is_scrolled(20.0, threshold));
        assert!(is_scrolled(20.5, threshold));
        assert!(is_scrolled(4000.0, threshold));
    }

    #[test]
    fn lookahead_reaches_next_section() {
        let state = ScrollState::derive(1950.0, &page(), &ScrollConfig::default());
        assert_eq!(
            state,
            ScrollState {
                is_scrolled: true,
                active_section: Some("importance"),
            }
        );
    }

    #[test]
    fn offset_short_of_lookahead_keeps_previous_section() {
        let config = ScrollConfig::default();
        assert_eq!(active_section(1899.0, &page(), config.lookahead), Some("about"));
        assert_eq!(active_section(1900.0, &page(), config.lookahead), Some("importance"));
    }

    #[test]
    fn nothing_active_above_first_section() {
        let state = ScrollState::derive(0.0, &page(), &ScrollConfig::default());
        assert_eq!(state, ScrollState::default());
        assert_eq!(active_section(699.0, &page(), 100.0), None);
        assert_eq!(active_section(700.0, &page(), 100.0), Some("about"));
    }

    #[test]
    fn last_section_stays_active_at_bottom() {
        assert_eq!(active_section(10_000.0, &page(), 100.0), Some("courses"));
    }

    #[test]
    fn last_match_in_configured_order_wins() {
        let sections = [
            SectionBounds { id: "courses", top: 3200.0 },
            SectionBounds { id: "about", top: 800.0 },
        ];
        assert_eq!(active_section(5000.0, &sections, 100.0), Some("about"));
    }

    #[test]
    fn no_sections_means_no_active_section() {
        assert_eq!(active_section(1950.0, &[], 100.0), None);
    }

    #[test]
    fn lookahead_is_configurable() {
        let config = ScrollConfig {
            lookahead: 0.0,
            ..ScrollConfig::default()
        };
        let state = ScrollState::derive(1950.0, &page(), &config);
        assert_eq!(state.active_section, Some("about"));
    }
}
