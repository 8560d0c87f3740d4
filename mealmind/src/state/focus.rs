//! Scroll the results region into view and hand it keyboard focus.

use super::page::{self, SCROLL_PADDING, STICKY_HEADER_HEIGHT};
use super::{Focus, GridView, HomeState};

/// Ticks (100ms each) to wait for the scroll to settle before moving focus
pub const SETTLE_TICKS: u8 = 3;

pub const DEFAULT_ROLE: &str = "region";
pub const LIVE_POLITE: &str = "polite";
pub const DEFAULT_LABEL: &str = "Suggested meals";

/// Accessibility attributes of the results region
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RegionAttributes {
    pub role: Option<String>,
    pub live: Option<String>,
    pub label: Option<String>,
}

impl RegionAttributes {
    /// Attributes applied while the region is being announced, keeping any
    /// role or label it already had.
    fn announced(prior: &RegionAttributes) -> Self {
        Self {
            role: Some(prior.role.clone().unwrap_or_else(|| DEFAULT_ROLE.to_string())),
            live: Some(LIVE_POLITE.to_string()),
            label: Some(
                prior
                    .label
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            ),
        }
    }

    pub fn is_announcing(&self) -> bool {
        self.live.as_deref() == Some(LIVE_POLITE)
    }
}

/// A focus move waiting for the scroll to settle
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFocus {
    pub ticks_left: u8,
    /// Attributes to restore once focus lands
    pub saved: RegionAttributes,
}

/// Scroll the results region under the sticky header and schedule the focus
/// move. A no-op when nothing has been rendered yet.
///
/// Calling again while a move is pending restarts the settle delay and keeps
/// the attributes saved by the first call.
pub fn scroll_into_view(home: &mut HomeState, reduced_motion: bool) {
    if matches!(home.grid, GridView::Empty) {
        return;
    }

    let saved = match home.pending_focus.take() {
        Some(pending) => pending.saved,
        None => home.results_attrs.clone(),
    };
    home.results_attrs = RegionAttributes::announced(&saved);

    home.page_offset =
        page::scroll_offset_for(page::results_top(), STICKY_HEADER_HEIGHT, SCROLL_PADDING);

    let ticks_left = if reduced_motion { 0 } else { SETTLE_TICKS };
    home.pending_focus = Some(PendingFocus { ticks_left, saved });

    if ticks_left == 0 {
        settle(home);
    }
}

/// Advance a pending focus move by one tick
pub fn tick(home: &mut HomeState) {
    let Some(pending) = home.pending_focus.as_mut() else {
        return;
    };

    pending.ticks_left = pending.ticks_left.saturating_sub(1);
    if pending.ticks_left == 0 {
        settle(home);
    }
}

/// Drop a pending focus move without stealing focus, restoring attributes
pub fn cancel(home: &mut HomeState) {
    if let Some(pending) = home.pending_focus.take() {
        home.results_attrs = pending.saved;
    }
}

fn settle(home: &mut HomeState) {
    if let Some(pending) = home.pending_focus.take() {
        home.focus = Focus::Results;
        home.results_attrs = pending.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::grid::MSG_NO_RECIPES;

    fn rendered_home() -> HomeState {
        HomeState {
            grid: GridView::message(MSG_NO_RECIPES),
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_region_is_noop() {
        let mut home = HomeState::default();
        home.page_offset = 3;

        scroll_into_view(&mut home, false);

        assert_eq!(home.page_offset, 3);
        assert!(home.pending_focus.is_none());
        assert_eq!(home.focus, Focus::Input);
    }

    #[test]
    fn test_reduced_motion_focuses_immediately() {
        let mut home = rendered_home();

        scroll_into_view(&mut home, true);

        assert_eq!(home.page_offset, 8);
        assert_eq!(home.focus, Focus::Results);
        assert!(home.pending_focus.is_none());
        assert_eq!(home.results_attrs, RegionAttributes::default());
    }

    #[test]
    fn test_focus_lands_after_settle_and_restores_attributes() {
        let mut home = rendered_home();
        home.results_attrs.label = Some("Results".to_string());

        scroll_into_view(&mut home, false);

        assert_eq!(home.focus, Focus::Input);
        assert!(home.results_attrs.is_announcing());
        assert_eq!(home.results_attrs.role.as_deref(), Some(DEFAULT_ROLE));
        assert_eq!(home.results_attrs.label.as_deref(), Some("Results"));

        tick(&mut home);
        tick(&mut home);
        assert_eq!(home.focus, Focus::Input);

        tick(&mut home);
        assert_eq!(home.focus, Focus::Results);
        assert_eq!(home.results_attrs.label.as_deref(), Some("Results"));
        assert_eq!(home.results_attrs.role, None);
        assert_eq!(home.results_attrs.live, None);
    }

    #[test]
    fn test_repeated_calls_keep_original_attributes() {
        let mut home = rendered_home();

        scroll_into_view(&mut home, false);
        tick(&mut home);
        scroll_into_view(&mut home, false);

        assert_eq!(home.pending_focus.as_ref().unwrap().ticks_left, SETTLE_TICKS);

        for _ in 0..SETTLE_TICKS {
            tick(&mut home);
        }
        assert_eq!(home.focus, Focus::Results);
        assert_eq!(home.results_attrs, RegionAttributes::default());
    }

    #[test]
    fn test_cancel_restores_without_moving_focus() {
        let mut home = rendered_home();

        scroll_into_view(&mut home, false);
        cancel(&mut home);

        assert_eq!(home.focus, Focus::Input);
        assert!(home.pending_focus.is_none());
        assert_eq!(home.results_attrs, RegionAttributes::default());
    }
}
