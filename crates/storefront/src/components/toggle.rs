//! Two-state open/closed toggles driving the side menu.
//!
//! The panel and the hover disclosure are independent toggles. Each
//! transition arrives as an event name in a fragment request, and the
//! rendered markup only wires up the events that are legal next.

use std::str::FromStr;

use thiserror::Error;

/// Error for an unrecognised state or event name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownTransition {
    /// What was being parsed ("state", "panel event", "hover event").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Open/closed state of a toggle. Starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Closed,
    Open,
}

/// Events that move the navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The menu control was activated.
    Trigger,
    /// The close control was activated.
    Close,
    /// A navigation link inside the panel was activated.
    LinkActivated,
    /// Outside click or Escape.
    Dismiss,
}

/// Pointer events over the region/selector row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter,
    Leave,
}

impl ToggleState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }

    /// Apply a panel event.
    ///
    /// Only `Trigger` opens; `Close`, `LinkActivated` and `Dismiss` close.
    /// Events that do not apply to the current state leave it unchanged.
    #[must_use]
    pub const fn on_panel(self, event: PanelEvent) -> Self {
        match (self, event) {
            (Self::Closed, PanelEvent::Trigger) => Self::Open,
            (Self::Open, PanelEvent::Close | PanelEvent::LinkActivated | PanelEvent::Dismiss) => {
                Self::Closed
            }
            (state, _) => state,
        }
    }

    /// Apply a hover event: enter opens, leave closes.
    #[must_use]
    pub const fn on_hover(self, event: HoverEvent) -> Self {
        match event {
            HoverEvent::Enter => Self::Open,
            HoverEvent::Leave => Self::Closed,
        }
    }

    /// The hover event that can happen next, and the DOM trigger that fires it.
    #[must_use]
    pub const fn next_hover(self) -> (HoverEvent, &'static str) {
        match self {
            Self::Closed => (HoverEvent::Enter, "mouseenter"),
            Self::Open => (HoverEvent::Leave, "mouseleave"),
        }
    }
}

impl PanelEvent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Close => "close",
            Self::LinkActivated => "link",
            Self::Dismiss => "dismiss",
        }
    }
}

impl HoverEvent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Leave => "leave",
        }
    }
}

impl FromStr for ToggleState {
    type Err = UnknownTransition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "closed" => Ok(Self::Closed),
            "open" => Ok(Self::Open),
            other => Err(UnknownTransition {
                kind: "state",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for PanelEvent {
    type Err = UnknownTransition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trigger" => Ok(Self::Trigger),
            "close" => Ok(Self::Close),
            "link" => Ok(Self::LinkActivated),
            "dismiss" => Ok(Self::Dismiss),
            other => Err(UnknownTransition {
                kind: "panel event",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for HoverEvent {
    type Err = UnknownTransition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enter" => Ok(Self::Enter),
            "leave" => Ok(Self::Leave),
            other => Err(UnknownTransition {
                kind: "hover event",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ToggleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
