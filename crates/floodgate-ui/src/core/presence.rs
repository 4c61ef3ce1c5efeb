//! Presence state machine for overlays that mount and unmount with enter/exit timing.

/// Enter/exit duration used by the shell overlays.
pub const OVERLAY_TRANSITION_MS: u32 = 1_000;

/// Mount stage of a transitioning element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// Not mounted.
    Hidden,
    /// Mounted and running the enter transition.
    Entering,
    /// Mounted and settled.
    Visible,
    /// Mounted and running the exit transition.
    Exiting,
}

impl Presence {
    /// Initial stage; elements visible at first render skip the enter transition.
    #[must_use]
    pub const fn initial(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }

    /// Stage after the visibility target changes.
    #[must_use]
    pub const fn retarget(self, visible: bool) -> Self {
        match (self, visible) {
            (Self::Hidden | Self::Exiting | Self::Entering, true) => Self::Entering,
            (Self::Visible, true) => Self::Visible,
            (Self::Hidden, false) => Self::Hidden,
            (Self::Entering | Self::Visible | Self::Exiting, false) => Self::Exiting,
        }
    }

    /// Stage once the running transition's timeout elapses.
    #[must_use]
    pub const fn settle(self) -> Self {
        match self {
            Self::Entering => Self::Visible,
            Self::Exiting => Self::Hidden,
            other => other,
        }
    }

    /// Whether a timeout is pending for this stage.
    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }

    /// Whether the element's subtree should exist in the DOM.
    #[must_use]
    pub const fn is_mounted(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// CSS class for the stage.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Hidden => "transition-hidden",
            Self::Entering => "transition-enter",
            Self::Visible => "transition-entered",
            Self::Exiting => "transition-exit",
        }
    }
}
