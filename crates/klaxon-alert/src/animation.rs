#![forbid(unsafe_code)]

//! Animation descriptions and the show/hide choreography.
//!
//! The controller never interpolates anything itself. It hands the host an
//! [`AnimationSpec`] plus an [`AnimationToken`], and the host calls back
//! [`crate::AlertController::animation_finished`] with that token when the
//! animation completes. The four choreography constructors on
//! [`AnimationSpec`] encode the entrance/exit timing: the backdrop fade
//! leads on the way in, the panel leads on the way out.

use std::time::Duration;

/// Spring parameters for a damped scale/fade animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Damping ratio in `(0.0, 1.0]`; 1.0 is critically damped.
    pub damping: f32,
    /// Initial velocity as a fraction of the total distance per second.
    pub initial_velocity: f32,
}

/// Timing curve for one animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    EaseInOut,
    Spring(SpringParams),
}

/// One animated property change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change {
    /// Opacity in `[0.0, 1.0]`.
    Opacity { from: f32, to: f32 },
    /// Uniform scale about the element's center.
    Scale { from: f32, to: f32 },
}

/// A complete animation request for one element.
///
/// The host applies every change's `from` value the moment the animation is
/// scheduled, holds it through `delay`, then interpolates to `to` along
/// `curve` over `duration`. Completion is reported exactly once per
/// scheduled animation, carrying the token it was scheduled with.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub delay: Duration,
    pub curve: Curve,
    pub changes: Vec<Change>,
}

/// Backdrop fade duration, both directions.
pub const BACKDROP_FADE_DURATION: Duration = Duration::from_millis(200);
/// Delay before the trailing animation of each transition starts.
pub const CHOREOGRAPHY_DELAY: Duration = Duration::from_millis(200);
/// Panel entrance duration.
pub const PANEL_SHOW_DURATION: Duration = Duration::from_millis(400);
/// Panel exit duration.
pub const PANEL_HIDE_DURATION: Duration = Duration::from_millis(300);
/// Scale of the panel while fully hidden.
pub const PANEL_HIDDEN_SCALE: f32 = 0.5;
/// Spring used for the panel in both directions.
pub const PANEL_SPRING: SpringParams = SpringParams {
    damping: 0.6,
    initial_velocity: 0.2,
};

impl AnimationSpec {
    /// Backdrop entrance: fade to full opacity, no delay.
    #[must_use]
    pub fn show_backdrop() -> Self {
        Self {
            duration: BACKDROP_FADE_DURATION,
            delay: Duration::ZERO,
            curve: Curve::EaseInOut,
            changes: vec![Change::Opacity { from: 0.0, to: 1.0 }],
        }
    }

    /// Panel entrance: fade in and spring up from half scale, starting
    /// after the backdrop has begun.
    #[must_use]
    pub fn show_panel() -> Self {
        Self {
            duration: PANEL_SHOW_DURATION,
            delay: CHOREOGRAPHY_DELAY,
            curve: Curve::Spring(PANEL_SPRING),
            changes: vec![
                Change::Opacity { from: 0.0, to: 1.0 },
                Change::Scale {
                    from: PANEL_HIDDEN_SCALE,
                    to: 1.0,
                },
            ],
        }
    }

    /// Panel exit: fade out and shrink back to half scale, no delay.
    #[must_use]
    pub fn hide_panel() -> Self {
        Self {
            duration: PANEL_HIDE_DURATION,
            delay: Duration::ZERO,
            curve: Curve::Spring(PANEL_SPRING),
            changes: vec![
                Change::Opacity { from: 1.0, to: 0.0 },
                Change::Scale {
                    from: 1.0,
                    to: PANEL_HIDDEN_SCALE,
                },
            ],
        }
    }

    /// Backdrop exit: fade to transparent after the panel has begun.
    #[must_use]
    pub fn hide_backdrop() -> Self {
        Self {
            duration: BACKDROP_FADE_DURATION,
            delay: CHOREOGRAPHY_DELAY,
            curve: Curve::EaseInOut,
            changes: vec![Change::Opacity { from: 1.0, to: 0.0 }],
        }
    }
}

/// Identifies which choreographed animation a completion belongs to.
///
/// The controller schedules at most these four animations over its
/// lifetime; the host echoes the token back on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationToken {
    ShowBackdrop,
    ShowPanel,
    HidePanel,
    HideBackdrop,
}
