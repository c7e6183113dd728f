//! Two-state back-and-forth cycle.
//!
//! An [`Oscillation`] rides along on a tween as its completion action. When
//! the leg finishes, the driver calls [`Oscillation::next`] and schedules the
//! returned leg on the same node, so the cycle is an explicit state machine
//! rather than a chain of closures.

use crate::animation::easing::Easing;
use crate::animation::property::Property;
use crate::animation::tween::{OnComplete, TweenSpec};
use crate::animation::values::PropertyValue;
use crate::scene::NodeHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OscillationPhase {
    /// Moving towards `high`.
    Ascending,
    /// Moving towards `low`.
    Descending,
}

impl OscillationPhase {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub property: Property,
    pub low: PropertyValue,
    pub high: PropertyValue,
    /// Duration of one leg in milliseconds.
    pub duration: f64,
    pub easing: Easing,
    phase: OscillationPhase,
    legs_completed: u64,
}

impl Oscillation {
    /// Creates a cycle whose first leg ascends towards `high`.
    #[must_use]
    pub fn new(
        property: Property,
        low: impl Into<PropertyValue>,
        high: impl Into<PropertyValue>,
        duration: f64,
    ) -> Self {
        Self {
            property,
            low: low.into(),
            high: high.into(),
            duration,
            easing: Easing::Linear,
            phase: OscillationPhase::Ascending,
            legs_completed: 0,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Starts the cycle in `phase` instead of ascending.
    #[must_use]
    pub fn starting(mut self, phase: OscillationPhase) -> Self {
        self.phase = phase;
        self
    }

    /// Phase of the leg currently running.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> OscillationPhase {
        self.phase
    }

    /// Number of legs finished before the current one.
    #[inline]
    #[must_use]
    pub fn legs_completed(&self) -> u64 {
        self.legs_completed
    }

    /// End value of the current leg.
    #[must_use]
    pub fn target(&self) -> PropertyValue {
        match self.phase {
            OscillationPhase::Ascending => self.high,
            OscillationPhase::Descending => self.low,
        }
    }

    /// Transition taken when the current leg completes.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            phase: self.phase.flipped(),
            legs_completed: self.legs_completed + 1,
            ..self
        }
    }

    /// Tween request for the current leg, carrying the cycle as its
    /// completion action.
    #[must_use]
    pub fn leg(self, node: NodeHandle) -> TweenSpec {
        TweenSpec::new(node, self.property, self.target())
            .duration(self.duration)
            .easing(self.easing)
            .on_complete(OnComplete::Oscillate(self))
    }
}
