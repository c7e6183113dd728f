use std::fmt;

use crate::animation::driver::TweenDriver;
use crate::animation::easing::Easing;
use crate::animation::oscillation::Oscillation;
use crate::animation::property::Property;
use crate::animation::values::PropertyValue;
use crate::scene::{NodeHandle, Scene};

/// Identifier returned by [`TweenDriver::schedule`]. Never reused by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub(crate) u64);

/// Custom completion callback.
pub type CompletionFn = Box<dyn FnOnce(&mut TweenDriver, &mut Scene, NodeHandle)>;

/// What happens when a tween reaches its end value.
///
/// Runs synchronously inside [`TweenDriver::advance`]. Anything it schedules
/// starts at the driver's current time and is first advanced on the next
/// frame.
#[derive(Default)]
pub enum OnComplete {
    #[default]
    None,
    /// Schedule the next leg of a back-and-forth cycle.
    Oscillate(Oscillation),
    /// Tween the same property back to `value`.
    Revert {
        value: PropertyValue,
        duration: f64,
        easing: Easing,
    },
    Callback(CompletionFn),
}

impl fmt::Debug for OnComplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Oscillate(osc) => f.debug_tuple("Oscillate").field(osc).finish(),
            Self::Revert {
                value,
                duration,
                easing,
            } => f
                .debug_struct("Revert")
                .field("value", value)
                .field("duration", duration)
                .field("easing", easing)
                .finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Request for a new tween, built fluently and handed to
/// [`TweenDriver::schedule`].
///
/// ```
/// use scene_tween::animation::{Easing, EaseMode, Property, TweenSpec};
/// # use scene_tween::scene::Scene;
/// # let mut scene = Scene::new();
/// # let node = scene.build_node("box").build();
/// let spec = TweenSpec::new(node, Property::SCALE, glam::Vec3::ONE)
///     .duration(1000.0)
///     .easing(Easing::Elastic(EaseMode::Out))
///     .delay(200.0);
/// ```
#[derive(Debug)]
pub struct TweenSpec {
    pub node: NodeHandle,
    pub property: Property,
    pub end: PropertyValue,
    /// Milliseconds; must be finite and positive.
    pub duration: f64,
    pub easing: Easing,
    /// Milliseconds; must be finite and non-negative.
    pub delay: f64,
    pub on_complete: OnComplete,
}

impl TweenSpec {
    /// 1 second, linear, no delay, no completion action.
    #[must_use]
    pub fn new(node: NodeHandle, property: Property, end: impl Into<PropertyValue>) -> Self {
        Self {
            node,
            property,
            end: end.into(),
            duration: 1000.0,
            easing: Easing::Linear,
            delay: 0.0,
            on_complete: OnComplete::None,
        }
    }

    #[must_use]
    pub fn duration(mut self, ms: f64) -> Self {
        self.duration = ms;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn delay(mut self, ms: f64) -> Self {
        self.delay = ms;
        self
    }

    #[must_use]
    pub fn on_complete(mut self, action: OnComplete) -> Self {
        self.on_complete = action;
        self
    }

    /// Shorthand for a custom completion callback.
    #[must_use]
    pub fn then(self, f: impl FnOnce(&mut TweenDriver, &mut Scene, NodeHandle) + 'static) -> Self {
        self.on_complete(OnComplete::Callback(Box::new(f)))
    }
}

/// One active interpolation owned by the driver.
#[derive(Debug)]
pub struct Tween {
    pub(crate) id: TweenId,
    pub(crate) node: NodeHandle,
    pub(crate) property: Property,
    pub(crate) start: PropertyValue,
    pub(crate) end: PropertyValue,
    pub(crate) duration: f64,
    pub(crate) easing: Easing,
    pub(crate) start_time: f64,
    pub(crate) on_complete: OnComplete,
}

impl Tween {
    #[inline]
    #[must_use]
    pub fn id(&self) -> TweenId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn node(&self) -> NodeHandle {
        self.node
    }

    #[inline]
    #[must_use]
    pub fn property(&self) -> Property {
        self.property
    }

    /// Value captured when the tween was scheduled.
    #[inline]
    #[must_use]
    pub fn start_value(&self) -> PropertyValue {
        self.start
    }

    #[inline]
    #[must_use]
    pub fn end_value(&self) -> PropertyValue {
        self.end
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Driver time at which interpolation begins (schedule time + delay).
    #[inline]
    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// `true` while the delay has not elapsed.
    #[inline]
    #[must_use]
    pub fn is_waiting(&self, now: f64) -> bool {
        now < self.start_time
    }

    /// Linear progress at `now`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: f64) -> f32 {
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0) as f32
    }

    /// Interpolated value at `now`. The end value is returned verbatim once
    /// progress reaches 1.
    #[must_use]
    pub fn value_at(&self, now: f64) -> PropertyValue {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.end;
        }
        // Kinds are checked at schedule time
        PropertyValue::interpolate(self.start, self.end, self.easing.apply(t)).unwrap_or(self.end)
    }
}
