use crate::animation::tween::{OnComplete, Tween, TweenId, TweenSpec};
use crate::errors::{Error, Result};
use crate::scene::{NodeHandle, Scene};

/// Animation driver
///
/// Owns the active tweens and advances them in lockstep with rendering.
/// Tweens hold non-owning [`NodeHandle`]s into the scene; the scene is
/// passed in on every call rather than stored.
///
/// Time is in milliseconds. The driver remembers the last timestamp it was
/// advanced to (initially 0); tweens scheduled between frames start from
/// that timestamp plus their delay.
#[derive(Debug, Default)]
pub struct TweenDriver {
    active: Vec<Tween>,
    next_id: u64,
    now: f64,
}

impl TweenDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new tween.
    ///
    /// The start value is read from the scene right now, not when the delay
    /// elapses. Changes made to the property during the delay window are
    /// overwritten by the first interpolated frame.
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite durations, negative or non-finite
    /// delays, nodes not present in `scene`, end values of the wrong kind,
    /// and nodes lacking the component the property lives on.
    pub fn schedule(&mut self, scene: &Scene, spec: TweenSpec) -> Result<TweenId> {
        if !(spec.duration.is_finite() && spec.duration > 0.0) {
            return Err(Error::InvalidDuration(spec.duration));
        }
        if !(spec.delay.is_finite() && spec.delay >= 0.0) {
            return Err(Error::InvalidDelay(spec.delay));
        }
        if !scene.contains(spec.node) {
            return Err(Error::NodeNotFound(spec.node));
        }
        let expected = spec.property.kind();
        if spec.end.kind() != expected {
            return Err(Error::ValueKindMismatch {
                expected,
                found: spec.end.kind(),
            });
        }
        let start = spec
            .property
            .read(scene, spec.node)
            .ok_or(Error::MissingComponent {
                node: spec.node,
                component: spec.property.component(),
            })?;

        let id = TweenId(self.next_id);
        self.next_id += 1;

        self.active.push(Tween {
            id,
            node: spec.node,
            property: spec.property,
            start,
            end: spec.end,
            duration: spec.duration,
            easing: spec.easing,
            start_time: self.now + spec.delay,
            on_complete: spec.on_complete,
        });

        Ok(id)
    }

    /// Advances every active tween to `now` and writes the results into
    /// `scene`. Returns the number of tweens that completed.
    ///
    /// Tweens are processed in registration order. A finished tween writes
    /// its end value exactly, leaves the active set, and then runs its
    /// completion action before the next tween is processed. Tweens
    /// scheduled by completion actions are appended behind the existing
    /// ones and first advanced on the following call.
    ///
    /// A `now` earlier than the previous call is clamped to it.
    pub fn advance(&mut self, now: f64, scene: &mut Scene) -> usize {
        let now = if now < self.now {
            log::debug!(
                "Tween clock went backwards ({now} < {}), clamping",
                self.now
            );
            self.now
        } else {
            now
        };
        self.now = now;

        // Tweens appended past `end` were chained during this call
        let mut end = self.active.len();
        let mut i = 0;
        let mut completed = 0;

        while i < end {
            let tween = &self.active[i];
            if tween.is_waiting(now) {
                i += 1;
                continue;
            }

            if !tween.property.write(scene, tween.node, tween.value_at(now)) {
                log::debug!(
                    "Dropping tween {:?}: target {:?} no longer has {:?}",
                    tween.id,
                    tween.node,
                    tween.property
                );
                self.active.remove(i);
                end -= 1;
                continue;
            }

            if tween.progress(now) < 1.0 {
                i += 1;
                continue;
            }

            // Leaves the active set before its completion runs
            let tween = self.active.remove(i);
            end -= 1;
            completed += 1;
            self.complete(tween, scene);
        }

        completed
    }

    fn complete(&mut self, tween: Tween, scene: &mut Scene) {
        let Tween {
            node,
            property,
            on_complete,
            ..
        } = tween;

        let next = match on_complete {
            OnComplete::None => return,
            OnComplete::Callback(f) => {
                f(self, scene, node);
                return;
            }
            OnComplete::Oscillate(osc) => osc.next().leg(node),
            OnComplete::Revert {
                value,
                duration,
                easing,
            } => TweenSpec::new(node, property, value)
                .duration(duration)
                .easing(easing),
        };

        if let Err(e) = self.schedule(scene, next) {
            log::warn!("Failed to chain tween on {node:?}: {e}");
        }
    }

    /// Timestamp of the last [`advance`](Self::advance) call.
    #[inline]
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn is_active(&self, id: TweenId) -> bool {
        self.active.iter().any(|t| t.id == id)
    }

    /// Active tweens in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Tween> {
        self.active.iter()
    }

    pub fn tweens_for(&self, node: NodeHandle) -> impl Iterator<Item = &Tween> {
        self.active.iter().filter(move |t| t.node == node)
    }
}
