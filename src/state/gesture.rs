//! Pan and pinch-to-zoom state for the full-screen image viewer.
//!
//! The engine turns batches of touches into a bounded affine transform.
//! Exactly one of idle, panning or pinching holds at a time, and every
//! mode change re-captures a baseline before the next move is applied.

use super::touch::{Point, TouchPhase, TouchPoint};

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;

/// Transform applied to the image surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    pub fn identity() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }

    pub fn css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Gesture {
    Idle,
    Panning {
        /// Touch followed for the pan; `None` until a touch is seen.
        touch: Option<(i32, Point)>,
        baseline: Point,
    },
    Pinching {
        ids: (i32, i32),
        distance: f64,
        scale: f64,
    },
}

#[derive(Clone, Debug)]
pub struct GestureEngine {
    scale: f64,
    translate: Point,
    live_scale: f64,
    live_translate: Point,
    gesture: Gesture,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Point::ORIGIN,
            live_scale: 1.0,
            live_translate: Point::ORIGIN,
            gesture: Gesture::Idle,
        }
    }
}

impl GestureEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to identity with no gesture in flight.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn transform(&self) -> Transform {
        Transform {
            scale: self.live_scale,
            translate_x: self.live_translate.x,
            translate_y: self.live_translate.y,
        }
    }

    /// Committed scale, as of the last gesture end.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Committed translate, as of the last gesture end.
    #[cfg(test)]
    pub fn translate(&self) -> Point {
        self.translate
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::Panning { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.gesture, Gesture::Pinching { .. })
    }

    pub fn handle(&mut self, phase: TouchPhase, touches: &[TouchPoint]) -> Transform {
        match phase {
            TouchPhase::Start => self.on_start(touches),
            TouchPhase::Move => self.on_move(touches),
            TouchPhase::End => self.on_end(touches),
            TouchPhase::Terminate => self.on_terminate(),
        }
        self.transform()
    }

    fn on_start(&mut self, touches: &[TouchPoint]) {
        // A finger landing on top of an existing pinch does not disturb it.
        if let Gesture::Pinching { ids, .. } = self.gesture {
            if tracked_pair(ids, touches).is_some() {
                return;
            }
        }
        if !self.is_idle() {
            self.commit();
        }
        self.begin(touches);
    }

    fn on_move(&mut self, touches: &[TouchPoint]) {
        let needs_rebaseline = match self.gesture {
            Gesture::Idle => !touches.is_empty(),
            Gesture::Panning { touch, .. } => {
                touches.len() >= 2 || lost_pan_touch(touch, touches)
            }
            Gesture::Pinching { ids, .. } => tracked_pair(ids, touches).is_none(),
        };
        if needs_rebaseline {
            log::debug!("gesture: touch count now {}, re-baselining", touches.len());
            if !self.is_idle() {
                self.commit();
            }
            self.begin(touches);
            return;
        }

        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Pinching { ids, distance, scale } => {
                let Some((a, b)) = tracked_pair(*ids, touches) else {
                    return;
                };
                if !a.is_valid() || !b.is_valid() {
                    return;
                }
                if *distance <= 0.0 || !distance.is_finite() {
                    return;
                }
                let next = a.point().distance(b.point()) / *distance * *scale;
                if next.is_finite() {
                    self.live_scale = next.clamp(MIN_SCALE, MAX_SCALE);
                }
            }
            Gesture::Panning { touch, baseline } => {
                let current = match *touch {
                    Some((id, _)) => touches.iter().find(|t| t.id == id),
                    None => touches.first(),
                };
                let Some(current) = current.filter(|t| t.is_valid()) else {
                    return;
                };
                match *touch {
                    Some((_, origin)) => {
                        let next = Point::new(
                            baseline.x + (current.page_x - origin.x),
                            baseline.y + (current.page_y - origin.y),
                        );
                        if next.x.is_finite() && next.y.is_finite() {
                            self.live_translate = next;
                        }
                    }
                    None => *touch = Some((current.id, current.point())),
                }
            }
        }
    }

    fn on_end(&mut self, remaining: &[TouchPoint]) {
        if self.is_idle() {
            return;
        }
        self.commit();
        if remaining.is_empty() {
            self.gesture = Gesture::Idle;
        } else {
            // Some fingers are still down: continue in whatever mode they form.
            self.begin(remaining);
        }
    }

    fn on_terminate(&mut self) {
        self.live_scale = self.scale;
        self.live_translate = self.translate;
        self.gesture = Gesture::Idle;
    }

    /// Folds the live transform into the committed one.
    fn commit(&mut self) {
        self.scale = self.live_scale;
        self.translate = self.live_translate;
    }

    fn begin(&mut self, touches: &[TouchPoint]) {
        self.gesture = if touches.len() >= 2 {
            let (a, b) = (touches[0], touches[1]);
            let distance = if a.is_valid() && b.is_valid() {
                a.point().distance(b.point())
            } else {
                0.0
            };
            log::debug!("gesture: pinch from distance {distance:.1} at scale {:.3}", self.scale);
            Gesture::Pinching { ids: (a.id, b.id), distance, scale: self.scale }
        } else {
            let touch = touches.first().filter(|t| t.is_valid()).map(|t| (t.id, t.point()));
            Gesture::Panning { touch, baseline: self.translate }
        };
    }
}

/// The pan's touch is gone but a different single valid touch is down,
/// e.g. a missed touchstart or a mouse drag interleaved with touches.
fn lost_pan_touch(touch: Option<(i32, Point)>, touches: &[TouchPoint]) -> bool {
    match (touch, touches) {
        (Some((id, _)), [only]) => only.id != id && only.is_valid(),
        _ => false,
    }
}

fn tracked_pair(ids: (i32, i32), touches: &[TouchPoint]) -> Option<(TouchPoint, TouchPoint)> {
    let a = touches.iter().find(|t| t.id == ids.0)?;
    let b = touches.iter().find(|t| t.id == ids.1)?;
    Some((*a, *b))
}
