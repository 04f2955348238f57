//! Endless vertical scrolling of track geometry
//!
//! Each sequence is a deque ordered bottom to top: the front is the oldest,
//! lowest element and is recycled first; the back is the newest, topmost.
//! After every advance the topmost element sits at or above the screen top,
//! so the track never runs out of geometry.

use std::collections::VecDeque;

use crate::settings::LaneStyle;
use crate::tuning::Tuning;

/// What a track element represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Centre lane marker
    LaneMarker,
    /// Kerb segment on both road edges
    Border,
    /// Spectator marker on both grass strips
    Crowd,
}

/// One recyclable piece of scenery (bottom edge at `y`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackElement {
    pub y: f32,
    pub kind: TrackKind,
}

/// Even/odd position within a sequence
///
/// Always derived from the element's current index, never stored, so the
/// pattern is recomputed every frame as the front is recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[inline]
    pub fn of(index: usize) -> Self {
        if index % 2 == 0 { Parity::Even } else { Parity::Odd }
    }
}

/// A homogeneous run of track elements
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSequence {
    kind: TrackKind,
    /// Element height
    height: f32,
    /// Distance between consecutive elements' bottoms
    step: f32,
    elements: VecDeque<TrackElement>,
}

impl TrackSequence {
    /// Create a sequence filled from the bottom of the screen to its top
    pub fn new(kind: TrackKind, height: f32, step: f32, screen_height: f32) -> Self {
        let mut seq = Self {
            kind,
            height,
            step: step.max(height),
            elements: VecDeque::new(),
        };
        seq.elements.push_back(TrackElement { y: 0.0, kind });
        seq.replenish(screen_height);
        seq
    }

    /// Scroll every element down by `speed`, recycle what left the screen,
    /// then top up so the newest element is at or above `screen_height`.
    pub fn advance(&mut self, speed: f32, screen_height: f32) {
        for element in &mut self.elements {
            element.y -= speed;
        }

        let height = self.height;
        while self
            .elements
            .front()
            .is_some_and(|e| e.y + height <= 0.0)
        {
            self.elements.pop_front();
        }

        self.replenish(screen_height);
    }

    fn replenish(&mut self, screen_height: f32) {
        loop {
            let next_y = match self.elements.back() {
                None => screen_height,
                Some(top) if top.y < screen_height => top.y + self.step,
                Some(_) => break,
            };
            self.elements.push_back(TrackElement {
                y: next_y,
                kind: self.kind,
            });
        }
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Most recently added (highest) element
    pub fn topmost(&self) -> Option<&TrackElement> {
        self.elements.back()
    }

    /// Bottom-to-top iteration
    pub fn iter(&self) -> impl Iterator<Item = &TrackElement> {
        self.elements.iter()
    }

    /// Bottom-to-top iteration with index-derived parity
    pub fn iter_with_parity(&self) -> impl Iterator<Item = (Parity, &TrackElement)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (Parity::of(i), e))
    }
}

/// All scrolling scenery of the track
#[derive(Debug, Clone, PartialEq)]
pub struct Scroller {
    pub lane_markers: TrackSequence,
    pub borders: TrackSequence,
    /// Absent when the crowd layer is switched off
    pub crowd: Option<TrackSequence>,
}

impl Scroller {
    pub fn new(tuning: &Tuning, lane_style: LaneStyle, crowd: bool) -> Self {
        let h = tuning.screen_height;
        let marker = tuning.lane_marker_height;
        Self {
            lane_markers: TrackSequence::new(
                TrackKind::LaneMarker,
                marker,
                marker * lane_style.step_factor(),
                h,
            ),
            borders: TrackSequence::new(TrackKind::Border, marker, marker, h),
            crowd: crowd.then(|| {
                let crowd_h = tuning.crowd_marker_height;
                TrackSequence::new(TrackKind::Crowd, crowd_h, crowd_h * 2.0, h)
            }),
        }
    }

    /// Scroll every sequence by one tick
    pub fn advance(&mut self, scroll_speed: f32, screen_height: f32) {
        for seq in self.sequences_mut() {
            seq.advance(scroll_speed, screen_height);
        }
    }

    pub fn sequences(&self) -> impl Iterator<Item = &TrackSequence> {
        [&self.lane_markers, &self.borders]
            .into_iter()
            .chain(self.crowd.as_ref())
    }

    fn sequences_mut(&mut self) -> impl Iterator<Item = &mut TrackSequence> {
        [&mut self.lane_markers, &mut self.borders]
            .into_iter()
            .chain(self.crowd.as_mut())
    }
}
