//! The live, editable list of sample points.
//!
//! [`WorkingSet`] owns the points a user is working with and the current
//! selection. Its operations keep ids stable: ids are assigned once and
//! survive moves, reorders and removals of other points.

use rand::Rng;

use crate::color::Rgb;
use crate::sampler::{random_points, DiverseSampler, PixelSource, SamplePoint, SamplingConfig};

/// An ordered set of sample points with an optional selected point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingSet {
    points: Vec<SamplePoint>,
    selected: Option<u32>,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A working set over existing points, selecting the first one.
    pub fn from_points(points: Vec<SamplePoint>) -> Self {
        let selected = points.first().map(|p| p.id);
        Self { points, selected }
    }

    #[inline]
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Id of the selected point, if any.
    #[inline]
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn get(&self, id: u32) -> Option<&SamplePoint> {
        self.points.iter().find(|p| p.id == id)
    }

    fn contains(&self, id: u32) -> bool {
        self.points.iter().any(|p| p.id == id)
    }

    /// Bring the set to exactly `count` points.
    ///
    /// - Empty set: run the diverse sampler and select the first point.
    /// - Too few: append random points (16px margin) with ids continuing
    ///   after the current maximum.
    /// - Too many: keep the first `count`; if the selected point was
    ///   dropped, select the new last point.
    pub fn ensure_count<S, R>(
        &mut self,
        count: usize,
        source: &S,
        width: f64,
        height: f64,
        config: &SamplingConfig,
        rng: &mut R,
    ) where
        S: PixelSource + ?Sized,
        R: Rng + ?Sized,
    {
        let len = self.points.len();
        if len == 0 {
            if count == 0 {
                return;
            }
            let points =
                DiverseSampler::new(config.clone()).sample(source, count, width, height, rng);
            *self = Self::from_points(points);
        } else if len < count {
            let next_id = self.points.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let added = random_points(count - len, width, height, rng)
                .into_iter()
                .enumerate()
                .map(|(i, (x, y))| SamplePoint::new(next_id + i as u32, x, y, source.color_at(x, y)));
            self.points.extend(added);
        } else if len > count {
            self.points.truncate(count);
            if let Some(id) = self.selected {
                if !self.contains(id) {
                    self.selected = self.points.last().map(|p| p.id);
                }
            }
        }
    }

    /// Move a point and re-read its color. Returns `false` for unknown ids.
    pub fn move_point<S>(&mut self, id: u32, x: f64, y: f64, source: &S) -> bool
    where
        S: PixelSource + ?Sized,
    {
        match self.points.iter_mut().find(|p| p.id == id) {
            Some(point) => {
                point.relocate(x, y, source.color_at(x, y));
                true
            }
            None => false,
        }
    }

    /// Toggle selection: selecting the selected point clears it.
    pub fn select(&mut self, id: u32) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Remove a point. If it was selected, the last remaining point becomes
    /// selected.
    pub fn remove(&mut self, id: u32) -> Option<SamplePoint> {
        let index = self.points.iter().position(|p| p.id == id)?;
        let removed = self.points.remove(index);
        if self.selected == Some(id) {
            self.selected = self.points.last().map(|p| p.id);
        }
        Some(removed)
    }

    /// Move the point at `from` so it ends up at `to`.
    ///
    /// `to` may equal `len` (append). Returns `false` and leaves the set
    /// untouched for `from == to`, `from >= len` or `to > len`.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.points.len();
        if from == to || from >= len || to > len {
            return false;
        }
        let moved = self.points.remove(from);
        let to = to.min(self.points.len());
        self.points.insert(to, moved);
        true
    }

    /// Swap in a new point list, e.g. an optimizer result. The selection
    /// survives if its id is still present, otherwise the first point is
    /// selected.
    pub fn replace(&mut self, points: Vec<SamplePoint>) {
        self.points = points;
        self.selected = match self.selected {
            Some(id) if self.contains(id) => Some(id),
            _ => self.points.first().map(|p| p.id),
        };
    }

    /// Hex colors in display order.
    pub fn hex_colors(&self) -> Vec<String> {
        self.points.iter().map(|p| p.hex.clone()).collect()
    }

    pub fn colors(&self) -> Vec<Rgb> {
        self.points.iter().map(|p| p.rgb).collect()
    }
}
