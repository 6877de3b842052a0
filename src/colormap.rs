//! This module defines a generalized trait for a colormap, a mapping of numbers to colors, and a
//! [`Palette`]: a gradient that is pinned down by colored *stops* along a line and fills in the
//! space between neighboring stops by linear interpolation in RGB.
//!
//! A palette always stores RGB, no matter what color type a stop was given in. Interpolating in HSL
//! or HSV would need a decision about which way around the hue circle to go, and RGB is what every
//! color type converts through anyway.

use std::iter::FromIterator;

use crate::color::{Color, RGBColor};

/// A trait that models a colormap, a mapping of positions to colors. Any color output type is
/// supported, but it must be consistent.
pub trait ColorMap<T: Color> {
    /// Maps a single position to a color. This should never fail or panic: out-of-range positions
    /// map to some color as well.
    fn transform_single(&self, x: f64) -> T;
    /// Maps a collection of positions to a Vec of colors. Does not evaluate lazily.
    fn transform<U: IntoIterator<Item = f64>>(&self, inputs: U) -> Vec<T> {
        inputs.into_iter().map(|x| self.transform_single(x)).collect()
    }
}

/// A single stop in a [`Palette`]: the color the gradient has at exactly `position`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    position: f64,
    color: RGBColor,
}

impl Stop {
    /// Creates a stop from a position and any color, which is stored as RGB.
    pub fn new<T: Color>(position: f64, color: T) -> Stop {
        Stop {
            position,
            color: color.into_rgb(),
        }
    }

    /// Where along the palette this stop sits.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// The color of the palette at this stop.
    pub fn color(&self) -> RGBColor {
        self.color
    }
}

/// The result of looking for a position among a palette's stops.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StopSearch {
    /// A stop sits at exactly this position; holds the index of the first such stop.
    Found(usize),
    /// No stop sits at this position; holds the index a stop with this position would be inserted
    /// at to keep the stops sorted.
    NotFound(usize),
}

/// A gradient defined by any number of colored stops, kept sorted by position.
///
/// Looking up a position between two stops blends their colors linearly, truncating each channel.
/// Positions before the first stop or after the last one get that stop's color, and an empty
/// palette is black everywhere. Several stops can share a position, which makes a hard edge: they
/// keep the order they were added in.
///
/// # Example
/// ```
/// # use hexcone::prelude::*;
/// let mut palette = Palette::new();
/// palette.add(0.0, RGBColor::new(255, 0, 0));
/// palette.add(1.0, RGBColor::new(0, 255, 0));
/// assert_eq!(palette.get(0.25), RGBColor::new(191, 63, 0));
/// assert_eq!(palette.get(-1.0), RGBColor::new(255, 0, 0));
/// assert_eq!(palette.get(2.0), RGBColor::new(0, 255, 0));
/// ```
///
/// Stops can be given as any color type, and a palette can hand back any color type too.
///
/// ```
/// # use hexcone::prelude::*;
/// let mut palette = Palette::new();
/// palette.add(0.0, HSVColor::new(240, 255, 255).unwrap());
/// palette.add(10.0, HSLColor::new(0, 0, 255).unwrap());
/// assert_eq!(palette.get(5.0), RGBColor::new(127, 127, 255));
/// let hsv: HSVColor = palette.transform_single(10.0);
/// assert_eq!(hsv, HSVColor::new(0, 0, 255).unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Stop>", into = "Vec<Stop>")]
pub struct Palette {
    stops: Vec<Stop>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Palette {
        Palette { stops: Vec::new() }
    }

    /// Creates a two-color gradient running from `start` at 0 to `end` at 1.
    pub fn linear<T: Color>(start: T, end: T) -> Palette {
        let mut palette = Palette::new();
        palette.add(0.0, start);
        palette.add(1.0, end);
        palette
    }

    /// Adds a stop, keeping the stops sorted by position. A stop at the same position as existing
    /// ones goes after all of them. Colors are converted to RGB before they're stored.
    ///
    /// A NaN position has no place in the ordering, and an infinite one leaves no room to
    /// interpolate toward it, so such a stop is dropped.
    pub fn add<T: Color>(&mut self, position: f64, color: T) {
        if !position.is_finite() {
            tracing::warn!(position, "dropping palette stop with a non-finite position");
            return;
        }
        let index = self.stops.partition_point(|stop| stop.position <= position);
        self.stops.insert(index, Stop::new(position, color));
        tracing::trace!(position, index, stops = self.stops.len(), "added palette stop");
    }

    /// Gets the color at a position. See the type-level documentation for how positions outside the
    /// stops, and an empty palette, are handled. A NaN position gets the first stop's color.
    pub fn get(&self, position: f64) -> RGBColor {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return RGBColor::default(),
        };
        if position >= last.position {
            return last.color;
        }
        if position.is_nan() || position <= first.position {
            return first.color;
        }

        // from here on, first.position < position < last.position, so a miss always has a stop on
        // either side of it
        match self.search(position) {
            StopSearch::Found(index) => self.stops[index].color,
            StopSearch::NotFound(index) => {
                let lower = &self.stops[index - 1];
                let upper = &self.stops[index];
                let t = (position - lower.position) / (upper.position - lower.position);
                lower.color.lerp(upper.color, t)
            }
        }
    }

    /// Looks for a stop at exactly `position` with a binary search.
    ///
    /// # Example
    /// ```
    /// # use hexcone::prelude::*;
    /// # use hexcone::colormap::StopSearch;
    /// let palette = Palette::linear(RGBColor::new(0, 0, 0), RGBColor::new(255, 255, 255));
    /// assert_eq!(palette.search(1.0), StopSearch::Found(1));
    /// assert_eq!(palette.search(0.5), StopSearch::NotFound(1));
    /// assert_eq!(palette.search(-3.0), StopSearch::NotFound(0));
    /// ```
    pub fn search(&self, position: f64) -> StopSearch {
        let index = self.stops.partition_point(|stop| stop.position < position);
        match self.stops.get(index) {
            Some(stop) if stop.position == position => StopSearch::Found(index),
            _ => StopSearch::NotFound(index),
        }
    }

    /// The stops, sorted by position.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether there are no stops at all.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl<T: Color> ColorMap<T> for Palette {
    fn transform_single(&self, x: f64) -> T {
        T::from_rgb(self.get(x))
    }
}

impl<T: Color> Extend<(f64, T)> for Palette {
    fn extend<I: IntoIterator<Item = (f64, T)>>(&mut self, iter: I) {
        for (position, color) in iter {
            self.add(position, color);
        }
    }
}

impl<T: Color> FromIterator<(f64, T)> for Palette {
    fn from_iter<I: IntoIterator<Item = (f64, T)>>(iter: I) -> Palette {
        let mut palette = Palette::new();
        palette.extend(iter);
        palette
    }
}

// stops from outside might not be sorted, so they go through `add` one at a time
impl From<Vec<Stop>> for Palette {
    fn from(stops: Vec<Stop>) -> Palette {
        stops.into_iter().map(|stop| (stop.position, stop.color)).collect()
    }
}

impl From<Palette> for Vec<Stop> {
    fn from(palette: Palette) -> Vec<Stop> {
        palette.stops
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colors::{HSLColor, HSVColor};

    fn red_green() -> Palette {
        let mut palette = Palette::new();
        palette.add(0.0, RGBColor::new(255, 0, 0));
        palette.add(1.0, RGBColor::new(0, 255, 0));
        palette
    }

    #[test]
    fn test_two_stop_gradient() {
        let palette = red_green();
        let cases = [
            (-1.0, (255, 0, 0)),
            (0.0, (255, 0, 0)),
            (0.25, (191, 63, 0)),
            (0.5, (127, 127, 0)),
            (0.75, (63, 191, 0)),
            (1.0, (0, 255, 0)),
            (2.0, (0, 255, 0)),
        ];
        for &(position, rgb) in cases.iter() {
            assert_eq!(palette.get(position), RGBColor::from(rgb), "at {}", position);
        }
    }

    #[test]
    fn test_empty_palette_is_black() {
        let palette = Palette::new();
        assert!(palette.is_empty());
        assert_eq!(palette.get(0.0), RGBColor::new(0, 0, 0));
        assert_eq!(palette.get(-12.5), RGBColor::new(0, 0, 0));
        assert_eq!(palette.get(f64::NAN), RGBColor::new(0, 0, 0));
        assert_eq!(palette.search(1.0), StopSearch::NotFound(0));
    }

    #[test]
    fn test_single_stop_is_flat() {
        let mut palette = Palette::new();
        palette.add(3.0, RGBColor::new(9, 8, 7));
        for &x in [-100.0, 2.9, 3.0, 3.1, 100.0].iter() {
            assert_eq!(palette.get(x), RGBColor::new(9, 8, 7));
        }
    }

    #[test]
    fn test_stops_stay_sorted() {
        let mut palette = Palette::new();
        for &position in [0.5, -2.0, 10.0, 0.25, 3.0].iter() {
            palette.add(position, RGBColor::new(0, 0, 0));
        }
        let positions: Vec<f64> = palette.stops().iter().map(Stop::position).collect();
        assert_eq!(positions, vec![-2.0, 0.25, 0.5, 3.0, 10.0]);
        assert_eq!(palette.len(), 5);
    }

    #[test]
    fn test_duplicate_positions_keep_insertion_order() {
        let mut palette = Palette::new();
        palette.add(0.0, RGBColor::new(0, 0, 0));
        palette.add(1.0, RGBColor::new(255, 255, 255));
        palette.add(0.5, RGBColor::new(255, 0, 0));
        palette.add(0.5, RGBColor::new(0, 0, 255));
        palette.add(0.5, RGBColor::new(0, 255, 0));

        let colors: Vec<RGBColor> = palette.stops().iter().map(Stop::color).collect();
        assert_eq!(
            colors,
            vec![
                RGBColor::new(0, 0, 0),
                RGBColor::new(255, 0, 0),
                RGBColor::new(0, 0, 255),
                RGBColor::new(0, 255, 0),
                RGBColor::new(255, 255, 255),
            ]
        );

        // an exact hit returns the first of the run without interpolating
        assert_eq!(palette.search(0.5), StopSearch::Found(1));
        assert_eq!(palette.get(0.5), RGBColor::new(255, 0, 0));
        // on either side, the run acts as a hard edge
        assert_eq!(palette.get(0.25), RGBColor::new(127, 0, 0));
        assert_eq!(palette.get(0.75), RGBColor::new(127, 255, 127));
    }

    #[test]
    fn test_duplicate_run_at_the_top() {
        let mut palette = Palette::new();
        palette.add(0.0, RGBColor::new(0, 0, 0));
        palette.add(1.0, RGBColor::new(10, 10, 10));
        palette.add(1.0, RGBColor::new(20, 20, 20));
        // the search still finds the first of the run
        assert_eq!(palette.search(1.0), StopSearch::Found(1));
        // but the upper clamp wins, so the last stop comes back
        assert_eq!(palette.get(1.0), RGBColor::new(20, 20, 20));
        assert_eq!(palette.get(1.5), RGBColor::new(20, 20, 20));
        // below the run, the blend heads for its first stop
        assert_eq!(palette.get(0.5), RGBColor::new(5, 5, 5));
    }

    #[test]
    fn test_all_stops_at_one_position() {
        let palette: Palette = vec![
            (2.0, RGBColor::new(1, 1, 1)),
            (2.0, RGBColor::new(2, 2, 2)),
            (2.0, RGBColor::new(3, 3, 3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(palette.search(2.0), StopSearch::Found(0));
        assert_eq!(palette.get(2.0), RGBColor::new(3, 3, 3));
        assert_eq!(palette.get(9.0), RGBColor::new(3, 3, 3));
        assert_eq!(palette.get(-9.0), RGBColor::new(1, 1, 1));
    }

    #[test]
    fn test_exact_interior_stop() {
        let mut palette = red_green();
        palette.add(0.5, RGBColor::new(1, 2, 3));
        assert_eq!(palette.search(0.5), StopSearch::Found(1));
        assert_eq!(palette.get(0.5), RGBColor::new(1, 2, 3));
        assert_eq!(palette.get(0.75), RGBColor::new(0, 128, 1));
    }

    #[test]
    fn test_search() {
        let palette: Palette = vec![(1.0, RGBColor::new(0, 0, 0)), (2.0, RGBColor::new(0, 0, 0))]
            .into_iter()
            .collect();
        assert_eq!(palette.search(0.0), StopSearch::NotFound(0));
        assert_eq!(palette.search(1.0), StopSearch::Found(0));
        assert_eq!(palette.search(1.5), StopSearch::NotFound(1));
        assert_eq!(palette.search(2.0), StopSearch::Found(1));
        assert_eq!(palette.search(7.0), StopSearch::NotFound(2));
    }

    #[test]
    fn test_nan_positions() {
        let mut palette = red_green();
        palette.add(f64::NAN, RGBColor::new(1, 1, 1));
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(f64::NAN), RGBColor::new(255, 0, 0));
    }

    #[test]
    fn test_infinite_positions() {
        let mut palette = Palette::new();
        palette.add(f64::NEG_INFINITY, RGBColor::new(200, 200, 200));
        palette.add(1.0, RGBColor::new(100, 100, 100));
        palette.add(f64::INFINITY, RGBColor::new(7, 7, 7));
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get(0.0), RGBColor::new(100, 100, 100));
        // lookups at infinity are fine, they just clamp
        assert_eq!(palette.get(f64::INFINITY), RGBColor::new(100, 100, 100));
        assert_eq!(palette.get(f64::NEG_INFINITY), RGBColor::new(100, 100, 100));

        let from_stops: Palette = vec![
            Stop::new(f64::NEG_INFINITY, RGBColor::new(200, 200, 200)),
            Stop::new(0.0, RGBColor::new(0, 0, 0)),
            Stop::new(1.0, RGBColor::new(100, 100, 100)),
        ]
        .into();
        assert_eq!(from_stops.len(), 2);
        assert_eq!(from_stops.get(0.5), RGBColor::new(50, 50, 50));
    }

    #[test]
    fn test_mixed_color_types() {
        let mut palette = Palette::new();
        palette.add(0.0, HSLColor::new(0, 255, 128).unwrap());
        palette.add(2.0, HSVColor::new(240, 255, 255).unwrap());
        // stored as RGB right away
        assert_eq!(palette.stops()[0].color(), RGBColor::new(255, 1, 1));
        assert_eq!(palette.stops()[1].color(), RGBColor::new(0, 0, 255));
        assert_eq!(palette.get(1.0), RGBColor::new(127, 0, 128));
    }

    #[test]
    fn test_colormap_transform() {
        let palette = Palette::linear(RGBColor::new(0, 0, 0), RGBColor::new(255, 255, 255));
        let grays: Vec<RGBColor> = palette.transform(vec![-1.0, 0.0, 0.5, 1.0, 5.0]);
        assert_eq!(
            grays,
            vec![
                RGBColor::new(0, 0, 0),
                RGBColor::new(0, 0, 0),
                RGBColor::new(127, 127, 127),
                RGBColor::new(255, 255, 255),
                RGBColor::new(255, 255, 255),
            ]
        );
        let hsls: Vec<HSLColor> = palette.transform(vec![0.5]);
        assert_eq!(hsls, vec![HSLColor::new(0, 0, 127).unwrap()]);
    }

    #[test]
    fn test_positions_are_not_rounded() {
        let palette: Palette = vec![(0.1, RGBColor::new(0, 0, 0)), (0.3, RGBColor::new(200, 0, 0))]
            .into_iter()
            .collect();
        let first = palette.stops()[0].position();
        assert!(approx_eq!(f64, first, 0.1, ulps = 2));
        let span = palette.stops()[1].position() - first;
        assert!(approx_eq!(f64, span, 0.2, ulps = 2));
        // the span is a hair under 0.2, so the weights land a hair off the round numbers and
        // truncation makes that visible
        assert_eq!(palette.get(0.2), RGBColor::new(100, 0, 0));
        assert_eq!(palette.get(0.15), RGBColor::new(49, 0, 0));
    }

    #[test]
    fn test_palette_serde() {
        let palette = red_green();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(
            json,
            r#"[{"position":0.0,"color":{"r":255,"g":0,"b":0}},{"position":1.0,"color":{"r":0,"g":255,"b":0}}]"#
        );
        assert_eq!(serde_json::from_str::<Palette>(&json).unwrap(), palette);

        // out-of-order input is sorted on the way in
        let unsorted = r#"[{"position":1.0,"color":{"r":0,"g":255,"b":0}},{"position":0.0,"color":{"r":255,"g":0,"b":0}}]"#;
        let sorted: Palette = serde_json::from_str(unsorted).unwrap();
        assert_eq!(sorted, palette);
        assert_eq!(sorted.get(0.5), RGBColor::new(127, 127, 0));
    }
}
