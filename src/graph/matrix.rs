use super::*;
use crate::{
    errors::{Result, TspError},
    geometry::Point,
};
use std::fmt;

/// Symmetric pairwise cost matrix over an ordered city sequence.
///
/// Entry `(i, j)` is the Euclidean distance between the i-th and j-th
/// point rounded to the nearest integer; the diagonal is zero. Built once
/// and read-only afterwards — every solver borrows the same instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<Cost>,
    number_of_cities: NumCities,
}

impl DistanceMatrix {
    /// Builds the matrix from an ordered, non-empty point sequence.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(TspError::NonPositiveCityCount);
        }

        let n = points.len();
        let mut data = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = points[i].distance_to(&points[j]).round() as Cost;
                data[i * n + j] = distance;
                data[j * n + i] = distance;
            }
        }

        Ok(Self {
            data,
            number_of_cities: n as NumCities,
        })
    }

    /// Builds the matrix from explicit rows, e.g. hand-picked test costs.
    /// Fails unless the input is square and non-empty.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(TspError::NonPositiveCityCount);
        }
        if rows.iter().any(|row| row.len() != rows.len()) {
            return Err(TspError::NonSquareMatrix);
        }

        Ok(Self {
            number_of_cities: rows.len() as NumCities,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn number_of_cities(&self) -> NumCities {
        self.number_of_cities
    }

    pub fn len(&self) -> usize {
        self.number_of_cities as usize
    }

    /// Returns an iterator over all cities.
    pub fn cities(&self) -> impl Iterator<Item = City> {
        0..self.number_of_cities
    }

    /// Cost between two cities. Panics if an index is out of bounds.
    pub fn distance(&self, from: City, to: City) -> Cost {
        self.data[from as usize * self.len() + to as usize]
    }

    /// All ordered pairs `(i, j)` with `i != j` as weighted edges, emitted
    /// row by row. Both directions of each pair are included.
    pub fn directed_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.cities().flat_map(move |i| {
            self.cities()
                .filter(move |&j| i != j)
                .map(move |j| WeightedEdge::new(self.distance(i, j), i, j))
        })
    }
}

impl fmt::Display for DistanceMatrix {
    /// Diagnostic form, one bracketed row per line: `[  0  10  14  ]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in self.cities() {
            write!(f, "[  ")?;
            for j in self.cities() {
                write!(f, "{}  ", self.distance(i, j))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
