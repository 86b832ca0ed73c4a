use crate::{
    errors::{Result, TspError},
    graph::{City, Cost, NumCities},
};
use itertools::Itertools;
use std::{fmt, io::Write};

/// A closed tour: an ordered city sequence of length N+1 that starts and
/// ends at the same city and visits every other city exactly once, plus
/// its total cost. Cities are 0-based internally; all textual output uses
/// 1-based indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    cities: Vec<City>,
    cost: Cost,
}

impl Tour {
    /// Validates the closed-cycle invariants before accepting the
    /// sequence: first equals last, and the first N entries are a
    /// permutation of `0..N`.
    pub fn new(cities: Vec<City>, cost: Cost) -> Result<Self> {
        let malformed = |reason: String| Err(TspError::MalformedTour(reason));

        if cities.len() < 2 {
            return malformed(format!("a tour has at least 2 entries, got {}", cities.len()));
        }

        if cities.first() != cities.last() {
            return malformed("a tour must end at its starting city".into());
        }

        let number_of_cities = cities.len() - 1;
        let mut seen = vec![false; number_of_cities];
        for &city in &cities[..number_of_cities] {
            if city as usize >= number_of_cities || std::mem::replace(&mut seen[city as usize], true)
            {
                return malformed(format!(
                    "the first {number_of_cities} entries must visit every city exactly once"
                ));
            }
        }

        Ok(Self { cities, cost })
    }

    /// The closed tour of a single city.
    pub fn single_city() -> Self {
        Self {
            cities: vec![0, 0],
            cost: 0,
        }
    }

    pub fn number_of_cities(&self) -> NumCities {
        (self.cities.len() - 1) as NumCities
    }

    /// The closed 0-based city sequence, length N+1.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Writes the two-line text form: the 1-based city list, then the cost.
    pub fn write<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{self}")?;
        writeln!(writer, "{}", self.cost)
    }
}

impl fmt::Display for Tour {
    /// 1-based bracketed list form, e.g. `[1, 2, 4, 3, 1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.cities.iter().map(|&c| c + 1).join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_valid_cycles() {
        let tour = Tour::new(vec![0, 2, 1, 3, 0], 42).unwrap();
        assert_eq!(tour.number_of_cities(), 4);
        assert_eq!(tour.cost(), 42);
        assert_eq!(tour.cities(), &[0, 2, 1, 3, 0]);
    }

    #[test]
    fn single_city_tour() {
        let tour = Tour::single_city();
        assert_eq!(tour.cities(), &[0, 0]);
        assert_eq!(tour.cost(), 0);
        assert_eq!(tour.number_of_cities(), 1);
    }

    #[test]
    fn rejects_broken_cycles() {
        // too short
        assert!(Tour::new(vec![0], 0).is_err());
        // open
        assert!(Tour::new(vec![0, 1, 2], 0).is_err());
        // repeated city
        assert!(Tour::new(vec![0, 1, 1, 0], 0).is_err());
        // skipped city
        assert!(Tour::new(vec![0, 3, 1, 0], 0).is_err());
    }

    #[test]
    fn display_is_one_based() {
        let tour = Tour::new(vec![0, 1, 3, 2, 0], 40).unwrap();
        assert_eq!(tour.to_string(), "[1, 2, 4, 3, 1]");
    }

    #[test]
    fn write_emits_tour_then_cost() {
        let tour = Tour::new(vec![0, 1, 0], 20).unwrap();
        let mut buffer = Vec::new();
        tour.write(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[1, 2, 1]\n20\n");
    }
}
