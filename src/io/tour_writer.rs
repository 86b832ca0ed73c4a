use crate::{
    errors::{Result, TspError},
    graph::{City, Cost},
    utils::Tour,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// File-level access to the two-line result format: the 1-based tour list
/// on the first line, the total cost on the second.
pub trait TourFileWriter {
    fn try_write<W: Write>(&self, writer: W) -> std::io::Result<()>;
    fn try_write_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()>;
}

impl TourFileWriter for Tour {
    fn try_write<W: Write>(&self, writer: W) -> std::io::Result<()> {
        self.write(writer)
    }

    fn try_write_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write(writer)
    }
}

/// Parses a result file back into a validated [`Tour`].
pub fn try_read_tour<R: BufRead>(reader: R) -> Result<Tour> {
    let mut lines = reader.lines();

    let tour_line = lines
        .next()
        .transpose()?
        .ok_or_else(|| TspError::MalformedTour("missing tour line".into()))?;
    let cities = parse_city_list(&tour_line)?;

    let cost_line = lines
        .next()
        .transpose()?
        .ok_or_else(|| TspError::MalformedTour("missing cost line".into()))?;
    let cost: Cost = cost_line
        .trim()
        .parse()
        .map_err(|_| TspError::MalformedTour(format!("invalid cost {cost_line:?}")))?;

    Tour::new(cities, cost)
}

pub fn try_read_tour_file<P: AsRef<Path>>(path: P) -> Result<Tour> {
    let reader = BufReader::new(File::open(path)?);
    try_read_tour(reader)
}

/// Parses `[1, 2, 4, 3, 1]` into the 0-based city sequence.
fn parse_city_list(line: &str) -> Result<Vec<City>> {
    let malformed = || TspError::MalformedTour(format!("invalid tour list {line:?}"));

    let inner = line
        .trim()
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .ok_or_else(malformed)?;

    inner
        .split(',')
        .map(|token| {
            let one_based: City = token.trim().parse().map_err(|_| malformed())?;
            one_based.checked_sub(1).ok_or_else(malformed)
        })
        .collect()
}
