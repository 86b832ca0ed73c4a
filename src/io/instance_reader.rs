use crate::{
    errors::{Result, TspError},
    geometry::Point,
    graph::NumCities,
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Reads the coordinate-list instance format: the first line declares the
/// city count N, the following N lines each hold one `(x, y)` coordinate.
///
/// The parse is all-or-nothing. Fewer coordinate lines than declared, any
/// extra non-blank line, a malformed count or a malformed coordinate all
/// fail without returning a partial instance.
pub fn try_read_instance<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| TspError::MalformedCityCount(String::new()))?;
    let declared = parse_city_count(&header)?;

    let mut points = Vec::with_capacity(declared as usize);
    for found in 0..declared {
        let line = lines
            .next()
            .transpose()?
            .ok_or(TspError::CityCountMismatch { declared, found })?;
        points.push(line.parse()?);
    }

    let mut extra_lines = 0;
    for line in lines {
        extra_lines += !line?.trim().is_empty() as NumCities;
    }
    if extra_lines > 0 {
        return Err(TspError::CityCountMismatch {
            declared,
            found: declared + extra_lines,
        });
    }

    Ok(points)
}

pub fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let reader = BufReader::new(File::open(path)?);
    try_read_instance(reader)
}

fn parse_city_count(header: &str) -> Result<NumCities> {
    let token = header.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TspError::MalformedCityCount(header.to_string()));
    }

    let count = token
        .parse()
        .map_err(|_| TspError::MalformedCityCount(header.to_string()))?;
    if count == 0 {
        return Err(TspError::NonPositiveCityCount);
    }

    Ok(count)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_a_well_formed_instance() {
        let input = "4\n(0, 0)\n(0, 10)\n( 10 , 10 )\n(10,0)\n";
        let points = try_read_instance(input.as_bytes()).unwrap();

        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(0, 10),
                Point::new(10, 10),
                Point::new(10, 0),
            ]
        );
    }

    #[test]
    fn tolerates_trailing_blank_lines() {
        let input = "1\n(3, 4)\n\n  \n";
        assert_eq!(
            try_read_instance(input.as_bytes()).unwrap(),
            vec![Point::new(3, 4)]
        );
    }

    #[test]
    fn rejects_missing_or_malformed_count() {
        assert!(matches!(
            try_read_instance("".as_bytes()),
            Err(TspError::MalformedCityCount(_))
        ));
        assert!(matches!(
            try_read_instance("two\n(1, 2)\n(3, 4)\n".as_bytes()),
            Err(TspError::MalformedCityCount(_))
        ));
        assert!(matches!(
            try_read_instance("-1\n".as_bytes()),
            Err(TspError::MalformedCityCount(_))
        ));
        assert!(matches!(
            try_read_instance("0\n".as_bytes()),
            Err(TspError::NonPositiveCityCount)
        ));
    }

    #[test]
    fn rejects_too_few_coordinate_lines() {
        assert!(matches!(
            try_read_instance("3\n(1, 2)\n(3, 4)\n".as_bytes()),
            Err(TspError::CityCountMismatch {
                declared: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn rejects_extra_coordinate_lines() {
        assert!(matches!(
            try_read_instance("1\n(1, 2)\n(3, 4)\n".as_bytes()),
            Err(TspError::CityCountMismatch {
                declared: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn rejects_malformed_coordinates_without_defaulting() {
        assert!(matches!(
            try_read_instance("1\n(1,)\n".as_bytes()),
            Err(TspError::MalformedCoordinate(_))
        ));
        assert!(matches!(
            try_read_instance("2\n(1, 2)\nnot a point\n".as_bytes()),
            Err(TspError::MalformedCoordinate(_))
        ));
    }
}
