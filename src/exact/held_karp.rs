use crate::{
    algorithm::TourSolver,
    errors::{Result, TspError},
    graph::{City, Cost, DistanceMatrix, NumCities},
    utils::Tour,
};
use log::debug;

/// The memo table has `n * 2^n` entries, so the instance size is capped at
/// construction time instead of attempting a hopeless allocation.
const MAX_CITIES: NumCities = 20;

/// Start city of every tour.
const START: City = 0;

/// Held-Karp bitmask dynamic program, O(N^2 * 2^N) time and O(N * 2^N)
/// space. Exact like the brute force, but feasible up to around 20 cities.
///
/// The memo table is indexed by (last visited city, bitmask of the visited
/// set); an entry holds the minimum cost of reaching that city from city 0
/// having visited exactly that set. `Cost::MAX` marks unreached entries,
/// and every addition against the table saturates so the sentinel cannot
/// wrap into a plausible cost.
pub struct HeldKarpSolver<'a> {
    matrix: &'a DistanceMatrix,
    solution: Option<Tour>,
}

impl<'a> HeldKarpSolver<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Result<Self> {
        if matrix.number_of_cities() > MAX_CITIES {
            return Err(TspError::TooManyCities {
                got: matrix.number_of_cities(),
                max: MAX_CITIES,
            });
        }

        Ok(Self {
            matrix,
            solution: None,
        })
    }

    fn search(&self) -> Result<Tour> {
        let n = self.matrix.number_of_cities();
        if n == 1 {
            return Ok(Tour::single_city());
        }

        let memo = self.fill_memo_table(n);
        let cost = self.close_tour(&memo, n)?;
        let cities = self.reconstruct_tour(&memo, n)?;

        debug!("held-karp finished with cost {cost}");
        Tour::new(cities, cost)
    }

    fn entry(&self, memo: &[Cost], city: City, subset: u32) -> Cost {
        memo[((city as usize) << self.matrix.len()) | subset as usize]
    }

    /// Base cases are the direct edges out of the start city; afterwards
    /// subsets are processed by ascending cardinality so that every
    /// `subset \ {next}` entry is already final.
    fn fill_memo_table(&self, n: NumCities) -> Vec<Cost> {
        let mut memo = vec![Cost::MAX; (n as usize) << n];
        let slot = |city: City, subset: u32| ((city as usize) << n) | subset as usize;

        for end in 1..n {
            memo[slot(end, 1 << START | 1 << end)] = self.matrix.distance(START, end);
        }

        for r in 3..=n {
            for subset in combinations(r, n) {
                if subset & (1 << START) == 0 {
                    continue;
                }

                for next in 1..n {
                    if subset & (1 << next) == 0 {
                        continue;
                    }

                    let subset_without_next = subset ^ (1 << next);
                    let mut minimum_distance = Cost::MAX;

                    for end in 1..n {
                        if end == next || subset & (1 << end) == 0 {
                            continue;
                        }

                        let new_distance = memo[slot(end, subset_without_next)]
                            .saturating_add(self.matrix.distance(end, next));
                        minimum_distance = minimum_distance.min(new_distance);
                    }

                    memo[slot(next, subset)] = minimum_distance;
                }
            }
        }

        memo
    }

    /// Minimum over all cities of "reach the city having visited
    /// everything, then return to the start".
    fn close_tour(&self, memo: &[Cost], n: NumCities) -> Result<Cost> {
        let full_set = (1u32 << n) - 1;

        let cost = (1..n)
            .map(|i| {
                self.entry(memo, i, full_set)
                    .saturating_add(self.matrix.distance(i, START))
            })
            .min()
            .unwrap_or(Cost::MAX);

        if cost == Cost::MAX {
            return Err(TspError::NoClosedTour);
        }
        Ok(cost)
    }

    /// Walks backwards from the closing city, at each step taking the
    /// predecessor that minimizes memo cost plus the connecting edge, then
    /// reverses into a start-to-start tour.
    fn reconstruct_tour(&self, memo: &[Cost], n: NumCities) -> Result<Vec<City>> {
        let mut state = (1u32 << n) - 1;
        let mut last_index = START;
        let mut tour = vec![START];

        for _ in 1..n {
            let mut best: Option<(Cost, City)> = None;

            for j in 1..n {
                if state & (1 << j) == 0 {
                    continue;
                }

                let new_distance = self
                    .entry(memo, j, state)
                    .saturating_add(self.matrix.distance(j, last_index));
                if best.is_none_or(|(cost, _)| new_distance < cost) {
                    best = Some((new_distance, j));
                }
            }

            let (_, j) = best.ok_or(TspError::NoClosedTour)?;
            tour.push(j);
            state ^= 1 << j;
            last_index = j;
        }

        tour.push(START);
        tour.reverse();
        Ok(tour)
    }
}

impl TourSolver for HeldKarpSolver<'_> {
    fn algorithm_name(&self) -> &'static str {
        "HELD-KARP"
    }

    fn solve(&mut self) -> Result<&Tour> {
        if self.solution.is_none() {
            self.solution = Some(self.search()?);
        }

        Ok(self.solution.as_ref().unwrap())
    }
}

/// All subsets of `0..n` with exactly `r` elements, encoded as bitmasks.
/// Recursive choose-without-replacement; enumeration order is irrelevant,
/// only completeness matters.
fn combinations(r: NumCities, n: NumCities) -> Vec<u32> {
    let mut subsets = Vec::new();
    combinations_recursive(0, 0, r, n, &mut subsets);
    subsets
}

fn combinations_recursive(set: u32, at: NumCities, r: NumCities, n: NumCities, out: &mut Vec<u32>) {
    if n - at < r {
        return;
    }

    if r == 0 {
        out.push(set);
        return;
    }

    for i in at..n {
        combinations_recursive(set | 1 << i, i + 1, r - 1, n, out);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{exact::BruteForceSolver, geometry::Point};
    use itertools::Itertools;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0, 0),
            Point::new(0, 10),
            Point::new(10, 10),
            Point::new(10, 0),
        ])
        .unwrap()
    }

    #[test]
    fn combinations_enumerate_all_subsets_of_size_r() {
        for n in 1..=6u32 {
            for r in 0..=n {
                let subsets = combinations(r, n);
                let expected: Vec<u32> =
                    (0..1u32 << n).filter(|s| s.count_ones() == r).collect();
                assert_eq!(
                    subsets.iter().copied().sorted().collect_vec(),
                    expected,
                    "n: {n} r: {r}"
                );
            }
        }
    }

    #[test]
    fn unit_square_perimeter_is_optimal() {
        let matrix = unit_square();
        let mut solver = HeldKarpSolver::new(&matrix).unwrap();
        let tour = solver.solve().unwrap();

        assert_eq!(tour.cost(), 40);
        assert!(
            tour.cities() == [0, 1, 2, 3, 0] || tour.cities() == [0, 3, 2, 1, 0],
            "tour: {tour}"
        );
    }

    #[test]
    fn single_city() {
        let matrix = DistanceMatrix::from_points(&[Point::new(0, 0)]).unwrap();
        let mut solver = HeldKarpSolver::new(&matrix).unwrap();
        let tour = solver.solve().unwrap();

        assert_eq!(tour.cities(), &[0, 0]);
        assert_eq!(tour.cost(), 0);
    }

    #[test]
    fn two_cities() {
        let matrix = DistanceMatrix::from_points(&[Point::new(0, 0), Point::new(6, 8)]).unwrap();
        let mut solver = HeldKarpSolver::new(&matrix).unwrap();
        let tour = solver.solve().unwrap();

        assert_eq!(tour.cities(), &[0, 1, 0]);
        assert_eq!(tour.cost(), 20);
    }

    #[test]
    fn rejects_oversized_instances() {
        let points = (0..=MAX_CITIES).map(|i| Point::new(i, 0)).collect_vec();
        let matrix = DistanceMatrix::from_points(&points).unwrap();

        assert!(matches!(
            HeldKarpSolver::new(&matrix),
            Err(TspError::TooManyCities { got, max: MAX_CITIES }) if got == MAX_CITIES + 1
        ));
    }

    #[test]
    fn agrees_with_brute_force_on_fixed_instances() {
        let instances = [
            vec![Point::new(0, 0), Point::new(4, 3), Point::new(9, 1)],
            vec![
                Point::new(2, 3),
                Point::new(8, 1),
                Point::new(5, 9),
                Point::new(0, 7),
                Point::new(6, 6),
            ],
            vec![
                Point::new(1, 1),
                Point::new(12, 4),
                Point::new(3, 14),
                Point::new(9, 9),
                Point::new(0, 6),
                Point::new(7, 2),
                Point::new(11, 13),
            ],
        ];

        for points in instances {
            let matrix = DistanceMatrix::from_points(&points).unwrap();
            let dp_cost = HeldKarpSolver::new(&matrix).unwrap().tour_cost().unwrap();
            let bf_cost = BruteForceSolver::new(&matrix).unwrap().tour_cost().unwrap();
            assert_eq!(dp_cost, bf_cost, "points: {points:?}");
        }
    }

    #[test]
    fn solving_twice_reuses_the_cached_tour() {
        let matrix = unit_square();
        let mut solver = HeldKarpSolver::new(&matrix).unwrap();

        let first = solver.solve().unwrap().clone();
        let second = solver.solve().unwrap();
        assert_eq!(&first, second);
    }

    #[test]
    fn agrees_with_brute_force_on_random_instances() {
        use crate::testing::random_distinct_points;
        use rand::SeedableRng;

        let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(1234);

        for n in 2..=10 {
            for _ in 0..3 {
                let points = random_distinct_points(&mut rng, n, 50);
                let matrix = DistanceMatrix::from_points(&points).unwrap();

                let mut dp = HeldKarpSolver::new(&matrix).unwrap();
                let mut bf = BruteForceSolver::new(&matrix).unwrap();

                assert_eq!(
                    dp.solve().unwrap().cost(),
                    bf.solve().unwrap().cost(),
                    "points: {points:?}"
                );
            }
        }
    }
}
