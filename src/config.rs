use crate::maze::Coord;

/// Search parameters read from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub grid_size: usize,
    pub start_row: usize,
    pub start_col: usize,
    pub obstacle_count: usize,
    /// Seed for the random source; OS-seeded when absent.
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub const GRID_SIZE_KEY: &'static str = "MATRIX_SIZE";
    pub const START_ROW_KEY: &'static str = "START_ROW";
    pub const START_COL_KEY: &'static str = "START_COL";
    pub const OBSTACLE_COUNT_KEY: &'static str = "NUM_OF_BO";
    pub const SEED_KEY: &'static str = "SEED";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    /// Missing, empty, negative or non-numeric values become 0.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0)
        };
        SearchConfig {
            grid_size: number(Self::GRID_SIZE_KEY),
            start_row: number(Self::START_ROW_KEY),
            start_col: number(Self::START_COL_KEY),
            obstacle_count: number(Self::OBSTACLE_COUNT_KEY),
            seed: lookup(Self::SEED_KEY).and_then(|v| v.trim().parse::<u64>().ok()),
        }
    }

    pub fn start(&self) -> Coord {
        (self.start_row, self.start_col)
    }

    /// The bottom-right cell, or `(0, 0)` for an empty grid.
    pub fn destination(&self) -> Coord {
        let last = self.grid_size.saturating_sub(1);
        (last, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_reads_all_keys() {
        let config = SearchConfig::from_lookup(lookup(&[
            ("MATRIX_SIZE", "10"),
            ("START_ROW", "2"),
            ("START_COL", " 3 "),
            ("NUM_OF_BO", "4"),
            ("SEED", "99"),
        ]));
        assert_eq!(
            config,
            SearchConfig {
                grid_size: 10,
                start_row: 2,
                start_col: 3,
                obstacle_count: 4,
                seed: Some(99),
            }
        );
        assert_eq!(config.start(), (2, 3));
        assert_eq!(config.destination(), (9, 9));
    }

    #[test]
    fn test_bad_values_become_zero() {
        let config = SearchConfig::from_lookup(lookup(&[
            ("MATRIX_SIZE", "five"),
            ("START_ROW", ""),
            ("NUM_OF_BO", "-3"),
            ("SEED", "x"),
        ]));
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.destination(), (0, 0));
    }
}
