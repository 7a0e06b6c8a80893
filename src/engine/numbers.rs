use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Shape constraints for a set of lottery numbers: how many numbers a pick
/// must contain and the inclusive upper bound of each value (lower bound is
/// always 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRules {
    pub number_of_numbers: u32,
    pub max_val: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberSetError {
    #[error("expected {expected} numbers, got {actual}")]
    WrongCount { expected: u32, actual: u32 },

    #[error("number {value} is out of range 1..={max_val}")]
    OutOfRange { value: u32, max_val: u32 },

    #[error("duplicate number {0}")]
    Duplicate(u32),

    #[error("'{0}' is not a valid number")]
    NotANumber(String),
}

/// A validated pick or winning combination: exactly `number_of_numbers`
/// distinct values in `1..=max_val`, stored sorted ascending.
///
/// Cannot be constructed in an invalid state; "mutation" is constructing a
/// replacement. Matching is set membership, so two sets built from the same
/// values in different input orders are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NumberSet(Vec<u32>);

impl NumberSet {
    /// Validate `values` against `rules` and build the set.
    ///
    /// Checks run fail-fast in a fixed order: cardinality first, then each
    /// value in input order with range checked before duplicate. Only the
    /// first offending value is reported.
    pub fn new(values: &[u32], rules: &NumberRules) -> Result<Self, NumberSetError> {
        if values.len() as u32 != rules.number_of_numbers {
            return Err(NumberSetError::WrongCount {
                expected: rules.number_of_numbers,
                actual: values.len() as u32,
            });
        }
        let mut seen: Vec<u32> = Vec::with_capacity(values.len());
        for &v in values {
            if v < 1 || v > rules.max_val {
                return Err(NumberSetError::OutOfRange {
                    value: v,
                    max_val: rules.max_val,
                });
            }
            if seen.contains(&v) {
                return Err(NumberSetError::Duplicate(v));
            }
            seen.push(v);
        }
        seen.sort_unstable();
        Ok(NumberSet(seen))
    }

    /// Parse a comma-separated string (the admin form / storage format) and
    /// validate it like [`NumberSet::new`].
    pub fn parse(input: &str, rules: &NumberRules) -> Result<Self, NumberSetError> {
        let mut values = Vec::new();
        for part in input.split(',') {
            let part = part.trim();
            let v: u32 = part
                .parse()
                .map_err(|_| NumberSetError::NotANumber(part.to_string()))?;
            values.push(v);
        }
        Self::new(&values, rules)
    }

    /// How many numbers this set shares with `other` (intersection size).
    pub fn count_matches(&self, other: &NumberSet) -> u32 {
        self.0.iter().filter(|n| other.0.contains(n)).count() as u32
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NumberSet {
    /// Storage format: ascending values joined by commas, e.g. "2,4,5".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for n in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{n}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: NumberRules = NumberRules {
        number_of_numbers: 3,
        max_val: 5,
    };

    #[test]
    fn test_accepts_valid_set_and_sorts() {
        let set = NumberSet::new(&[5, 4, 2], &RULES).unwrap();
        assert_eq!(set.as_slice(), &[2, 4, 5]);
        assert_eq!(set.to_string(), "2,4,5");
    }

    #[test]
    fn test_already_sorted_set_is_unchanged() {
        let set = NumberSet::new(&[1, 2, 3], &RULES).unwrap();
        assert_eq!(set.as_slice(), &[1, 2, 3]);
        assert_eq!(set.to_string(), "1,2,3");
        // validating its own rendering round-trips
        let again = NumberSet::parse(&set.to_string(), &RULES).unwrap();
        assert_eq!(again, set);
    }

    #[test]
    fn test_wrong_count() {
        assert_eq!(
            NumberSet::new(&[1, 2], &RULES),
            Err(NumberSetError::WrongCount {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            NumberSet::new(&[1, 2, 3, 4], &RULES),
            Err(NumberSetError::WrongCount {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            NumberSet::new(&[4, 5, 6], &RULES),
            Err(NumberSetError::OutOfRange {
                value: 6,
                max_val: 5
            })
        );
        assert_eq!(
            NumberSet::new(&[0, 1, 2], &RULES),
            Err(NumberSetError::OutOfRange {
                value: 0,
                max_val: 5
            })
        );
    }

    #[test]
    fn test_duplicate() {
        assert_eq!(
            NumberSet::new(&[1, 2, 1], &RULES),
            Err(NumberSetError::Duplicate(1))
        );
    }

    #[test]
    fn test_failure_order_is_count_then_first_offending_value() {
        // count beats everything else
        assert!(matches!(
            NumberSet::new(&[9, 9], &RULES),
            Err(NumberSetError::WrongCount { .. })
        ));
        // range is checked before duplicate for each value in input order
        assert_eq!(
            NumberSet::new(&[2, 9, 9], &RULES),
            Err(NumberSetError::OutOfRange {
                value: 9,
                max_val: 5
            })
        );
        // the first offending value wins even when a later one is also bad
        assert_eq!(
            NumberSet::new(&[2, 2, 9], &RULES),
            Err(NumberSetError::Duplicate(2))
        );
    }

    #[test]
    fn test_parse() {
        let set = NumberSet::parse("5, 4,2", &RULES).unwrap();
        assert_eq!(set.as_slice(), &[2, 4, 5]);
        assert_eq!(
            NumberSet::parse("cat,dog,pig", &RULES),
            Err(NumberSetError::NotANumber("cat".to_string()))
        );
        assert!(NumberSet::parse("1,2", &RULES).is_err());
    }

    #[test]
    fn test_count_matches_is_intersection_size_and_symmetric() {
        let rules = NumberRules {
            number_of_numbers: 3,
            max_val: 10,
        };
        let a = NumberSet::new(&[1, 2, 3], &rules).unwrap();
        let b = NumberSet::new(&[2, 3, 5], &rules).unwrap();
        assert_eq!(a.count_matches(&b), 2);
        assert_eq!(b.count_matches(&a), 2);
        assert_eq!(a.count_matches(&a), rules.number_of_numbers);
        let c = NumberSet::new(&[6, 7, 8], &rules).unwrap();
        assert_eq!(a.count_matches(&c), 0);
    }
}
