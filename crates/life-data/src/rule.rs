// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Life-like cellular automaton rules in `B/S` notation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The highest neighbour count a cell can have in a Moore neighbourhood.
const MAX_NEIGHBORS: u8 = 8;

/// A birth/survival rule over the 8-cell Moore neighbourhood.
///
/// Each set is stored as a bitmask indexed by neighbour count, so bit `n`
/// of `birth` means "a dead cell with `n` live neighbours becomes alive".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    birth: u16,
    survival: u16,
}

/// An error returned when a rule string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleParseError {
    /// The string is not two `/`-separated parts.
    #[error("rule '{0}' must look like 'B3/S23'")]
    Malformed(String),
    /// A part does not start with `B` or `S`, or both parts use the same letter.
    #[error("rule '{0}' needs exactly one 'B' part and one 'S' part")]
    MissingPart(String),
    /// A neighbour count is not a digit in `0..=8`.
    #[error("'{0}' is not a neighbour count between 0 and 8")]
    InvalidCount(char),
}

impl Rule {
    /// Conway's Game of Life: born with 3, survives with 2 or 3.
    pub const CONWAY: Rule = Rule {
        birth: 1 << 3,
        survival: (1 << 2) | (1 << 3),
    };

    /// Builds a rule from explicit neighbour counts.
    pub fn from_counts(birth: &[u8], survival: &[u8]) -> Result<Self, RuleParseError> {
        Ok(Self {
            birth: mask_from_counts(birth)?,
            survival: mask_from_counts(survival)?,
        })
    }

    /// Returns whether a cell is alive in the next generation.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let mask = if alive { self.survival } else { self.birth };
        neighbors <= MAX_NEIGHBORS && mask & (1 << neighbors) != 0
    }

    /// Returns whether a dead cell with `neighbors` live neighbours is born.
    pub fn births_on(&self, neighbors: u8) -> bool {
        self.next_state(false, neighbors)
    }

    /// Returns whether a live cell with `neighbors` live neighbours survives.
    pub fn survives_on(&self, neighbors: u8) -> bool {
        self.next_state(true, neighbors)
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::CONWAY
    }
}

fn mask_from_counts(counts: &[u8]) -> Result<u16, RuleParseError> {
    counts.iter().try_fold(0u16, |mask, &n| {
        if n > MAX_NEIGHBORS {
            Err(RuleParseError::InvalidCount(char::from(b'0' + n.min(9))))
        } else {
            Ok(mask | (1 << n))
        }
    })
}

fn mask_from_digits(digits: &str) -> Result<u16, RuleParseError> {
    digits.chars().try_fold(0u16, |mask, c| match c.to_digit(10) {
        Some(n) if n <= u32::from(MAX_NEIGHBORS) => Ok(mask | (1 << n)),
        _ => Err(RuleParseError::InvalidCount(c)),
    })
}

fn write_mask(f: &mut fmt::Formatter<'_>, mask: u16) -> fmt::Result {
    for n in 0..=MAX_NEIGHBORS {
        if mask & (1 << n) != 0 {
            write!(f, "{n}")?;
        }
    }
    Ok(())
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (first, second) = trimmed
            .split_once('/')
            .ok_or_else(|| RuleParseError::Malformed(trimmed.to_string()))?;

        let mut birth = None;
        let mut survival = None;

        for part in [first, second] {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survival,
                _ => return Err(RuleParseError::MissingPart(trimmed.to_string())),
            };
            if slot.is_some() {
                return Err(RuleParseError::MissingPart(trimmed.to_string()));
            }
            *slot = Some(mask_from_digits(chars.as_str())?);
        }

        match (birth, survival) {
            (Some(birth), Some(survival)) => Ok(Self { birth, survival }),
            _ => Err(RuleParseError::MissingPart(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        write_mask(f, self.birth)?;
        f.write_str("/S")?;
        write_mask(f, self.survival)
    }
}

impl TryFrom<String> for Rule {
    type Error = RuleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_matches_classic_rules() {
        let rule = Rule::CONWAY;
        for n in 0..=8u8 {
            assert_eq!(rule.next_state(false, n), n == 3, "birth on {n}");
            assert_eq!(rule.next_state(true, n), n == 2 || n == 3, "survival on {n}");
        }
    }

    #[test]
    fn test_default_is_conway() {
        assert_eq!(Rule::default(), Rule::CONWAY);
    }

    #[test]
    fn test_parse_conway_in_both_orders() {
        assert_eq!("B3/S23".parse::<Rule>().unwrap(), Rule::CONWAY);
        assert_eq!("s23/b3".parse::<Rule>().unwrap(), Rule::CONWAY);
        assert_eq!(" B3/S32 ".parse::<Rule>().unwrap(), Rule::CONWAY);
    }

    #[test]
    fn test_parse_highlife() {
        let highlife: Rule = "B36/S23".parse().unwrap();
        assert!(highlife.births_on(6));
        assert!(!Rule::CONWAY.births_on(6));
        assert_eq!(highlife.to_string(), "B36/S23");
    }

    #[test]
    fn test_parse_empty_survival_set() {
        let seeds: Rule = "B2/S".parse().unwrap();
        for n in 0..=8 {
            assert!(!seeds.survives_on(n));
        }
        assert_eq!(seeds.to_string(), "B2/S");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "B3S23".parse::<Rule>(),
            Err(RuleParseError::Malformed("B3S23".to_string()))
        );
        assert_eq!(
            "B3/B23".parse::<Rule>(),
            Err(RuleParseError::MissingPart("B3/B23".to_string()))
        );
        assert_eq!(
            "X3/S23".parse::<Rule>(),
            Err(RuleParseError::MissingPart("X3/S23".to_string()))
        );
        assert_eq!(
            "B9/S23".parse::<Rule>(),
            Err(RuleParseError::InvalidCount('9'))
        );
        assert_eq!(
            "B3/S2a".parse::<Rule>(),
            Err(RuleParseError::InvalidCount('a'))
        );
    }

    #[test]
    fn test_from_counts() {
        assert_eq!(Rule::from_counts(&[3], &[2, 3]).unwrap(), Rule::CONWAY);
        assert!(Rule::from_counts(&[12], &[]).is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Rule::CONWAY).unwrap();
        assert_eq!(json, "\"B3/S23\"");
        let parsed: Rule = serde_json::from_str("\"B36/S23\"").unwrap();
        assert!(parsed.births_on(6));
        assert!(serde_json::from_str::<Rule>("\"life\"").is_err());
    }
}
