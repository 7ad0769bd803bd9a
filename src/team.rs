use std::fmt;

use crate::constants::{format_ratio, CLOSE_PAREN, OPEN_PAREN, REPORT_SEPARATOR};
use crate::error::{ConferenceError, Result};

/// A team's season record parsed from one listing line.
///
/// Records are immutable once parsed; the win ratio is fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamRecord {
    pub name: String,

    /// Conference the team plays in (text inside the last parentheses)
    pub conference: String,

    pub wins: u64,
    pub losses: u64,

    /// wins / (wins + losses), always within [0, 1]
    pub win_ratio: f64,
}

impl TeamRecord {
    /// Create a record from already-split fields.
    ///
    /// Fails with `DivisionUndefined` when the team has played no games.
    pub fn new(name: String, conference: String, wins: u64, losses: u64) -> Result<Self> {
        if wins == 0 && losses == 0 {
            return Err(ConferenceError::DivisionUndefined { team: name });
        }
        let win_ratio = wins as f64 / (wins as f64 + losses as f64);

        Ok(TeamRecord {
            name,
            conference,
            wins,
            losses,
            win_ratio,
        })
    }

    /// Parse a listing line such as `Team A (X) 10 5`.
    ///
    /// The conference is the text between the last `(` and the last `)`.
    /// The team name runs up to the first `(`, unless the line holds more
    /// than one `)`, in which case it runs through the first `)` so a tag
    /// like `Team B (Y) (X) 3 3` stays part of the name.
    ///
    /// The two scans are independent: on lines with unrelated parenthesis
    /// groups the name boundary and the conference may not come from the
    /// same pair. Wins and losses are the first two whitespace-separated
    /// tokens after the last `)`; anything after them is ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let conf_left = line
            .rfind(OPEN_PAREN)
            .ok_or_else(|| ConferenceError::malformed(line, "missing '(' before conference"))?;
        let conf_right = line
            .rfind(CLOSE_PAREN)
            .ok_or_else(|| ConferenceError::malformed(line, "missing ')' after conference"))?;
        if conf_left > conf_right {
            return Err(ConferenceError::malformed(line, "conference is not enclosed in parentheses"));
        }

        // Both searches succeed here since the reverse scans found a match
        let first_close = line.find(CLOSE_PAREN).unwrap_or(conf_right);
        let name_end = if first_close != conf_right {
            first_close + CLOSE_PAREN.len_utf8()
        } else {
            line.find(OPEN_PAREN).unwrap_or(conf_left)
        };

        let name = &line[..name_end];
        let conference = &line[conf_left + OPEN_PAREN.len_utf8()..conf_right];

        let mut stats = line[conf_right + CLOSE_PAREN.len_utf8()..].split_whitespace();
        let wins = parse_count(line, stats.next(), "wins")?;
        let losses = parse_count(line, stats.next(), "losses")?;

        TeamRecord::new(name.to_string(), conference.to_string(), wins, losses)
    }

    /// Total games played, widened so huge counts cannot overflow
    pub fn games(&self) -> u128 {
        self.wins as u128 + self.losses as u128
    }
}

fn parse_count(line: &str, token: Option<&str>, field: &str) -> Result<u64> {
    let token = token.ok_or_else(|| ConferenceError::malformed(line, format!("missing {}", field)))?;
    token
        .parse::<u64>()
        .map_err(|e| ConferenceError::malformed(line, format!("invalid {} {:?}: {}", field, token, e)))
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, REPORT_SEPARATOR, format_ratio(self.win_ratio, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_paren_pair() {
        let team = TeamRecord::parse("Team A (X) 10 5").unwrap();
        assert_eq!(team.name, "Team A ");
        assert_eq!(team.conference, "X");
        assert_eq!((team.wins, team.losses), (10, 5));
        assert!((team.win_ratio - 10.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_tag_in_name_keeps_first_group() {
        let team = TeamRecord::parse("Team B (Y) (X) 3 3").unwrap();
        assert_eq!(team.name, "Team B (Y)");
        assert_eq!(team.conference, "X");
        assert_eq!(team.win_ratio, 0.5);
    }

    #[test]
    fn test_conference_with_spaces() {
        let team = TeamRecord::parse("Gonzaga (West Coast) 28 3").unwrap();
        assert_eq!(team.name, "Gonzaga ");
        assert_eq!(team.conference, "West Coast");
    }

    #[test]
    fn test_scans_are_independent() {
        // Three groups: the name stops after the first ')', the conference
        // comes from the last pair, and the middle group belongs to neither.
        let team = TeamRecord::parse("Alpha (A) middle (B) (C) 1 3").unwrap();
        assert_eq!(team.name, "Alpha (A)");
        assert_eq!(team.conference, "C");
        assert_eq!(team.win_ratio, 0.25);
    }

    #[test]
    fn test_extra_stat_tokens_ignored() {
        let team = TeamRecord::parse("Duke (ACC) 20 10 0.667 extra").unwrap();
        assert_eq!((team.wins, team.losses), (20, 10));
    }

    #[test]
    fn test_zero_games_is_undefined() {
        let err = TeamRecord::parse("Team E (Z) 0 0").unwrap_err();
        assert!(matches!(err, ConferenceError::DivisionUndefined { ref team } if team == "Team E "));
    }

    #[test]
    fn test_missing_parens_is_malformed() {
        let err = TeamRecord::parse("Team A X 10 5").unwrap_err();
        assert!(matches!(err, ConferenceError::MalformedRecord { .. }));

        let err = TeamRecord::parse("Team A (X 10 5").unwrap_err();
        assert!(matches!(err, ConferenceError::MalformedRecord { .. }));

        let err = TeamRecord::parse("Team A X) 10 5").unwrap_err();
        assert!(matches!(err, ConferenceError::MalformedRecord { .. }));
    }

    #[test]
    fn test_reversed_parens_is_malformed() {
        let err = TeamRecord::parse("Team ) A ( 10 5").unwrap_err();
        assert!(matches!(err, ConferenceError::MalformedRecord { .. }));
    }

    #[test]
    fn test_missing_or_bad_counts() {
        for line in ["Team A (X) 10", "Team A (X)", "Team A (X) ten 5", "Team A (X) 10 -5"] {
            let err = TeamRecord::parse(line).unwrap_err();
            assert!(
                matches!(err, ConferenceError::MalformedRecord { .. }),
                "expected malformed for {:?}, got {:?}",
                line,
                err
            );
        }
    }

    #[test]
    fn test_games_with_max_counts() {
        let team = TeamRecord::parse("T (X) 18446744073709551615 1").unwrap();
        assert_eq!(team.wins, u64::MAX);
        assert_eq!(team.games(), u64::MAX as u128 + 1);
        assert!((0.0..=1.0).contains(&team.win_ratio));

        let team = TeamRecord::new("T".to_string(), "X".to_string(), u64::MAX, u64::MAX).unwrap();
        assert_eq!(team.games(), 2 * u64::MAX as u128);
        assert_eq!(team.win_ratio, 0.5);
    }

    #[test]
    fn test_display() {
        let team = TeamRecord::parse("Team B (Y) (X) 3 3").unwrap();
        assert_eq!(team.to_string(), "Team B (Y) : 0.5");
    }

    proptest! {
        #[test]
        fn prop_ratio_within_unit_interval(wins in 0u64..100_000, losses in 0u64..100_000) {
            prop_assume!(wins + losses > 0);
            let line = format!("Some Team (Conf) {} {}", wins, losses);
            let team = TeamRecord::parse(&line).unwrap();
            prop_assert!((0.0..=1.0).contains(&team.win_ratio));
            prop_assert_eq!(team.games(), (wins + losses) as u128);
        }

        #[test]
        fn prop_parse_is_deterministic(
            name in "[A-Za-z ]{1,20}",
            conf in "[A-Za-z ]{1,12}",
            wins in 1u64..500,
            losses in 0u64..500,
        ) {
            let line = format!("{}({}) {} {}", name, conf, wins, losses);
            let first = TeamRecord::parse(&line).unwrap();
            let second = TeamRecord::parse(&line).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.name, name);
            prop_assert_eq!(first.conference, conf);
        }
    }
}
