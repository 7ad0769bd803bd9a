use statrs::statistics::Statistics;
use std::collections::HashMap;
use std::fmt;

use crate::constants::{format_ratio, REPORT_SEPARATOR};
use crate::error::{ConferenceError, Result};
use crate::team::TeamRecord;

/// Teams belonging to one conference, kept in insertion order.
///
/// No uniqueness check is made on team names; a team listed twice counts
/// twice toward the average.
#[derive(Clone, Debug)]
pub struct ConferenceBucket {
    name: String,
    teams: Vec<TeamRecord>,
}

impl ConferenceBucket {
    /// Create an empty bucket for a conference.
    pub fn new(name: String) -> Self {
        ConferenceBucket {
            name,
            teams: Vec::new(),
        }
    }

    /// Conference name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a team, keeping insertion order.
    pub fn add(&mut self, team: TeamRecord) {
        self.teams.push(team);
    }

    /// Teams in the order they were added
    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    /// Number of teams
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Check whether a team with this exact name has been added.
    pub fn contains(&self, team_name: &str) -> bool {
        self.teams.iter().any(|t| t.name == team_name)
    }

    /// Arithmetic mean of the teams' win ratios (sum / count).
    pub fn average(&self) -> Result<f64> {
        if self.teams.is_empty() {
            return Err(ConferenceError::EmptyConference(self.name.clone()));
        }
        let total: f64 = self.teams.iter().map(|t| t.win_ratio).sum();
        Ok(total / self.teams.len() as f64)
    }

    /// Spread of win ratios within the conference.
    pub fn summary(&self) -> Result<ConferenceSummary> {
        let average = self.average()?;
        let ratios: Vec<f64> = self.teams.iter().map(|t| t.win_ratio).collect();

        // statrs returns NaN for the sample deviation of a single value
        let std_dev = if ratios.len() > 1 { ratios.iter().std_dev() } else { 0.0 };
        let min = Statistics::min(ratios.iter());
        let max = Statistics::max(ratios.iter());

        Ok(ConferenceSummary {
            name: self.name.clone(),
            teams: ratios.len(),
            average,
            min,
            max,
            std_dev,
        })
    }
}

impl fmt::Display for ConferenceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average() {
            Ok(avg) => write!(f, "{}{}{}", self.name, REPORT_SEPARATOR, format_ratio(avg, None)),
            Err(_) => write!(f, "{}{}-", self.name, REPORT_SEPARATOR),
        }
    }
}

/// Per-conference statistics over team win ratios.
#[derive(Clone, Debug, PartialEq)]
pub struct ConferenceSummary {
    pub name: String,
    pub teams: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,

    /// Sample standard deviation (0.0 for single-team conferences)
    pub std_dev: f64,
}

/// All conferences seen so far, keyed by name.
///
/// Buckets are created on first sight of a conference and never removed.
/// Iteration follows the order in which conferences first appeared.
#[derive(Clone, Debug, Default)]
pub struct ConferenceRegistry {
    buckets: Vec<ConferenceBucket>,
    index: HashMap<String, usize>,
}

impl ConferenceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ConferenceRegistry {
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Get the bucket for `name`, creating an empty one if needed.
    pub fn get_or_create(&mut self, name: &str) -> &mut ConferenceBucket {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                log::debug!("New conference {:?}", name);
                self.buckets.push(ConferenceBucket::new(name.to_string()));
                self.index.insert(name.to_string(), self.buckets.len() - 1);
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[idx]
    }

    /// File a team under its conference.
    pub fn add(&mut self, team: TeamRecord) {
        let conference = team.conference.clone();
        self.get_or_create(&conference).add(team);
    }

    /// Look up a conference by name.
    pub fn get(&self, name: &str) -> Option<&ConferenceBucket> {
        self.index.get(name).map(|&idx| &self.buckets[idx])
    }

    /// Average win ratio of the named conference.
    pub fn average_for(&self, name: &str) -> Result<f64> {
        self.get(name)
            .ok_or_else(|| ConferenceError::UnknownConference(name.to_string()))?
            .average()
    }

    /// Buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &ConferenceBucket> {
        self.buckets.iter()
    }

    /// Number of conferences
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of team records across all conferences
    pub fn team_count(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    /// Summaries for every conference, best average first.
    ///
    /// Conferences with equal averages keep their first-seen order.
    pub fn summaries(&self) -> Result<Vec<ConferenceSummary>> {
        let mut summaries = self
            .buckets
            .iter()
            .map(|b| b.summary())
            .collect::<Result<Vec<_>>>()?;
        summaries.sort_by(|a, b| b.average.total_cmp(&a.average));
        Ok(summaries)
    }
}
