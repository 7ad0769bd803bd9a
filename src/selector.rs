use std::fmt;

use crate::conference::ConferenceRegistry;
use crate::constants::{format_ratio, REPORT_SEPARATOR};
use crate::error::{ConferenceError, Result};

/// A conference paired with its average win ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct ConferenceAverage {
    pub name: String,
    pub average: f64,
}

impl fmt::Display for ConferenceAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, REPORT_SEPARATOR, format_ratio(self.average, None))
    }
}

/// Find every conference tied for the highest average win ratio.
///
/// Averages are compared with exact equality. Ties are all returned, in the
/// order the conferences first appeared in the input.
pub fn select_top_conferences(registry: &ConferenceRegistry) -> Result<Vec<ConferenceAverage>> {
    select_top_conferences_with(registry, 0.0)
}

/// Like [`select_top_conferences`], but treats any average within
/// `epsilon` of the maximum as tied. `epsilon = 0.0` means exact equality.
pub fn select_top_conferences_with(
    registry: &ConferenceRegistry,
    epsilon: f64,
) -> Result<Vec<ConferenceAverage>> {
    if registry.is_empty() {
        return Err(ConferenceError::NoConferences);
    }

    let averages = registry
        .iter()
        .map(|bucket| -> Result<ConferenceAverage> {
            Ok(ConferenceAverage {
                name: bucket.name().to_string(),
                average: bucket.average()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let best = averages
        .iter()
        .map(|c| c.average)
        .fold(f64::NEG_INFINITY, f64::max);

    let top: Vec<ConferenceAverage> = averages
        .into_iter()
        .filter(|c| if epsilon > 0.0 { best - c.average <= epsilon } else { c.average == best })
        .collect();

    log::debug!("Best average {} shared by {} conference(s)", best, top.len());
    Ok(top)
}
