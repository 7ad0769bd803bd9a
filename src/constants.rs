/// First character marking a comment line in team listings
pub const COMMENT_MARKER: char = '#';

/// Opening delimiter around a conference name (and an optional team tag)
pub const OPEN_PAREN: char = '(';

/// Closing delimiter around a conference name (and an optional team tag)
pub const CLOSE_PAREN: char = ')';

/// Separator between name and ratio in report lines
pub const REPORT_SEPARATOR: &str = " : ";

/// Config file looked up by the CLI when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "conference.toml";

/// Render a ratio the way a default float string reads (`0.5`, `1.0`,
/// `0.6666666666666666`), or with fixed decimals when `precision` is set.
pub fn format_ratio(ratio: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, ratio),
        None => format!("{:?}", ratio),
    }
}
