use crate::VesselQuery;
use once_cell::sync::Lazy;
use regex::Regex;

static IMO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"imo\s+([0-9]+)").expect("imo pattern must be valid"));
static MMSI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"mmsi\s+([0-9]+)").expect("mmsi pattern must be valid"));
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"name\s+(\w+)").expect("name pattern must be valid"));

/// Words that follow "name" in phrasing like "the name of ..." and are never
/// a vessel name themselves.
const NAME_CONNECTIVES: [&str; 8] = ["of", "is", "for", "the", "a", "an", "was", "with"];

impl VesselQuery {
    /// Extracts the filters mentioned in a free-text question.
    ///
    /// Only the first match of each keyword counts. A number that does not fit
    /// the identifier type, or is zero, leaves that filter unset.
    pub fn from_question(question: &str) -> VesselQuery {
        let question = question.to_lowercase();

        VesselQuery::new(
            first_capture(&IMO_PATTERN, &question).and_then(|v| v.parse().ok()),
            first_capture(&MMSI_PATTERN, &question).and_then(|v| v.parse().ok()),
            first_capture(&NAME_PATTERN, &question)
                .filter(|v| !NAME_CONNECTIVES.contains(v))
                .map(ToString::to_string),
        )
    }
}

fn first_capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
