use super::DisplayRecord;
use crate::VesselRecord;

const SUMMARY_HEADER: &str = "I found a vessel with the following information:";

/// What a question asks about, decides the answer template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    Position,
    Name,
    Summary,
}

/// Evaluated in order, the first rule with a keyword in the question wins.
/// Questions matching no rule get [`Intent::Summary`].
const INTENT_RULES: [(Intent, &[&str]); 2] = [
    (Intent::Position, &["position", "location", "where"]),
    (Intent::Name, &["name"]),
];

impl Intent {
    pub fn classify(question: &str) -> Intent {
        let question = question.to_lowercase();

        INTENT_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| question.contains(k)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Summary)
    }

    pub fn render(self, vessel: &DisplayRecord) -> String {
        match self {
            Intent::Position => format!(
                "The vessel with IMO {} is at latitude {} and longitude {}.",
                vessel.display(VesselRecord::IMO),
                vessel.display(VesselRecord::LATITUDE),
                vessel.display(VesselRecord::LONGITUDE),
            ),
            Intent::Name => format!(
                "The vessel with IMO {} is named {}.",
                vessel.display(VesselRecord::IMO),
                vessel.display(VesselRecord::NAME),
            ),
            Intent::Summary => {
                let mut answer = format!("{SUMMARY_HEADER}\n");
                for (field, value) in vessel.fields() {
                    answer.push_str(&format!("- {field}: {value}\n"));
                }
                answer
            }
        }
    }
}
