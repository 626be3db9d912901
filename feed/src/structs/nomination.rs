use serde::Deserialize;

/// A community nomination as ranked by the backend: a jump link to the original
/// message and the number of votes it has collected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NominationRecord {
    pub message_link: String,
    pub vote_count: u64,
}

impl NominationRecord {
    pub fn new(message_link: &str, vote_count: u64) -> NominationRecord {
        NominationRecord {
            message_link: message_link.to_string(),
            vote_count,
        }
    }
}
