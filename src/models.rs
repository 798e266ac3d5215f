use serde::{Deserialize, Serialize};

/// One of the three satisfaction categories a customer can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RatingType {
    VerySatisfied,
    Satisfied,
    Unsatisfied,
}

impl RatingType {
    pub const ALL: [RatingType; 3] = [
        RatingType::VerySatisfied,
        RatingType::Satisfied,
        RatingType::Unsatisfied,
    ];

    pub fn code(self) -> u8 {
        match self {
            RatingType::VerySatisfied => 1,
            RatingType::Satisfied => 2,
            RatingType::Unsatisfied => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingType::VerySatisfied => "Muito Satisfeito",
            RatingType::Satisfied => "Satisfeito",
            RatingType::Unsatisfied => "Insatisfeito",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            RatingType::VerySatisfied => "😀",
            RatingType::Satisfied => "🙂",
            RatingType::Unsatisfied => "😞",
        }
    }
}

impl TryFrom<u8> for RatingType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(RatingType::VerySatisfied),
            2 => Ok(RatingType::Satisfied),
            3 => Ok(RatingType::Unsatisfied),
            other => Err(format!("unknown rating type {other}")),
        }
    }
}

impl From<RatingType> for u8 {
    fn from(rating: RatingType) -> Self {
        rating.code()
    }
}

/// Per-type counts for the current day, keyed `"1"`..`"3"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatsSnapshot {
    #[serde(rename = "1", default)]
    pub very_satisfied: u64,
    #[serde(rename = "2", default)]
    pub satisfied: u64,
    #[serde(rename = "3", default)]
    pub unsatisfied: u64,
}

impl StatsSnapshot {
    pub fn get(&self, rating: RatingType) -> u64 {
        match rating {
            RatingType::VerySatisfied => self.very_satisfied,
            RatingType::Satisfied => self.satisfied,
            RatingType::Unsatisfied => self.unsatisfied,
        }
    }

    pub fn set(&mut self, rating: RatingType, count: u64) {
        match rating {
            RatingType::VerySatisfied => self.very_satisfied = count,
            RatingType::Satisfied => self.satisfied = count,
            RatingType::Unsatisfied => self.unsatisfied = count,
        }
    }

    pub fn total(&self) -> u64 {
        self.very_satisfied
            .saturating_add(self.satisfied)
            .saturating_add(self.unsatisfied)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredRating {
    pub id: u64,
    pub tipo: RatingType,
    pub avaliacao_date: String,
    pub avaliacao_time: String,
    pub sequential_number: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub ratings: Vec<StoredRating>,
}

/// Body of `POST /api/avaliar`. `tipo` stays loose so bad values map to a 400.
#[derive(Debug, Deserialize)]
pub struct RateRequest {
    pub tipo: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateReceipt {
    #[serde(default)]
    pub success: bool,
    pub sequential_number: u64,
    #[serde(default)]
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingEvent {
    pub tipo: RatingType,
    pub sequential_number: u64,
    #[serde(default)]
    pub avaliacao_date: String,
    pub avaliacao_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HistoryResponse {
    #[serde(default)]
    pub avaliacoes: Option<Vec<RatingEvent>>,
}

impl HistoryResponse {
    /// A missing or null list reads as no ratings today.
    pub fn into_events(self) -> Vec<RatingEvent> {
        self.avaliacoes.unwrap_or_default()
    }
}
