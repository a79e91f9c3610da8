use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// 題目難度，字串採用平台上的標籤
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Difficulty {
    #[cfg_attr(feature = "cli", value(name = "Easy"))]
    Easy,
    #[cfg_attr(feature = "cli", value(name = "Medium"))]
    Medium,
    #[cfg_attr(feature = "cli", value(name = "Hard"))]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty '{}', expected Easy, Medium or Hard", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemSummary {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicTag {
    pub name: String,
}

/// GraphQL `data.question` 中實際會用到的欄位，其餘欄位直接忽略
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    #[serde(rename = "questionFrontendId")]
    pub frontend_id: String,
    pub title: String,
    pub title_slug: String,
    pub likes: u64,
    pub dislikes: u64,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub is_paid_only: bool,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
}

impl ProblemDetail {
    pub fn like_ratio(&self) -> f64 {
        like_ratio(self.likes, self.dislikes)
    }
}

/// likes / dislikes; dislikes 為 0 時當作 1
pub fn like_ratio(likes: u64, dislikes: u64) -> f64 {
    likes as f64 / dislikes.max(1) as f64
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    Timeout,
    Status(u16),
    InvalidBody(String),
    MissingQuestion,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Timeout => write!(f, "request timed out"),
            FetchFailure::Status(code) => write!(f, "unexpected HTTP status {}", code),
            FetchFailure::InvalidBody(reason) => {
                write!(f, "response is not a question payload: {}", reason)
            }
            FetchFailure::MissingQuestion => write!(f, "response contains no question"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFetch {
    pub slug: String,
    pub reason: FetchFailure,
}

/// 單一題目的抓取結果；失敗是資料，不是錯誤
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Fetched(ProblemDetail),
    Failed(FailedFetch),
}

impl FetchOutcome {
    pub fn failed(slug: impl Into<String>, reason: FetchFailure) -> Self {
        FetchOutcome::Failed(FailedFetch {
            slug: slug.into(),
            reason,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub difficulties: BTreeSet<Difficulty>,
    pub exclude_paid_only: bool,
}

impl FilterCriteria {
    pub fn new(difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
        Self {
            difficulties: difficulties.into_iter().collect(),
            exclude_paid_only: false,
        }
    }

    pub fn exclude_paid_only(mut self, exclude: bool) -> Self {
        self.exclude_paid_only = exclude;
        self
    }

    pub fn allows(&self, detail: &ProblemDetail) -> bool {
        self.difficulties.contains(&detail.difficulty)
            && !(self.exclude_paid_only && detail.is_paid_only)
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(Difficulty::ALL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub id: String,
    pub title: String,
    pub likes: u64,
    pub dislikes: u64,
    #[serde(rename = "like/dislikes_ratio")]
    pub like_ratio: f64,
    pub difficulty: Difficulty,
}

impl From<&ProblemDetail> for ExportRow {
    fn from(detail: &ProblemDetail) -> Self {
        Self {
            id: detail.frontend_id.clone(),
            title: detail.title.clone(),
            likes: detail.likes,
            dislikes: detail.dislikes,
            like_ratio: detail.like_ratio(),
            difficulty: detail.difficulty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub ranked: Vec<ProblemDetail>,
    pub failed: Vec<FailedFetch>,
    pub excluded: usize,
    pub csv_output: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub exported: usize,
    pub failed: usize,
    pub excluded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(likes: u64, dislikes: u64, difficulty: Difficulty) -> ProblemDetail {
        ProblemDetail {
            frontend_id: "1".to_string(),
            title: "Two Sum".to_string(),
            title_slug: "two-sum".to_string(),
            likes,
            dislikes,
            difficulty,
            is_paid_only: false,
            topic_tags: vec![],
        }
    }

    #[test]
    fn test_like_ratio_treats_zero_dislikes_as_one() {
        assert_eq!(like_ratio(10, 0), 10.0);
        assert_eq!(like_ratio(0, 0), 0.0);
        assert_eq!(like_ratio(20, 4), 5.0);
        assert_eq!(detail(7, 0, Difficulty::Easy).like_ratio(), 7.0);
    }

    #[test]
    fn test_difficulty_parses_platform_labels() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("Impossible".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_problem_detail_deserializes_question_payload() {
        let json = serde_json::json!({
            "questionId": "1",
            "questionFrontendId": "1",
            "title": "Two Sum",
            "titleSlug": "two-sum",
            "content": "<p>Given an array...</p>",
            "isPaidOnly": false,
            "difficulty": "Easy",
            "likes": 50000,
            "dislikes": 1700,
            "topicTags": [{"name": "Array", "slug": "array", "__typename": "TopicTagNode"}],
            "hints": ["Use a hash map"]
        });

        let detail: ProblemDetail = serde_json::from_value(json).unwrap();
        assert_eq!(detail.frontend_id, "1");
        assert_eq!(detail.difficulty, Difficulty::Easy);
        assert_eq!(detail.likes, 50000);
        assert_eq!(detail.topic_tags[0].name, "Array");
    }

    #[test]
    fn test_problem_detail_rejects_unknown_difficulty() {
        let json = serde_json::json!({
            "questionFrontendId": "1",
            "title": "Two Sum",
            "titleSlug": "two-sum",
            "difficulty": "Legendary",
            "likes": 1,
            "dislikes": 1
        });

        assert!(serde_json::from_value::<ProblemDetail>(json).is_err());
    }

    #[test]
    fn test_filter_criteria_allows() {
        let easy_only = FilterCriteria::new([Difficulty::Easy]);
        assert!(easy_only.allows(&detail(1, 1, Difficulty::Easy)));
        assert!(!easy_only.allows(&detail(1, 1, Difficulty::Hard)));

        let mut paid = detail(1, 1, Difficulty::Easy);
        paid.is_paid_only = true;
        assert!(easy_only.allows(&paid));
        assert!(!easy_only.clone().exclude_paid_only(true).allows(&paid));

        let none = FilterCriteria::new([]);
        assert!(!none.allows(&detail(1, 1, Difficulty::Medium)));
    }

    #[test]
    fn test_export_row_from_detail() {
        let row = ExportRow::from(&detail(10, 0, Difficulty::Easy));
        assert_eq!(row.id, "1");
        assert_eq!(row.like_ratio, 10.0);
        assert_eq!(row.difficulty, Difficulty::Easy);
    }
}
