use crate::domain::model::{FailedFetch, FetchOutcome, FilterCriteria, ProblemDetail};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default)]
pub struct Ranking {
    pub ranked: Vec<ProblemDetail>,
    pub failed: Vec<FailedFetch>,
    pub excluded: usize,
}

/// 熱門度排序：likes 由大到小，再依 like ratio 由大到小。
/// 平手時依 title、frontend id 排，確保輸出穩定。
pub fn popularity_order(a: &ProblemDetail, b: &ProblemDetail) -> Ordering {
    b.likes
        .cmp(&a.likes)
        .then_with(|| b.like_ratio().total_cmp(&a.like_ratio()))
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| frontend_id_order(&a.frontend_id, &b.frontend_id))
}

/// 題號以數字比較（"9" 在 "10" 之前），無法解析時退回字串比較
fn frontend_id_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

pub fn filter_and_rank(outcomes: Vec<FetchOutcome>, criteria: &FilterCriteria) -> Ranking {
    let mut ranking = Ranking::default();

    for outcome in outcomes {
        match outcome {
            FetchOutcome::Fetched(detail) if criteria.allows(&detail) => {
                ranking.ranked.push(detail)
            }
            FetchOutcome::Fetched(_) => ranking.excluded += 1,
            FetchOutcome::Failed(failed) => ranking.failed.push(failed),
        }
    }

    ranking.ranked.sort_by(popularity_order);
    ranking
}
