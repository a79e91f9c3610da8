use crate::domain::model::{FetchFailure, FetchOutcome, ProblemDetail, ProblemSummary};
use crate::utils::error::Result;
use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_LISTING_ENDPOINT: &str = "https://leetcode.com/api/problems/all/";
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://leetcode.com/graphql";

const QUESTION_OPERATION: &str = "questionData";

/// 平台 questionData 查詢；只有少數欄位會被解析，其餘隨回應一起丟棄
pub const QUESTION_QUERY: &str = r#"query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    questionFrontendId
    boundTopicId
    title
    titleSlug
    content
    translatedTitle
    translatedContent
    isPaidOnly
    difficulty
    likes
    dislikes
    isLiked
    similarQuestions
    contributors {
      username
      profileUrl
      avatarUrl
      __typename
    }
    langToValidPlayground
    topicTags {
      name
      slug
      translatedName
      __typename
    }
    companyTagStats
    codeSnippets {
      lang
      langSlug
      code
      __typename
    }
    stats
    hints
    solution {
      id
      canSeeDetail
      __typename
    }
    status
    sampleTestCase
    metaData
    judgerAvailable
    judgeType
    mysqlSchemas
    enableRunCode
    enableTestMode
    envInfo
    libraryUrl
    __typename
  }
}
"#;

#[derive(Debug, Deserialize)]
struct ProblemListing {
    stat_status_pairs: Vec<StatStatusPair>,
}

#[derive(Debug, Deserialize)]
struct StatStatusPair {
    stat: ListingStat,
}

#[derive(Debug, Deserialize)]
struct ListingStat {
    #[serde(rename = "question__title_slug")]
    title_slug: String,
}

#[derive(Debug, Deserialize)]
struct QuestionResponse {
    data: Option<QuestionData>,
}

#[derive(Debug, Deserialize)]
struct QuestionData {
    question: Option<ProblemDetail>,
}

/// 包裝 reqwest Client，所有請求共用同一個連線池與逾時設定
#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    client: Client,
    listing_endpoint: String,
    graphql_endpoint: String,
}

impl LeetCodeClient {
    pub fn new(
        listing_endpoint: impl Into<String>,
        graphql_endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            listing_endpoint: listing_endpoint.into(),
            graphql_endpoint: graphql_endpoint.into(),
        })
    }

    /// 列出所有題目的 slug，任何錯誤都直接往上拋
    pub async fn list_problems(&self) -> Result<Vec<ProblemSummary>> {
        tracing::debug!("Making listing request to: {}", self.listing_endpoint);
        let response = self
            .client
            .get(&self.listing_endpoint)
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!("Listing response status: {}", response.status());

        let body = response.bytes().await?;
        let listing: ProblemListing = serde_json::from_slice(&body)?;

        Ok(listing
            .stat_status_pairs
            .into_iter()
            .map(|pair| ProblemSummary {
                slug: pair.stat.title_slug,
            })
            .collect())
    }

    /// 抓取單一題目。逾時與無法解析的回應會回傳 `FetchOutcome::Failed`，
    /// 其他傳輸層錯誤才是 `Err`。
    pub async fn fetch_detail(&self, slug: &str) -> Result<FetchOutcome> {
        let body = serde_json::json!({
            "operationName": QUESTION_OPERATION,
            "variables": { "titleSlug": slug },
            "query": QUESTION_QUERY,
        });

        let response = match self.client.post(&self.graphql_endpoint).json(&body).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Ok(timed_out(slug)),
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) if e.is_timeout() => return Ok(timed_out(slug)),
            Err(e) => return Err(e.into()),
        };

        Ok(parse_question(slug, status, &bytes))
    }

    /// 以最多 `concurrency` 個同時請求抓取所有題目。
    ///
    /// 第一個致命錯誤會讓 stream 被丟棄，尚未完成的請求隨之取消。
    /// 回傳順序不保證與輸入相同。
    pub async fn fetch_all(
        &self,
        problems: Vec<ProblemSummary>,
        concurrency: usize,
    ) -> Result<Vec<FetchOutcome>> {
        let total = problems.len();
        tracing::info!(
            "🌐 Fetching {} problems with up to {} concurrent requests",
            total,
            concurrency
        );

        fan_out(problems, concurrency, |problem| async move {
            self.fetch_detail(&problem.slug).await
        })
        .await
    }
}

/// 最多同時執行 `concurrency` 個 `fetch`；遇到第一個 `Err` 就丟棄 stream，
/// 其餘執行中的 future 一併取消。
async fn fan_out<T, F, Fut>(items: Vec<T>, concurrency: usize, fetch: F) -> Result<Vec<FetchOutcome>>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<FetchOutcome>>,
{
    stream::iter(items)
        .map(fetch)
        .buffer_unordered(concurrency.max(1))
        .try_collect()
        .await
}

fn timed_out(slug: &str) -> FetchOutcome {
    tracing::warn!("⏱️ Request for {} timed out", slug);
    FetchOutcome::failed(slug, FetchFailure::Timeout)
}

fn parse_question(slug: &str, status: StatusCode, body: &[u8]) -> FetchOutcome {
    match serde_json::from_slice::<QuestionResponse>(body) {
        Ok(QuestionResponse {
            data: Some(QuestionData {
                question: Some(detail),
            }),
        }) => {
            tracing::debug!(
                "Fetched {} #{} ({}) tags: [{}]",
                detail.title_slug,
                detail.frontend_id,
                detail.difficulty,
                detail
                    .topic_tags
                    .iter()
                    .map(|tag| tag.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            FetchOutcome::Fetched(detail)
        }
        Ok(_) => {
            tracing::info!("No question returned for {}", slug);
            FetchOutcome::failed(slug, FetchFailure::MissingQuestion)
        }
        Err(_) if !status.is_success() => {
            tracing::info!("Request for {} failed with status {}", slug, status);
            FetchOutcome::failed(slug, FetchFailure::Status(status.as_u16()))
        }
        Err(e) => {
            tracing::info!("Returned response for {} is not JSON deserializable: {}", slug, e);
            FetchOutcome::failed(slug, FetchFailure::InvalidBody(e.to_string()))
        }
    }
}
