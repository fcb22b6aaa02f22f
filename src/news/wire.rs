use serde::Deserialize;

/// NewsAPI envelope. Success bodies carry `articles`; error bodies carry `code`/`message`.
#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "totalResults")]
    pub(crate) total_results: Option<u64>,
    pub(crate) articles: Option<Vec<RawArticle>>,
}

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    pub(crate) source: Option<RawSource>,
    pub(crate) author: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RawSource {
    #[allow(dead_code)]
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
}
