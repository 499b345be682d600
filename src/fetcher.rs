use std::time::Duration;

use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use reqwest::redirect;

use crate::error::ScrapeError;
use crate::settings::{QUERY_PLACEHOLDER, Settings};

const MAX_REDIRECTS: usize = 10;
const FALLBACK_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

pub struct Fetcher {
    client: Client,
    search_url: String,
    user_agents: Vec<String>,
}

impl Fetcher {
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let redirect_policy = redirect::Policy::custom(|attempt| {
            if attempt.previous().len() > MAX_REDIRECTS {
                attempt.error(format!("Too many redirects (>{MAX_REDIRECTS})"))
            } else {
                attempt.follow()
            }
        });

        let client = Client::builder()
            .redirect(redirect_policy)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Fetcher {
            client,
            search_url: settings.search_url.clone(),
            user_agents: settings.user_agents.clone(),
        })
    }

    pub fn search_url(&self, query: &str) -> String {
        self.search_url
            .replace(QUERY_PLACEHOLDER, &query.replace(' ', "+"))
    }

    /// Fetches the first results page for `query` as text.
    pub fn fetch_search_page(&self, query: &str) -> Result<String, ScrapeError> {
        let url = self.search_url(query);
        let user_agent = self.pick_user_agent();
        tracing::info!(%url, %user_agent, "fetching search page");

        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, user_agent)
            .send()
            .map_err(|source| ScrapeError::Fetch { url: url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url, status });
        }

        resp.text().map_err(|source| ScrapeError::Fetch { url, source })
    }

    fn pick_user_agent(&self) -> &str {
        if self.user_agents.is_empty() {
            return FALLBACK_USER_AGENT;
        }
        &self.user_agents[rand::thread_rng().gen_range(0..self.user_agents.len())]
    }
}
