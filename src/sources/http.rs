// src/sources/http.rs
//
// HTTP-backed catalogue source base.
//
// Template-method contract: concrete sources supply request builders and
// response parsers for one site; the provided fetch drivers wire them to
// the shared client. Retries/backoff belong to the caller's network layer,
// not here.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Request, Response, Url};

use crate::domain::{EntriesPage, Entry, EntryStatus, Episode, FilterList, Video};
use crate::error::{SourceError, SourceResult};

use super::{generate_id, CatalogueSource};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// A catalogue source backed by a website.
#[async_trait]
pub trait HttpSource: CatalogueSource {
    /// Base url of the site without a trailing slash.
    fn base_url(&self) -> &str;

    /// Shared client for this source's requests.
    fn client(&self) -> &Client;

    /// Bumped when the site changes incompatibly; a new version means a
    /// new source identity.
    fn version_id(&self) -> i32 {
        1
    }

    /// The id every HTTP source should report from [`Source::id`].
    ///
    /// [`Source::id`]: crate::sources::Source::id
    fn source_id(&self) -> i64 {
        generate_id(self.name(), self.lang(), self.version_id())
    }

    /// Headers attached to every request.
    fn headers(&self) -> HeaderMap {
        default_headers()
    }

    // ------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------

    /// Request for one page of the popular listing.
    fn popular_request(&self, page: u32) -> SourceResult<Request>;

    /// Request for one page of search results.
    fn search_request(&self, page: u32, query: &str, filters: &FilterList)
        -> SourceResult<Request>;

    /// Request for one page of the latest-updates listing.
    fn latest_request(&self, page: u32) -> SourceResult<Request>;

    /// Request for the details of an entry. Override to change the url,
    /// headers or method.
    fn details_request(&self, entry: &Entry) -> SourceResult<Request> {
        self.get(&format!("{}{}", self.base_url(), entry.url))
    }

    /// Request for the episode list of an entry.
    fn episode_list_request(&self, entry: &Entry) -> SourceResult<Request> {
        self.get(&format!("{}{}", self.base_url(), entry.url))
    }

    /// Request for the video list of an episode.
    fn video_list_request(&self, episode: &Episode) -> SourceResult<Request> {
        self.get(&format!("{}{}", self.base_url(), episode.url))
    }

    // ------------------------------------------------------------------
    // Parsers
    // ------------------------------------------------------------------

    async fn popular_parse(&self, response: Response) -> SourceResult<EntriesPage>;

    async fn search_parse(&self, response: Response) -> SourceResult<EntriesPage>;

    async fn latest_parse(&self, response: Response) -> SourceResult<EntriesPage>;

    async fn details_parse(&self, response: Response) -> SourceResult<Entry>;

    async fn episode_list_parse(&self, response: Response) -> SourceResult<Vec<Episode>>;

    async fn video_list_parse(&self, response: Response) -> SourceResult<Vec<Video>>;

    /// Order the parsed videos by the user's preference. Default keeps the
    /// parser's order.
    fn sort_videos(&self, videos: Vec<Video>) -> Vec<Video> {
        videos
    }

    // ------------------------------------------------------------------
    // Fetch drivers
    // ------------------------------------------------------------------

    async fn fetch_popular(&self, page: u32) -> SourceResult<EntriesPage> {
        let response = self.execute(self.popular_request(page)?).await?;
        self.popular_parse(response).await
    }

    async fn fetch_search(
        &self,
        page: u32,
        query: &str,
        filters: &FilterList,
    ) -> SourceResult<EntriesPage> {
        let response = self.execute(self.search_request(page, query, filters)?).await?;
        self.search_parse(response).await
    }

    async fn fetch_latest(&self, page: u32) -> SourceResult<EntriesPage> {
        let response = self.execute(self.latest_request(page)?).await?;
        self.latest_parse(response).await
    }

    async fn fetch_details(&self, entry: &Entry) -> SourceResult<Entry> {
        let response = self.execute(self.details_request(entry)?).await?;
        let mut details = self.details_parse(response).await?;
        details.initialized = true;
        Ok(details)
    }

    /// Licensed entries fail before any request is issued; an empty list
    /// would look like a removed series to the caller.
    async fn fetch_episode_list(&self, entry: &Entry) -> SourceResult<Vec<Episode>> {
        if entry.status == EntryStatus::Licensed {
            return Err(SourceError::Licensed);
        }
        let response = self.execute(self.episode_list_request(entry)?).await?;
        self.episode_list_parse(response).await
    }

    async fn fetch_video_list(&self, episode: &Episode) -> SourceResult<Vec<Video>> {
        let response = self.execute(self.video_list_request(episode)?).await?;
        let videos = self.video_list_parse(response).await?;
        Ok(self.sort_videos(videos))
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Build a GET request with this source's headers.
    fn get(&self, url: &str) -> SourceResult<Request> {
        Ok(self.client().get(url).headers(self.headers()).build()?)
    }

    /// Execute a request, failing on non-success status.
    async fn execute(&self, request: Request) -> SourceResult<Response> {
        Ok(self.client().execute(request).await?.error_for_status()?)
    }

    /// User-facing url of an entry on the site.
    fn entry_url(&self, entry: &Entry) -> SourceResult<String> {
        Ok(self.details_request(entry)?.url().to_string())
    }

    /// User-facing url of an episode on the site.
    fn episode_url(&self, episode: &Episode) -> String {
        episode.url.clone()
    }
}

/// Strips the scheme and domain from an absolute url, keeping path, query
/// and fragment. Inputs that don't parse as absolute urls are returned
/// unchanged.
///
/// Stored entry/episode urls use this form so they survive a site domain
/// change.
pub fn url_without_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let mut out = parsed.path().to_string();
            if let Some(query) = parsed.query() {
                out.push('?');
                out.push_str(query);
            }
            if let Some(fragment) = parsed.fragment() {
                out.push('#');
                out.push_str(fragment);
            }
            out
        }
        Err(_) => url.to_string(),
    }
}

pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}
