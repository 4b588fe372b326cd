use std::path::PathBuf;

use reqwest::header::{ACCEPT, ACCEPT_ENCODING};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::configuration::CollectionSettings;
use crate::error::DealsError;

/// Where listing pages and collection metadata come from. The scraper
/// only ever issues one request at a time.
#[allow(async_fn_in_trait)]
pub trait CollectionSource {
    /// Raw markup of listing page `page` (1-based).
    async fn fetch_page(&self, page: u32) -> Result<String, DealsError>;

    /// Raw JSON document describing the collection.
    async fn fetch_metadata(&self) -> Result<String, DealsError>;
}

/// The storefront over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCollection {
    client: Client,
    base_url: Url,
    dump_dir: Option<PathBuf>,
}

impl HttpCollection {
    pub fn new(settings: &CollectionSettings) -> Result<Self, DealsError> {
        let client = Client::builder().timeout(settings.timeout()).build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            dump_dir: settings.dump_dir.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());
        url
    }

    /// `<collection>.json`, keeping whatever query the base url carries.
    pub fn metadata_url(&self) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}.json", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url
    }

    async fn dump(&self, page: u32, body: &str) -> Result<(), DealsError> {
        let Some(dir) = &self.dump_dir else {
            return Ok(());
        };

        let path = dir.join(format!("page-{page}.html"));
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| DealsError::Dump { path: dir.clone(), source })?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|source| DealsError::Dump { path: path.clone(), source })?;
        debug!("Page {} written to {}", page, path.display());

        Ok(())
    }
}

impl CollectionSource for HttpCollection {
    #[instrument(level = "info", name = "Fetching page", skip(self))]
    async fn fetch_page(&self, page: u32) -> Result<String, DealsError> {
        let url = self.page_url(page);
        info!("GET {}", url);

        let res = self
            .client
            .get(url)
            .header(ACCEPT_ENCODING, "identity")
            .send()
            .await?
            .error_for_status()?;
        let body = res.text().await?;

        self.dump(page, &body).await?;

        Ok(body)
    }

    #[instrument(level = "info", name = "Fetching collection metadata", skip(self))]
    async fn fetch_metadata(&self) -> Result<String, DealsError> {
        let url = self.metadata_url();
        info!("GET {}", url);

        let res = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        Ok(res.text().await?)
    }
}
