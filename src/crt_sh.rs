use crate::data::CertificateRecord;
use crate::result::AppResult;
use reqwest::blocking::Client;
use url::Url;

pub trait CertificateSource {
    fn fetch_records(&self, org_name: &str) -> AppResult<Vec<CertificateRecord>>;
}

pub struct CrtShClient {
    client: Client,
    host: Url,
}

impl CrtShClient {
    pub fn new(host: &Url) -> Self {
        Self { client: Client::new(), host: host.clone() }
    }
}


pub fn query_url(host: &Url, org_name: &str) -> Url {
    let mut url = host.clone();

    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair("q", org_name.trim())
        .append_pair("output", "json");

    url
}

impl CertificateSource for CrtShClient {
    fn fetch_records(&self, org_name: &str) -> AppResult<Vec<CertificateRecord>> {
        let url = query_url(&self.host, org_name);

        let body = self.client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;

        Ok(serde_json::from_str(&body)?)
    }
}
