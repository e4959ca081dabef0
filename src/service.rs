use crate::crt_sh::CertificateSource;
use crate::data::RootDomains;
use crate::result::AppResult;
use crate::root_domain::extract_root_domains;
use crate::service_configuration::Configuration;

pub struct Service;

impl Service {
    /// Queries `source` for each configured org name in turn and collects the root domains.
    /// The first failure aborts the run and discards whatever was gathered so far.
    pub fn run<C, S>(config: &C, source: &S) -> AppResult<RootDomains>
        where C: Configuration, S: CertificateSource {
        let mut root_domains = RootDomains::new();

        for org_name in config.org_names() {
            let records = source.fetch_records(org_name)?;

            root_domains.extend(extract_root_domains(&records, org_name, config.root_level()));
        }

        Ok(root_domains)
    }
}
