use crate::data::CertificateRecord;


pub fn normalize_org_name(organization_name: &str) -> &str {
    organization_name.trim().trim_end_matches('.')
}


pub fn derive_root_domain(common_name: &str, level: usize) -> Option<String> {
    if level == 0 {
        return None;
    }

    let labels: Vec<&str> = common_name.split('.').collect();

    if labels.len() < level {
        return None;
    }

    Some(labels[labels.len() - level..].join("."))
}


/// Root domains of the records that belong to `org_name`, in record order. Duplicates are
/// left for the caller to collapse.
pub fn extract_root_domains<'a>(
    records: &'a [CertificateRecord],
    org_name: &'a str,
    level: usize,
) -> impl Iterator<Item = String> + 'a {
    records
        .iter()
        .filter(move |record| normalize_org_name(record.organization_name()) == org_name)
        .filter_map(move |record| derive_root_domain(record.common_name(), level))
}
