use serde::Deserialize;
use std::collections::HashSet;

/// One entry of the crt.sh JSON output. Only the fields subroot needs are kept; a missing or
/// null field reads as an empty string.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CertificateRecord {
    #[serde(default)]
    common_name: Option<String>,
    #[serde(default, rename = "name_value")]
    organization_name: Option<String>,
}

impl CertificateRecord {
    pub fn new(common_name: &str, organization_name: &str) -> Self {
        Self {
            common_name: Some(common_name.into()),
            organization_name: Some(organization_name.into()),
        }
    }

    pub fn common_name(&self) -> &str {
        self.common_name.as_deref().unwrap_or("")
    }

    pub fn organization_name(&self) -> &str {
        self.organization_name.as_deref().unwrap_or("")
    }
}


/// The deduplicated root domains found during a run.
#[derive(Debug, Default, PartialEq)]
pub struct RootDomains(HashSet<String>);

impl RootDomains {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, root_domain: String) -> bool {
        self.0.insert(root_domain)
    }

    pub fn contains(&self, root_domain: &str) -> bool {
        self.0.contains(root_domain)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn sorted(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = self.iter().collect();

        domains.sort_unstable();

        domains
    }
}

impl<S: Into<String>> FromIterator<S> for RootDomains {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for RootDomains {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into))
    }
}
