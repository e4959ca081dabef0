use crate::cli::Cli;
use std::collections::HashMap;
use thiserror::Error;
use url::Url;

pub const DEFAULT_CRT_SH_HOST: &str = "https://crt.sh";

pub trait Configuration {
    fn crt_sh_host(&self) -> &Url;

    fn org_names(&self) -> &[String];

    fn root_level(&self) -> usize;

    fn sort_output(&self) -> bool;
}

#[derive(Debug, Error, PartialEq)]
pub enum ServiceConfigurationError {
    #[error("CRT_SH_HOST {0} is not a valid URL")]
    InvalidCrtShHost(String),
    #[error("Root level must be greater than 0, got {0}")]
    InvalidRootLevel(i64),
    #[error("Org name is required but not given")]
    OrgNamesRequired,
}

#[derive(Debug, PartialEq)]
pub struct ServiceConfiguration {
    crt_sh_host: Url,
    org_names: Vec<String>,
    root_level: usize,
    sort_output: bool,
}

impl ServiceConfiguration {
    pub fn new<I>(
        cli_parameters: &Cli,
        env_vars_iterator: I
    ) -> Result<Self, ServiceConfigurationError>
    where I: Iterator<Item = (String, String)>
    {
        let org_names: Vec<String> = cli_parameters
            .org_names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        if org_names.is_empty() {
            return Err(ServiceConfigurationError::OrgNamesRequired);
        }

        let root_level = match usize::try_from(cli_parameters.root_level) {
            Ok(level) if level > 0 => level,
            _ => return Err(ServiceConfigurationError::InvalidRootLevel(cli_parameters.root_level)),
        };

        let env_vars: HashMap<String, String> = env_vars_iterator.collect();

        let host = Self::extract_optional_env_var(&env_vars, "CRT_SH_HOST")
            .unwrap_or_else(|| DEFAULT_CRT_SH_HOST.into());

        let crt_sh_host = Url::parse(&host)
            .map_err(|_| ServiceConfigurationError::InvalidCrtShHost(host.clone()))?;

        if crt_sh_host.cannot_be_a_base() {
            return Err(ServiceConfigurationError::InvalidCrtShHost(host));
        }

        Ok(Self {
            crt_sh_host,
            org_names,
            root_level,
            sort_output: cli_parameters.sort,
        })
    }

    fn extract_optional_env_var(
        vars: &HashMap<String, String>,
        var_name: &str,
    ) -> Option<String> {
        vars.get(var_name)
            .filter(|val| !val.is_empty())
            .map(|val| val.to_string())
    }
}

impl Configuration for ServiceConfiguration {
    fn crt_sh_host(&self) -> &Url {
        &self.crt_sh_host
    }

    fn org_names(&self) -> &[String] {
        &self.org_names
    }

    fn root_level(&self) -> usize {
        self.root_level
    }

    fn sort_output(&self) -> bool {
        self.sort_output
    }
}

#[cfg(test)]
mod service_configuration_tests {
    use super::*;

    #[test]
    fn builds_configuration_from_cli_and_env() {
        let cli = build_cli(&["Example Corp", "Other Inc"], 3, true);

        let config = ServiceConfiguration::new(
            &cli,
            env_vars(&[("CRT_SH_HOST", "http://localhost:4545")])
        ).unwrap();

        assert_eq!(&["Example Corp".to_string(), "Other Inc".to_string()], config.org_names());
        assert_eq!(3, config.root_level());
        assert!(config.sort_output());
        assert_eq!("http://localhost:4545/", config.crt_sh_host().as_str());
    }

    #[test]
    fn defaults_to_public_crt_sh_host() {
        let cli = build_cli(&["Example Corp"], 2, false);

        let config = ServiceConfiguration::new(&cli, env_vars(&[])).unwrap();

        assert_eq!("https://crt.sh/", config.crt_sh_host().as_str());
    }

    #[test]
    fn treats_empty_host_env_var_as_unset() {
        let cli = build_cli(&["Example Corp"], 2, false);

        let config = ServiceConfiguration::new(&cli, env_vars(&[("CRT_SH_HOST", "")])).unwrap();

        assert_eq!("https://crt.sh/", config.crt_sh_host().as_str());
    }

    #[test]
    fn trims_org_names_and_drops_blank_entries() {
        let cli = build_cli(&["  Example Corp ", "", "   ", "Other Inc"], 2, false);

        let config = ServiceConfiguration::new(&cli, env_vars(&[])).unwrap();

        assert_eq!(&["Example Corp".to_string(), "Other Inc".to_string()], config.org_names());
    }

    #[test]
    fn returns_error_if_no_org_names() {
        let cli = build_cli(&[], 2, false);

        assert_eq!(
            Err(ServiceConfigurationError::OrgNamesRequired),
            ServiceConfiguration::new(&cli, env_vars(&[]))
        );
    }

    #[test]
    fn returns_error_if_only_blank_org_names() {
        let cli = build_cli(&[" ", ""], 2, false);

        assert_eq!(
            Err(ServiceConfigurationError::OrgNamesRequired),
            ServiceConfiguration::new(&cli, env_vars(&[]))
        );
    }

    #[test]
    fn returns_error_if_root_level_is_zero() {
        let cli = build_cli(&["Example Corp"], 0, false);

        assert_eq!(
            Err(ServiceConfigurationError::InvalidRootLevel(0)),
            ServiceConfiguration::new(&cli, env_vars(&[]))
        );
    }

    #[test]
    fn returns_error_if_root_level_is_negative() {
        let cli = build_cli(&["Example Corp"], -2, false);

        assert_eq!(
            Err(ServiceConfigurationError::InvalidRootLevel(-2)),
            ServiceConfiguration::new(&cli, env_vars(&[]))
        );
    }

    #[test]
    fn returns_error_if_host_is_unparseable() {
        let cli = build_cli(&["Example Corp"], 2, false);

        assert_eq!(
            Err(ServiceConfigurationError::InvalidCrtShHost("not a url".into())),
            ServiceConfiguration::new(&cli, env_vars(&[("CRT_SH_HOST", "not a url")]))
        );
    }

    #[test]
    fn returns_error_if_host_cannot_be_a_base() {
        let cli = build_cli(&["Example Corp"], 2, false);

        assert_eq!(
            Err(ServiceConfigurationError::InvalidCrtShHost("mailto:x@y.zzz".into())),
            ServiceConfiguration::new(&cli, env_vars(&[("CRT_SH_HOST", "mailto:x@y.zzz")]))
        );
    }

    fn build_cli(org_names: &[&str], root_level: i64, sort: bool) -> Cli {
        Cli {
            org_names: org_names.iter().map(|name| name.to_string()).collect(),
            root_level,
            sort,
        }
    }

    fn env_vars(vars: &[(&str, &str)]) -> std::vec::IntoIter<(String, String)> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<(String, String)>>()
            .into_iter()
    }
}
