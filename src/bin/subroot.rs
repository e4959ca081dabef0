use subroot::cli::Cli;
use subroot::crt_sh::CrtShClient;
use subroot::errors::AppError;
use subroot::service::Service;
use subroot::service_configuration::{Configuration, ServiceConfiguration};
use subroot::ui;
use std::process::exit;

fn main() {
    let cli = Cli::parse_normalized();

    match ServiceConfiguration::new(&cli, std::env::vars()) {
        Ok(config) => {
            let client = CrtShClient::new(config.crt_sh_host());

            match Service::run(&config, &client) {
                Ok(root_domains) => {
                    if !root_domains.is_empty() {
                        println!("{}", ui::display_root_domains(&root_domains, config.sort_output()));
                    }
                    exit(0)
                },
                Err(e) => {
                    eprintln!("{e}");
                    exit(e.exit_code());
                }
            }
        },
        Err(e) => {
            let e = AppError::from(e);
            eprintln!("{e}");
            exit(e.exit_code());
        }
    }
}
