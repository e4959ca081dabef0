pub mod cli;
pub mod crt_sh;
pub mod data;
pub mod errors;
pub mod result;
pub mod root_domain;
pub mod service;
pub mod service_configuration;
pub mod ui;
