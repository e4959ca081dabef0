use clap::Parser;
use std::ffi::OsString;

/// subroot finds root domains on crt.sh using organization names
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Org names to use, comma separated (short form: -on)
    #[arg(long, value_delimiter = ',')]
    pub org_names: Vec<String>,
    /// Root level of domain, e.g. 2 means *.domain.com (short form: -rl)
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub root_level: i64,
    /// Print the root domains in ascending order
    #[arg(long)]
    pub sort: bool,
}

impl Cli {
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

const SINGLE_DASH_FLAGS: [(&str, &str); 4] = [
    ("-on", "--org-names"),
    ("-org-names", "--org-names"),
    ("-rl", "--root-level"),
    ("-root-level", "--root-level"),
];


/// Rewrites the single-dash flag spellings (`-on`, `-rl`, ...) into the double-dash forms
/// clap understands. The first item is treated as the binary name and never rewritten.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
    where I: IntoIterator<Item = OsString> {
    let mut args = args.into_iter();

    let mut normalized: Vec<OsString> = args.next().into_iter().collect();

    normalized.extend(args.map(|arg| {
        match arg.to_str() {
            Some(value) => OsString::from(rewrite_flag(value)),
            None => arg,
        }
    }));

    normalized
}

fn rewrite_flag(arg: &str) -> String {
    let (flag, value) = match arg.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (arg, None),
    };

    match SINGLE_DASH_FLAGS.iter().find(|(short, _)| *short == flag) {
        Some((_, long)) => match value {
            Some(value) => format!("{long}={value}"),
            None => long.to_string(),
        },
        None => arg.into(),
    }
}
