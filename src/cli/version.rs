//! `--version` / `--help` output.

/// Crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
headlines - search the news from your terminal

USAGE:
    headlines [--region <code>] [--query <text>]

OPTIONS:
    -r, --region <code>   Start with a region: us, gb, ca, au, in (default: us)
    -q, --query <text>    Start with search text
    -V, --version         Print version
    -h, --help            Print this help

ENVIRONMENT:
    HEADLINES_API_URL     Override the search endpoint
    HEADLINES_LOG         Log filter (e.g. debug); logs go to the data directory
";

pub fn handle_version_command() -> ! {
    println!("headlines {}", VERSION);
    std::process::exit(0)
}

pub fn handle_help_command() -> ! {
    print!("{}", USAGE);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_usage_mentions_every_region() {
        for region in crate::models::Region::ALL {
            assert!(USAGE.contains(region.code()));
        }
    }
}
