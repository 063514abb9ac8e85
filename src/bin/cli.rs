//! apidoc-mapper CLI
//!
//! Scrapes the API documentation once and writes `map.json`.

use std::path::PathBuf;

use apidoc_mapper::{
    error::Result,
    models::Config,
    pipeline::{self, MapOptions},
    utils::{HttpTransport, ParserBackend},
};
use clap::Parser;

/// apidoc-mapper - Stack Exchange API documentation mapper
#[derive(Parser, Debug)]
#[command(
    name = "apidoc-mapper",
    version,
    about = "Parses the documentation for the Stack Exchange API"
)]
struct Cli {
    /// Use a local cache to store content
    #[arg(long)]
    use_cache: bool,

    /// Directory to store cached content
    #[arg(long, value_name = "DIRECTORY", default_value = "cache")]
    cache_dir: PathBuf,

    /// Directory to store the generated map
    #[arg(long, value_name = "DIRECTORY", default_value = ".")]
    output_dir: PathBuf,

    /// Indent the generated JSON
    #[arg(long)]
    prettyprint: bool,

    /// API version used in the generated map
    #[arg(long, value_name = "VERSION")]
    api_version: String,

    /// HTML parser backend
    #[arg(long, value_enum)]
    parser: ParserBackend,

    /// Documentation base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        None => Config::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.fetcher.base_url = base_url;
    }
    config.validate()?;

    let options = MapOptions {
        api_version: cli.api_version,
        cache_dir: cli.use_cache.then_some(cli.cache_dir),
        output_dir: cli.output_dir,
        pretty: cli.prettyprint,
        parser: cli.parser,
    };

    let transport = HttpTransport::from_config(&config.fetcher)?;
    let summary = pipeline::run_mapper(transport, &config, &options)?;

    log::info!("Done! {} methods mapped.", summary.method_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_documented_layout() {
        let cli = Cli::try_parse_from(["apidoc-mapper", "--api-version", "2.2", "--parser", "html5"])
            .unwrap();
        assert!(!cli.use_cache);
        assert_eq!(cli.cache_dir, PathBuf::from("cache"));
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(!cli.prettyprint);
        assert_eq!(cli.parser, ParserBackend::Html5);
    }

    #[test]
    fn api_version_is_required() {
        let err = Cli::try_parse_from(["apidoc-mapper", "--parser", "strict"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parser_is_required() {
        let err = Cli::try_parse_from(["apidoc-mapper", "--api-version", "2.2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_parser_rejected() {
        let err = Cli::try_parse_from([
            "apidoc-mapper",
            "--api-version",
            "2.2",
            "--parser",
            "lxml",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
