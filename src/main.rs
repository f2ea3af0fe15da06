use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use subnet_algebra::config::{Config, OutputFormat};
use subnet_algebra::input::read_block_list;
use subnet_algebra::output::{print_diff_csv, print_diff_json};

/// Console logging on stderr, used when `log4rs.yml` is missing.
fn init_fallback_logging() -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l}):5} {t} - {m}{n}",
        )))
        .build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if log4rs::init_file("log4rs.yml", Default::default()).is_err() {
        init_fallback_logging()?;
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env()?;
    let left = read_block_list(&config.left)?;
    let right = read_block_list(&config.right)?;

    let result = subnet_algebra::diff(Some(left.as_slice()), Some(right.as_slice()))?;
    log::info!(
        "Diff: {} left only, {} both, {} right only",
        result.left_only.len(),
        result.both.len(),
        result.right_only.len()
    );

    match config.format {
        OutputFormat::Csv => print_diff_csv(&result),
        OutputFormat::Json => print_diff_json(&result)?,
    }
    Ok(())
}
