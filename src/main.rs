/*!
# Liahona - 365 Daily Lessons

Command-line front end for the lesson calendar and the family story store.

## Usage

```
liahona [OPTIONS] [COMMAND]

Commands:
  today       Show today's lesson and its family stories
  day         Show the lesson for a day of the year (1-365)
  date        Show the lesson for a date (format: YYYY-MM-DD or YYYYMMDD)
  yesterday   Show yesterday's lesson
  tomorrow    Show tomorrow's lesson
  share       Share a family story about a day's lesson
  stories     List family stories, newest first
  categories  Show how many days each category covers

Options:
  -v, --verbose                Print debug logs to stderr
      --log-format <FORMAT>    Log output format [default: text] [possible values: text, json]
```

## Configuration

- `LIAHONA_DIR`: Directory holding `stories.json` (defaults to "~/.local/share/liahona")
- `LIAHONA_YEAR`: Calendar year to generate (defaults to the current year)
- `RUST_LOG`: Log filter when `--verbose` is not given (defaults to "warn")
*/

use clap::Parser;
use liahona::calendar::CalendarGenerator;
use liahona::cli::CliArgs;
use liahona::config::Config;
use liahona::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use liahona::errors::AppResult;
use liahona::ops;
use liahona::stories::{JsonFileStorage, StoryStore};
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool, log_format: &str) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if log_format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Loads configuration, builds the calendar once, and runs the subcommand.
fn run(args: &CliArgs) -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let calendar = CalendarGenerator::new(config.year()).generate()?;
    info!(year = calendar.year(), "Lesson calendar ready");

    let store = StoryStore::new(JsonFileStorage::new(config.stories_path()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ops::run(args.command(), &calendar, &store, &mut out)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose, &args.log_format);

    let correlation_id = uuid::Uuid::new_v4();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = span.enter();
    debug!("CLI arguments: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
