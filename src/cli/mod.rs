//! Command-line interface definitions.
//!
//! Parsing only: the subcommands are carried out by the `ops` module.

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT,
};
use crate::stories::Generation;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Command-line arguments shared by every subcommand.
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION, author, version, long_about = None)]
pub struct CliArgs {
    /// Print debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show today's lesson and its family stories
    Today {
        /// Print the lesson as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the lesson for a day of the year (1-365)
    Day {
        day_index: u16,

        /// Print the lesson as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the lesson for a date (format: YYYY-MM-DD or YYYYMMDD)
    Date {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,

        /// Print the lesson as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show yesterday's lesson
    Yesterday {
        /// Print the lesson as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show tomorrow's lesson
    Tomorrow {
        /// Print the lesson as JSON
        #[arg(long)]
        json: bool,
    },

    /// Share a family story about a day's lesson
    Share {
        /// Day of the year the story is about
        #[arg(short, long)]
        day: u16,

        /// Name of the person sharing
        #[arg(short, long)]
        author: String,

        /// grandparent, parent, child, grandchild or other
        #[arg(short, long, default_value = "parent")]
        generation: Generation,

        /// The story itself
        content: String,
    },

    /// List family stories, newest first
    Stories {
        /// Only stories for this day of the year
        #[arg(short, long)]
        day: Option<u16>,
    },

    /// Show how many days each category covers
    Categories,
}

impl CliArgs {
    /// The subcommand to run; no subcommand means today's lesson.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Today { json: false })
    }
}

/// Parses a date in YYYY-MM-DD or YYYYMMDD format.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
        .map_err(|e| format!("Invalid date format '{}': {}", date_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["liahona"]);
        assert!(!args.verbose);
        assert_eq!(args.log_format, "text");
        assert!(args.command.is_none());
        assert_eq!(args.command(), Command::Today { json: false });
    }

    #[test]
    fn test_help_uses_app_metadata() {
        let cmd = <CliArgs as clap::CommandFactory>::command();
        assert_eq!(cmd.get_name(), APP_NAME);
        assert_eq!(
            cmd.get_about().map(|about| about.to_string()),
            Some(APP_DESCRIPTION.to_string())
        );
    }

    #[test]
    fn test_verbose_flag_is_global() {
        let args = CliArgs::parse_from(vec!["liahona", "day", "3", "-v"]);
        assert!(args.verbose);

        let args = CliArgs::parse_from(vec!["liahona", "--verbose", "categories"]);
        assert!(args.verbose);
        assert_eq!(args.command(), Command::Categories);
    }

    #[test]
    fn test_log_format_values() {
        let args = CliArgs::parse_from(vec!["liahona", "--log-format", "json"]);
        assert_eq!(args.log_format, "json");

        let result = CliArgs::try_parse_from(vec!["liahona", "--log-format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_day_command() {
        let args = CliArgs::parse_from(vec!["liahona", "day", "42", "--json"]);
        assert_eq!(
            args.command(),
            Command::Day {
                day_index: 42,
                json: true
            }
        );
    }

    #[test]
    fn test_date_command_formats() {
        let args = CliArgs::parse_from(vec!["liahona", "date", "2023-01-15"]);
        match args.command() {
            Command::Date { date, .. } => {
                assert_eq!(date.year(), 2023);
                assert_eq!(date.month(), 1);
                assert_eq!(date.day(), 15);
            }
            other => panic!("Expected Date command, got {:?}", other),
        }

        let args = CliArgs::parse_from(vec!["liahona", "date", "20230115"]);
        match args.command() {
            Command::Date { date, .. } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
            }
            other => panic!("Expected Date command, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result = CliArgs::try_parse_from(vec!["liahona", "date", "not-a-date"]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid date format"));
    }

    #[test]
    fn test_share_command() {
        let args = CliArgs::parse_from(vec![
            "liahona",
            "share",
            "--day",
            "5",
            "--author",
            "Grandma",
            "--generation",
            "grandparent",
            "Lovely lesson",
        ]);
        assert_eq!(
            args.command(),
            Command::Share {
                day: 5,
                author: "Grandma".to_string(),
                generation: Generation::Grandparent,
                content: "Lovely lesson".to_string(),
            }
        );
    }

    #[test]
    fn test_share_defaults_to_parent_generation() {
        let args = CliArgs::parse_from(vec!["liahona", "share", "-d", "1", "-a", "Sam", "Hi"]);
        match args.command() {
            Command::Share { generation, .. } => assert_eq!(generation, Generation::Parent),
            other => panic!("Expected Share command, got {:?}", other),
        }
    }

    #[test]
    fn test_share_rejects_unknown_generation() {
        let result = CliArgs::try_parse_from(vec![
            "liahona", "share", "-d", "1", "-a", "Sam", "-g", "cousin", "Hi",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_neighbouring_day_commands() {
        let args = CliArgs::parse_from(vec!["liahona", "yesterday"]);
        assert_eq!(args.command(), Command::Yesterday { json: false });

        let args = CliArgs::parse_from(vec!["liahona", "tomorrow", "--json"]);
        assert_eq!(args.command(), Command::Tomorrow { json: true });
    }

    #[test]
    fn test_stories_command() {
        let args = CliArgs::parse_from(vec!["liahona", "stories"]);
        assert_eq!(args.command(), Command::Stories { day: None });

        let args = CliArgs::parse_from(vec!["liahona", "stories", "--day", "9"]);
        assert_eq!(args.command(), Command::Stories { day: Some(9) });
    }
}
