use std::path::PathBuf;

use boyos::{AgeError, AgeRequest, Locale};
use boyos::svg::Theme;
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Svg,
}

#[derive(Debug, Parser)]
#[command(
    name = "boyos",
    version,
    about = "Age calculator with Bengali calendars, legal rights and vaccination schedule"
)]
pub struct Config {
    /// Birth date (YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS])
    pub birth: String,

    /// Compute the age as of this date instead of now
    #[arg(long, value_name = "DATE")]
    pub on: Option<String>,

    /// Output language: en or bn
    #[arg(long, env = "BOYOS_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Output format: text, json or svg
    #[arg(long, value_enum, env = "BOYOS_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Card theme for svg output: dark or light
    #[arg(long, env = "BOYOS_THEME", default_value = "dark")]
    pub theme: Theme,

    /// Write to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn request(&self) -> Result<AgeRequest, AgeError> {
        AgeRequest::parse(&self.birth, self.on.as_deref(), self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["boyos", "1992-06-14", "--format", "text"]).unwrap();
        assert_eq!(config.birth, "1992-06-14");
        assert_eq!(config.on, None);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.verbose, 0);
    }

    #[test]
    fn all_options() {
        let config = Config::try_parse_from([
            "boyos", "1992-06-14", "--on", "2024-03-10", "--locale", "bn", "--format", "svg",
            "--theme", "light", "--out", "card.svg", "-vv",
        ])
        .unwrap();
        assert_eq!(config.locale, Locale::Bn);
        assert_eq!(config.format, OutputFormat::Svg);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.out, Some(PathBuf::from("card.svg")));
        assert_eq!(config.verbose, 2);

        let request = config.request().unwrap();
        assert_eq!(request.locale, Locale::Bn);
        assert!(request.reference.is_some());
    }

    #[test]
    fn every_option_has_help() {
        use clap::CommandFactory;

        let command = Config::command();
        for arg in command.get_arguments() {
            let id = arg.get_id().as_str();
            if id == "help" || id == "version" {
                continue;
            }
            assert!(arg.get_help().is_some(), "--{id} has no help text");
        }
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::try_parse_from(["boyos", "1992-06-14", "--locale", "fr"]).is_err());
        assert!(Config::try_parse_from(["boyos", "1992-06-14", "--format", "xml"]).is_err());
        assert!(Config::try_parse_from(["boyos"]).is_err());
    }

    #[test]
    fn bad_dates_fail_at_request_time() {
        let config = Config::try_parse_from(["boyos", "yesterday", "--locale", "en"]).unwrap();
        assert!(matches!(config.request(), Err(AgeError::InvalidInput(_))));
    }
}
