//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use deck_core::Template;

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro-latest";
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Options for `deck-gen build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input JSON file(s): a structured article or an array of slides
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Deck title shown on the cover slide
    #[arg(short, long)]
    pub title: String,

    /// Cover subtitle
    #[arg(short, long)]
    pub subtitle: Option<String>,

    /// Visual template (modern, academic, minimal)
    #[arg(long, default_value = "modern")]
    pub template: Template,

    /// Generate slides from articles with the AI service instead of the extractor
    #[arg(long)]
    pub ai: bool,

    /// Append a quiz slide with a QR code for this link
    #[arg(short, long)]
    pub quiz_link: Option<String>,

    /// Output file or directory (default: name derived from the title)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub remote: RemoteConfig,
}

/// Settings for the remote text-generation and QR services.
#[derive(Args, Debug, Clone)]
pub struct RemoteConfig {
    /// API key for the text-generation service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Text-generation model
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    /// Base URL of the text-generation API
    #[arg(long, env = "GEMINI_ENDPOINT", default_value = DEFAULT_GEMINI_ENDPOINT)]
    pub gemini_endpoint: String,

    /// QR image service URL
    #[arg(long, env = "DECK_QR_ENDPOINT", default_value = DEFAULT_QR_ENDPOINT)]
    pub qr_endpoint: String,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "DECK_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// Consecutive AI failures before calls are skipped
    #[arg(long, default_value_t = 3)]
    pub breaker_threshold: u32,

    /// Seconds to skip AI calls after the failure threshold is reached
    #[arg(long, default_value_t = 60)]
    pub breaker_cooldown_secs: u64,

    /// Never contact the QR service; quiz links are shown as text
    #[arg(long)]
    pub offline: bool,
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn breaker_cooldown(&self) -> Duration {
        Duration::from_secs(self.breaker_cooldown_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        build: BuildArgs,
    }

    #[test]
    fn test_build_args_defaults() {
        let cli = TestCli::try_parse_from(["deck-gen", "article.json", "--title", "Weekly"]).unwrap();

        assert_eq!(cli.build.inputs, vec![PathBuf::from("article.json")]);
        assert_eq!(cli.build.template, Template::Modern);
        assert!(!cli.build.ai);
        assert_eq!(cli.build.remote.breaker_threshold, 3);
        assert_eq!(cli.build.remote.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_template_is_parsed() {
        let cli = TestCli::try_parse_from([
            "deck-gen",
            "a.json",
            "b.json",
            "-t",
            "Weekly",
            "--template",
            "Academic",
            "--quiz-link",
            "https://quiz.example",
        ])
        .unwrap();

        assert_eq!(cli.build.inputs.len(), 2);
        assert_eq!(cli.build.template, Template::Academic);
        assert_eq!(cli.build.quiz_link.as_deref(), Some("https://quiz.example"));
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        let result =
            TestCli::try_parse_from(["deck-gen", "a.json", "-t", "Weekly", "--template", "retro"]);
        assert!(result.is_err());
    }
}
