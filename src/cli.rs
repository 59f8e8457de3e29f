use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hairstyle-advisor")]
#[command(about = "Face-shape analysis and haircut recommendations from a photo", long_about = None)]
pub struct Cli {
    /// Analysis service base URL (overrides config and HAIRSTYLE_ADVISOR_URL)
    #[arg(long)]
    pub service_url: Option<String>,

    /// Config file (default: ~/.config/hairstyle-advisor/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings to the config file before starting
    #[arg(long)]
    pub save_config: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "hairstyle-advisor",
            "--service-url",
            "http://10.0.0.2:8000",
            "-v",
        ]);
        assert_eq!(cli.service_url.as_deref(), Some("http://10.0.0.2:8000"));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }
}
