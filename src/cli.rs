use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "card",
    version,
    about = "Prints out a professional contact card in different formats"
)]
pub struct Cli {
    /// Suppress ANSI color in the name banner
    #[arg(long)]
    pub no_color: bool,

    /// Output debugging information
    #[arg(long)]
    pub debug: bool,

    /// Output json
    #[arg(long, group = "format")]
    pub json: bool,

    /// Output html
    #[arg(long, group = "format")]
    pub html: bool,

    /// Output text (default)
    #[arg(long, group = "format")]
    pub text: bool,

    /// Suppress the startup name animation
    #[arg(long)]
    pub no_animation: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputType {
    Json,
    Html,
    Text,
}

/// Flags resolved once per run and passed read-only into the renderers.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub output: OutputType,
    pub color: bool,
    pub animation: bool,
    pub debug: bool,
}

impl RenderOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        let output = if cli.json {
            OutputType::Json
        } else if cli.html {
            OutputType::Html
        } else {
            OutputType::Text
        };
        Self {
            output,
            color: !cli.no_color,
            animation: !cli.no_animation,
            debug: cli.debug,
        }
    }
}
