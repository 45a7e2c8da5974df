use anyhow::anyhow;
use figlet_rs::FIGfont;

pub const GREEN: &str = "\x1b[32m";
pub const RESET: &str = "\x1b[0m";

/// ASCII-art name renderer over the embedded standard FIGfont. Glyph blocks
/// are concatenated left to right at full width; output never carries a
/// trailing newline, callers own composition.
pub struct Banner {
    font: FIGfont,
}

impl Banner {
    pub fn new() -> anyhow::Result<Self> {
        let font =
            FIGfont::standard().map_err(|e| anyhow!("load embedded banner font: {e}"))?;
        Ok(Self { font })
    }

    /// Same name + same color flag always produce the same string. An empty
    /// name renders as an empty banner, with no escape codes either way.
    pub fn render(&self, name: &str, color: bool) -> String {
        if name.is_empty() {
            return String::new();
        }
        let figure = match self.font.convert(name) {
            Some(figure) => figure.to_string(),
            None => return String::new(),
        };
        let figure = figure.trim_end_matches('\n');
        if color {
            format!("{GREEN}{figure}{RESET}")
        } else {
            figure.to_string()
        }
    }
}
