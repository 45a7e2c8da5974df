//! Startup name-reveal animation.
//!
//! Frames are fully precomputed before playback and read-only during it; the
//! driver blocks on a fixed tick, replacing the previous frame on each step.
//! Frames go to stderr so the rendered document on stdout stays clean for
//! every output format.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::banner::Banner;

pub const TICK: Duration = Duration::from_millis(150);

/// One banner frame per character-prefix of `name`, shortest first: a name
/// of length L yields L + 1 frames, ending on the full name.
pub fn frames(banner: &Banner, name: &str, color: bool) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    (0..=chars.len())
        .map(|n| {
            let prefix: String = chars[..n].iter().collect();
            banner.render(&prefix, color)
        })
        .collect()
}

/// Plays the frames in order, one tick apiece, erasing each before the next.
/// Returns once the last frame has been shown and cleared.
pub fn play(frames: &[String]) -> anyhow::Result<()> {
    let mut err = io::stderr();
    for frame in frames {
        write!(err, "{frame}")?;
        err.flush()?;
        thread::sleep(TICK);
        erase(&mut err, frame.lines().count())?;
    }
    Ok(())
}

fn erase(err: &mut io::Stderr, height: usize) -> io::Result<()> {
    if height == 0 {
        return Ok(());
    }
    write!(err, "\r")?;
    if height > 1 {
        write!(err, "\x1b[{}A", height - 1)?;
    }
    write!(err, "\x1b[0J")?;
    err.flush()
}
