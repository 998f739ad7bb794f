use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::env;
use std::io::{stdout, BufWriter};
use std::sync::OnceLock;

use skyclock::countdown::{Countdown, Midnight, NewYear};
use skyclock::frame_loop::FrameLoop;
use skyclock::platform::{FRAME_RATE, SystemClock, TermInput};
use skyclock::render::{TermCanvas, Viewport};
use skyclock::sim::SimConfig;

static BG_COLOR: OnceLock<(u8, u8, u8)> = OnceLock::new();

pub fn get_bg_color() -> (u8, u8, u8) {
    *BG_COLOR.get().unwrap_or(&(0, 0, 0))
}

struct Options {
    seed: Option<u64>,
    glow: bool,
}

fn print_usage() {
    eprintln!("skyclock - Terminal fireworks with a countdown");
    eprintln!();
    eprintln!("Usage: skyclock [COUNTDOWN] [OPTIONS]");
    eprintln!();
    eprintln!("Countdowns:");
    eprintln!("  new-year  Months, days and time until 1 January (default)");
    eprintln!("  midnight  Time until the next local midnight");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --bg-color RRGGBB  Set background color as hex (e.g., --bg-color 1a1b26)");
    eprintln!("  --seed N           Seed the show for a reproducible display");
    eprintln!("  --no-glow          Draw particles without their halo");
    eprintln!();
    eprintln!("Press 'q', ESC, Ctrl+C or click the red X to exit");
    eprintln!("Set RUST_LOG=debug and redirect stderr to trace the show");
}

/// Puts the terminal back however the show ends.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All), EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen, DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
    }
}

fn run_show<D: Countdown>(countdown: D, options: &Options) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let viewport = Viewport::from_terminal(cols, rows);

    let config = SimConfig {
        glow: options.glow,
        ..SimConfig::default()
    };
    let rng = match options.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut show = FrameLoop::new(viewport, config, countdown, get_bg_color(), rng);

    let guard = TerminalGuard::enter()?;
    let stdout = BufWriter::with_capacity(1024 * 64, stdout());
    let mut canvas = TermCanvas::new(viewport, stdout);
    let mut input = TermInput::new(viewport);
    let mut clock = SystemClock::new(FRAME_RATE);

    let result = show.run(&mut canvas, &mut input, &mut clock);
    drop(canvas);
    drop(guard);

    let frames = result?;
    log::info!("rendered {} frames", frames);
    Ok(())
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;

    Some((r, g, b))
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let mut countdown_name = "new-year";
    let mut bg_color: Option<(u8, u8, u8)> = None;
    let mut options = Options {
        seed: None,
        glow: true,
    };

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bg-color" => {
                if i + 1 < args.len() {
                    if let Some(color) = parse_hex_color(&args[i + 1]) {
                        bg_color = Some(color);
                        i += 2;
                    } else {
                        eprintln!("Invalid hex color: {}", args[i + 1]);
                        eprintln!("Expected format: RRGGBB (e.g., 1a1b26)");
                        std::process::exit(1);
                    }
                } else {
                    eprintln!("--bg-color requires a hex color value");
                    std::process::exit(1);
                }
            }
            "--seed" => match args.get(i + 1).and_then(|s| s.parse::<u64>().ok()) {
                Some(seed) => {
                    options.seed = Some(seed);
                    i += 2;
                }
                None => {
                    eprintln!("--seed requires an unsigned integer");
                    std::process::exit(1);
                }
            },
            "--no-glow" => {
                options.glow = false;
                i += 1;
            }
            "help" | "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            arg => {
                if !arg.starts_with('-') {
                    countdown_name = arg;
                    i += 1;
                } else {
                    eprintln!("Unknown option: {}", arg);
                    eprintln!();
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
    }

    // Set background color if provided
    if let Some(color) = bg_color {
        let _ = BG_COLOR.set(color);
    }

    log::info!("countdown={} seed={:?} glow={}", countdown_name, options.seed, options.glow);

    match countdown_name {
        "new-year" | "newyear" => run_show(NewYear, &options),
        "midnight" => run_show(Midnight, &options),
        _ => {
            eprintln!("Unknown countdown: {}", countdown_name);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("1a1b26"), Some((0x1a, 0x1b, 0x26)));
        assert_eq!(parse_hex_color("#FF0080"), Some((255, 0, 128)));
        assert_eq!(parse_hex_color("12345"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn test_parse_hex_color_rejects_non_ascii() {
        // Six bytes, but 'é' straddles the first channel boundary
        assert_eq!(parse_hex_color("aé123"), None);
        assert_eq!(parse_hex_color("#12é45"), None);
    }

    #[test]
    fn test_default_background_is_black() {
        assert_eq!(get_bg_color(), (0, 0, 0));
    }
}
