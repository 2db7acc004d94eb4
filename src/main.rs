//! termpane - demo driver for the rendering core
//!
//! Declares a handful of regions (from `~/.termpane/config.toml` or a
//! built-in layout), fills them with text and runs a small main loop so the
//! buffer, border, geometry and refresh behaviour can be watched live.
//!
//! # Quick Start
//!
//! ```text
//! termpane                 # Built-in layout, 256 colours
//! termpane -t              # Truecolor
//! termpane -c layout.toml  # Regions from a config file
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Tab / Shift+Tab | Focus next/previous region |
//! | Arrow keys | Move focused region |
//! | m | Toggle maximise |
//! | h | Hide/show focused region |
//! | r | Redraw everything |
//! | q / Esc | Quit |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use termpane::buffer::Content;
use termpane::colour::ColourMode;
use termpane::config::{Config, RegionConfig};
use termpane::event::EventKind;
use termpane::geometry::{CrosstermSize, Direction};
use termpane::output::CrosstermTerminal;
use termpane::wm::Screen;

/// Command line options
#[derive(Default)]
struct Args {
    /// Explicit configuration file
    config_path: Option<PathBuf>,
    /// Force 24-bit colour
    truecolor: bool,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("termpane {}", VERSION);
}

fn print_help() {
    eprintln!("termpane {} - terminal region rendering demo", VERSION);
    eprintln!();
    eprintln!("Usage: termpane [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <PATH>   Load regions from PATH");
    eprintln!("  -t, --truecolor       Use 24-bit colour");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Tab / Shift+Tab       Focus next/previous region");
    eprintln!("  Arrow                 Move focused region");
    eprintln!("  m                     Toggle maximise");
    eprintln!("  h                     Hide/show focused region");
    eprintln!("  r                     Redraw everything");
    eprintln!("  q, Esc                Quit");
    eprintln!();
    eprintln!("Configuration: ~/.termpane/config.toml");
    eprintln!("Log file:      ~/.termpane/termpane.log");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing config path".to_string());
                }
                parsed.config_path = Some(PathBuf::from(&args[i]));
            }
            "-t" | "--truecolor" => {
                parsed.truecolor = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn init_logging(config: &Config) {
    let log_path = Config::log_path();
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .try_init();
    }
}

/// Layout used when the configuration declares no regions
fn default_regions() -> Vec<RegionConfig> {
    let region = |name: &str, x, y, width, height| RegionConfig {
        name: name.to_string(),
        group: Some("main".to_string()),
        x,
        y,
        width,
        height,
        border: Some(true),
        title: name.to_string(),
        ..RegionConfig::default()
    };

    vec![
        RegionConfig {
            foreground: "white".to_string(),
            background: "#005f87".to_string(),
            style: vec!["bold".to_string()],
            group: None,
            border: Some(false),
            title: String::new(),
            ..region("header", 1, 1, 60, 1)
        },
        RegionConfig {
            foreground: "light_green".to_string(),
            caption: "1/2".to_string(),
            ..region("log", 1, 3, 36, 10)
        },
        RegionConfig {
            foreground: "yellow".to_string(),
            background: "236".to_string(),
            ..region("status", 30, 8, 30, 8)
        },
    ]
}

/// Text shown inside a region: its name, geometry and focus state.
fn describe(screen: &Screen<CrosstermTerminal>, name: &str) -> Content {
    let interface = screen.interface(name);
    let geometry = screen.geometry(name);
    let focused = screen.focused().as_deref() == Some(name);

    let lines = vec![
        format!("{}{}", if focused { "▶ " } else { "  " }, name),
        format!(
            "x={} y={} {}x{} z={}",
            geometry.x(),
            geometry.y(),
            geometry.width(),
            geometry.height(),
            geometry.zindex()
        ),
        if geometry.is_maximised() {
            "maximised".to_string()
        } else {
            String::new()
        },
        "Tab focus · arrows move · m maximise".to_string(),
        "h hide · r redraw · q quit".to_string(),
    ];
    Content::from_lines(&lines, &interface.colour, interface.style)
}

/// Replace the content of every region and redraw them all.
fn redraw(screen: &mut Screen<CrosstermTerminal>) -> anyhow::Result<()> {
    for name in screen.interfaces().registered() {
        let content = describe(screen, &name);
        screen.add(&name, content);
    }
    screen.refresh().all()?;
    Ok(())
}

fn run(screen: &mut Screen<CrosstermTerminal>) -> anyhow::Result<()> {
    redraw(screen)?;

    loop {
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let focused = screen.focused();
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Tab => {
                        screen.focus_mut().next();
                        redraw(screen)?;
                    }
                    KeyCode::BackTab => {
                        screen.focus_mut().previous();
                        redraw(screen)?;
                    }
                    KeyCode::Char('r') => {
                        screen.writer_mut().clear()?;
                        redraw(screen)?;
                    }
                    code => {
                        if let Some(name) = focused {
                            handle_region_key(screen, &name, code)?;
                        }
                    }
                }
            }
            Event::Resize(cols, rows) => {
                info!("Terminal resized to {}x{}", cols, rows);
                screen.resize();
                screen.writer_mut().clear()?;
                redraw(screen)?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Keys acting on the focused region.
fn handle_region_key(
    screen: &mut Screen<CrosstermTerminal>,
    name: &str,
    code: KeyCode,
) -> anyhow::Result<()> {
    let direction = match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    };

    let changed = match (code, direction) {
        (_, Some(direction)) => screen.move_view(name, direction, 1)?,
        (KeyCode::Char('m'), _) => {
            if screen.geometry(name).is_maximised() {
                screen.unmaximise(name)?
            } else {
                screen.maximise(name)?
            }
        }
        (KeyCode::Char('h'), _) => {
            screen.toggle(name)?;
            false
        }
        _ => false,
    };

    if changed {
        redraw(screen)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let mut config = match &args.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if args.truecolor {
        config.colour_mode = ColourMode::Truecolor;
    }
    if config.regions.is_empty() {
        config.regions = default_regions();
    }

    init_logging(&config);
    info!("termpane {} starting...", VERSION);
    info!("Colour mode: {:?}", config.colour_mode);

    let size = CrosstermSize::new(config.screen.width, config.screen.height);
    let mut screen = Screen::new(CrosstermTerminal::new(), size, config.colour_mode);
    config.register_regions(&mut screen)?;
    info!("Terminal size: {}x{}", screen.size().0, screen.size().1);

    for direction in Direction::ALL {
        screen
            .events_mut()
            .bind(EventKind::Move(direction), |event| info!("{} {}", event.kind, event.name));
    }
    screen
        .events_mut()
        .bind(EventKind::Maximise, |event| info!("{} {}", event.kind, event.name));
    screen
        .events_mut()
        .bind(EventKind::Unmaximise, |event| info!("{} {}", event.kind, event.name));

    screen.writer_mut().init()?;
    let result = run(&mut screen);
    screen.writer_mut().cleanup()?;

    if let Err(e) = &result {
        error!("Exited with error: {}", e);
    }
    info!("termpane exiting");
    result
}
