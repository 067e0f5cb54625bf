// Stepwise: step-by-step algorithm visualizer in the terminal

use std::error::Error;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use stepwise::catalog::{build_trace, Visualizer};
use stepwise::config::{PlaybackConfig, DEFAULT_TARGET};
use stepwise::generators::{BracketMatching, ListReversal, LongestUniqueRun, ShortestSumWindow};
use stepwise::playback::{PlaybackController, SystemClock};
use stepwise::trace::TraceGenerator;
use stepwise::ui::{panes::StatePane, App};

#[derive(Debug, Parser)]
#[command(
    name = "stepwise",
    version,
    about = "Step through classic algorithms one action at a time"
)]
struct Cli {
    /// Visualizer to open (see --list)
    visualizer: Option<String>,

    /// Raw input; defaults to the selected preset
    input: Option<String>,

    /// Preset index to start from when no input is given
    #[arg(long, default_value_t = 0)]
    preset: usize,

    /// Initial playback speed multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Auto-advance interval at speed 1.0, in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Target sum for the shortest-sum visualizer
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    target: i64,

    /// Print the trace as JSON instead of opening the UI
    #[arg(long)]
    dump: bool,

    /// List the available visualizers and their presets
    #[arg(long)]
    list: bool,

    /// Write logs to this file (UI mode logs nothing otherwise)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.list {
        print_catalog();
        return Ok(());
    }

    init_logging(cli.log.as_deref(), cli.dump)?;

    let Some(slug) = cli.visualizer.as_deref() else {
        eprintln!("Error: No visualizer given");
        eprintln!();
        eprintln!("Usage: stepwise <visualizer> [input]");
        eprintln!();
        print_catalog();
        std::process::exit(1);
    };

    let visualizer = exit_on_input_error(Visualizer::from_slug(slug));
    let (raw_input, preset_index) = match cli.input.clone() {
        Some(raw) => (raw, None),
        None => (
            exit_on_input_error(visualizer.preset(cli.preset)).to_string(),
            Some(cli.preset),
        ),
    };

    let mut config = PlaybackConfig {
        initial_speed: cli.speed,
        ..PlaybackConfig::default()
    };
    if let Some(ms) = cli.interval_ms {
        config.base_interval = Duration::from_millis(ms.max(1));
    }

    let session = Session {
        visualizer,
        raw_input,
        preset_index,
        dump: cli.dump,
        config,
    };

    match visualizer {
        Visualizer::Reversal => session.launch(ListReversal),
        Visualizer::Brackets => session.launch(BracketMatching),
        Visualizer::LongestUnique => session.launch(LongestUniqueRun),
        Visualizer::ShortestSum => {
            let generator = exit_on_input_error(ShortestSumWindow::new(cli.target));
            session.launch(generator)
        }
    }
}

/// Everything resolved from the command line
struct Session {
    visualizer: Visualizer,
    raw_input: String,
    preset_index: Option<usize>,
    dump: bool,
    config: PlaybackConfig,
}

impl Session {
    fn launch<G>(self, generator: G) -> Result<(), Box<dyn Error>>
    where
        G: TraceGenerator,
        G::Payload: StatePane,
    {
        let trace = exit_on_input_error(build_trace(&generator, &self.raw_input));
        tracing::info!(
            visualizer = self.visualizer.slug(),
            steps = trace.len(),
            "trace generated"
        );

        if self.dump {
            println!("{}", trace.to_json()?);
            return Ok(());
        }

        let mut controller = PlaybackController::new(trace, SystemClock, self.config.base_interval);
        exit_on_input_error(controller.set_speed(self.config.initial_speed));

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create and run app
        let mut app = App::new(
            generator,
            self.visualizer,
            controller,
            self.raw_input,
            self.preset_index,
            self.config.poll_interval,
        );
        let res = app.run(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Err(err) = res {
            eprintln!("Error: {:?}", err);
        }

        Ok(())
    }
}

/// Input errors are the learner's to fix: print them and exit non-zero.
fn exit_on_input_error<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_catalog() {
    println!("Visualizers:");
    for visualizer in Visualizer::ALL {
        println!(
            "  {:<16} {} ({})",
            visualizer.slug(),
            visualizer.title(),
            visualizer.family()
        );
        for (index, preset) in visualizer.presets().iter().enumerate() {
            let shown = if preset.is_empty() { "(empty)" } else { preset };
            println!("      --preset {}  {}", index, shown);
        }
    }
}

/// Logs go to `--log` if given, to stderr in dump mode, nowhere otherwise:
/// stderr output would corrupt the alternate screen.
fn init_logging(log: Option<&Path>, dump: bool) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if dump {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}
