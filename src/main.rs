use anyhow::Context;
use clap::{ArgAction, Parser};
use shapepick::config::Config;
use shapepick::draw::{self, DrawRecorder, PaletteColor, ShapeKind};
use shapepick::input::{SelectionController, SelectionEvent};
use shapepick::script::{self, ScriptCommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "shapepick")]
#[command(version, about = "Pick a shape and a color, render the colored shape")]
struct Cli {
    /// Palette color to draw with (see --list)
    #[arg(long, short = 'c', value_name = "COLOR")]
    color: Option<String>,

    /// Shape to draw: circle, square, or triangle
    #[arg(long, short = 's', value_name = "SHAPE")]
    shape: Option<String>,

    /// PNG file to write (defaults to the configured output path)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print draw calls instead of writing an image
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,

    /// Read selection commands from a file ("-" for stdin)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["color", "shape"])]
    script: Option<PathBuf>,

    /// List the available colors and shapes
    #[arg(long, action = ArgAction::SetTrue)]
    list: bool,

    /// Use this config file instead of ~/.config/shapepick/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

/// Where a render command sends its frame.
struct Output<'a> {
    config: &'a Config,
    default_path: PathBuf,
    trace: bool,
}

impl Output<'_> {
    fn render(
        &self,
        controller: &mut SelectionController,
        path: Option<&Path>,
    ) -> anyhow::Result<()> {
        if self.trace {
            if let Some(path) = path {
                log::debug!("Trace mode, not writing {}", path.display());
            }
            let mut recorder = DrawRecorder::new();
            if !controller.render(&mut recorder) {
                println!("nothing to draw");
            }
            for call in recorder.calls() {
                println!("{call}");
            }
            return Ok(());
        }

        let path = path.unwrap_or(&self.default_path);
        draw::render_to_png(
            controller,
            self.config.canvas.width,
            self.config.canvas.height,
            self.config.canvas.background.to_color(),
            path,
        )
        .with_context(|| format!("Failed to render {}", path.display()))
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    match verbose {
        0 => {
            builder.filter_level(log::LevelFilter::Info);
            builder.parse_default_env();
        }
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn print_choices() {
    println!("Colors:");
    for color in PaletteColor::ALL {
        println!("  {color}");
    }
    println!("Shapes:");
    for kind in ShapeKind::ALL {
        println!("  {kind}");
    }
}

fn read_script(path: &Path) -> anyhow::Result<Vec<ScriptCommand>> {
    let commands = if path == Path::new("-") {
        script::parse_script(io::stdin().lock())?
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open script {}", path.display()))?;
        script::parse_script(BufReader::new(file))?
    };
    log::debug!("Parsed {} script commands", commands.len());
    Ok(commands)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list {
        print_choices();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let output = Output {
        default_path: cli.output.clone().unwrap_or_else(|| config.output.path.clone()),
        config: &config,
        trace: cli.trace,
    };

    let mut controller = SelectionController::new();

    if let Some(script_path) = &cli.script {
        let commands = read_script(script_path)?;
        for command in &commands {
            match command {
                ScriptCommand::Select(event) => {
                    controller.handle_event(event);
                    // A redraw request paints immediately; selection changes wait for `render`
                    if *event == SelectionEvent::RedrawRequested && controller.needs_redraw {
                        output.render(&mut controller, None)?;
                    }
                }
                ScriptCommand::Render(path) => output.render(&mut controller, path.as_deref())?,
            }
        }
        return Ok(());
    }

    let mut events = Vec::new();
    if let Some(color) = cli.color {
        events.push(SelectionEvent::ColorNamed(color));
    }
    if let Some(shape) = cli.shape {
        events.push(SelectionEvent::ShapeNamed(shape));
    }
    controller.handle_events(&events);

    output.render(&mut controller, None)
}
