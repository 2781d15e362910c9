use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use huewheel::config::Config;
use huewheel::draw::{self, Color, Hsv, MarkerStyle};
use huewheel::input::{ColorPicker, TouchPhase};
use huewheel::util;
use huewheel::wheel::WheelRaster;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "huewheel")]
#[command(version, about = "Hue/saturation color wheel picker")]
struct Cli {
    /// Read settings from this file instead of ~/.config/huewheel/config.toml
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the wheel (with the selector) to a PNG file
    Render {
        /// Output PNG path
        #[arg(long, short = 'o', default_value = "colorwheel.png")]
        output: PathBuf,

        /// Place the selector on this color (name or #rrggbb)
        #[arg(long)]
        color: Option<String>,

        /// Fill behind the wheel (name or #rrggbb)
        #[arg(long)]
        background: Option<String>,

        /// Leave the selector ring out
        #[arg(long)]
        no_marker: bool,
    },

    /// Touch the widget at X,Y (widget-local pixels) and print the selected color
    Pick {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Also render the result to this PNG file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print where a color sits on the wheel
    Locate {
        /// Color name or #rrggbb
        color: String,
    },

    /// Replay touch events ("press|move|release|cancel X Y" per line) from a file or stdin
    Replay {
        /// Event file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
    },

    /// Write a documented default config file
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            output,
            color,
            background,
            no_marker,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let mut picker = ColorPicker::with_color(config.selector_size(), config.initial_color());
            if let Some(color) = color {
                picker.set_color(util::parse_color(&color)?.to_hsv());
            }
            let background = match background {
                Some(spec) => Some(util::parse_color(&spec)?),
                None => config.preview_background(),
            };
            let mut style = config.marker_style();
            style.visible &= !no_marker;

            render_to(&picker, &style, background, &output)?;
        }
        Command::Pick { x, y, output } => {
            let config = load_config(cli.config.as_deref())?;
            let mut picker = ColorPicker::with_color(config.selector_size(), config.initial_color());
            picker.set_on_color_selected(|color| println!("{}", describe(color)));
            picker.on_touch_press(x, y);
            picker.on_touch_release(x, y);
            log::debug!(
                "Selector offset: ({:.1}, {:.1})",
                picker.selector.x,
                picker.selector.y
            );

            if let Some(output) = output {
                render_to(
                    &picker,
                    &config.marker_style(),
                    config.preview_background(),
                    &output,
                )?;
            }
        }
        Command::Locate { color } => {
            let config = load_config(cli.config.as_deref())?;
            let hsv = util::parse_color(&color)?.to_hsv();
            let mut picker = ColorPicker::new(config.selector_size());
            picker.set_color(hsv);

            let (ox, oy) = picker.marker_origin();
            println!(
                "offset: ({:.0}, {:.0})",
                picker.selector.x, picker.selector.y
            );
            println!("marker: ({ox:.0}, {oy:.0})");
            println!("shown:  {}", describe(picker.selected_color()));
        }
        Command::Replay { file } => {
            let config = load_config(cli.config.as_deref())?;
            let mut picker = ColorPicker::with_color(config.selector_size(), config.initial_color());
            picker.set_on_color_selected(|color| println!("{}", describe(color)));
            replay(&mut picker, file.as_deref())?;
        }
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Created {}", path.display());
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn render_to(
    picker: &ColorPicker,
    style: &MarkerStyle,
    background: Option<Color>,
    output: &Path,
) -> Result<()> {
    let surface = draw::render_picker(picker, WheelRaster::shared(), style, background)
        .context("Failed to render color wheel")?;
    draw::write_png(&surface, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn describe(color: Hsv) -> String {
    format!(
        "{} hue={:.1} saturation={:.3} ({})",
        color.to_color().to_hex(),
        color.h,
        color.s,
        util::hsv_to_name(&color)
    )
}

fn replay(picker: &mut ColorPicker, file: Option<&Path>) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) if path != Path::new("-") => Box::new(BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        _ => Box::new(BufReader::new(std::io::stdin())),
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read touch events")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (phase, x, y) =
            parse_event(line).with_context(|| format!("Invalid event on line {}", index + 1))?;
        picker.handle_touch(phase, x, y);
    }

    Ok(())
}

fn parse_event(line: &str) -> Result<(TouchPhase, f64, f64)> {
    let mut parts = line.split_whitespace();
    let phase = parts.next().ok_or_else(|| anyhow!("missing phase"))?;
    let phase = TouchPhase::from_name(phase).ok_or_else(|| anyhow!("unknown phase '{phase}'"))?;

    let mut coordinate = |axis: &str| -> Result<f64> {
        let raw = parts.next().unwrap_or("0");
        raw.parse::<f64>()
            .with_context(|| format!("bad {axis} coordinate '{raw}'"))
    };
    let x = coordinate("x")?;
    let y = coordinate("y")?;

    Ok((phase, x, y))
}
