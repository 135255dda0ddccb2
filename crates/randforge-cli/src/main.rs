mod logging;
mod tui;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::debug;

use randforge_core::{ColorFormat, GenerationRequest, Mode, generate, seeded_rng};

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Generate(#[from] randforge_core::GenerateError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "randforge",
    version,
    about = "Random value generator",
    long_about = "Generates random numbers, floats, colors, strings, templated tokens and list \
                  picks. Without a subcommand an interactive text menu is started."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// How many values to generate.
    #[arg(
        long,
        global = true,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: u64,
    /// Seed for deterministic output; OS entropy when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Print results as a JSON array instead of one value per line.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Random integers within a range, honoring exclusions.
    Number(NumberArgs),
    /// Random floating point numbers.
    Float(FloatArgs),
    /// Random colors in hex, rgb or hsl notation.
    Color(ColorArgs),
    /// Random fixed-length strings from a named character class.
    String(StringArgs),
    /// Values rendered from a placeholder template.
    Custom(CustomArgs),
    /// Random picks from a comma-separated item list.
    List(ListArgs),
    /// Interactive text menu (the default when no subcommand is given).
    Tui,
}

#[derive(Args, Debug)]
struct NumberArgs {
    /// Minimum value (inclusive).
    #[arg(long, default_value_t = 1)]
    min: i64,
    /// Maximum value (inclusive).
    #[arg(long, default_value_t = 100)]
    max: i64,
    /// Values to exclude, comma-separated.
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<i64>,
}

#[derive(Args, Debug)]
struct FloatArgs {
    /// Minimum value (inclusive).
    #[arg(long, default_value_t = 0.0)]
    min: f64,
    /// Maximum value (inclusive).
    #[arg(long, default_value_t = 1.0)]
    max: f64,
    /// Decimal places in the rendered value.
    #[arg(long, default_value_t = 2)]
    decimals: usize,
}

#[derive(Args, Debug)]
struct ColorArgs {
    /// Output notation.
    #[arg(long, value_enum, default_value_t = ColorArg::Hex)]
    format: ColorArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Hex,
    Rgb,
    Hsl,
}

impl From<ColorArg> for ColorFormat {
    fn from(format: ColorArg) -> Self {
        match format {
            ColorArg::Hex => ColorFormat::Hex,
            ColorArg::Rgb => ColorFormat::Rgb,
            ColorArg::Hsl => ColorFormat::Hsl,
        }
    }
}

#[derive(Args, Debug)]
struct StringArgs {
    /// Length of each generated string.
    #[arg(long, default_value_t = 10)]
    length: usize,
    /// Character class: alphanumeric, alpha, numeric, lowercase, uppercase,
    /// hex, symbols or alphanumeric_symbols.
    #[arg(long, default_value = "alphanumeric")]
    pattern: String,
    /// Characters to exclude from the class.
    #[arg(long, default_value = "")]
    exclude_chars: String,
}

#[derive(Args, Debug)]
struct CustomArgs {
    /// Template with placeholders {d} {l} {u} {a} {x} {s} {w},
    /// e.g. "{u}{u}{u}-{d}{d}{d}".
    #[arg(long)]
    template: String,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Items to pick from, comma-separated.
    #[arg(long, value_delimiter = ',', required = true)]
    items: Vec<String>,
    /// Draw without repetition.
    #[arg(long, default_value_t = false)]
    unique: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut rng = seeded_rng(cli.seed);
    debug!(seed = ?cli.seed, "randomness source ready");

    let mode = match cli.command {
        None | Some(Command::Tui) => return tui::run(rng),
        Some(Command::Number(args)) => Mode::Number {
            min: args.min,
            max: args.max,
            exclude: args.exclude,
        },
        Some(Command::Float(args)) => Mode::Float {
            min: args.min,
            max: args.max,
            decimals: args.decimals,
        },
        Some(Command::Color(args)) => Mode::Color {
            format: args.format.into(),
        },
        Some(Command::String(args)) => Mode::String {
            length: args.length,
            pattern: args.pattern,
            exclude_chars: args.exclude_chars.chars().collect(),
        },
        Some(Command::Custom(args)) => Mode::Custom {
            template: args.template,
        },
        Some(Command::List(args)) => Mode::List {
            items: args.items,
            unique: args.unique,
        },
    };

    let request = GenerationRequest {
        mode,
        count: cli.count as usize,
    };
    let values = generate(&request, &mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string(&values)?);
    } else {
        for value in &values {
            println!("{value}");
        }
    }
    Ok(())
}
