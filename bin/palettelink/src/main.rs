//! Command line access to palettelink: turn share links into CSS and inspect
//! the color space registry.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use palettelink::share::{load_from_str, QUERY_PARAM};
use palettelink::{compact, stylesheet, Components, Space};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "palettelink", version, about = "CSS palettes from share links")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the stylesheet for a share string or a full share URL.
    Css {
        /// A compact share string, or a URL carrying one (or a legacy fragment).
        input: String,
        /// Query parameter holding the share string.
        #[arg(long, default_value = QUERY_PARAM)]
        param: String,
    },
    /// Decode a share string and print its patterns.
    Decode {
        /// A compact share string.
        input: String,
    },
    /// Decode and re-encode a share string, normalizing it.
    Normalize {
        /// A compact share string.
        input: String,
    },
    /// Print the components, ranges and defaults of a color space.
    Space {
        /// CSS name of the space, e.g. `oklch`.
        name: String,
    },
    /// Format three component values as CSS.
    Format {
        /// CSS name of the space, e.g. `hsl`.
        space: String,
        /// The three component values, in declared order.
        #[arg(num_args = 3, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_space(name: &str) -> Result<Space> {
    name.parse::<Space>()
        .with_context(|| format!("supported spaces: {}", space_names()))
}

fn space_names() -> String {
    Space::ALL.map(|space| space.name()).join(", ")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Css { input, param } => {
            let patterns = if input.contains("://") {
                load_from_str(&input, &param).0
            } else {
                compact::decode(&input)
            };
            println!("{}", stylesheet(&patterns));
        }
        Command::Decode { input } => {
            for pattern in compact::decode(&input) {
                println!(
                    "{}\t{}\t{}\t{}\tbase {}{}",
                    pattern.id,
                    pattern.name,
                    pattern.space,
                    pattern.css_color(),
                    pattern.base_modifier,
                    if pattern.is_dark() { "\tdark" } else { "" }
                );
            }
        }
        Command::Normalize { input } => {
            println!("{}", compact::encode(&compact::decode(&input)));
        }
        Command::Space { name } => {
            let space = parse_space(&name)?;
            let defaults = space.defaults();
            println!(
                "{} (code {}, {})",
                space,
                space.code(),
                space.group().label()
            );
            for (range, default) in space.components().iter().zip(defaults.iter()) {
                println!(
                    "  {}  {:<12} {} ..= {} step {}{}  default {}",
                    range.key,
                    range.label,
                    range.min,
                    range.max,
                    range.step,
                    range.unit.map(|u| format!(" {u}")).unwrap_or_default(),
                    default
                );
            }
        }
        Command::Format { space, values } => {
            let space = parse_space(&space)?;
            let [c0, c1, c2] = values[..] else {
                bail!("expected 3 values, got {}", values.len());
            };
            let values = Components(c0, c1, c2);
            println!("{}", space.format(&values));
            if space.is_dark(&values) {
                tracing::info!("color is dark");
            }
        }
    }

    Ok(())
}
