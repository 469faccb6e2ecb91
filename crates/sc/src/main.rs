//! Command‑line entry point for the `sc` tool.
//!
//! Provides subcommands for Hilbert curve lookups in both directions, the
//! spatial bit codec, and rendering the curve to an image.

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colornames::Color;
use image::Rgba;
use scodec::Point;

/// CLI command implementations.
mod cmd;
/// Rendering helpers shared by the CLI.
mod map;

use crate::map::{MapPalette, StrokeOptions};

/// Grid side used when `-n` is not given.
const DEFAULT_SIDE: u32 = 64;

/// Parse a named or hex color into an `Rgba` value (alpha defaults to 0xff).
///
/// Supports CSS color names via `colornames`, short/long hex (RGB/RRGGBB),
/// and optional alpha (RGBA/RRGGBBAA) with or without a leading `#`.
fn parse_rgba_color(input: &str) -> Result<Rgba<u8>, String> {
    /// Decode the hex forms; `None` when `hex` is not one of them.
    fn parse_hex_rgba(hex: &str) -> Option<Rgba<u8>> {
        let raw = hex.trim_start_matches('#');
        if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |idx: usize| u8::from_str_radix(&raw[idx..=idx], 16).ok().map(|v| v * 17);
        let pair = |idx: usize| u8::from_str_radix(&raw[idx..idx + 2], 16).ok();

        let [r, g, b, a] = match raw.len() {
            3 => [nibble(0)?, nibble(1)?, nibble(2)?, 0xff],
            4 => [nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?],
            6 => [pair(0)?, pair(2)?, pair(4)?, 0xff],
            8 => [pair(0)?, pair(2)?, pair(4)?, pair(6)?],
            _ => return None,
        };
        Some(Rgba([r, g, b, a]))
    }

    let trimmed = input.trim();
    if let Some(rgba) = parse_hex_rgba(trimmed) {
        return Ok(rgba);
    }

    let color: Color = trimmed.try_into().map_err(|_| {
        format!(
            "invalid color '{input}': use a named color or hex (RGB/RRGGBB with optional alpha, leading '#' optional)"
        )
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgba([red, green, blue, 0xff]))
}

#[derive(Parser)]
#[command(name = "sc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, global = true, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `sc` tool.
enum Commands {
    #[command(about = "Map a cell (X, Y) to its distance along the curve")]
    /// Coordinate to distance.
    Xy2d {
        #[arg(short = 'n', long = "order", value_name = "SIDE", default_value_t = DEFAULT_SIDE, help = "Grid side length (power of two)")]
        /// Grid side length.
        side: u32,

        #[arg(help = "Column")]
        /// Column.
        x: u32,

        #[arg(help = "Row")]
        /// Row.
        y: u32,
    },

    #[command(about = "Map a distance along the curve to its cell")]
    /// Distance to coordinate.
    D2xy {
        #[arg(short = 'n', long = "order", value_name = "SIDE", default_value_t = DEFAULT_SIDE, help = "Grid side length (power of two)")]
        /// Grid side length.
        side: u32,

        #[arg(help = "Distance along the curve")]
        /// Distance along the curve.
        distance: u32,
    },

    #[command(about = "Encode text as the grid cells of its set bits")]
    /// Encode a block of data into cells.
    Encode {
        #[arg(short = 'n', long = "order", value_name = "SIDE", default_value_t = DEFAULT_SIDE, help = "Grid side length (power of two)")]
        /// Grid side length.
        side: u32,

        #[arg(help = "Data to encode (UTF-8 text)")]
        /// Data to encode.
        data: String,
    },

    #[command(about = "Decode X,Y cells back into bytes (reads stdin when no cells are given)")]
    /// Decode cells into a block of data.
    Decode {
        #[arg(short = 'n', long = "order", value_name = "SIDE", default_value_t = DEFAULT_SIDE, help = "Grid side length (power of two)")]
        /// Grid side length.
        side: u32,

        #[arg(long = "len", value_name = "BYTES", help = "Block length in bytes (default: shortest that fits)")]
        /// Output block length in bytes.
        len: Option<usize>,

        #[arg(long = "hex", default_value_t = false, help = "Always print the block as hex")]
        /// Print hex even when the block is valid UTF-8.
        hex: bool,

        #[arg(value_name = "X,Y", help = "Cells to decode")]
        /// Cells to decode.
        cells: Vec<Point>,
    },

    #[command(about = "Print the distance of every cell as a table")]
    /// Print the full distance table.
    Grid {
        #[arg(short = 'n', long = "order", value_name = "SIDE", default_value_t = 8, help = "Grid side length (power of two)")]
        /// Grid side length.
        side: u32,
    },

    #[command(about = "Print the base iterator (index -> quadrant bits) table")]
    /// Print the base iterator table.
    Iterator {
        #[arg(help = "Number of rows")]
        /// Number of rows to print.
        count: u32,
    },

    #[command(about = "Render the curve to a PNG, optionally marking encoded data")]
    /// Render a map of the curve.
    Map {
        #[arg(short = 'n', long = "order", value_name = "SIDE", default_value_t = 16, help = "Grid side length (power of two)")]
        /// Grid side length.
        side: u32,

        #[arg(short = 's', long = "size", default_value_t = 512, help = "Square image size in pixels")]
        /// Image size in pixels (square output).
        size: u32,

        #[arg(
            short = 'w',
            long = "line-width",
            value_name = "PIXELS",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Line width in pixels for the curve stroke"
        )]
        /// Stroke width for the rendered curve.
        line_width: u32,

        #[arg(
            long = "fg",
            visible_alias = "foreground",
            value_parser = parse_rgba_color,
            default_value = "#8080ff",
            value_name = "HEX",
            help = "Foreground color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
        )]
        /// Stroke color for the curve.
        foreground: Rgba<u8>,

        #[arg(
            long = "bg",
            visible_alias = "background",
            value_parser = parse_rgba_color,
            default_value = "#ffffff",
            value_name = "HEX",
            help = "Background color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
        )]
        /// Background color for the map.
        background: Rgba<u8>,

        #[arg(
            long = "marker",
            value_parser = parse_rgba_color,
            default_value = "#e41a1c",
            value_name = "COLOR",
            help = "Color for cells marked by --data"
        )]
        /// Marker color for encoded cells.
        marker: Rgba<u8>,

        #[arg(long = "data", help = "Encode DATA and mark its cells on the map")]
        /// Optional data to encode and overlay.
        data: Option<String>,

        #[arg(help = "Output PNG file path")]
        /// Output file path.
        output: PathBuf,
    },
}

/// Handle the `xy2d` subcommand.
fn handle_xy2d(side: u32, x: u32, y: u32, verbosity: u8) -> Result<()> {
    let report = cmd::xy2d(side, x, y)?;
    if verbosity > 0 {
        eprintln!("Computing {side}x{side} hilbert distance @ x: {x} y: {y}");
        for step in &report.steps {
            eprintln!(
                "iteration s: {}\trx: {}\try: {}\td: {}",
                step.scale, step.rx, step.ry, step.distance
            );
        }
    }
    println!("{}", report.distance);
    Ok(())
}

/// Handle the `encode` subcommand.
fn handle_encode(side: u32, data: &str, verbosity: u8) -> Result<()> {
    let report = cmd::encode(side, data.as_bytes())?;
    if verbosity > 0 {
        eprintln!(
            "Encoding {} bytes onto a {side}x{side} grid ({} bits)",
            data.len(),
            report.capacity
        );
    }
    if report.dropped_bits > 0 {
        eprintln!(
            "warning: input exceeds the grid capacity; dropped the {} leading bits",
            report.dropped_bits
        );
    }
    for cell in &report.cells {
        println!("{cell}");
    }
    Ok(())
}

/// Handle the `decode` subcommand.
fn handle_decode(
    side: u32,
    len: Option<usize>,
    hex: bool,
    cells: Vec<Point>,
    verbosity: u8,
) -> Result<()> {
    let cells = if cells.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading cells from stdin")?;
        cmd::parse_cells(&text)?
    } else {
        cells
    };
    if verbosity > 0 {
        eprintln!("Decoding {} cells from a {side}x{side} grid", cells.len());
    }
    let block = cmd::decode(side, &cells, len)?;
    println!("{}", cmd::render_bytes(&block, hex));
    Ok(())
}

/// Handle the `map` subcommand.
fn handle_map(
    options: cmd::MapOptions<'_>,
    output: &Path,
    verbosity: u8,
) -> Result<()> {
    let side = options.side;
    let image = cmd::map(options)?;
    image
        .save(output)
        .with_context(|| format!("writing {}", output.display()))?;
    if verbosity > 0 {
        eprintln!("Rendered {side}x{side} curve to {}", output.display());
    }
    println!("OK!");
    Ok(())
}

/// Dispatch the selected subcommand.
fn run(cli: Cli) -> Result<()> {
    let verbosity = cli.v;
    match cli.command {
        Commands::Xy2d { side, x, y } => handle_xy2d(side, x, y, verbosity),
        Commands::D2xy { side, distance } => {
            let p = cmd::d2xy(side, distance)?;
            println!("{} {}", p.x, p.y);
            Ok(())
        }
        Commands::Encode { side, data } => handle_encode(side, &data, verbosity),
        Commands::Decode {
            side,
            len,
            hex,
            cells,
        } => handle_decode(side, len, hex, cells, verbosity),
        Commands::Grid { side } => {
            print!("{}", cmd::grid(side)?);
            Ok(())
        }
        Commands::Iterator { count } => {
            for (i, rx, ry) in cmd::iterator(count) {
                println!("{i} {rx} {ry}");
            }
            Ok(())
        }
        Commands::Map {
            side,
            size,
            line_width,
            foreground,
            background,
            marker,
            data,
            output,
        } => handle_map(
            cmd::MapOptions {
                size,
                side,
                stroke: StrokeOptions {
                    line_width,
                    palette: MapPalette {
                        foreground,
                        background,
                        marker,
                    },
                },
                data: data.as_deref().map(str::as_bytes),
            },
            &output,
            verbosity,
        ),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        process::exit(1);
    }
}
