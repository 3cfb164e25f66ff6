//! Command-line front end for the diagram pipeline.
//!
//! Reads notation text from a file argument or stdin, runs the requested
//! pipeline, and prints a text preview plus a placement summary to stdout.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use board_sketch::errors::SketchError;
use board_sketch::grid::notation::{intersections, squares};
use board_sketch::grid::placements::PlacementSet;
use board_sketch::hexes::banding::{pattern, Palette};
use board_sketch::hexes::cube_coords::{hex_coords, HexLayout};
use board_sketch::render::contract::{RenderConfig, Renderer};
use board_sketch::render::text_preview::TextPreview;
use board_sketch::replay::hex_game::replay_hex;
use board_sketch::replay::rect_game::{replay_rect, ReplayOptions};

const USAGE: &str = "usage: board_sketch <command> [args] [file]
commands:
  grid [file]                     parse Intersection-mode grid notation
  squares [file]                  parse Square-mode grid notation
  replay <rows> <cols> [file]     replay a rectangular move list
  hexreplay <size> <corner> [file]  replay a hexagonal move list
  hex [file]                      cube coordinates for a hex-hex board
  hexsq [file]                    cube coordinates for a square-like hex board";

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), SketchError> {
    let command = args.first().map(String::as_str).unwrap_or("help");
    match command {
        "grid" => {
            let text = read_input(args.get(1))?;
            show_board(intersections(&text)?)
        }
        "squares" => {
            let text = read_input(args.get(1))?;
            show_board(squares(&text)?)
        }
        "replay" => {
            let n_rows = parse_arg(args.get(1), "rows")?;
            let n_cols = parse_arg(args.get(2), "cols")?;
            let text = read_input(args.get(3))?;
            let moves: Vec<&str> = text.split_whitespace().collect();

            let snapshot = replay_rect(n_rows, n_cols, &moves, &ReplayOptions::default())?;
            println!("{}", snapshot.to_grid_string());
            println!();
            show_board(intersections(&snapshot.to_grid_string())?)
        }
        "hexreplay" => {
            let size = parse_arg(args.get(1), "size")?;
            let corner = args.get(2).ok_or_else(|| {
                SketchError::InvalidArgument("missing corner coordinate".to_owned())
            })?;
            let text = read_input(args.get(3))?;
            let moves: Vec<&str> = text.split_whitespace().collect();

            let snapshot = replay_hex(size, &moves, corner, &ReplayOptions::default())?;
            println!("{}", snapshot.to_grid_string());
            Ok(())
        }
        "hex" | "hexsq" => {
            let layout = if command == "hex" {
                HexLayout::Natural
            } else {
                HexLayout::SquareLike
            };
            let text = read_input(args.get(1))?;
            let cells = hex_coords(&text, layout);
            let fills = pattern(&cells, &Palette::Earth);

            let mut preview = TextPreview::new();
            preview.draw_hexboard(&cells, &fills, &RenderConfig::default())?;
            print!("{}", preview.output());
            println!("{} cells, {} fills", cells.len(), fills.len());
            Ok(())
        }
        _ => {
            eprintln!("{USAGE}");
            Ok(())
        }
    }
}

fn show_board(board: PlacementSet) -> Result<(), SketchError> {
    let mut preview = TextPreview::new();
    preview.draw_board(&board, &RenderConfig::default())?;
    print!("{}", preview.output());

    println!("{} rows x {} cols ({:?})", board.n_rows, board.n_cols, board.mode);
    for (color, coords) in board.stones.iter() {
        println!("{}: {} stones", color.name(), coords.len());
    }
    if !board.labels.is_empty() {
        println!("{} labels", board.labels.len());
    }
    if !board.markers.is_empty() {
        println!("{} markers", board.markers.len());
    }
    if !board.stacks.is_empty() {
        println!("{} stacks", board.stacks.len());
    }
    Ok(())
}

fn read_input(path: Option<&String>) -> Result<String, SketchError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn parse_arg(arg: Option<&String>, name: &str) -> Result<usize, SketchError> {
    let raw = arg
        .ok_or_else(|| SketchError::InvalidArgument(format!("missing {name}")))?;
    raw.parse()
        .map_err(|_| SketchError::InvalidArgument(format!("{name} must be a number, got '{raw}'")))
}
