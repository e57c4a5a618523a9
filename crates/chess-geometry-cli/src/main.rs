use chess_geometry::{find_all_next_positions, Piece};
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "chess-geometry")]
#[command(about = "List the squares a piece can reach on an empty board")]
struct Cli {
    /// Piece to move (king, queen, rook, bishop, knight, or pawn)
    piece: String,
    /// Starting square label (e.g., D5)
    square: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let piece = match Piece::from_name(&cli.piece) {
        Some(piece) => piece,
        None => {
            eprintln!(
                "unknown piece '{}': expected king, queen, rook, bishop, knight, or pawn",
                cli.piece
            );
            return ExitCode::FAILURE;
        }
    };

    match find_all_next_positions(piece, &cli.square) {
        Ok(labels) => {
            for label in labels {
                println!("{}", label);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
