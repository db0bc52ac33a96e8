use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use bitshift::literal::{parse_i16, parse_i32};
use bitshift::words::WordError;
use bitshift::{high_byte, low_byte, read_words, unsigned_shift_right};

#[derive(Parser)]
#[command(about = "Logical right shift and byte extraction on two's-complement integers")]
struct App {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Shift a 32-bit value right, filling the top with zeros
    Shr {
        #[arg(value_parser = parse_i32, allow_hyphen_values = true)]
        value: i32,
        /// Only the low 5 bits are used
        #[arg(value_parser = parse_i32, allow_hyphen_values = true)]
        amount: i32,
    },
    /// Low byte of a 16-bit value
    Low {
        #[arg(value_parser = parse_i16, allow_hyphen_values = true)]
        value: i16,
    },
    /// High byte of a 16-bit value
    High {
        #[arg(value_parser = parse_i16, allow_hyphen_values = true)]
        value: i16,
    },
    /// Split every big-endian 16-bit word of a file into its two bytes
    Split { path: PathBuf },
}

#[derive(Error, Debug)]
enum AppError {
    #[error("I/O Error")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Words(#[from] WordError),
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let app = App::parse();
    match app.command {
        Command::Shr { value, amount } => {
            let shifted = unsigned_shift_right(value, amount);
            info!("{} >>> {} = {}", value, amount, shifted);
            println!("0x{:08x} ({})", shifted, shifted);
        }
        Command::Low { value } => {
            let byte = low_byte(value);
            println!("0x{:02x} ({})", byte, byte);
        }
        Command::High { value } => {
            let byte = high_byte(value);
            println!("0x{:02x} ({})", byte, byte);
        }
        Command::Split { path } => {
            let words = read_words(File::open(&path)?)?;
            for word in &words {
                println!(
                    "{:08x}  {:04x}  hi 0x{:02x} ({:4})  lo 0x{:02x} ({:4})",
                    word.offset, word.value, word.high, word.high, word.low, word.low
                );
            }
            info!("{} words from {}", words.len(), path.display());
        }
    }

    Ok(())
}
