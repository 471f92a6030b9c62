//! Interactive front end for lzwpack.
//!
//! Prompts for an operation, a source path, and a destination name,
//! runs one fresh codec per round, and offers to repeat. All looping
//! and prompting lives here; the library exposes one-shot operations.

use anyhow::Result;
use lzwpack::{compress_file, decompress_file, LzwError};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        match prompt(&mut input, "COMPRESS or DECOMPRESS?")?.to_uppercase().as_str() {
            "COMPRESS" => {
                let source = prompt(&mut input, "Please enter full path to file you wish to compress")?;
                let dest = prompt(&mut input, "Please give name for compressed file")?;
                println!("Compressing file...");
                match compress_file(&source, &dest) {
                    Ok(report) => {
                        println!("Text file successfully compressed!");
                        println!("We compressed your file by {:.0}%", report.ratio() * 100.0);
                    }
                    Err(e) => report_error(&e),
                }
            }
            "DECOMPRESS" => {
                let source = prompt(&mut input, "Please enter full path of file you wish to decompress")?;
                let dest = prompt(&mut input, "Please enter desired name of decompressed file")?;
                println!("Decompressing file...");
                match decompress_file(&source, &dest) {
                    Ok(()) => println!("Text file successfully decompressed!"),
                    Err(e) => report_error(&e),
                }
            }
            _ => println!("Sorry, invalid command, please try again!"),
        }

        match prompt(&mut input, "Would you like to compress/decompress another file? YES or NO")?
            .to_uppercase()
            .as_str()
        {
            "YES" => continue,
            "NO" => {
                println!("Exiting program...");
                break;
            }
            _ => {
                println!("Sorry, invalid input, exiting program...");
                break;
            }
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String> {
    println!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Explain a codec failure in terms the user can act on.
fn report_error(e: &LzwError) {
    match e {
        LzwError::CapacityExceeded => {
            println!("Too many unique strings found in text, map not large enough");
        }
        LzwError::InvalidCode(_) | LzwError::UnsupportedCharacter(_) => {
            println!("The file could not be processed: {e}");
        }
        LzwError::Io(_) => println!("File error: {e}"),
    }
}
