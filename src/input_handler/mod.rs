//! Console prompts. Reading and writing go through `BufRead`/`Write` so the
//! prompts can run against stdin/stdout or an in-memory script.

pub mod input;

use std::io::{BufRead, Write};

use log::debug;

use crate::game::towers::Towers;

pub use input::{parse_disk_count, InputError, StackInput};

/// Reads one line, trimmed. End of input is treated as the player leaving.
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut input = String::new();
    match reader.read_line(&mut input)? {
        0 => Err(InputError::UserExit),
        _ => Ok(input.trim().to_string()),
    }
}

/// Asks for the number of disks until an acceptable count is entered.
pub fn prompt_disk_count<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    min: u32,
    max: u32,
) -> Result<u32, InputError> {
    if min > max {
        return Err(InputError::EmptyRange { min, max });
    }

    writeln!(writer, "\nHow many disks do you want to play with?")?;
    writer.flush()?;

    loop {
        let raw = read_trimmed_line(reader)?;
        match parse_disk_count(&raw, min, max) {
            Ok(count) => return Ok(count),
            Err(error) => {
                debug!("rejected disk count {:?}: {}", raw, error);
                writeln!(writer, "{}", error)?;
                writer.flush()?;
            }
        }
    }
}

/// Asks for a stack until the player names one of the towers' stacks.
/// Returns the stack index, or `UserExit` if the player quits.
pub fn prompt_stack<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    towers: &Towers,
) -> Result<usize, InputError> {
    let options = towers.selection_options();

    loop {
        writeln!(writer, "{} ({}):", message, options)?;
        writer.flush()?;

        let raw = read_trimmed_line(reader)?;
        match raw.parse::<StackInput>() {
            Ok(StackInput::Quit) => return Err(InputError::UserExit),
            Ok(StackInput::Key(key)) => match towers.index_for_key(key) {
                Some(index) => return Ok(index),
                None => debug!("no stack for key {:?}", key),
            },
            Err(error) => debug!("{}", error),
        }
    }
}
