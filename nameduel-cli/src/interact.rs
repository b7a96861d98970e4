/// Blocking match resolution over the terminal.
///
/// The judge types `1` or `2`; anything else re-prompts. Only a closed
/// input stream ends the loop early, as a hard error — there is no further
/// input to wait for.
use std::io::{self, BufRead, Write};

use nameduel_core::Side;

const PROMPT: &str = "Choose your preferred name (1 or 2): ";

/// Read a choice from `input`, writing prompts to `output`.
///
/// Re-prompts until the judge types exactly `1` or `2` (surrounding
/// whitespace is ignored).
pub fn read_choice(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Side> {
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a choice was made",
            ));
        }

        match line.trim() {
            "1" => return Ok(Side::First),
            "2" => return Ok(Side::Second),
            _ => {}
        }
    }
}
