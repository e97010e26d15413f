use crate::error::ParseError;

/// One parsed line of the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Append(i32),
    Remove(i32),
    Print,
    Exit,
    Help,
}

impl Command {
    /// Parses `<action> [operand]`.
    ///
    /// The action is the first character of the first whitespace-separated
    /// token. An operand, when present, must be decimal digits only and fit
    /// an `i32`. Anything past the second token is ignored.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let mut tokens = line.split_whitespace();

        let action = tokens
            .next()
            .and_then(|tok| tok.chars().next())
            .ok_or(ParseError::Empty)?;

        let operand = tokens.next().map(parse_operand).transpose()?;

        let cmd = match action {
            'a' => Command::Append(operand.ok_or(ParseError::MissingOperand(action))?),
            'r' => Command::Remove(operand.ok_or(ParseError::MissingOperand(action))?),
            'p' => Command::Print,
            'x' => Command::Exit,
            _ => Command::Help,
        };

        Ok(cmd)
    }
}

fn parse_operand(tok: &str) -> Result<i32, ParseError> {
    if !tok.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::BadOperand(tok.to_owned()));
    }

    tok.parse()
        .map_err(|_| ParseError::BadOperand(tok.to_owned()))
}
