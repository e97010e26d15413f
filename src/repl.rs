use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::{command::Command, list::List};

pub const PROMPT: &str = "CMD>> ";

pub const USAGE: &str = "\
<action> [data]
   a <data>    - add given integer data to the list
   r <index>   - remove data at given list index
   p           - prints current list
   h           - display help
   x           - exit program
";

/// Line-oriented command loop driving a single [`List`].
pub struct Repl<R, W> {
    input: R,
    output: W,
    list: List,
    prompt: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Repl {
            input,
            output,
            list: List::new(),
            prompt: true,
        }
    }

    /// Enables or disables the `CMD>> ` prompt.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn list(&self) -> &List {
        &self.list
    }

    /// Runs until `x` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.prompt {
                self.output.write_all(PROMPT.as_bytes())?;
                self.output.flush()?;
            }

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    info!("input closed, leaving with {} element(s)", self.list.len());
                    return Ok(());
                }
            };

            let line = match String::from_utf8(line) {
                Ok(line) => line,
                Err(err) => {
                    debug!("discarding non-UTF-8 line: {}", err);
                    continue;
                }
            };

            let cmd = match Command::parse(&line) {
                Ok(cmd) => cmd,
                Err(err) => {
                    debug!("discarding {:?}: {}", line, err);
                    continue;
                }
            };

            if cmd == Command::Exit {
                return Ok(());
            }

            self.execute(cmd)?;
        }
    }

    /// Reads one raw line with its terminator stripped, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();

        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }

        Ok(Some(line))
    }

    fn execute(&mut self, cmd: Command) -> io::Result<()> {
        let result = match cmd {
            Command::Append(value) => self.list.push(value),
            Command::Remove(index) => self.list.remove_at(i64::from(index)).map(drop),
            Command::Print => return self.list.print(&mut self.output),
            Command::Help => return self.output.write_all(USAGE.as_bytes()),
            Command::Exit => return Ok(()),
        };

        if let Err(err) = result {
            warn!("{:?} failed: {}", cmd, err);
            writeln!(self.output, "error: {}", err)?;
        }

        Ok(())
    }
}
