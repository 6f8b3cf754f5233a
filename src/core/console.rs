use crate::utils::error::Result;
use std::io::{Stderr, Stdout, Write};

/// Transcript sink: progress and results on `out`, failure diagnostics on `err`.
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn error_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.err, "{}", text)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streams_are_kept_apart() {
        let mut console = Console::new(Vec::new(), Vec::new());
        console.line("hello").unwrap();
        console.blank().unwrap();
        console.error_line("oops").unwrap();

        let (out, err) = console.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "hello\n\n");
        assert_eq!(String::from_utf8(err).unwrap(), "oops\n");
    }
}
