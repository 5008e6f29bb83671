//! Text rendering of a sequence.
//!
//! Convention: every element, the last one included, is followed by a single
//! space. `render_line` adds the label in front and a `\n` at the end, so a
//! rendered line always reads `"<label>: e1 e2 ... en \n"`.

use std::fmt::Display;
use std::io::Write;

use crate::error::Result;

pub const SEPARATOR: &str = " ";

/// Writes every element of `seq` and returns how many were written.
pub fn render<W, I>(out: &mut W, seq: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut written = 0;
    for item in seq {
        write!(out, "{}{}", item, SEPARATOR)?;
        written += 1;
    }
    Ok(written)
}

pub fn render_line<W, I>(out: &mut W, label: &str, seq: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    write!(out, "{}: ", label)?;
    let written = render(out, seq)?;
    writeln!(out)?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use std::io;

    fn rendered<I>(seq: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut buf = Vec::new();
        render(&mut buf, seq).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_trailing_space() {
        assert_eq!(rendered([1, 4, 9]), "1 4 9 ");
    }

    #[test]
    fn test_render_empty_writes_nothing() {
        assert_eq!(rendered(Vec::<i32>::new()), "");
    }

    #[test]
    fn test_render_floats_use_display() {
        assert_eq!(rendered([6.25, 0.5]), "6.25 0.5 ");
    }

    #[test]
    fn test_render_line() {
        let mut buf = Vec::new();
        render_line(&mut buf, "Even Squared Numbers", [4, 16]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Even Squared Numbers: 4 16 \n");
    }

    #[test]
    fn test_render_line_empty_sequence() {
        let mut buf = Vec::new();
        let written = render_line(&mut buf, "Empty", std::iter::empty::<u8>()).unwrap();
        assert_eq!(written, 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "Empty: \n");
    }

    #[test]
    fn test_render_counts_elements_in_one_pass() {
        let pulls = std::cell::Cell::new(0);
        let seq = [1, 4, 9].into_iter().inspect(|_| pulls.set(pulls.get() + 1));

        let mut buf = Vec::new();
        assert_eq!(render(&mut buf, seq).unwrap(), 3);
        assert_eq!(pulls.get(), 3);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_surfaces_as_output_error() {
        let result = render_line(&mut ClosedPipe, "Squared Numbers", [1, 4]);
        assert!(matches!(result, Err(PipelineError::Output(_))));
    }
}
