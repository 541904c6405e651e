use crate::core::greeting::bar;
use crate::core::status::baz;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Writes the greeting line to `out` and returns the status the process should exit with.
///
/// Unlike [`foo`], this never terminates the process.
pub fn emit<W: Write>(out: &mut W) -> Result<i32> {
    let greeting = bar();
    tracing::debug!("Writing greeting ({} bytes)", greeting.len());

    writeln!(out, "{}", greeting)?;
    out.flush()?;

    let status = baz();
    tracing::debug!("Exit status: {}", status);
    Ok(status)
}

/// Prints the greeting to stdout and exits the process with [`baz`].
///
/// A failed write is logged; the exit status is always [`baz`].
pub fn foo() -> ! {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if let Err(e) = emit(&mut handle) {
        tracing::error!("❌ Failed to write greeting: {}", e);
    }

    std::process::exit(baz())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::SUCCESS_STATUS;
    use crate::utils::error::CakeError;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_writes_greeting_line() {
        let mut buf = Vec::new();
        let status = emit(&mut buf).unwrap();

        assert_eq!(buf, b"Hello, world!\n");
        assert_eq!(status, SUCCESS_STATUS);
    }

    #[test]
    fn test_emit_reports_write_failure() {
        let err = emit(&mut BrokenPipe).unwrap_err();

        assert!(matches!(err, CakeError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
