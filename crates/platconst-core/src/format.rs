//! Single-line wire format.
//!
//! Records are emitted as one JSON object with `", "` between members and
//! `": "` between key and value:
//!
//! ```text
//! {"statOffset": 48, "statSize": 144, "O_RDONLY": 0, ..., "MAP_SHARED": 1}
//! ```
//!
//! The spacing is part of the contract with existing consumers, so it is
//! produced by a dedicated [`serde_json::ser::Formatter`] rather than the
//! compact or pretty printers.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::error::{ConstantsError, ConstantsResult};
use crate::record::PlatformConstants;

/// JSON formatter that writes a flat object on one line with spaced
/// separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedLineFormatter;

impl Formatter for SpacedLineFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

impl PlatformConstants {
    /// Render the record as its wire line, without a trailing newline.
    pub fn to_line(&self) -> ConstantsResult<String> {
        let mut buf = Vec::with_capacity(320);
        self.render_into(&mut buf)?;
        // serde_json only emits UTF-8
        String::from_utf8(buf).map_err(|err| {
            ConstantsError::Render(serde_json::Error::io(io::Error::new(
                io::ErrorKind::InvalidData,
                err,
            )))
        })
    }

    /// Write the wire line plus `\n` to `writer` and flush it.
    pub fn write_line<W: Write>(&self, mut writer: W) -> ConstantsResult<()> {
        self.render_into(&mut writer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn render_into<W: Write>(&self, writer: W) -> ConstantsResult<()> {
        let mut serializer = serde_json::Serializer::with_formatter(writer, SpacedLineFormatter);
        self.serialize(&mut serializer).map_err(|err| {
            if err.is_io() {
                ConstantsError::Io(err.into())
            } else {
                ConstantsError::Render(err)
            }
        })
    }

    /// Parse a line produced by any platform's reporter.
    ///
    /// Surrounding whitespace, including the trailing newline, is ignored.
    /// Missing and unknown keys are rejected.
    pub fn from_line(line: &str) -> ConstantsResult<Self> {
        serde_json::from_str(line.trim()).map_err(ConstantsError::Parse)
    }
}

impl std::fmt::Display for PlatformConstants {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.to_line().map_err(|_| std::fmt::Error)?;
        f.write_str(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::linux_x86_64;

    const LINUX_X86_64_LINE: &str = r#"{"statOffset": 48, "statSize": 144, "O_RDONLY": 0, "O_WRONLY": 1, "O_RDWR": 2, "PROT_READ": 1, "PROT_WRITE": 2, "MADV_NORMAL": 0, "MADV_RANDOM": 1, "MADV_SEQUENTIAL": 2, "MADV_WILLNEED": 3, "MADV_DONTNEED": 4, "MAP_FAILED": -1, "MAP_SHARED": 1}"#;

    #[test]
    fn renders_exact_line() {
        assert_eq!(linux_x86_64().to_line().unwrap(), LINUX_X86_64_LINE);
    }

    #[test]
    fn display_matches_to_line() {
        let record = linux_x86_64();
        assert_eq!(record.to_string(), record.to_line().unwrap());
    }

    #[test]
    fn write_line_appends_single_newline() {
        let mut out = Vec::new();
        linux_x86_64().write_line(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{LINUX_X86_64_LINE}\n"));
        assert_eq!(text.matches('\n').count(), 1);
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = linux_x86_64().write_line(Closed).unwrap_err();
        match err {
            ConstantsError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn rendering_is_byte_identical_across_calls() {
        let record = PlatformConstants::host();
        assert_eq!(record.to_line().unwrap(), record.to_line().unwrap());
    }

    #[test]
    fn parses_line_with_trailing_newline() {
        let parsed = PlatformConstants::from_line(&format!("{LINUX_X86_64_LINE}\n")).unwrap();
        assert_eq!(parsed, linux_x86_64());
    }

    #[test]
    fn parses_compact_json_too() {
        let compact = serde_json::to_string(&linux_x86_64()).unwrap();
        assert!(!compact.contains(", "));
        assert_eq!(PlatformConstants::from_line(&compact).unwrap(), linux_x86_64());
    }

    #[test]
    fn rejects_missing_key() {
        let line = LINUX_X86_64_LINE.replace(r#", "MAP_SHARED": 1"#, "");
        let err = PlatformConstants::from_line(&line).unwrap_err();
        assert!(matches!(err, ConstantsError::Parse(_)));
        assert!(err.to_string().contains("MAP_SHARED"));
    }

    #[test]
    fn rejects_unknown_key() {
        let line = LINUX_X86_64_LINE.replace('}', r#", "MAP_PRIVATE": 2}"#);
        assert!(matches!(
            PlatformConstants::from_line(&line),
            Err(ConstantsError::Parse(_))
        ));
    }

    #[test]
    fn rejects_non_integer_value() {
        let line = LINUX_X86_64_LINE.replace(r#""O_RDWR": 2"#, r#""O_RDWR": "2""#);
        assert!(PlatformConstants::from_line(&line).is_err());
    }

    #[test]
    fn formatter_spaces_arrays_like_objects() {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedLineFormatter);
        [1, 2, 3].serialize(&mut serializer).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[1, 2, 3]");
    }
}
