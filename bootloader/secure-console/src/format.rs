//! Bounded formatting into caller-owned UCS-2 buffers.
//!
//! The buffer's length is its capacity in code units. At most
//! `capacity - 1` data units are written and the output is always followed
//! by a zero terminator; an empty buffer is left untouched. Truncation is
//! silent unless the `_checked` variants are used.
//!
//! Supported conversions: `%s`, `%d`/`%i`, `%u`, `%x`/`%X`, `%c` and `%%`.
//! A conversion whose argument is missing or of another kind, and any
//! unknown conversion, is copied verbatim.

use crate::ucs2;

const PERCENT: u16 = b'%' as u16;

/// A value substituted into a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// UCS-2 text, read up to its terminator or the end of the slice.
    Str(&'a [u16]),
    Unsigned(u64),
    Signed(i64),
    Hex(u64),
    Char(u16),
}

/// Outcome of a bounded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatted {
    /// Data code units written, terminator excluded.
    pub len: usize,
    /// Whether some output did not fit.
    pub truncated: bool,
}

/// Converts a byte capacity into code units. A trailing odd byte is unusable.
pub const fn capacity_units(bytes: usize) -> usize {
    bytes / core::mem::size_of::<u16>()
}

/// Copies `source` into `buffer` without interpreting it.
///
/// Returns the number of code units copied.
pub fn copy_bounded(buffer: &mut [u16], source: &[u16]) -> usize {
    copy_bounded_checked(buffer, source).len
}

pub fn copy_bounded_checked(buffer: &mut [u16], source: &[u16]) -> Formatted {
    let mut out = Cursor::new(buffer);
    out.push_all(ucs2::terminated(source));
    out.finish()
}

/// Formats `format` with `args` into `buffer`.
///
/// Returns the number of code units written.
pub fn format_bounded(buffer: &mut [u16], format: &[u16], args: &[Arg<'_>]) -> usize {
    format_bounded_checked(buffer, format, args).len
}

pub fn format_bounded_checked(buffer: &mut [u16], format: &[u16], args: &[Arg<'_>]) -> Formatted {
    if cfg!(feature = "verbatim") {
        return copy_bounded_checked(buffer, format);
    }

    let mut out = Cursor::new(buffer);
    let mut args = args.iter();
    let mut rest = ucs2::terminated(format);

    while let Some((&unit, tail)) = rest.split_first() {
        rest = tail;
        if unit != PERCENT {
            if !out.push(unit) {
                break;
            }
            continue;
        }

        let Some((&conversion, tail)) = rest.split_first() else {
            out.push(PERCENT);
            break;
        };
        rest = tail;

        let room = if conversion == PERCENT {
            out.push(PERCENT)
        } else {
            let rendered = match Conversion::parse(conversion) {
                Some(conversion) => conversion.render(&mut out, args.next()),
                None => None,
            };
            match rendered {
                Some(room) => room,
                None => out.push(PERCENT) && out.push(conversion),
            }
        };
        if !room {
            break;
        }
    }

    out.finish()
}

#[derive(Debug, Clone, Copy)]
enum Conversion {
    Str,
    Signed,
    Unsigned,
    LowerHex,
    UpperHex,
    Char,
}

impl Conversion {
    fn parse(unit: u16) -> Option<Self> {
        Some(match u8::try_from(unit).ok()? {
            b's' => Self::Str,
            b'd' | b'i' => Self::Signed,
            b'u' => Self::Unsigned,
            b'x' => Self::LowerHex,
            b'X' => Self::UpperHex,
            b'c' => Self::Char,
            _ => return None,
        })
    }

    /// Writes `arg`, or returns `None` without writing if it does not fit
    /// this conversion. `Some(false)` means the buffer filled up.
    fn render(self, out: &mut Cursor<'_>, arg: Option<&Arg<'_>>) -> Option<bool> {
        let room = match (self, *arg?) {
            (Self::Str, Arg::Str(text)) => out.push_all(ucs2::terminated(text)),
            (Self::Signed, Arg::Signed(value)) => {
                (value >= 0 || out.push(b'-' as u16)) && out.push_number(value.unsigned_abs(), 10, false)
            }
            (Self::Signed | Self::Unsigned, Arg::Unsigned(value)) => out.push_number(value, 10, false),
            (Self::LowerHex, Arg::Hex(value) | Arg::Unsigned(value)) => out.push_number(value, 16, false),
            (Self::UpperHex, Arg::Hex(value) | Arg::Unsigned(value)) => out.push_number(value, 16, true),
            (Self::Char, Arg::Char(unit)) if unit != 0 => out.push(unit),
            _ => return None,
        };
        Some(room)
    }
}

struct Cursor<'b> {
    buffer: &'b mut [u16],
    len: usize,
    truncated: bool,
}

impl<'b> Cursor<'b> {
    fn new(buffer: &'b mut [u16]) -> Self {
        Self {
            buffer,
            len: 0,
            truncated: false,
        }
    }

    fn push(&mut self, unit: u16) -> bool {
        // One slot stays reserved for the terminator.
        if self.len + 1 < self.buffer.len() {
            self.buffer[self.len] = unit;
            self.len += 1;
            true
        } else {
            self.truncated = true;
            false
        }
    }

    fn push_all(&mut self, units: &[u16]) -> bool {
        units.iter().all(|&unit| self.push(unit))
    }

    fn push_number(&mut self, mut value: u64, radix: u64, upper: bool) -> bool {
        let table: &[u8; 16] = if upper { b"0123456789ABCDEF" } else { b"0123456789abcdef" };
        // u64::MAX has 20 decimal digits.
        let mut digits = [0u8; 20];
        let mut count = 0;
        loop {
            digits[count] = table[(value % radix) as usize];
            count += 1;
            value /= radix;
            if value == 0 {
                break;
            }
        }
        digits[..count].iter().rev().all(|&digit| self.push(u16::from(digit)))
    }

    fn finish(self) -> Formatted {
        if let Some(slot) = self.buffer.get_mut(self.len) {
            *slot = 0;
        }
        Formatted {
            len: self.len,
            truncated: self.truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(text: &str) -> Vec<u16> {
        text.encode_utf16().chain(Some(0)).collect()
    }

    fn text(buffer: &[u16], len: usize) -> String {
        assert_eq!(buffer[len], 0, "missing terminator");
        String::from_utf16(&buffer[..len]).unwrap()
    }

    #[test]
    fn short_source_is_copied_whole() {
        let mut buffer = [0xffffu16; 10];
        let len = copy_bounded(&mut buffer, &units("Hi"));
        assert_eq!(len, 2);
        assert_eq!(text(&buffer, len), "Hi");
    }

    #[test]
    fn long_source_is_cut_to_capacity() {
        // 12 bytes of storage, 6 code units.
        let mut buffer = [0u16; 6];
        assert_eq!(core::mem::size_of_val(&buffer), 12);
        let len = copy_bounded(&mut buffer, &units("HelloWorld"));
        assert_eq!(len, 5);
        assert_eq!(text(&buffer, len), "Hello");
    }

    #[test]
    fn source_exactly_filling_the_buffer_is_not_truncated() {
        let mut buffer = [0u16; 6];
        let written = copy_bounded_checked(&mut buffer, &units("Hello"));
        assert_eq!(written, Formatted { len: 5, truncated: false });

        let written = copy_bounded_checked(&mut buffer, &units("Hello!"));
        assert_eq!(written, Formatted { len: 5, truncated: true });
    }

    #[test]
    fn single_unit_buffer_holds_only_the_terminator() {
        let mut buffer = [0x41u16; 1];
        assert_eq!(copy_bounded(&mut buffer, &units("abc")), 0);
        assert_eq!(buffer, [0]);
    }

    #[test]
    fn empty_buffer_is_left_alone() {
        let mut buffer: [u16; 0] = [];
        let written = format_bounded_checked(&mut buffer, &units("abc"), &[]);
        assert_eq!(written, Formatted { len: 0, truncated: true });

        let written = copy_bounded_checked(&mut buffer, &units(""));
        assert_eq!(written, Formatted { len: 0, truncated: false });
    }

    #[test]
    fn source_without_terminator_is_bounded_by_its_slice() {
        let source: Vec<u16> = "abc".encode_utf16().collect();
        let mut buffer = [0u16; 8];
        let len = copy_bounded(&mut buffer, &source);
        assert_eq!(text(&buffer, len), "abc");
    }

    #[test]
    fn reformatting_truncated_output_is_stable() {
        let mut first = [0u16; 6];
        let len = format_bounded(&mut first, &units("HelloWorld"), &[]);
        let mut second = [0u16; 6];
        let again = format_bounded(&mut second, &first, &[]);
        assert_eq!(len, again);
        assert_eq!(first, second);
    }

    #[test]
    fn capacity_units_halves_bytes() {
        assert_eq!(capacity_units(12), 6);
        assert_eq!(capacity_units(3), 1);
        assert_eq!(capacity_units(0), 0);
    }

    #[test]
    fn plain_text_formats_like_a_copy() {
        let mut buffer = [0u16; 10];
        let len = format_bounded(&mut buffer, &units("Hi"), &[Arg::Unsigned(7)]);
        assert_eq!(text(&buffer, len), "Hi");

        let mut buffer = [0u16; 6];
        let len = format_bounded(&mut buffer, &units("HelloWorld"), &[]);
        assert_eq!(text(&buffer, len), "Hello");
    }

    #[cfg(not(feature = "verbatim"))]
    mod substitution {
        use super::*;

        fn render(format: &str, args: &[Arg<'_>]) -> String {
            let mut buffer = [0u16; 64];
            let len = format_bounded(&mut buffer, &units(format), args);
            text(&buffer, len)
        }

        #[test]
        fn substitutes_strings() {
            let vendor = units("EDK II");
            assert_eq!(
                render("    Vendor: %s\r\n", &[Arg::Str(&vendor)]),
                "    Vendor: EDK II\r\n"
            );
        }

        #[test]
        fn substitutes_numbers() {
            let args = [
                Arg::Signed(-42),
                Arg::Unsigned(0),
                Arg::Hex(0xbeef),
                Arg::Hex(0xbeef),
                Arg::Signed(i64::MIN),
            ];
            assert_eq!(
                render("%d %u %x %X %i", &args),
                "-42 0 beef BEEF -9223372036854775808"
            );
            assert_eq!(render("%u", &[Arg::Unsigned(u64::MAX)]), "18446744073709551615");
            assert_eq!(render("%d", &[Arg::Unsigned(12)]), "12");
        }

        #[test]
        fn substitutes_chars_and_percent() {
            assert_eq!(render("[%c] 100%%", &[Arg::Char(0x2713)]), "[\u{2713}] 100%");
        }

        #[test]
        fn missing_or_mismatched_arguments_stay_verbatim() {
            assert_eq!(render("%s and %u", &[Arg::Unsigned(3)]), "%s and %u");
            assert_eq!(render("%c", &[Arg::Char(0)]), "%c");
            assert_eq!(render("%q %u", &[Arg::Unsigned(5)]), "%q 5");
            assert_eq!(render("50%", &[]), "50%");
        }

        #[test]
        fn truncates_inside_an_argument() {
            let vendor = units("American Megatrends");
            let mut buffer = [0u16; 12];
            let written = format_bounded_checked(&mut buffer, &units("V: %s!"), &[Arg::Str(&vendor)]);
            assert_eq!(written, Formatted { len: 11, truncated: true });
            assert_eq!(text(&buffer, written.len), "V: American");
        }

        #[test]
        fn truncates_inside_a_number() {
            let mut buffer = [0u16; 4];
            let len = format_bounded(&mut buffer, &units("%u"), &[Arg::Unsigned(123456)]);
            assert_eq!(text(&buffer, len), "123");
        }

        #[test]
        fn accepts_ucs2_macro_literals() {
            let vendor = units("OVMF");
            let mut buffer = [0u16; 32];
            let len = format_bounded(&mut buffer, crate::ucs2!("<%s>"), &[Arg::Str(&vendor)]);
            assert_eq!(text(&buffer, len), "<OVMF>");
            assert_eq!(crate::ucs2::len(&buffer), len);
        }
    }

    #[cfg(feature = "verbatim")]
    #[test]
    fn verbatim_ignores_arguments() {
        let vendor = units("EDK II");
        let mut buffer = [0u16; 32];
        let len = format_bounded(&mut buffer, &units("Vendor: %s"), &[Arg::Str(&vendor)]);
        assert_eq!(text(&buffer, len), "Vendor: %s");
    }
}
