#![cfg(feature = "std")]

use std::fmt;
use std::fs;
use std::io;
use std::net;
use std::process;

use crate::natural::Natural;
use crate::printer::Printer;

/// <b><u>A key trait</u></b>. Gives implementors a method for writing numbers with a
/// [`Printer`].
///
/// Implemented for types that implement [`io::Write`] or [`fmt::Write`] in the
/// standard library, so text sinks and byte sinks are written to the same way.
///
/// # Example
/// ```rust
/// use radix_format::{Printer, Strategy, WriteRadix};
///
/// let mut printer = Printer::<u32>::new(Strategy::RightToLeftSingleDigit);
///
/// let mut s = String::new();
/// s.write_radix(123, &mut printer).unwrap();
/// s.push(' ');
/// s.write_radix(0, &mut printer).unwrap();
/// assert_eq!(s, "123 0");
///
/// let mut bytes = Vec::new();
/// let written = bytes.write_radix(10_000, &mut printer).unwrap();
/// assert_eq!(written, 5);
/// assert_eq!(bytes, b"10000");
/// ```
///
/// [`Printer`]: struct.Printer.html
/// [`fmt::Write`]: https://doc.rust-lang.org/stable/std/fmt/trait.Write.html
/// [`io::Write`]: https://doc.rust-lang.org/stable/std/io/trait.Write.html
pub trait WriteRadix {
    /// Writes `n` with `printer` and returns the number of digits written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_radix<N>(&mut self, n: N, printer: &mut Printer<N>) -> Result<usize, io::Error>
    where
        N: Natural;
}

macro_rules! impl_for_fmt_write {
    () => {
        #[inline(always)]
        fn write_radix<N>(&mut self, n: N, printer: &mut Printer<N>) -> Result<usize, io::Error>
        where
            N: Natural,
        {
            printer
                .print_to_fmt(n, self)
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "fmt error"))?;
            Ok(printer.buffer().len())
        }
    };
}

macro_rules! impl_for_io_write {
    () => {
        #[inline(always)]
        fn write_radix<N>(&mut self, n: N, printer: &mut Printer<N>) -> Result<usize, io::Error>
        where
            N: Natural,
        {
            printer.print_to_io(n, self)
        }
    };
}

impl WriteRadix for String {
    impl_for_fmt_write!();
}

impl<'a> WriteRadix for fmt::Formatter<'a> {
    impl_for_fmt_write!();
}

impl<W: io::Write> WriteRadix for io::BufWriter<W> {
    impl_for_io_write!();
}

impl WriteRadix for io::Cursor<Vec<u8>> {
    impl_for_io_write!();
}

impl<'a> WriteRadix for io::Cursor<&'a mut Vec<u8>> {
    impl_for_io_write!();
}

impl<'a> WriteRadix for io::Cursor<&'a mut [u8]> {
    impl_for_io_write!();
}

impl WriteRadix for io::Cursor<Box<[u8]>> {
    impl_for_io_write!();
}

impl<W: io::Write> WriteRadix for io::LineWriter<W> {
    impl_for_io_write!();
}

impl WriteRadix for io::Sink {
    impl_for_io_write!();
}

impl WriteRadix for io::Stderr {
    impl_for_io_write!();
}

impl<'a> WriteRadix for io::StderrLock<'a> {
    impl_for_io_write!();
}

impl WriteRadix for io::Stdout {
    impl_for_io_write!();
}

impl<'a> WriteRadix for io::StdoutLock<'a> {
    impl_for_io_write!();
}

impl<'a> WriteRadix for &'a mut [u8] {
    /// Writes all the digits or none of them: a slice too short for every digit is
    /// left untouched and `io::ErrorKind::WriteZero` is returned.
    fn write_radix<N>(&mut self, n: N, printer: &mut Printer<N>) -> Result<usize, io::Error>
    where
        N: Natural,
    {
        let digits = printer.encode(n);
        if digits.len() > self.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                crate::error::Error::capacity(digits.len(), self.len()),
            ));
        }
        io::Write::write_all(self, digits.as_bytes())?;
        Ok(digits.len())
    }
}

impl WriteRadix for fs::File {
    impl_for_io_write!();
}

impl WriteRadix for net::TcpStream {
    impl_for_io_write!();
}

impl WriteRadix for process::ChildStdin {
    impl_for_io_write!();
}

impl WriteRadix for Vec<u8> {
    impl_for_io_write!();
}
