/*!
[![Crates.io](https://img.shields.io/crates/v/radix-format.svg)](https://crates.io/crates/radix-format)
[![Documentation](https://docs.rs/radix-format/badge.svg)](https://docs.rs/radix-format/)
![License](https://img.shields.io/crates/l/radix-format.svg)

A Rust crate for writing unsigned integers in any radix from 2 to 36, with the
throughput of a hand-tuned `itoa`.

# Picking a strategy

A [`Printer`] extracts digits with one of four [`Strategy`]s. They all produce the
same text; what differs is the arithmetic per digit:

- [`RightToLeftSingleDigit`]: one `%` and one `/` per digit, least significant digit
  first, written into the buffer from the back.
- [`RightToLeftDigitPair`]: one `%` and one `/` per *two* digits, emitted from a table
  holding every pair of alphabet characters.
- [`LeftToRightSingleDigit`]: one `/` per digit by descending powers of the radix,
  most significant digit first, with a subtraction instead of a remainder.
- [`LeftToRightDigitPair`]: the same, but stepping two powers at a time.

The left-to-right strategies need to know the largest power of the radix below the
number being written. A printer grows its cache of powers only as far as the numbers
it has seen require, and stops for good once the next power would overflow the
integer type.

# Examples

```rust
use radix_format::{Printer, Strategy};

let mut printer = Printer::<u32>::new(Strategy::RightToLeftDigitPair);
assert_eq!(printer.encode(2147483647), "2147483647");

printer.set_radix(8).unwrap();
assert_eq!(printer.encode(255), "377");

printer.set_radix(16).unwrap();
assert_eq!(printer.encode(512), "200");
```

Writing into sinks:

```rust
use radix_format::{Printer, Strategy, WriteRadix};

let mut printer = Printer::<u64>::with_radix(Strategy::LeftToRightDigitPair, 36).unwrap();

// a caller-provided, NUL-terminated buffer
let mut buf = [0u8; 16];
let len = printer.print_to_slice(1295, &mut buf).unwrap();
assert_eq!(&buf[..len + 1], b"zz\0");

// anything implementing io::Write or fmt::Write
let mut out = Vec::new();
out.write_radix(36, &mut printer).unwrap();
assert_eq!(out, b"10");
```

Custom alphabets:

```rust
use radix_format::{Printer, RadixFormat, Strategy};

let format = RadixFormat::builder()
    .alphabet("0123456789ABCDEF")
    .strategy(Strategy::LeftToRightSingleDigit)
    .build()
    .unwrap();
let mut printer = Printer::<u16>::from_format(&format);
assert_eq!(printer.encode(0xCAFE), "CAFE");
```

# Extra features

| Available features | What to put in your `Cargo.toml`                                     |
| :----------------- | :------------------------------------------------------------------- |
| `no_std`           | `radix-format = { version = "0.1", default-features = false }`       |
| `with-serde`       | `radix-format = { version = "0.1", features = ["with-serde"] }`      |

Without `std` the crate keeps [`Printer::print_to_slice`] and [`Printer::print_to_fmt`];
[`Printer::print_to_io`] and [`WriteRadix`] need the standard library.

[`Printer`]: struct.Printer.html
[`Printer::print_to_slice`]: struct.Printer.html#method.print_to_slice
[`Printer::print_to_fmt`]: struct.Printer.html#method.print_to_fmt
[`Printer::print_to_io`]: struct.Printer.html#method.print_to_io
[`Strategy`]: enum.Strategy.html
[`RightToLeftSingleDigit`]: enum.Strategy.html#variant.RightToLeftSingleDigit
[`RightToLeftDigitPair`]: enum.Strategy.html#variant.RightToLeftDigitPair
[`LeftToRightSingleDigit`]: enum.Strategy.html#variant.LeftToRightSingleDigit
[`LeftToRightDigitPair`]: enum.Strategy.html#variant.LeftToRightDigitPair
[`WriteRadix`]: trait.WriteRadix.html
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    unused
)]
#![doc(html_root_url = "https://docs.rs/radix-format/0.1.0")]

mod alphabet;
mod buffer;
mod constants;
mod error;
mod error_kind;
mod natural;
mod pair_table;
mod power_cache;
mod printer;
mod radix_format;
mod strategy;
mod write_radix;

pub use crate::alphabet::Alphabet;
pub use crate::buffer::Buffer;
pub use crate::constants::{MAX_RADIX, MIN_RADIX};
pub use crate::error::Error;
pub use crate::error_kind::ErrorKind;
pub use crate::natural::Natural;
pub use crate::printer::Printer;
pub use crate::radix_format::{RadixFormat, RadixFormatBuilder};
pub use crate::strategy::Strategy;
#[cfg(feature = "std")]
pub use crate::write_radix::WriteRadix;

mod private {
    pub trait Sealed {}
}
