mod common;

use radix_format::{ErrorKind, Natural, Printer, Strategy};
#[cfg(feature = "std")]
use radix_format::WriteRadix;

use crate::common::STRATEGIES;

fn check_scenarios<N>(printer: &mut Printer<N>, from: impl Fn(u32) -> N)
where
    N: Natural,
{
    let name = printer.strategy();
    let mut buf = [0u8; 25];

    let cases: &[(u32, &str)] = &[(43, "43"), (5_607, "5607"), (4, "4"), (2_147_483_647, "2147483647")];
    for (input, expected) in cases {
        let len = printer.print_to_slice(from(*input), &mut buf).unwrap();
        assert_eq!(&buf[..len], expected.as_bytes(), "{}", name);
        assert_eq!(buf[len], b'\0', "{}", name);
    }

    printer.set_radix(8).unwrap();
    assert_eq!(printer.encode(from(255)), "377", "{}", name);
    assert_eq!(printer.encode(from(10)), "12", "{}", name);

    printer.set_radix(16).unwrap();
    assert_eq!(printer.encode(from(512)), "200", "{}", name);
    assert_eq!(printer.encode(from(77)), "4d", "{}", name);

    printer.set_radix(10).unwrap();
    let mut s = String::new();
    printer.print_to_fmt(from(123), &mut s).unwrap();
    s.push(' ');
    printer.print_to_fmt(from(0), &mut s).unwrap();
    s.push(' ');
    printer.print_to_fmt(from(10_000), &mut s).unwrap();
    assert_eq!(s, "123 0 10000", "{}", name);
}

#[test]
fn test_scenarios_u32() {
    for &strategy in &STRATEGIES {
        let mut printer = Printer::<u32>::new(strategy);
        check_scenarios(&mut printer, |n| n);
    }
}

#[test]
fn test_scenarios_u64() {
    for &strategy in &STRATEGIES {
        let mut printer = Printer::<u64>::new(strategy);
        check_scenarios(&mut printer, u64::from);
    }
}

#[test]
fn test_scenarios_u128() {
    for &strategy in &STRATEGIES {
        let mut printer = Printer::<u128>::new(strategy);
        check_scenarios(&mut printer, u128::from);
    }
}

#[test]
fn test_zero_is_first_digit() {
    for &strategy in &STRATEGIES {
        for radix in 2..=36 {
            let mut printer = Printer::<u64>::with_radix(strategy, radix).unwrap();
            assert_eq!(printer.encode(0), "0");
        }
        let mut printer = Printer::<u8>::with_alphabet(strategy, "xyz").unwrap();
        assert_eq!(printer.encode(0), "x");
    }
}

#[test]
fn test_max_values() {
    let cases: &[(u8, &str)] = &[
        (2, "1111111111111111111111111111111111111111111111111111111111111111"),
        (8, "1777777777777777777777"),
        (10, "18446744073709551615"),
        (16, "ffffffffffffffff"),
        (36, "3w5e11264sgsf"),
    ];
    for &strategy in &STRATEGIES {
        for (radix, expected) in cases {
            let mut printer = Printer::<u64>::with_radix(strategy, *radix).unwrap();
            assert_eq!(printer.encode(u64::MAX), *expected, "{} radix {}", strategy, radix);
        }

        let mut printer = Printer::<u128>::with_radix(strategy, 2).unwrap();
        let s = printer.encode(u128::MAX).to_string();
        assert_eq!(s.len(), 128);
        assert!(s.bytes().all(|b| b == b'1'));

        let mut printer = Printer::<u8>::with_radix(strategy, 36).unwrap();
        assert_eq!(printer.encode(u8::MAX), "73");
        let mut printer = Printer::<u16>::with_radix(strategy, 36).unwrap();
        assert_eq!(printer.encode(u16::MAX), "1ekf");
    }
}

#[test]
fn test_power_cache_boundary() {
    for &strategy in &[Strategy::LeftToRightSingleDigit, Strategy::LeftToRightDigitPair] {
        let mut printer = Printer::<u32>::new(strategy);
        assert_eq!(printer.powers(), &[1]);

        assert_eq!(printer.encode(2_147_483_647), "2147483647");
        assert_eq!(printer.encode(u32::MAX), "4294967295");
        assert!(printer.powers_exhausted());
        assert_eq!(printer.powers().last(), Some(&1_000_000_000));
        assert_eq!(printer.powers().len(), 10);

        // exhausted caches still answer smaller values
        assert_eq!(printer.encode(999_999_999), "999999999");
        assert_eq!(printer.encode(1), "1");
        assert_eq!(printer.encode(1_000_000_000), "1000000000");
    }
}

#[test]
fn test_power_cache_untouched_by_right_to_left() {
    for &strategy in Strategy::ALL.iter().filter(|s| !s.uses_powers()) {
        let mut printer = Printer::<u64>::new(strategy);
        assert_eq!(printer.encode(u64::MAX), "18446744073709551615");
        assert_eq!(printer.powers(), &[1]);
        assert!(!printer.powers_exhausted());
    }
}

#[test]
fn test_no_stale_tables_after_radix_change() {
    for &strategy in &STRATEGIES {
        let mut printer = Printer::<u64>::new(strategy);
        assert_eq!(printer.encode(u64::MAX), "18446744073709551615");

        printer.set_radix(3).unwrap();
        assert_eq!(printer.radix(), 3);
        assert_eq!(printer.alphabet().as_str(), "012");
        assert_eq!(printer.encode(80), "2222");
        assert_eq!(printer.encode(81), "10000");

        printer.set_radix(36).unwrap();
        assert_eq!(printer.encode(1295), "zz");
        assert_eq!(printer.encode(46_655), "zzz");

        printer.set_radix(10).unwrap();
        assert_eq!(printer.encode(99), "99");
        assert_eq!(printer.encode(100), "100");
    }
}

#[test]
fn test_custom_alphabet() {
    for &strategy in &STRATEGIES {
        let mut printer = Printer::<u32>::with_radix(strategy, 16).unwrap();
        printer.set_alphabet("0123456789ABCDEF").unwrap();
        assert_eq!(printer.radix(), 16);
        assert_eq!(printer.encode(0xDEAD_BEEF), "DEADBEEF");
        assert_eq!(printer.encode(0x0F), "F");

        // resetting the radix brings the default digits back
        printer.set_radix(16).unwrap();
        assert_eq!(printer.encode(0xDEAD_BEEF), "deadbeef");

        let mut printer = Printer::<u32>::with_alphabet(strategy, "ab").unwrap();
        assert_eq!(printer.encode(6), "bba");
    }
}

#[test]
fn test_rejected_configuration() {
    for &strategy in &STRATEGIES {
        for radix in [0, 1, 37, 100] {
            let err = Printer::<u32>::with_radix(strategy, radix).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::InvalidRadix { radix });
        }

        let mut printer = Printer::<u32>::new(strategy);
        let err = printer.set_radix(37).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidRadix { radix: 37 });
        assert_eq!(printer.radix(), 10);

        let err = printer.set_alphabet("0123456789ab").unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::AlphabetLength {
                expected: 10,
                actual: 12
            }
        );
        let err = printer.set_alphabet("0123456788").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::DuplicateDigit { digit: '8' });
        assert_eq!(printer.alphabet().as_str(), "0123456789");
        assert_eq!(printer.encode(5607), "5607");
    }
}

#[test]
fn test_slice_too_small() {
    let mut printer = Printer::<u32>::default();
    let mut buf = [0xffu8; 4];
    let err = printer.print_to_slice(1234, &mut buf).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Capacity { len: 5, cap: 4 });
    assert_eq!(buf, [0xff; 4]);

    assert_eq!(printer.print_to_slice(123, &mut buf), Ok(3));
    assert_eq!(&buf, b"123\0");
}

#[cfg(feature = "std")]
#[test]
fn test_sinks_agree() {
    for &strategy in &STRATEGIES {
        let mut printer = Printer::<u64>::with_radix(strategy, 7).unwrap();
        let expected = printer.encode(123_456_789).to_string();

        let mut bytes = Vec::new();
        let n = printer.print_to_io(123_456_789, &mut bytes).unwrap();
        assert_eq!(n, expected.len());
        assert_eq!(bytes, expected.as_bytes());

        let mut s = String::new();
        let n = s.write_radix(123_456_789, &mut printer).unwrap();
        assert_eq!(n, expected.len());
        assert_eq!(s, expected);

        let mut cursor = std::io::Cursor::new(Vec::<u8>::new());
        cursor.write_radix(123_456_789, &mut printer).unwrap();
        assert_eq!(cursor.into_inner(), expected.as_bytes());

        assert_eq!(printer.buffer().as_str(), expected);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_write_radix_into_formatter() {
    use std::cell::RefCell;
    use std::fmt;

    struct Hex<'a>(u64, &'a RefCell<Printer<u64>>);

    impl<'a> fmt::Display for Hex<'a> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("0x")?;
            f.write_radix(self.0, &mut self.1.borrow_mut())
                .map(|_| ())
                .map_err(|_| fmt::Error)
        }
    }

    for &strategy in &STRATEGIES {
        let printer = RefCell::new(Printer::<u64>::with_radix(strategy, 16).unwrap());
        assert_eq!(Hex(0xdead_beef, &printer).to_string(), "0xdeadbeef");
        assert_eq!(format!("[{}]", Hex(0, &printer)), "[0x0]");
    }
}

#[cfg(feature = "std")]
#[test]
fn test_write_radix_into_short_slice() {
    for &strategy in &STRATEGIES {
        let mut printer = Printer::<u32>::new(strategy);

        let mut storage = [b'-'; 3];
        let mut out: &mut [u8] = &mut storage;
        let err = out.write_radix(12_345, &mut printer).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::WriteZero);
        assert_eq!(out.len(), 3);
        assert_eq!(&storage, b"---");

        let mut storage = [b'-'; 5];
        let mut out: &mut [u8] = &mut storage;
        assert_eq!(out.write_radix(12_345, &mut printer).unwrap(), 5);
        assert!(out.is_empty());
        assert_eq!(&storage, b"12345");
    }
}
