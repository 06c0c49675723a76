//! Checks every printing strategy against known outputs, then times each of them on
//! long runs of same-width numbers.

use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context};
use radix_format::{Natural, Printer, Strategy};

// Large enough for a u64 written in radix 2, plus the terminator.
const BUF_LEN: usize = 64 + 7;

fn check<N>(printer: &mut Printer<N>, n: N, expected: &str)
where
    N: Natural,
{
    let mut buf = [0u8; 25];
    let len = printer.print_to_slice(n, &mut buf).unwrap();
    assert_eq!(&buf[..len], expected.as_bytes());
    assert_eq!(buf[len], b'\0');
}

fn test_printer<N>(printer: &mut Printer<N>, from: fn(u32) -> N)
where
    N: Natural,
{
    check(printer, from(43), "43");
    check(printer, from(5_607), "5607");
    check(printer, from(4), "4");
    check(printer, from(2_147_483_647), "2147483647");

    printer.set_radix(8).unwrap();
    check(printer, from(255), "377");
    check(printer, from(10), "12");

    printer.set_radix(16).unwrap();
    check(printer, from(512), "200");
    check(printer, from(77), "4d");

    printer.set_radix(10).unwrap();
    let mut out = String::new();
    printer.print_to_fmt(from(123), &mut out).unwrap();
    out.push(' ');
    printer.print_to_fmt(from(0), &mut out).unwrap();
    out.push(' ');
    printer.print_to_fmt(from(10_000), &mut out).unwrap();
    assert_eq!(out, "123 0 10000");
}

fn run_printer<N>(
    printer: &mut Printer<N>,
    range: impl Iterator<Item = N>,
    buf: &mut [u8; BUF_LEN],
) -> anyhow::Result<Duration>
where
    N: Natural,
{
    let start = Instant::now();
    for n in range {
        printer
            .print_to_slice(black_box(n), buf)
            .with_context(|| format!("printing {:?}", n))?;
    }
    let elapsed = start.elapsed();
    println!("{} msc", elapsed.as_millis());
    Ok(elapsed)
}

fn last_printed(buf: &[u8; BUF_LEN]) -> anyhow::Result<&str> {
    let len = buf.iter().position(|&b| b == b'\0').unwrap_or(0);
    std::str::from_utf8(&buf[..len]).context("printed digits are not UTF-8")
}

fn main() -> anyhow::Result<()> {
    println!("Modulo printers:");
    for strategy in [Strategy::RightToLeftSingleDigit, Strategy::RightToLeftDigitPair] {
        println!("\t Testing '{}' with u32 ...", strategy);
        test_printer(&mut Printer::<u32>::new(strategy), |n| n);
        println!("\t Testing '{}' with u64 ...", strategy);
        test_printer(&mut Printer::<u64>::new(strategy), u64::from);
    }

    println!("LR-printers:");
    for strategy in [Strategy::LeftToRightSingleDigit, Strategy::LeftToRightDigitPair] {
        println!("\t Testing '{}' with u32 ...", strategy);
        test_printer(&mut Printer::<u32>::new(strategy), |n| n);
        println!("\t Testing '{}' with u64 ...", strategy);
        test_printer(&mut Printer::<u64>::new(strategy), u64::from);
    }

    let mut buf = [0u8; BUF_LEN];

    // 8-digit numbers
    let (start, finish) = (10_000_000u32, 49_000_000u32);
    println!(
        "Running the printers on numbers in [{}, {}], 32-bit, with radix 10:",
        start, finish
    );
    for strategy in Strategy::ALL {
        print!("\t {}: ", strategy);
        let mut printer = Printer::<u32>::new(strategy);
        run_printer(&mut printer, start..=finish, &mut buf)?;
        ensure!(last_printed(&buf)? == finish.to_string(), "{} misprinted", strategy);
    }

    // 17-digit numbers
    let (start, finish) = (52_109_000_000_000_000u64, 52_109_000_049_000_000u64);
    println!(
        "Running the printers on numbers in [{}, {}], 64-bit, with radix 10:",
        start, finish
    );
    for strategy in Strategy::ALL {
        print!("\t {}: ", strategy);
        let mut printer = Printer::<u64>::new(strategy);
        run_printer(&mut printer, start..=finish, &mut buf)?;
        ensure!(last_printed(&buf)? == finish.to_string(), "{} misprinted", strategy);
    }

    println!(
        "Last converted number (to prevent unnecessary optimizations): {}",
        last_printed(&buf)?
    );

    Ok(())
}
