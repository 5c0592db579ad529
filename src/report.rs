use std::io::{self, Write};
use std::time::Duration;

use crate::bench::BenchmarkResults;

/// Write the two timing tables. The line format is fixed: amount right-aligned
/// to 7 characters, elapsed seconds to 6 decimal places.
pub fn write_report(out: &mut impl Write, results: &BenchmarkResults) -> io::Result<()> {
    writeln!(out, "Greedy Algorithm Times:")?;
    write_table(out, &results.amounts, &results.greedy)?;
    writeln!(out)?;
    writeln!(out, "Dynamic Programming Algorithm Times:")?;
    write_table(out, &results.amounts, &results.exact)?;
    Ok(())
}

fn write_table(out: &mut impl Write, amounts: &[u64], times: &[Duration]) -> io::Result<()> {
    for (amount, elapsed) in amounts.iter().zip(times) {
        writeln!(
            out,
            "Amount: {:>7} - Time: {:.6} seconds",
            amount,
            elapsed.as_secs_f64()
        )?;
    }
    Ok(())
}
