//! Output formatting for sort results

use chrono::TimeDelta;
use itertools::Itertools;
use std::time::{Duration, Instant};

/// Output formatter for the sorted order and timings
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print the order, one node per line
    pub fn print_order(&self, order: &[String]) {
        if !order.is_empty() {
            println!("{}", render_order(order));
        }
    }

    /// Print a summary after the order
    pub fn print_summary(&self, nodes: usize, parse_time: TimeDelta, sort_time: TimeDelta) {
        if self.quiet {
            return;
        }

        println!();
        println!("--- Summary ---");
        println!("Nodes: {}", nodes);
        println!("Parse time: {}", format_delta(parse_time));
        println!("Sort time: {}", format_delta(sort_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_duration(self.start_time.elapsed())
        );
    }
}

/// Wall-clock deltas can come out negative if the clock steps back; show those as zero
fn format_delta(d: TimeDelta) -> String {
    format_duration(d.to_std().unwrap_or_default())
}

fn render_order(order: &[String]) -> String {
    order.iter().join("\n")
}

/// Format a duration as µs, ms or s depending on its size
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order() {
        let order = vec!["x00".to_string(), "y00".to_string(), "z00".to_string()];
        assert_eq!(render_order(&order), "x00\ny00\nz00");
        assert_eq!(render_order(&[]), "");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(999)), "999µs");
        assert_eq!(format_duration(Duration::from_micros(12_340)), "12.34ms");
        assert_eq!(format_duration(Duration::from_secs(3)), "3.00s");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_delta(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_delta(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_delta(TimeDelta::microseconds(-40)), "0µs");
    }
}
