//! Gauge rendering seam.
//!
//! The runtime hands the renderer one value per tick (the home total,
//! clamped to the display maximum) and never reads anything back. The
//! terminal implementation mirrors the reference gauge: a proportional bar,
//! a numeric litre label, and emphasis once usage passes 80% of the range.

use vattenvakt_core::UsageTotals;

/// Presentation collaborator called once per tick with the current totals.
pub trait GaugeRenderer {
    fn render(&mut self, totals: &UsageTotals, max_litres: u64);
}

/// Text gauge written to stdout.
pub struct TerminalGauge {
    width: usize,
}

impl TerminalGauge {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    fn bar(&self, home_litres: u64, max_litres: u64) -> String {
        let clamped = home_litres.min(max_litres);
        let filled = (clamped as usize * self.width) / max_litres.max(1) as usize;
        let mut bar = String::with_capacity(self.width);
        for cell in 0..self.width {
            bar.push(if cell < filled { '#' } else { '.' });
        }
        bar
    }
}

impl Default for TerminalGauge {
    fn default() -> Self {
        Self::new(30)
    }
}

impl GaugeRenderer for TerminalGauge {
    fn render(&mut self, totals: &UsageTotals, max_litres: u64) {
        let home = totals.home_litres;
        let marker = if home * 100 > max_litres * 80 {
            "  !! high usage"
        } else {
            ""
        };
        println!(
            "[{}] {} L  water usage (tank {} L){}",
            self.bar(home, max_litres),
            home,
            totals.tank_litres,
            marker
        );
    }
}

/// Renderer that draws nothing. Used by simulation mode and tests.
#[derive(Default)]
pub struct NullGauge;

impl GaugeRenderer for NullGauge {
    fn render(&mut self, _totals: &UsageTotals, _max_litres: u64) {}
}
