//! Console rendering of a comparison. Labels come from a per-locale lookup
//! table, colour is optional.

use std::io::{ self, Write };

use owo_colors::{ AnsiColors, OwoColorize };

use crate::benchmark::{ Comparison, Run };
use crate::problem::{ Item, Problem };

mod locale;

pub use locale::{ Labels, Locale };

pub struct Report {
    labels: &'static Labels,
    color: bool,
}

impl Report {
    pub fn new(locale: Locale, color: bool) -> Self {
        Report {
            labels: Labels::for_locale(locale),
            color,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    fn paint(&self, text: &str, color: AnsiColors) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_owned()
        }
    }

    fn header(&self) -> String {
        let l = self.labels;
        self.paint(&format!("{:<10}{:<10}{:<15}", l.weight, l.value, l.density), AnsiColors::Blue)
    }

    /// Table of items: weight, value and density per row.
    pub fn items<W: Write>(&self, out: &mut W, items: &[Item]) -> io::Result<()> {
        writeln!(out, "{}", self.header())?;
        for item in items {
            writeln!(out, "{:<10}{:<10}{:<10.2}", item.weight(), item.value(), item.density())?;
        }
        Ok(())
    }

    pub fn available<W: Write>(&self, out: &mut W, problem: &Problem) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.labels.available_items)?;
        self.items(out, problem.items())?;
        writeln!(out, "{} {}", self.labels.capacity, problem.capacity)
    }

    /// Result section of a single solver.
    pub fn run<W: Write>(&self, out: &mut W, title: &str, run: &Run) -> io::Result<()> {
        let l = self.labels;
        let timing = format!(" ({:.6}s)", run.elapsed.as_secs_f64());

        writeln!(out)?;
        writeln!(out, "{}{}", self.paint(title, AnsiColors::Green), self.paint(&timing, AnsiColors::Yellow))?;

        if run.solution.is_empty() {
            return writeln!(out, "{}", l.no_solution);
        }

        self.items(out, run.solution.items())?;
        writeln!(out, "{} {}", l.total_weight, run.solution.total_weight())?;
        writeln!(out, "{} {}", l.total_value, run.solution.total_value())
    }

    pub fn summary<W: Write>(&self, out: &mut W, comparison: &Comparison) -> io::Result<()> {
        let l = self.labels;

        writeln!(out)?;
        writeln!(out, "{}", self.paint(l.summary, AnsiColors::Green))?;
        writeln!(out, "{} {}; {} = {}", l.item_count, comparison.item_count, l.weight_short, comparison.capacity)?;
        self.summary_line(out, l.exhaustive_summary, &comparison.exhaustive)?;
        self.summary_line(out, l.greedy_summary, &comparison.greedy)
    }

    fn summary_line<W: Write>(&self, out: &mut W, label: &str, run: &Run) -> io::Result<()> {
        let l = self.labels;
        writeln!(
            out,
            "{} {} = {}, {} = {}, {} = {:.6}s",
            label,
            l.value_short, run.solution.total_value(),
            l.weight_short, run.solution.total_weight(),
            l.time_short, run.elapsed.as_secs_f64()
        )
    }

    /// The full report: catalog, both results and the summary.
    pub fn comparison<W: Write>(&self, out: &mut W, problem: &Problem, comparison: &Comparison) -> io::Result<()> {
        self.available(out, problem)?;
        self.run(out, self.labels.exhaustive_result, &comparison.exhaustive)?;
        self.run(out, self.labels.greedy_result, &comparison.greedy)?;
        self.summary(out, comparison)
    }
}
