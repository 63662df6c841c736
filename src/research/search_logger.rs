use colored::Colorize;

use crate::{OptimizerConfig, SeparationOptimizer, Step, Result};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;


const DEFAULT_ROUND: usize = 10;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Iteration,Score,LearningRate,Time\n";


/// Struct `SearchLogger` runs a [`SeparationOptimizer`]
/// and prints the score and step size every few iterations.
/// Optionally, every step is also written to a CSV file.
///
/// # Example
/// ```no_run
/// use tablelens::prelude::*;
///
/// let dataset = DatasetReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .class_column("class")
///     .read()
///     .unwrap();
/// let optimizer = SeparationOptimizer::init(&dataset)
///     .columns(vec![0, 1]);
/// let coefficients = SearchLogger::new(optimizer)
///     .print_every(5)
///     .run(&[None, None], Some("search.csv"))
///     .unwrap();
/// ```
pub struct SearchLogger<'a> {
    optimizer: SeparationOptimizer<'a>,
    round: usize,
}


impl<'a> SearchLogger<'a> {
    /// Create a new instance of `SearchLogger`.
    pub fn new(optimizer: SeparationOptimizer<'a>) -> Self {
        Self { optimizer, round: DEFAULT_ROUND }
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `10` steps.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round.max(1);
        self
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "SEP.".bold().blue(),
            "STEP".bold().green(),
            "".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ITER".bold().red(),
            "SCORE".bold().blue(),
            "SIZE".bold().green(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let config: &OptimizerConfig = self.optimizer.current_config();
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!("\n{header}");

        let info = [
            ("Transform", config.transform.to_string()),
            ("Learning rate", format!("{}", config.learning_rate)),
            ("Adaptive", format!("{}", config.adaptive)),
            ("Max iterations", format!("{}", config.max_iterations)),
            ("Tolerance", format!("{}", config.tolerance)),
            (
                "Coefficient bounds",
                format!("[{}, {}]", config.coeff_min, config.coeff_max),
            ),
        ];
        let line = info.into_iter()
            .map(|(key, val)| {
                format!(
                    "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                    key.bold(),
                    val.bold().green(),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        println!("{line}\n{:=^FULL_WIDTH$}\n", "".bold());
    }


    /// Run the optimizer with logging.
    /// If `file` is given, every step is written to it as a CSV row.
    pub fn run<P: AsRef<Path>>(&self, initial: &[Option<f64>], file: Option<P>)
        -> Result<Vec<f64>>
    {
        let mut file = match file {
            Some(path) => {
                let mut f = File::create(path)?;
                f.write_all(HEADER.as_bytes())?;
                Some(f)
            },
            None => None,
        };

        if self.round != usize::MAX {
            self.print_stats();
            self.print_log_header();
        }

        let start = Instant::now();
        let mut write_error = None;
        let mut last: Option<(usize, f64, f64)> = None;

        let coefficients = self.optimizer.run_with(initial, |step: &Step| {
            let iter = step.state.iteration;
            let score = step.score;
            let lr = step.state.learning_rate;
            let time = start.elapsed().as_millis();
            last = Some((iter, score, lr));

            if let Some(f) = file.as_mut() {
                let line = format!("{iter},{score},{lr},{time}\n");
                if let Err(e) = f.write_all(line.as_bytes()) {
                    write_error.get_or_insert(e);
                }
            }

            if self.round != usize::MAX && iter % self.round == 0 {
                println!(
                    "{} {}\t\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{:>WIDTH$}", iter).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", score).blue(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", lr).green(),
                    time_format(time).bold().cyan(),
                );
            }
        })?;

        if let Some(e) = write_error {
            return Err(e.into());
        }

        if let (true, Some((iter, score, lr))) = (self.round != usize::MAX, last) {
            println!(
                "{} {}\t\t{}\t{}\t{}\n",
                "[FIN]".bold().bright_green(),
                format!("{:>WIDTH$}", iter).red(),
                format!("{:>WIDTH$.PREC_WIDTH$}", score).bold().blue(),
                format!("{:>WIDTH$.PREC_WIDTH$}", lr).bold().green(),
                time_format(start.elapsed().as_millis()).bold().cyan(),
            );
        }

        Ok(coefficients)
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }

    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }

    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }

    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_formatted_by_magnitude() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(61_500), " 01m 01s");
    }
}
