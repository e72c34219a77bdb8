//! Interactive wing polar calculator.
//!
//! Prompts for wing sections and a flight condition, solves the wing with the
//! analytic thin-airfoil section model, and prints the polar. Invalid entries
//! are asked for again. Closing the input ends the session.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};

use thiserror::Error;
use uom::si::{
    angle::degree,
    f64::{Angle, Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};
use wing_polar::{
    models::aero::wing::{Airfoil, FlightCondition, GeometryError, Section, WingSolver},
    support::{
        constraint::{
            CamberBounds, CamberPositionBounds, ClosedRange, ConstraintError, NonNegative,
            StrictlyPositive, ThicknessBounds,
        },
        section_model::ThinAirfoilModel,
    },
};

#[derive(Debug, Error)]
enum CliError {
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

fn main() -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock());

    match run(&mut console) {
        Err(CliError::Closed) => {
            println!();
            Ok(())
        }
        other => other,
    }
}

fn run<R: BufRead>(console: &mut Console<R>) -> Result<(), CliError> {
    let solver = WingSolver::new(ThinAirfoilModel::default());

    println!("\n===== Wing Polar (Multi-Section) =====\n");

    loop {
        let sections = read_sections(console)?;
        let flight = read_flight(console)?;

        println!("\nSolving...\n");
        match solver.solve(&sections, &flight) {
            Ok(polar) => {
                println!("====== RESULTS ======");
                println!("{polar}");
                println!("=====================");
            }
            Err(err) => println!("Solve failed: {err}"),
        }

        let again = console.ask("\nRun another case? (y/n): ", |text| {
            match text.to_ascii_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Err("answer y or n"),
            }
        })?;
        if !again {
            println!("\nGoodbye.\n");
            return Ok(());
        }
    }
}

fn read_sections<R: BufRead>(console: &mut Console<R>) -> Result<Vec<Section>, CliError> {
    let count = console.ask("Number of wing sections: ", |text| {
        match text.parse::<usize>() {
            Ok(n) if n >= 2 => Ok(n),
            _ => Err("enter a whole number of at least 2"),
        }
    })?;

    println!("\n--- Enter Section Data ---");

    let mut sections = Vec::with_capacity(count);
    for index in 0..count {
        println!("\nSection {}", index + 1);

        let y = console.ask("Spanwise position y (m, from root): ", |text| {
            constrained(text, |v| NonNegative::new(v).map(|c| c.into_inner()))
        })?;
        let chord = console.ask("Chord (m): ", |text| {
            constrained(text, |v| StrictlyPositive::new(v).map(|c| c.into_inner()))
        })?;
        let twist = console.ask("Twist (deg, +up): ", finite)?;
        let sweep = console.ask("Sweep (deg): ", |text| {
            finite(text).and_then(|v| {
                if v.abs() < 90.0 {
                    Ok(v)
                } else {
                    Err(InputError::Message("sweep must be between -90 and 90 degrees"))
                }
            })
        })?;
        let m = console.ask("NACA camber m [0, 0.09]: ", |text| {
            constrained(text, |v| ClosedRange::<CamberBounds>::new(v).map(|c| c.into_inner()))
        })?;
        let p = console.ask("NACA camber position p [0, 0.9]: ", |text| {
            constrained(text, |v| {
                ClosedRange::<CamberPositionBounds>::new(v).map(|c| c.into_inner())
            })
        })?;
        let t = console.ask("NACA thickness t [0, 0.18]: ", |text| {
            constrained(text, |v| ClosedRange::<ThicknessBounds>::new(v).map(|c| c.into_inner()))
        })?;

        sections.push(Section::new(
            Length::new::<meter>(y),
            Length::new::<meter>(chord),
            Angle::new::<degree>(twist),
            Angle::new::<degree>(sweep),
            Airfoil::new(m, p, t)?,
        )?);
    }

    Ok(sections)
}

fn read_flight<R: BufRead>(console: &mut Console<R>) -> Result<FlightCondition, CliError> {
    println!("\n--- Flight Conditions ---");

    let alpha = console.ask("Angle of attack (deg): ", finite)?;
    let velocity = console.ask("Velocity (m/s): ", |text| {
        constrained(text, |v| StrictlyPositive::new(v).map(|c| c.into_inner()))
    })?;
    let span = console.ask("Wing span (m): ", |text| {
        constrained(text, |v| StrictlyPositive::new(v).map(|c| c.into_inner()))
    })?;

    Ok(FlightCondition::new_unchecked(
        Angle::new::<degree>(alpha),
        Velocity::new::<meter_per_second>(velocity),
        Length::new::<meter>(span),
    ))
}

/// Reasons a single entry is rejected.
#[derive(Debug, Error)]
enum InputError {
    #[error("not a finite number")]
    NotANumber,

    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error("{0}")]
    Message(&'static str),
}

fn finite(text: &str) -> Result<f64, InputError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber),
    }
}

fn constrained(
    text: &str,
    check: impl Fn(f64) -> Result<f64, ConstraintError>,
) -> Result<f64, InputError> {
    Ok(check(finite(text)?)?)
}

/// Line-oriented prompts over a buffered reader.
struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    fn new(input: R) -> Self {
        Self { input }
    }

    fn line(&mut self, label: &str) -> Result<String, CliError> {
        print!("{label}");
        io::stdout().flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(CliError::Closed);
        }
        Ok(buf.trim().to_owned())
    }

    /// Prompts until `parse` accepts the entry.
    fn ask<T, E: Display>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<T, CliError> {
        loop {
            match parse(&self.line(label)?) {
                Ok(value) => return Ok(value),
                Err(err) => println!("  Invalid input: {err}. Please try again."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8]> {
        Console::new(input.as_bytes())
    }

    fn chord(text: &str) -> Result<f64, InputError> {
        constrained(text, |v| StrictlyPositive::new(v).map(|c| c.into_inner()))
    }

    #[test]
    fn ask_prompts_again_until_the_entry_is_valid() {
        let mut console = console("abc\n-1\n0\ninf\n  2.5  \n");
        assert_eq!(console.ask("Chord (m): ", chord).unwrap(), 2.5);
    }

    #[test]
    fn ask_reports_closed_input() {
        let mut console = console("-1\n");
        assert!(matches!(
            console.ask("Chord (m): ", chord),
            Err(CliError::Closed)
        ));
    }

    #[test]
    fn entry_checks_name_the_violation() {
        assert!(matches!(chord("nan"), Err(InputError::NotANumber)));
        assert!(matches!(
            chord("-3"),
            Err(InputError::Constraint(ConstraintError::Negative))
        ));
        assert!(matches!(chord("1.2"), Ok(v) if v == 1.2));
    }

    #[test]
    fn reads_sections_and_skips_rejected_entries() {
        let input = "1\n2\n\
            0\n1.5\n0\n0\n0.02\n0.4\n0.12\n\
            2\n1.2\n-1\n95\n10\n0.02\n0.4\n0.2\n0.12\n";
        let sections = read_sections(&mut console(input)).unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].y(), Length::new::<meter>(2.0));
        assert_eq!(sections[1].sweep(), Angle::new::<degree>(10.0));
        assert_eq!(sections[1].airfoil().thickness(), 0.12);
    }

    #[test]
    fn reads_flight_condition() {
        let flight = read_flight(&mut console("5\n-40\n40\n0\n6\n")).unwrap();

        assert_eq!(flight.alpha(), Angle::new::<degree>(5.0));
        assert_eq!(flight.span(), Length::new::<meter>(6.0));
    }
}
