//! Console query collection.
//!
//! Every prompt re-asks until it gets an acceptable answer.  End of input
//! at any prompt ends the session (`Ok(None)` / `Ok(false)`).

use std::io::{self, BufRead, Write};

use nav_core::{CityId, PlannerConfig, Speed};
use nav_spatial::{RoadNetwork, RouteQuery};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask for source, destination and speed.
    pub fn query(
        &mut self,
        network: &RoadNetwork,
        config: &PlannerConfig,
    ) -> io::Result<Option<RouteQuery>> {
        let Some(source) = self.city(network, "\nEnter Start Location ID")? else {
            return Ok(None);
        };
        let Some(destination) = self.city(network, "Enter Destination ID")? else {
            return Ok(None);
        };
        let Some(speed) = self.speed(config)? else {
            return Ok(None);
        };
        Ok(Some(RouteQuery::new(source, destination, speed)))
    }

    /// Ask for a city by id or by name.
    pub fn city(&mut self, network: &RoadNetwork, label: &str) -> io::Result<Option<CityId>> {
        let (lo, hi) = network.id_range().unwrap_or((CityId(0), CityId(0)));
        loop {
            write!(self.output, "{label} ({}-{}): ", lo.0, hi.0)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let answer = line.trim();
            let id = match answer.parse::<u32>() {
                Ok(n) => Some(CityId(n)),
                Err(_) => network.find_city(answer),
            };
            match id {
                Some(id) if network.contains(id) => return Ok(Some(id)),
                _ => writeln!(
                    self.output,
                    "Invalid Input! Please enter a number between {} and {}.",
                    lo.0, hi.0
                )?,
            }
        }
    }

    /// Ask for an average speed within the configured bounds.
    pub fn speed(&mut self, config: &PlannerConfig) -> io::Result<Option<Speed>> {
        let (lo, hi) = (config.min_speed_kmh, config.max_speed_kmh);
        loop {
            write!(self.output, "Enter Average Speed ({lo}-{hi} km/h): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let speed = line
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|&kmh| config.accepts_speed(kmh))
                .and_then(|kmh| Speed::new(kmh).ok());
            match speed {
                Some(speed) => return Ok(Some(speed)),
                None => writeln!(
                    self.output,
                    "Unrealistic speed! Please keep it between {lo} and {hi}."
                )?,
            }
        }
    }

    /// `true` if the user wants another trip.
    pub fn ask_again(&mut self) -> io::Result<bool> {
        write!(self.output, "\nDo you want to plan another trip? (y/n): ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
