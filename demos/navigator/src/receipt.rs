//! Plain-text rendering: banner, city menu, itinerary receipt, failures.

use std::io::{self, Write};

use nav_spatial::{Route, RoadNetwork, SpatialError};

const HEAVY_RULE: &str = "########################################################";
const LIGHT_RULE: &str = "--------------------------------------------------------";
const BANNER_RULE: &str = "=============================================";

/// Widest leg label that fits the first column.
const LEG_WIDTH: usize = 18;

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{BANNER_RULE}")?;
    writeln!(out, "      PAKISTAN INTER-CITY ROUTE FINDER       ")?;
    writeln!(out, "{BANNER_RULE}")
}

/// Available cities, three per row.
pub fn write_menu<W: Write>(out: &mut W, network: &RoadNetwork) -> io::Result<()> {
    writeln!(out, "\n--- AVAILABLE CITIES ---")?;
    let mut count = 0;
    for (id, name) in network.cities() {
        write!(out, "{:<3}. {:<15}", id.0, name)?;
        count += 1;
        if count % 3 == 0 {
            writeln!(out)?;
        }
    }
    if count % 3 != 0 {
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_receipt<W: Write>(out: &mut W, route: &Route) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{HEAVY_RULE}")?;
    writeln!(out, "              SMART ROUTE NAVIGATOR RESULTS             ")?;
    writeln!(out, "{HEAVY_RULE}")?;
    writeln!(out, " Origin      : {}", route.origin_name)?;
    writeln!(out, " Destination : {}", route.destination_name)?;
    writeln!(out, " Avg Speed   : {}", route.speed)?;
    writeln!(out, "{LIGHT_RULE}")?;
    writeln!(out, "{:<20}{:<18}{:<10}Dist.", "Leg From -> To", "Via Road", "Cond.")?;
    writeln!(out, "{LIGHT_RULE}")?;

    for leg in &route.legs {
        let label: String = format!("{}->{}", leg.from_name, leg.to_name)
            .chars()
            .take(LEG_WIDTH)
            .collect();
        writeln!(
            out,
            "{:<20}{:<18}{:<10}{} km",
            label, leg.road_name, leg.traffic.label(), leg.distance_km
        )?;
    }

    writeln!(out, "{LIGHT_RULE}")?;
    let (hours, minutes) = route.hours_minutes();
    writeln!(out, "{:>35}{:>10} km", "TOTAL DISTANCE : ", route.total_distance_km)?;
    writeln!(out, "{:>35}{hours}h {minutes}m", "ESTIMATED TIME : ")?;
    writeln!(out, "{:>35}{:.1} L", "FUEL REQUIRED : ", route.total_fuel_l)?;
    writeln!(out, "{:>35}PKR {:.2}", "EST. FUEL COST : ", route.fuel_cost)?;
    writeln!(out, "{HEAVY_RULE}")?;
    writeln!(out, "Note: Traffic conditions may vary based on weather.")
}

pub fn write_failure<W: Write>(out: &mut W, err: &SpatialError) -> io::Result<()> {
    match err {
        SpatialError::InvalidCity(_) => writeln!(out, "Invalid City ID Selected!"),
        SpatialError::Unreachable { .. } => {
            writeln!(out, "\nError: No road connection exists between these cities.")
        }
        other => writeln!(out, "\nError: {other} ({})", other.reason()),
    }
}

pub fn write_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nThank you for using Smart Route Navigator. Drive Safely!")
}
