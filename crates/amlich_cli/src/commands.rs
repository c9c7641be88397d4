//! Rendering of each subcommand's output.

use std::fmt::Write;

use amlich_rs::{
    CalendarConfig, SolarDate, SolarMatch, day_info_with, festival_dates_with, lunar_month_name,
    lunar_to_solar_with, lunar_year_name, lunar_year_with, month_grid_with,
};
use anyhow::{Context, Result};
use tracing::info;

pub fn lunar(date: &str, config: &CalendarConfig) -> Result<String> {
    let date: SolarDate = date.parse().context("invalid solar date")?;
    let info = day_info_with(date, config);
    info!(%date, lunar = %info.lunar, "lunar");

    let mut out = String::new();
    writeln!(out, "Solar:   {} ({})", info.solar, info.weekday.short_label())?;
    writeln!(out, "Lunar:   {}", info.lunar)?;
    writeln!(out, "Year:    {}", info.year_name)?;
    writeln!(out, "Month:   {} ({})", info.month_name, info.month_can_chi)?;
    writeln!(out, "Day:     {}", info.day_can_chi)?;
    if let Some(special) = info.special {
        writeln!(out, "Special: {}", special.name())?;
    }
    Ok(out)
}

pub fn solar(day: u32, month: u32, year: i32, leap: bool, config: &CalendarConfig) -> Result<String> {
    let found = lunar_to_solar_with(day, month, year, leap, config)?;
    info!(day, month, year, leap, date = %found.date(), "solar");
    Ok(match found {
        SolarMatch::Exact(date) => format!("{date}\n"),
        SolarMatch::Approximate { date, reason } => format!("{date} (approximate: {reason})\n"),
    })
}

pub fn year(year: i32, config: &CalendarConfig) -> Result<String> {
    let table = lunar_year_with(year, config);
    let mut out = String::new();
    let tet = table.tet().map(|d| d.to_string()).unwrap_or_default();
    let leap = table
        .leap_month()
        .map_or_else(|| "none".to_string(), |m| m.to_string());
    writeln!(out, "Lunar year {year} ({})", lunar_year_name(year))?;
    writeln!(out, "Tết: {tet}, leap month: {leap}")?;
    for m in &table.months {
        writeln!(
            out,
            "  {:<10} {}  {} days",
            lunar_month_name(m.month, m.leap),
            m.start(),
            m.days
        )?;
    }
    Ok(out)
}

pub fn month(year: i32, month: u32, config: &CalendarConfig) -> Result<String> {
    let grid = month_grid_with(year, month, config)?;
    let mut out = String::new();
    writeln!(out, "{year}-{month:02}")?;
    let header: Vec<String> = ["CN", "T2", "T3", "T4", "T5", "T6", "T7"]
        .iter()
        .map(|d| format!("{d:>9}"))
        .collect();
    writeln!(out, "{}", header.concat())?;
    for week in grid.chunks(7) {
        let mut line = String::new();
        for cell in week {
            if !cell.in_month {
                line.push_str(&" ".repeat(9));
                continue;
            }
            let lunar = if cell.lunar.day == 1 {
                format!("{}/{}", cell.lunar.day, cell.lunar.month)
            } else {
                cell.lunar.day.to_string()
            };
            let mark = if cell.special.is_some() { "*" } else { " " };
            write!(line, "{:>3} {:>4}{mark}", cell.date.day, lunar)?;
        }
        let line = line.trim_end();
        if !line.is_empty() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(out)
}

pub fn festivals(year: i32, config: &CalendarConfig) -> Result<String> {
    let mut out = String::new();
    for f in festival_dates_with(year, config) {
        writeln!(
            out,
            "{}  {:>5}  {}",
            f.date,
            format!("{}/{}", f.lunar_day, f.lunar_month),
            f.festival.name()
        )?;
    }
    Ok(out)
}
