//! Fuel price series ingestion. The public export ("Kraftstoffpreise an
//! öffentlichen Tankstellen") starts with five metadata lines, separates
//! columns with semicolons and writes prices with German decimal commas.

use std::{fs, path::Path};

use chrono::NaiveDate;
use model::fuel::FuelPriceDay;
use serde::Deserialize;

use crate::{DatasetError, DatasetResult};

/// Metadata lines before the header row.
const PREAMBLE_LINES: usize = 5;

#[derive(Debug, Deserialize)]
struct FuelRow {
    #[serde(rename = "Datum")]
    date: String,
    #[serde(rename = "Super E10")]
    super_e10: String,
    #[serde(rename = "Diesel")]
    diesel: String,
    #[serde(rename = "Super E5")]
    super_e5: String,
}

impl FuelRow {
    fn into_day(self) -> Option<FuelPriceDay> {
        Some(FuelPriceDay {
            date: parse_date(&self.date)?,
            super_e10: parse_price(&self.super_e10)?,
            diesel: parse_price(&self.diesel)?,
            super_e5: parse_price(&self.super_e5)?,
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d.%m.%Y"))
        .ok()
}

fn parse_price(value: &str) -> Option<f64> {
    value.trim().replace(',', ".").parse().ok()
}

pub fn read_fuel_csv(path: impl AsRef<Path>) -> DatasetResult<Vec<FuelPriceDay>> {
    let content = fs::read_to_string(path)?;
    parse_fuel_export(&content)
}

pub fn parse_fuel_export(content: &str) -> DatasetResult<Vec<FuelPriceDay>> {
    let table = content
        .lines()
        .skip(PREAMBLE_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(table.as_bytes());

    let mut days = Vec::new();
    for (index, row) in reader.deserialize::<FuelRow>().enumerate() {
        match row {
            Ok(row) => match row.into_day() {
                Some(day) => days.push(day),
                None => log::warn!(
                    "skipping fuel price row {}: unparseable date or price",
                    index + PREAMBLE_LINES + 2
                ),
            },
            Err(why) => log::warn!(
                "skipping fuel price row {}: {}",
                index + PREAMBLE_LINES + 2,
                why
            ),
        }
    }

    if days.is_empty() {
        return Err(DatasetError::NoUsableRows);
    }

    // Analysis assumes a date-ascending series; exports are usually sorted
    // already, but do not rely on it.
    days.sort_by_key(|day| day.date);
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const EXPORT: &str = "\
Kraftstoffpreise an öffentlichen Tankstellen
Quelle: Tankstellenmeldungen
Bundesdurchschnitt, EUR/l
Stand: 2024-03-01

Datum;Super E10;Diesel;Super E5
2024-01-02;1,759;1,689;1,819
2024-01-01;1,749;1,679;1,809
2024-01-03;kaputt;1,70;1,80
2024-01-04;1,769;1,699;1,829";

    #[test]
    fn parses_the_export_format_and_sorts_by_date() {
        let days = parse_fuel_export(EXPORT).unwrap();

        // The broken row is dropped, the out-of-order rows are sorted.
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
        assert_relative_eq!(days[0].super_e10, 1.749);
        assert_relative_eq!(days[0].diesel, 1.679);
        assert_relative_eq!(days[0].super_e5, 1.809);
    }

    #[test]
    fn german_date_format_is_accepted() {
        let export = "\
a
b
c
d

Datum;Super E10;Diesel;Super E5
02.01.2024;1,75;1,68;1,81";
        let days = parse_fuel_export(export).unwrap();
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn an_export_without_data_rows_is_an_error() {
        let export = "a\nb\nc\nd\n\nDatum;Super E10;Diesel;Super E5\n";
        assert!(matches!(
            parse_fuel_export(export),
            Err(DatasetError::NoUsableRows)
        ));
    }
}
