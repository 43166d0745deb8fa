//! Parsing of catalog lines into [`Record`]s.
//!
//! A catalog line looks like:
//!
//! ```text
//! 25,1,Pikachu,Mouse Pokémon,electric,,"['Static', 'Lightning Rod']",6.0,0.4,190,0,27/05/1996
//! ```
//!
//! The ability list is the only field that contains commas, so the line is cut
//! at its brackets first and the plain fields on either side are split on `,`.
//! Weight and height may be empty; they parse as `0.0`.

use crate::error::{DexError, Result};
use crate::model::{PokeType, Record};
use chrono::NaiveDate;
use std::str::FromStr;

/// Parses one catalog line. `line_no` is only used for error reporting.
pub fn parse_record(raw_line: &str, line_no: usize) -> Result<Record> {
    let line = raw_line.trim_end_matches(['\r', '\n']);
    let bad = |reason: String| DexError::malformed(line_no, reason);

    let open = line
        .find('[')
        .ok_or_else(|| bad("missing ability list".to_string()))?;
    let close = line[open..]
        .find(']')
        .map(|i| open + i)
        .ok_or_else(|| bad("unterminated ability list".to_string()))?;

    let head = line[..open].trim_end_matches('"');
    let tail = line[close + 1..].trim_start_matches('"');

    let head_fields: Vec<&str> = head.split(',').collect();
    if head_fields.len() < 6 {
        return Err(bad(format!(
            "expected at least 5 fields before the ability list, found {}",
            head_fields.len().saturating_sub(1)
        )));
    }

    let id = parse_field::<u16>(head_fields[0], "id").map_err(bad)?;
    let generation = parse_field::<u8>(head_fields[1], "generation").map_err(bad)?;
    let name = head_fields[2].to_string();
    let description = head_fields[3].to_string();
    let primary_type = PokeType::from_str(head_fields[4]).map_err(bad)?;
    let secondary_type = match head_fields[5].trim() {
        "" => None,
        other => Some(PokeType::from_str(other).map_err(bad)?),
    };
    if name.is_empty() {
        return Err(bad("missing name".to_string()));
    }

    let abilities = parse_abilities(&line[open + 1..close]);

    // The tail starts right after the closing quote, so its first field is empty.
    let tail_fields: Vec<&str> = tail.split(',').skip(1).collect();
    if tail_fields.len() < 5 {
        return Err(bad(format!(
            "expected 5 fields after the ability list, found {}",
            tail_fields.len()
        )));
    }

    let weight_kg = parse_optional_f64(tail_fields[0], "weight").map_err(bad)?;
    let height_m = parse_optional_f64(tail_fields[1], "height").map_err(bad)?;
    let capture_rate = parse_field::<u16>(tail_fields[2], "capture rate").map_err(bad)?;
    let is_legendary = parse_flag(tail_fields[3]).map_err(bad)?;
    let capture_date = parse_date(tail_fields[4]).map_err(bad)?;

    Ok(Record {
        id,
        generation,
        name,
        description,
        primary_type,
        secondary_type,
        abilities,
        weight_kg,
        height_m,
        capture_rate,
        is_legendary,
        capture_date,
    })
}

fn parse_field<T: FromStr>(raw: &str, what: &str) -> std::result::Result<T, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("invalid {} '{}'", what, raw))
}

fn parse_optional_f64(raw: &str, what: &str) -> std::result::Result<f64, String> {
    if raw.trim().is_empty() {
        Ok(0.0)
    } else {
        parse_field(raw, what)
    }
}

fn parse_flag(raw: &str) -> std::result::Result<bool, String> {
    match raw.trim() {
        "1" | "true" | "True" => Ok(true),
        "0" | "false" | "False" => Ok(false),
        other => Err(format!("invalid legendary flag '{}'", other)),
    }
}

fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y")
        .map_err(|_| format!("invalid capture date '{}'", raw.trim()))
}

/// Splits the inside of `['a', 'b']` into owned, unquoted names.
fn parse_abilities(inner: &str) -> Vec<String> {
    inner
        .split(',')
        .map(|a| a.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = "25,1,Pikachu,Mouse Pokémon,electric,,\"['Static', 'Lightning Rod']\",6.0,0.4,190,0,27/05/1996";

    #[test]
    fn parses_full_line() {
        let rec = parse_record(PIKACHU, 2).unwrap();
        assert_eq!(rec.id, 25);
        assert_eq!(rec.generation, 1);
        assert_eq!(rec.name, "Pikachu");
        assert_eq!(rec.description, "Mouse Pokémon");
        assert_eq!(rec.primary_type, PokeType::Electric);
        assert_eq!(rec.secondary_type, None);
        assert_eq!(rec.abilities, vec!["Static", "Lightning Rod"]);
        assert_eq!(rec.weight_kg, 6.0);
        assert_eq!(rec.height_m, 0.4);
        assert_eq!(rec.capture_rate, 190);
        assert!(!rec.is_legendary);
        assert_eq!(rec.capture_date, NaiveDate::from_ymd_opt(1996, 5, 27).unwrap());
    }

    #[test]
    fn parses_second_type_and_legendary() {
        let line = "6,1,Charizard,Flame Pokémon,fire,flying,\"['Blaze', 'Solar Power']\",90.5,1.7,45,1,01/02/1997\r\n";
        let rec = parse_record(line, 3).unwrap();
        assert_eq!(rec.secondary_type, Some(PokeType::Flying));
        assert!(rec.is_legendary);
        assert_eq!(rec.capture_date, NaiveDate::from_ymd_opt(1997, 2, 1).unwrap());
    }

    #[test]
    fn empty_weight_and_height_default_to_zero() {
        let line = "19,1,Rattata,Mouse Pokémon,normal,,\"['Run Away', 'Guts', 'Hustle']\",,,255,0,10/10/1999";
        let rec = parse_record(line, 4).unwrap();
        assert_eq!(rec.weight_kg, 0.0);
        assert_eq!(rec.height_m, 0.0);
        assert_eq!(rec.abilities.len(), 3);
    }

    #[test]
    fn unquoted_single_ability_list() {
        let line = "1,1,Bulbasaur,Seed Pokémon,grass,poison,['Overgrow'],6.9,0.7,45,0,05/04/1996";
        let rec = parse_record(line, 2).unwrap();
        assert_eq!(rec.abilities, vec!["Overgrow"]);
        assert_eq!(rec.secondary_type, Some(PokeType::Poison));
    }

    #[test]
    fn missing_ability_list_is_malformed() {
        let err = parse_record("1,1,Bulbasaur,Seed,grass,,6.9,0.7,45,0,05/04/1996", 7).unwrap_err();
        assert!(matches!(err, DexError::MalformedInput { line: 7, .. }));
    }

    #[test]
    fn truncated_tail_is_malformed() {
        let err = parse_record("1,1,Bulbasaur,Seed,grass,,\"['Overgrow']\",6.9,0.7", 2).unwrap_err();
        assert!(matches!(err, DexError::MalformedInput { .. }));
    }

    #[test]
    fn unknown_type_is_malformed() {
        let line = PIKACHU.replace("electric", "plasma");
        let err = parse_record(&line, 5).unwrap_err();
        assert!(err.to_string().contains("plasma"));
    }

    #[test]
    fn bad_date_is_malformed() {
        let line = PIKACHU.replace("27/05/1996", "31/02/1996");
        assert!(parse_record(&line, 2).is_err());
    }
}
