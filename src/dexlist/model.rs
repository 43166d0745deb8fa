use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokeType {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Grass,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

impl PokeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PokeType::Bug => "bug",
            PokeType::Dark => "dark",
            PokeType::Dragon => "dragon",
            PokeType::Electric => "electric",
            PokeType::Fairy => "fairy",
            PokeType::Fighting => "fighting",
            PokeType::Fire => "fire",
            PokeType::Flying => "flying",
            PokeType::Ghost => "ghost",
            PokeType::Grass => "grass",
            PokeType::Ground => "ground",
            PokeType::Ice => "ice",
            PokeType::Normal => "normal",
            PokeType::Poison => "poison",
            PokeType::Psychic => "psychic",
            PokeType::Rock => "rock",
            PokeType::Steel => "steel",
            PokeType::Water => "water",
        }
    }
}

impl fmt::Display for PokeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PokeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.trim().to_ascii_lowercase().as_str() {
            "bug" => PokeType::Bug,
            "dark" => PokeType::Dark,
            "dragon" => PokeType::Dragon,
            "electric" => PokeType::Electric,
            "fairy" => PokeType::Fairy,
            "fighting" => PokeType::Fighting,
            "fire" => PokeType::Fire,
            "flying" => PokeType::Flying,
            "ghost" => PokeType::Ghost,
            "grass" => PokeType::Grass,
            "ground" => PokeType::Ground,
            "ice" => PokeType::Ice,
            "normal" => PokeType::Normal,
            "poison" => PokeType::Poison,
            "psychic" => PokeType::Psychic,
            "rock" => PokeType::Rock,
            "steel" => PokeType::Steel,
            "water" => PokeType::Water,
            other => return Err(format!("unknown type '{}'", other)),
        };
        Ok(parsed)
    }
}

/// One catalog entry.
///
/// `Clone` is a deep copy: the ability list and strings are owned, so a
/// clone never shares mutable state with its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u16,
    pub generation: u8,
    pub name: String,
    pub description: String,
    pub primary_type: PokeType,
    pub secondary_type: Option<PokeType>,
    pub abilities: Vec<String>,
    pub weight_kg: f64,
    pub height_m: f64,
    pub capture_rate: u16,
    pub is_legendary: bool,
    pub capture_date: NaiveDate,
}

impl Record {
    pub fn types(&self) -> impl Iterator<Item = PokeType> + '_ {
        std::iter::once(self.primary_type).chain(self.secondary_type)
    }
}

fn write_quoted_list<I, S>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = S>,
    S: fmt::Display,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "'{}'", item)?;
    }
    f.write_str("]")
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[#{} -> {}: {} - ", self.id, self.name, self.description)?;
        write_quoted_list(f, self.types())?;
        f.write_str(" - ")?;
        write_quoted_list(f, &self.abilities)?;
        write!(
            f,
            " - {:.1}kg - {:.1}m - {}% - {} - {} gen] - {:02}/{:02}/{:04}",
            self.weight_kg,
            self.height_m,
            self.capture_rate,
            self.is_legendary,
            self.generation,
            self.capture_date.day(),
            self.capture_date.month(),
            self.capture_date.year()
        )
    }
}

/// Canonical single-line rendering of a record.
pub fn format_record(record: &Record) -> String {
    record.to_string()
}
