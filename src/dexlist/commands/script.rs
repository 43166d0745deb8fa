//! Parsing of the driver input.
//!
//! The input has two parts. First comes the selection: one 1-based catalog
//! key per line, up to a sentinel line (`FIM` by default). Everything after
//! the sentinel is a whitespace-separated command stream:
//!
//! ```text
//! I   <key>          insert at the back      (IF is accepted too)
//! II  <key>          insert at the front
//! I*  <pos> <key>    insert at 0-based pos
//! R                  remove from the back    (RF is accepted too)
//! RI                 remove from the front
//! R*  <pos>          remove at 0-based pos
//! ```
//!
//! A bare number before the first command is a command count and is skipped.

use crate::commands::{Command, Placement};
use crate::error::{DexError, Result};
use std::str::FromStr;

pub const DEFAULT_SENTINEL: &str = "FIM";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub selection: Vec<usize>,
    pub commands: Vec<Command>,
}

impl Script {
    pub fn parse(input: &str, sentinel: &str) -> Result<Self> {
        let mut lines = input.lines().enumerate();
        let mut selection = Vec::new();
        let mut found_sentinel = false;

        for (idx, line) in lines.by_ref() {
            let trimmed = line.trim();
            if trimmed == sentinel {
                found_sentinel = true;
                break;
            }
            if trimmed.is_empty() {
                continue;
            }
            selection.push(parse_number::<usize>(trimmed, idx + 1, "catalog key")?);
        }

        let mut commands = Vec::new();
        if found_sentinel {
            let tokens = lines.flat_map(|(idx, line)| {
                line.split_whitespace().map(move |tok| Token {
                    text: tok,
                    line: idx + 1,
                })
            });
            commands = parse_commands(tokens)?;
        }

        Ok(Self {
            selection,
            commands,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    line: usize,
}

fn parse_commands<'a>(tokens: impl Iterator<Item = Token<'a>>) -> Result<Vec<Command>> {
    let mut tokens = tokens.peekable();
    let mut commands = Vec::new();

    // Optional leading command count.
    if let Some(tok) = tokens.peek() {
        if tok.text.parse::<usize>().is_ok() {
            tokens.next();
        }
    }

    while let Some(op) = tokens.next() {
        let mut operand = |what: &str| -> Result<Token<'a>> {
            tokens.next().ok_or_else(|| {
                DexError::malformed(op.line, format!("'{}' is missing its {}", op.text, what))
            })
        };

        let command = match op.text {
            "I" | "IF" => Command::Insert {
                at: Placement::Back,
                key: key_operand(operand("key")?)?,
            },
            "II" => Command::Insert {
                at: Placement::Front,
                key: key_operand(operand("key")?)?,
            },
            "I*" => {
                let pos = pos_operand(operand("position")?)?;
                Command::Insert {
                    at: Placement::At(pos),
                    key: key_operand(operand("key")?)?,
                }
            }
            "R" | "RF" => Command::Remove {
                at: Placement::Back,
            },
            "RI" => Command::Remove {
                at: Placement::Front,
            },
            "R*" => Command::Remove {
                at: Placement::At(pos_operand(operand("position")?)?),
            },
            other => {
                return Err(DexError::malformed(
                    op.line,
                    format!("unknown command '{}'", other),
                ))
            }
        };
        commands.push(command);
    }

    Ok(commands)
}

fn key_operand(tok: Token<'_>) -> Result<usize> {
    parse_number(tok.text, tok.line, "catalog key")
}

fn pos_operand(tok: Token<'_>) -> Result<i64> {
    parse_number(tok.text, tok.line, "position")
}

fn parse_number<T: FromStr>(text: &str, line: usize, what: &str) -> Result<T> {
    text.parse()
        .map_err(|_| DexError::malformed(line, format!("invalid {} '{}'", what, text)))
}
