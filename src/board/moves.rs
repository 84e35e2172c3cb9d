use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;

use super::{on_board, Companion, Location};
use crate::error::{GameError, Result};

/// A single ply: either a normal mover move or one companion action with its own payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Move the mover token onto the card at this location.
    Normal(Location),
    /// Copy the house of the targeted card twice into the holdings.
    Jon { target: Location },
    Gendry,
    /// Remove the targeted card from the game.
    Sandor { target: Location },
    /// Swap two cards; the mover may be one of them.
    Ramsay { first: Location, second: Location },
    /// Remove two cards and discard another companion.
    Jaqen { first: Location, second: Location, discard: Companion },
    Melisandre,
}

impl Move {
    pub fn companion(&self) -> Option<Companion> {
        match self {
            Move::Normal(_) => None,
            Move::Jon { .. } => Some(Companion::Jon),
            Move::Gendry => Some(Companion::Gendry),
            Move::Sandor { .. } => Some(Companion::Sandor),
            Move::Ramsay { .. } => Some(Companion::Ramsay),
            Move::Jaqen { .. } => Some(Companion::Jaqen),
            Move::Melisandre => Some(Companion::Melisandre),
        }
    }

    /// External shape: a bare location for normal moves, `[name, args...]` for companions.
    pub fn to_value(&self) -> Value {
        match *self {
            Move::Normal(loc) => json!(loc),
            Move::Jon { target } => json!(["Jon", target]),
            Move::Gendry => json!(["Gendry"]),
            Move::Sandor { target } => json!(["Sandor", target]),
            Move::Ramsay { first, second } => json!(["Ramsay", first, second]),
            Move::Jaqen { first, second, discard } => json!(["Jaqen", first, second, discard.name()]),
            Move::Melisandre => json!(["Melisandre"]),
        }
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(_) => Ok(Move::Normal(location(value)?)),
            Value::Array(items) => {
                let (head, args) = items.split_first().ok_or_else(|| GameError::MoveShape("empty companion move".into()))?;
                let name = head.as_str().ok_or_else(|| GameError::MoveShape(format!("companion tag must be a string, got {head}")))?;
                let companion: Companion = name.parse()?;
                let arity = match companion {
                    Companion::Gendry | Companion::Melisandre => 0,
                    Companion::Jon | Companion::Sandor => 1,
                    Companion::Ramsay => 2,
                    Companion::Jaqen => 3,
                };
                if args.len() != arity {
                    return Err(GameError::MoveShape(format!("{companion} takes {arity} argument(s), got {}", args.len())));
                }
                if arity >= 2 && args[0] == args[1] {
                    return Err(GameError::MoveShape(format!("{companion} needs two distinct locations")));
                }
                let mv = match companion {
                    Companion::Jon => Move::Jon { target: location(&args[0])? },
                    Companion::Gendry => Move::Gendry,
                    Companion::Sandor => Move::Sandor { target: location(&args[0])? },
                    Companion::Ramsay => Move::Ramsay { first: location(&args[0])?, second: location(&args[1])? },
                    Companion::Jaqen => {
                        let discard = args[2]
                            .as_str()
                            .ok_or_else(|| GameError::MoveShape(format!("Jaqen discard must be a companion name, got {}", args[2])))?
                            .parse::<Companion>()?;
                        if discard == Companion::Jaqen {
                            return Err(GameError::MoveShape("Jaqen cannot discard himself".into()));
                        }
                        Move::Jaqen { first: location(&args[0])?, second: location(&args[1])?, discard }
                    }
                    Companion::Melisandre => Move::Melisandre,
                };
                Ok(mv)
            }
            other => Err(GameError::MoveShape(format!("expected a location or a companion list, got {other}"))),
        }
    }

    pub fn from_json(s: &str) -> Result<Self> { Self::from_value(&serde_json::from_str(s)?) }
}

fn location(v: &Value) -> Result<Location> {
    let n = v.as_i64().ok_or_else(|| GameError::MoveShape(format!("expected a board location, got {v}")))?;
    let loc = Location::try_from(n).map_err(|_| GameError::LocationOutOfRange(n))?;
    if !on_board(loc) { return Err(GameError::LocationOutOfRange(n)); }
    Ok(loc)
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.to_value()) }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        Move::from_value(&v).map_err(D::Error::custom)
    }
}
