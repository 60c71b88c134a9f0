//! Lottery catalog
//!
//! Static rules for the supported lotteries. Prize tiers are informative only;
//! nothing in the generator reads them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::LotteryRules;
use crate::error::DomainError;

/// Identifier of a lottery variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LotteryKey {
    Custom,
    #[default]
    MegaSena,
    Quina,
    Lotofacil,
    Lotomania,
    DuplaSena,
    MaisMilionaria,
}

impl LotteryKey {
    /// All keys in catalog order.
    pub const ALL: [LotteryKey; 7] = [
        LotteryKey::Custom,
        LotteryKey::MegaSena,
        LotteryKey::Quina,
        LotteryKey::Lotofacil,
        LotteryKey::Lotomania,
        LotteryKey::DuplaSena,
        LotteryKey::MaisMilionaria,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LotteryKey::Custom => "custom",
            LotteryKey::MegaSena => "mega_sena",
            LotteryKey::Quina => "quina",
            LotteryKey::Lotofacil => "lotofacil",
            LotteryKey::Lotomania => "lotomania",
            LotteryKey::DuplaSena => "dupla_sena",
            LotteryKey::MaisMilionaria => "mais_milionaria",
        }
    }
}

impl fmt::Display for LotteryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LotteryKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "custom" => Ok(LotteryKey::Custom),
            "mega_sena" | "megasena" => Ok(LotteryKey::MegaSena),
            "quina" => Ok(LotteryKey::Quina),
            "lotofacil" => Ok(LotteryKey::Lotofacil),
            "lotomania" => Ok(LotteryKey::Lotomania),
            "dupla_sena" | "duplasena" => Ok(LotteryKey::DuplaSena),
            "mais_milionaria" | "maismilionaria" => Ok(LotteryKey::MaisMilionaria),
            other => Err(DomainError::parse(format!("Unknown lottery: {}", other))),
        }
    }
}

/// A prize tier: how many hits win it and what it is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub hits: u8,
    pub name: String,
}

impl Prize {
    fn new(hits: u8, name: &str) -> Self {
        Self {
            hits,
            name: name.to_string(),
        }
    }
}

/// A lottery variant with its rules and prize table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lottery {
    pub key: LotteryKey,
    pub name: String,
    pub rules: LotteryRules,
    pub prizes: Vec<Prize>,
}

fn hits_tiers(hits: &[u8]) -> Vec<Prize> {
    hits.iter()
        .map(|&h| Prize::new(h, &format!("{} acertos", h)))
        .collect()
}

impl Lottery {
    /// Look up a lottery by key.
    pub fn get(key: LotteryKey) -> Self {
        let (name, rules, prizes) = match key {
            LotteryKey::Custom => (
                "Personalizado",
                LotteryRules::unique_sorted(1, 60, 1, 60),
                vec![],
            ),
            LotteryKey::MegaSena => (
                "Mega-Sena",
                LotteryRules::unique_sorted(1, 60, 6, 20),
                vec![
                    Prize::new(6, "Sena"),
                    Prize::new(5, "Quina"),
                    Prize::new(4, "Quadra"),
                ],
            ),
            LotteryKey::Quina => (
                "Quina",
                LotteryRules::unique_sorted(1, 80, 5, 15),
                vec![
                    Prize::new(5, "Quina"),
                    Prize::new(4, "Quadra"),
                    Prize::new(3, "Terno"),
                    Prize::new(2, "Duque"),
                ],
            ),
            LotteryKey::Lotofacil => (
                "Lotofácil",
                LotteryRules::unique_sorted(1, 25, 15, 20),
                hits_tiers(&[15, 14, 13, 12, 11]),
            ),
            LotteryKey::Lotomania => {
                let mut prizes = hits_tiers(&[20, 19, 18]);
                prizes.push(Prize::new(0, "Nenhum acerto"));
                (
                    "Lotomania",
                    LotteryRules::unique_sorted(0, 99, 50, 50),
                    prizes,
                )
            }
            LotteryKey::DuplaSena => (
                "Dupla Sena",
                LotteryRules::unique_sorted(1, 50, 6, 15),
                vec![
                    Prize::new(6, "Sena"),
                    Prize::new(5, "Quina"),
                    Prize::new(4, "Quadra"),
                    Prize::new(3, "Terno"),
                ],
            ),
            LotteryKey::MaisMilionaria => (
                "+Milionária",
                LotteryRules::unique_sorted(1, 50, 6, 6),
                vec![Prize::new(6, "6 números + trevos")],
            ),
        };

        Self {
            key,
            name: name.to_string(),
            rules,
            prizes,
        }
    }

    /// Every supported lottery, in catalog order.
    pub fn catalog() -> Vec<Self> {
        LotteryKey::ALL.iter().map(|&key| Self::get(key)).collect()
    }

    /// Pick count to use when the caller does not choose one.
    ///
    /// Switching lottery always resets the pick count to the minimum.
    pub fn default_picks(&self) -> usize {
        self.rules.picks_allowed.min
    }

    /// One-line summary, e.g. "Intervalo 1–60 • Dezenas 6–20".
    pub fn summary(&self) -> String {
        format!(
            "Intervalo {} • Dezenas {}",
            self.rules.range, self.rules.picks_allowed
        )
    }
}

impl Default for Lottery {
    fn default() -> Self {
        Self::get(LotteryKey::default())
    }
}
