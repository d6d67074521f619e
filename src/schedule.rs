use std::io::Read;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::line_score::entities::UNKNOWN_TEAM;
use crate::teams::ResolveName;
use crate::util::{non_empty, parse_opt};

const UPDATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(
    Debug, Eq, PartialEq, Copy, Clone, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum GameStatus {
    #[strum(serialize = "✅ 已結束")]
    #[serde(rename = "✅ 已結束")]
    Final,
    #[strum(serialize = "🔴 進行中")]
    #[serde(rename = "🔴 進行中")]
    Live,
    #[strum(serialize = "❌ 取消")]
    #[serde(rename = "❌ 取消")]
    Canceled,
    #[strum(serialize = "⏰ 未開始")]
    #[serde(rename = "⏰ 未開始")]
    Scheduled,
}

impl GameStatus {
    /// Status implied by a scoreboard element's class list. `final` beats
    /// `live`, which beats `canceled`; anything else has not started.
    pub fn from_classes(class_list: &str) -> Self {
        let has = |class: &str| class_list.split_whitespace().any(|c| c == class);
        if has("final") {
            Self::Final
        } else if has("live") {
            Self::Live
        } else if has("canceled") {
            Self::Canceled
        } else {
            Self::Scheduled
        }
    }
}

/// One game entry from a scoreboard snapshot. Every field is optional in the
/// file; scores are kept as the provider's strings.
#[derive(Debug, Eq, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledGame {
    pub away_team: String,
    pub home_team: String,
    pub away_score: String,
    pub home_score: String,
    #[serde(deserialize_with = "lenient_status")]
    pub status: Option<GameStatus>,
    pub inning: String,
    pub game_time: String,
    pub element_class: String,
    pub element_id: String,
    pub game_link: String,
    pub source: String,
}

impl ScheduledGame {
    pub fn status(&self) -> GameStatus {
        self.status
            .unwrap_or_else(|| GameStatus::from_classes(&self.element_class))
    }

    pub fn away_score(&self) -> Option<u32> {
        parse_opt(&self.away_score)
    }

    pub fn home_score(&self) -> Option<u32> {
        parse_opt(&self.home_score)
    }

    fn matchup_key(&self) -> (String, String) {
        (
            self.away_team.trim().to_string(),
            self.home_team.trim().to_string(),
        )
    }

    /// One-line message for the game with team names resolved for display.
    pub fn summary<R: ResolveName + ?Sized>(&self, resolver: &R) -> String {
        let display = |label: &str| {
            let name = resolver.resolve(label);
            if name.is_empty() {
                UNKNOWN_TEAM.to_string()
            } else {
                name
            }
        };
        let away = display(&self.away_team);
        let home = display(&self.home_team);
        let status = self.status();

        let score = self.away_score().zip(self.home_score());
        match (status, score) {
            (GameStatus::Live, Some((a, h))) => match non_empty(&self.inning) {
                Some(inning) => format!("{status} {away} {a} - {h} {home}（{inning}）"),
                None => format!("{status} {away} {a} - {h} {home}"),
            },
            (GameStatus::Final, Some((a, h))) => format!("{status} {away} {a} - {h} {home}"),
            (GameStatus::Scheduled, _) => match non_empty(&self.game_time) {
                Some(time) => format!("{status} {away} vs {home} {time}"),
                None => format!("{status} {away} vs {home}"),
            },
            _ => format!("{status} {away} vs {home}"),
        }
    }
}

/// A saved scoreboard: the day's games and when they were captured.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize)]
pub struct Snapshot {
    #[serde(deserialize_with = "deserialize_update_time")]
    pub update_time: NaiveDateTime,
    #[serde(default)]
    pub total_games: usize,
    #[serde(default)]
    games: Vec<ScheduledGame>,
    #[serde(default)]
    pub source: String,
}

impl Snapshot {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("Failed to read scoreboard snapshot")
    }

    /// Games with duplicate away/home pairings removed; the first entry wins.
    pub fn games(&self) -> Vec<&ScheduledGame> {
        self.games
            .iter()
            .unique_by(|g| g.matchup_key())
            .collect()
    }

    pub fn render<R: ResolveName + ?Sized>(&self, resolver: &R) -> String {
        let header = format!(
            "更新時間：{}",
            self.update_time.format(UPDATE_TIME_FORMAT)
        );
        std::iter::once(header)
            .chain(self.games().into_iter().map(|g| g.summary(resolver)))
            .join("\n")
    }
}

fn deserialize_update_time<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NaiveDateTime, D::Error> {
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, UPDATE_TIME_FORMAT).map_err(serde::de::Error::custom)
}

/// Unknown status strings are treated as missing so the class list can decide.
fn lenient_status<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<GameStatus>, D::Error> {
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<GameStatus>().ok()))
}
