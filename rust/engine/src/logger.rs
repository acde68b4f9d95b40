use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::Outcome;

/// Complete record of one resolved round.
/// Serialized to JSONL, one line per round, as an audit trail of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Identifier assigned when written (format: YYYYMMDD-NNNNNN)
    #[serde(default)]
    pub round_id: String,
    /// Seed the session's shoe was created from
    pub seed: u64,
    /// Round number within the session, starting at 1
    pub round: u32,
    /// Player's cards in deal order
    pub player: Vec<Card>,
    /// Dealer's cards in deal order
    pub dealer: Vec<Card>,
    pub player_points: u32,
    pub dealer_points: u32,
    pub outcome: Outcome,
    /// Bet riding on the round when it resolved
    pub bet: u32,
    /// Balance after settlement
    pub balance: u32,
    /// Whether this round emptied the balance
    #[serde(default)]
    pub game_over: bool,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.round_id.is_empty() {
            rec.round_id = self.next_id();
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
