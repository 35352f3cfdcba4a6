//! Headless scripted driver.
//!
//! Spawns pieces from the uniform randomizer, plays the same action script
//! against each one and writes a JSON line per step. It stands in for the
//! touch input layer and the renderer so the geometry can be exercised
//! end-to-end from a shell.

use std::io::Write;

use anyhow::{anyhow, ensure, Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::shape::MAX_SIDE;
use crate::core::{Piece, PieceRandomizer, PieceSnapshot};
use crate::types::{PieceAction, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    pub seed: u32,
    pub pieces: u32,
    pub start_row: i32,
    pub actions: Vec<PieceAction>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: 1,
            pieces: 1,
            start_row: 0,
            actions: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Every template fits at spawn in any orientation, so spawned pieces
    /// always start on the board.
    pub fn validate(&self) -> Result<()> {
        let side = MAX_SIDE as i32;
        ensure!(
            self.width >= side,
            "sim: --width must be at least {}, got {}",
            side,
            self.width
        );
        ensure!(
            self.height >= side,
            "sim: --height must be at least {}, got {}",
            side,
            self.height
        );
        ensure!(self.pieces > 0, "sim: --pieces must be at least 1");
        ensure!(
            self.start_row >= 0 && self.start_row <= self.height - side,
            "sim: --start-row {} leaves no room for a {}-row piece on a board of height {}",
            self.start_row,
            side,
            self.height
        );
        Ok(())
    }
}

/// Parse `--flag value` pairs (program name already stripped).
pub fn parse_sim_args(args: &[String]) -> Result<SimConfig> {
    let mut config = SimConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| anyhow!("sim: missing value for {}", flag))
        };
        match flag {
            "--width" => config.width = parse_number(flag, value()?)?,
            "--height" => config.height = parse_number(flag, value()?)?,
            "--seed" => config.seed = parse_number(flag, value()?)?,
            "--pieces" => config.pieces = parse_number(flag, value()?)?,
            "--start-row" => config.start_row = parse_number(flag, value()?)?,
            "--actions" => config.actions = parse_actions(value()?)?,
            other => return Err(anyhow!("sim: unknown argument: {}", other)),
        }
        i += 2;
    }

    config.validate()?;
    Ok(config)
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("sim: invalid {} value: {}", flag, value))
}

/// Parse a comma-separated action script, e.g. `moveLeft,tap:7.5,hardDrop`.
pub fn parse_actions(script: &str) -> Result<Vec<PieceAction>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| PieceAction::from_str(s).ok_or_else(|| anyhow!("sim: unknown action: {}", s)))
        .collect()
}

/// One JSON output line.
#[derive(Debug, Clone, Serialize)]
pub struct SimStep {
    pub piece: u32,
    pub step: u32,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
    pub piece_state: PieceSnapshot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimSummary {
    pub pieces: u32,
    pub accepted: u32,
    pub rejected: u32,
}

fn action_arg(action: PieceAction) -> Option<f32> {
    match action {
        PieceAction::Tap(x) | PieceAction::Drag(x) => Some(x),
        _ => None,
    }
}

fn emit<W: Write>(out: &mut W, step: &SimStep) -> Result<()> {
    serde_json::to_writer(&mut *out, step).context("sim: failed to encode step")?;
    out.write_all(b"\n").context("sim: failed to write step")?;
    Ok(())
}

/// Run the script against `config.pieces` pieces, writing JSON lines to `out`.
pub fn run_sim<W: Write>(config: &SimConfig, out: &mut W) -> Result<SimSummary> {
    config.validate()?;

    let (w, h) = (config.width, config.height);
    let mut randomizer = PieceRandomizer::new(config.seed);
    let mut summary = SimSummary::default();

    for piece_no in 0..config.pieces {
        let mut piece = Piece::spawn_at(randomizer.next(), w, config.start_row);
        let mut step = 0u32;
        emit(
            out,
            &SimStep {
                piece: piece_no,
                step,
                action: "spawn",
                arg: None,
                accepted: None,
                piece_state: piece.snapshot(h),
            },
        )?;

        for &action in &config.actions {
            step += 1;
            let accepted = piece.apply(action, w, h);
            if accepted {
                summary.accepted += 1;
            } else {
                summary.rejected += 1;
            }
            debug!(piece = piece_no, action = action.as_str(), accepted, "applied action");
            emit(
                out,
                &SimStep {
                    piece: piece_no,
                    step,
                    action: action.as_str(),
                    arg: action_arg(action),
                    accepted: Some(accepted),
                    piece_state: piece.snapshot(h),
                },
            )?;
        }

        piece.teleport_to_ghost(h);
        emit(
            out,
            &SimStep {
                piece: piece_no,
                step: step + 1,
                action: "lock",
                arg: None,
                accepted: None,
                piece_state: piece.snapshot(h),
            },
        )?;
        summary.pieces += 1;
    }

    out.flush().context("sim: failed to flush output")?;
    info!(
        pieces = summary.pieces,
        accepted = summary.accepted,
        rejected = summary.rejected,
        "sim finished"
    );
    Ok(summary)
}
