use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::action::InputBatch;
use crate::catalog::LevelCatalog;
use crate::error::PuzzleError;
use crate::grid::validate_config;
use crate::host::SessionHost;
use crate::progression::ProgressionGate;
use crate::rules::GameRules;
use crate::session::{DropOutcome, PuzzleSession, SessionPhase};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSlot {
    pub index: usize,
    pub label: String,
    pub thumbnail: String,
    pub playable: bool,
}

/// Turns per-tick pointer input into session calls and host side effects.
pub struct SessionController {
    session: PuzzleSession,
    gate: ProgressionGate,
    catalog: LevelCatalog,
    rules: GameRules,
    rng: StdRng,
}

impl SessionController {
    pub fn new(catalog: LevelCatalog, rules: GameRules) -> Self {
        let gate = ProgressionGate::new(catalog.len());
        Self::with_gate(catalog, rules, gate)
    }

    pub fn with_gate(catalog: LevelCatalog, rules: GameRules, gate: ProgressionGate) -> Self {
        let seed = rules.seed.unwrap_or_else(|| rand::rng().random());
        debug!("session controller seeded with {seed:#x}");
        Self {
            session: PuzzleSession::new(),
            gate,
            catalog,
            rules,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn open<H: SessionHost + ?Sized>(&mut self, host: &mut H) {
        host.hide_completion();
        host.show_level_select();
    }

    pub fn level_slots(&self) -> Vec<LevelSlot> {
        self.catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| LevelSlot {
                index,
                label: entry.label.clone(),
                thumbnail: entry.thumbnail.clone(),
                playable: self.gate.is_playable(index),
            })
            .collect()
    }

    pub fn start_level<H: SessionHost + ?Sized>(
        &mut self,
        index: usize,
        host: &mut H,
    ) -> Result<(), PuzzleError> {
        let image = self
            .catalog
            .get(index)
            .map(|entry| entry.image)
            .ok_or(PuzzleError::UnknownLevel(index))?;
        if !self.gate.is_playable(index) {
            return Err(PuzzleError::LevelLocked(index));
        }
        if self.session.phase() == SessionPhase::Playing {
            return Err(PuzzleError::SessionActive);
        }
        validate_config(image, self.rules.difficulty)?;

        let was_complete = self.session.phase() == SessionPhase::Complete;
        self.session
            .start_game(image, self.rules.difficulty, host.visible_play_area(), &mut self.rng)?;
        if was_complete {
            host.hide_completion();
        }
        host.hide_level_select();
        info!("level {index} started at difficulty {}", self.rules.difficulty);
        Ok(())
    }

    pub fn tick<H: SessionHost + ?Sized>(&mut self, input: &InputBatch, host: &mut H) -> DropOutcome {
        if input.pressed && self.session.dragging().is_none() {
            let hit = host.hit_test(&self.session, input.pointer);
            self.session.begin_drag(hit);
        }
        for sample in &input.moves {
            self.session.update_drag(*sample);
        }
        self.session.update_drag(input.pointer);
        if !input.released {
            return DropOutcome::NoDrag;
        }
        let outcome = self.session.end_drag(&mut self.gate);
        match outcome {
            DropOutcome::Locked { .. } => host.play_snap_sound(),
            DropOutcome::Completed { .. } => {
                host.play_snap_sound();
                host.show_completion();
            }
            DropOutcome::NoDrag | DropOutcome::Missed { .. } => {}
        }
        outcome
    }

    pub fn restart<H: SessionHost + ?Sized>(&mut self, host: &mut H) {
        self.session.restart();
        host.hide_completion();
        host.show_level_select();
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    pub fn gate(&self) -> &ProgressionGate {
        &self.gate
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }
}
