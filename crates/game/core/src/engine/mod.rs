//! Battle state machine.
//!
//! The [`BattleEngine`] is the only writer of [`BattleState`]. It borrows the
//! state and the random source for the duration of one frame or one input
//! event, advances the phase machine, and returns. Nothing here blocks: the
//! animation phase is polled against the caller's clock on every [`tick`].
//!
//! ```text
//! TurnStart ─┬─> Victory / GameOver
//!            ├─> PlayerChoice ─┬─> TargetSelection ─┐
//!            │                 └────────────────────┤
//!            └─> (boss acts) ───────────────────────┴─> Animation ─> NextTurn ─> TurnStart
//! ```
//!
//! [`tick`]: BattleEngine::tick
mod turns;

pub use turns::recalc_queue;

use tracing::{debug, info};

use crate::catalog::{self, BOSS_MOVES, Move};
use crate::combat::{ResolvedMove, resolve_attack, resolve_heal};
use crate::combatant::CombatantId;
use crate::env::RngOracle;
use crate::error::IgnoredInput;
use crate::input::InputCommand;
use crate::state::{
    Action, AnimationTimer, BattlePhase, BattleState, Menu, MenuChoice, MenuOption,
};

/// Prompt shown while a party member picks a move.
fn move_prompt(name: &str) -> String {
    format!("{name}'s turn: Choose an action:")
}

/// Prompt shown while the healer picks a heal target.
pub const HEAL_TARGET_PROMPT: &str = "Select target to heal:";

/// Drives one battle forward.
///
/// Frame-driven callers invoke [`BattleEngine::tick`] once per frame and
/// forward discrete input through [`BattleEngine::handle_input`].
pub struct BattleEngine<'a, R: RngOracle + ?Sized> {
    state: &'a mut BattleState,
    rng: &'a mut R,
}

impl<'a, R: RngOracle + ?Sized> BattleEngine<'a, R> {
    /// Creates an engine over the given state and random source.
    pub fn new(state: &'a mut BattleState, rng: &'a mut R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &BattleState {
        &*self.state
    }

    /// Advances the machine as far as it can go at `now_ms`.
    ///
    /// Completes an elapsed animation, then runs the automatic transitions
    /// (turn start, next turn, boss turns) until the battle waits for input,
    /// for an animation, or has ended.
    pub fn tick(&mut self, now_ms: u64) {
        loop {
            match &self.state.phase {
                BattlePhase::Animation { timer, .. } if timer.is_finished(now_ms) => {
                    self.finish_animation();
                }
                BattlePhase::TurnStart => self.start_turn(now_ms),
                BattlePhase::NextTurn => self.advance_turn(),
                _ => break,
            }
        }
    }

    /// Applies one input command.
    ///
    /// Commands delivered outside the phase that expects them leave the state
    /// untouched and report why.
    pub fn handle_input(&mut self, command: InputCommand, now_ms: u64) -> Result<(), IgnoredInput> {
        let kind = self.state.phase.kind();
        let not_accepted = IgnoredInput::NotAccepted {
            command,
            phase: kind,
        };

        if kind.is_terminal() {
            return match command {
                InputCommand::Confirm | InputCommand::Restart => {
                    self.restart();
                    Ok(())
                }
                _ => Err(not_accepted),
            };
        }

        if !kind.accepts_selection() {
            return Err(not_accepted);
        }
        let Some(menu) = self.state.phase.menu_mut() else {
            return Err(IgnoredInput::NothingSelected);
        };

        match command {
            InputCommand::MoveUp => {
                menu.select_prev();
                Ok(())
            }
            InputCommand::MoveDown => {
                menu.select_next();
                Ok(())
            }
            InputCommand::SelectOption(index) => {
                if !menu.select(index) {
                    return Err(IgnoredInput::OptionOutOfRange {
                        index,
                        len: menu.len(),
                    });
                }
                self.confirm(now_ms)
            }
            InputCommand::Confirm => self.confirm(now_ms),
            InputCommand::Restart => Err(not_accepted),
        }
    }

    /// Rebuilds the whole battle from its configuration.
    pub fn restart(&mut self) {
        info!(from = %self.state.phase_kind(), "battle restarted");
        *self.state = self.state.fresh();
    }

    // ========================================================================
    // Choice phases
    // ========================================================================

    fn open_move_menu(&mut self, actor: CombatantId) {
        let combatant = self.state.combatant(actor);
        let options = catalog::moves(combatant.class)
            .iter()
            .enumerate()
            .map(|(index, mv)| MenuOption::new(mv.name, MenuChoice::Move(index)));
        let menu = Menu::new(move_prompt(combatant.name()), options);

        self.state.phase = BattlePhase::PlayerChoice { actor, menu };
    }

    fn confirm(&mut self, now_ms: u64) -> Result<(), IgnoredInput> {
        let (actor, heal_move, menu) = match &self.state.phase {
            BattlePhase::PlayerChoice { actor, menu } => (*actor, None, menu),
            BattlePhase::TargetSelection {
                actor,
                move_index,
                menu,
            } => (*actor, Some(*move_index), menu),
            _ => return Err(IgnoredInput::NothingSelected),
        };
        let choice = menu
            .selected_option()
            .map(|option| option.choice)
            .ok_or(IgnoredInput::NothingSelected)?;

        match (heal_move, choice) {
            (None, MenuChoice::Move(move_index)) => {
                self.choose_move(actor, move_index, now_ms);
                Ok(())
            }
            (Some(move_index), MenuChoice::Target(target)) => {
                self.heal_target(actor, move_index, target, now_ms);
                Ok(())
            }
            _ => Err(IgnoredInput::NothingSelected),
        }
    }

    fn choose_move(&mut self, actor: CombatantId, move_index: usize, now_ms: u64) {
        let attacker = self.state.combatant(actor);
        let mv = catalog::move_at(attacker.class, move_index);

        if mv.is_heal() {
            let mut options: Vec<_> = self
                .state
                .living_party()
                .map(|member| MenuOption::new(member.hp_label(), MenuChoice::Target(member.id)))
                .collect();
            if options.is_empty() {
                options.push(MenuOption::new(
                    attacker.hp_label(),
                    MenuChoice::Target(actor),
                ));
            }

            debug!(actor = attacker.name(), mv = mv.name, "choosing heal target");
            self.state.phase = BattlePhase::TargetSelection {
                actor,
                move_index,
                menu: Menu::new(HEAL_TARGET_PROMPT, options),
            };
            return;
        }

        let resolved = resolve_attack(attacker, self.state.boss(), mv, &mut *self.rng);
        self.begin_animation(actor, CombatantId::BOSS, mv, resolved, now_ms);
    }

    fn heal_target(&mut self, actor: CombatantId, move_index: usize, target: CombatantId, now_ms: u64) {
        let healer = self.state.combatant(actor);
        let mv = catalog::move_at(healer.class, move_index);
        let resolved = resolve_heal(healer, mv, &mut *self.rng);
        self.begin_animation(actor, target, mv, resolved, now_ms);
    }

    // ========================================================================
    // Boss
    // ========================================================================

    /// Picks a boss move and a living party target uniformly at random.
    fn boss_turn(&mut self, now_ms: u64) {
        let mv = &BOSS_MOVES[self.rng.pick(BOSS_MOVES.len())];

        let living: Vec<CombatantId> = self.state.living_party().map(|m| m.id).collect();
        let target = living[self.rng.pick(living.len())];

        let resolved = resolve_attack(
            self.state.boss(),
            self.state.combatant(target),
            mv,
            &mut *self.rng,
        );
        self.begin_animation(CombatantId::BOSS, target, mv, resolved, now_ms);
    }

    // ========================================================================
    // Animation
    // ========================================================================

    fn begin_animation(
        &mut self,
        attacker: CombatantId,
        target: CombatantId,
        mv: &'static Move,
        resolved: ResolvedMove,
        now_ms: u64,
    ) {
        let action = Action {
            attacker,
            target,
            move_name: mv.name,
            category: mv.category,
            amount: resolved.amount,
            outcome: resolved.outcome,
            animation: mv.animation,
        };

        debug!(
            attacker = self.state.combatant(attacker).name(),
            target = self.state.combatant(target).name(),
            mv = mv.name,
            amount = resolved.amount,
            hit = resolved.outcome.is_hit(),
            "action resolved"
        );

        self.state.phase = BattlePhase::Animation {
            action,
            timer: AnimationTimer::start(mv.animation, now_ms),
        };
    }

    /// Applies the pending action and logs it.
    fn finish_animation(&mut self) {
        let BattlePhase::Animation { action, .. } =
            std::mem::replace(&mut self.state.phase, BattlePhase::NextTurn)
        else {
            return;
        };

        if action.outcome.is_hit() {
            let target = self.state.combatant_mut(action.target);
            if action.is_heal() {
                target.heal(action.amount);
            } else {
                target.take_damage(action.amount);
            }
        }

        let line = self.state.describe(&action);
        debug!(%line, "action applied");
        self.state.log.push(line);
    }
}
