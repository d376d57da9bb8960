//! Selection menus presented during the choice phases.
use arrayvec::ArrayVec;

use crate::combatant::CombatantId;
use crate::config::BattleConfig;

/// What confirming an option selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Index into the actor's move list.
    Move(usize),
    /// Ally receiving a heal.
    Target(CombatantId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub choice: MenuChoice,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, choice: MenuChoice) -> Self {
        Self {
            label: label.into(),
            choice,
        }
    }
}

/// Prompt plus a non-empty list of options with a wrapping cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    pub prompt: String,
    options: ArrayVec<MenuOption, { BattleConfig::PARTY_SIZE }>,
    selected: usize,
}

impl Menu {
    /// Builds a menu with the cursor on the first option.
    ///
    /// Options beyond the party size are dropped.
    pub fn new(prompt: impl Into<String>, options: impl IntoIterator<Item = MenuOption>) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().take(BattleConfig::PARTY_SIZE).collect(),
            selected: 0,
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&MenuOption> {
        self.options.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    /// Moves the cursor to `index`. Returns `false` when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves_menu() -> Menu {
        Menu::new(
            "Warrior's turn: Choose an action:",
            [
                MenuOption::new("Strike", MenuChoice::Move(0)),
                MenuOption::new("Heavy Slash", MenuChoice::Move(1)),
            ],
        )
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut menu = moves_menu();
        assert_eq!(menu.selected(), 0);

        menu.select_prev();
        assert_eq!(menu.selected(), 1);

        menu.select_next();
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut menu = moves_menu();
        assert!(menu.select(1));
        assert!(!menu.select(2));
        assert_eq!(
            menu.selected_option().map(|o| o.choice),
            Some(MenuChoice::Move(1))
        );
    }
}
