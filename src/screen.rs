//! Screen flow: Title -> Gameplay -> Ending -> Title.
//!
//! By default a game starts directly in `Gameplay` and never ends; the Title and
//! Ending screens only appear when the config asks for them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Gameplay,
    Ending,
}

/// Actions that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Start,
    TargetReached,
    Return,
}

/// Result of a transition attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub success: bool,
    pub from: Screen,
    pub to: Screen,
    pub action: ScreenAction,
}

#[derive(Debug, Clone)]
pub struct ScreenFsm {
    screen: Screen,
}

impl ScreenFsm {
    pub fn new(initial: Screen) -> Self {
        Self { screen: initial }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Gameplay
    }

    pub fn can_transition(&self, action: ScreenAction) -> bool {
        self.next_screen(action).is_some()
    }

    /// Attempt a transition; invalid actions leave the screen unchanged.
    pub fn transition(&mut self, action: ScreenAction) -> Transition {
        let from = self.screen;
        match self.next_screen(action) {
            Some(to) => {
                self.screen = to;
                Transition {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => Transition {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    /// The action a click / Enter press means on the current screen, if any.
    pub fn advance_action(&self) -> Option<ScreenAction> {
        match self.screen {
            Screen::Title => Some(ScreenAction::Start),
            Screen::Ending => Some(ScreenAction::Return),
            Screen::Gameplay => None,
        }
    }

    fn next_screen(&self, action: ScreenAction) -> Option<Screen> {
        match (self.screen, action) {
            (Screen::Title, ScreenAction::Start) => Some(Screen::Gameplay),
            (Screen::Gameplay, ScreenAction::TargetReached) => Some(Screen::Ending),
            (Screen::Ending, ScreenAction::Return) => Some(Screen::Title),
            _ => None,
        }
    }
}
