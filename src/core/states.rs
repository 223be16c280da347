//! Screen states for TapChess
//!
//! Every screen of the app is a variant of [`Screen`], driven through Bevy's
//! state machine. Screens never set `NextState` directly; they emit a
//! [`FlowTrigger`](super::flow::FlowTrigger) and the flow controller picks the
//! destination.
//!
//! # Screen Flow
//!
//! ```text
//! [Splash] -> [Start] -> [Login] <-> [Register]
//!                           |
//!                           v
//!                     [ModeSelect] <-> [OnlineStub]
//!                           ^   \
//!                           |    +--> [BotsStub] -> back
//!                           v
//!                        [Board]
//! ```

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::flow::{next_screen, FlowTrigger};

/// Which screen is showing
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum Screen {
    /// Branding, left automatically once the splash timer runs out
    #[default]
    Splash,

    /// Title screen with a single play action
    Start,

    /// Email/password sign-in
    Login,

    /// Account creation form
    Register,

    /// Choice between online, bots and the local board
    ModeSelect,

    /// Placeholder for online play
    OnlineStub,

    /// Placeholder for play against bots
    BotsStub,

    /// Local two-player board
    Board,
}

impl Screen {
    pub const ALL: [Screen; 8] = [
        Screen::Splash,
        Screen::Start,
        Screen::Login,
        Screen::Register,
        Screen::ModeSelect,
        Screen::OnlineStub,
        Screen::BotsStub,
        Screen::Board,
    ];
}

/// Whether some trigger leads from `from` to `to`
pub fn is_valid_screen_transition(from: Screen, to: Screen) -> bool {
    from == to
        || FlowTrigger::ALL
            .iter()
            .any(|&trigger| next_screen(from, trigger) == Some(to))
}

/// Log every applied transition, flagging those outside the flow graph
pub fn validate_and_log_screen_transitions(
    mut transition_events: MessageReader<StateTransitionEvent<Screen>>,
) {
    for event in transition_events.read() {
        match (event.exited, event.entered) {
            (Some(exited), Some(entered)) => {
                if is_valid_screen_transition(exited, entered) {
                    info!("[TRANSITION] {:?} -> {:?}", exited, entered);
                } else {
                    error!(
                        "[TRANSITION] INVALID: {:?} -> {:?} (not in the screen graph)",
                        exited, entered
                    );
                }
            }
            (Some(exited), None) => {
                debug!("[TRANSITION] Exit: {:?}", exited);
            }
            (None, Some(entered)) => {
                debug!("[TRANSITION] Enter: {:?}", entered);
            }
            (None, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_default_is_splash() {
        assert_eq!(Screen::default(), Screen::Splash);
    }

    #[test]
    fn test_main_path_is_valid() {
        let path = [
            Screen::Splash,
            Screen::Start,
            Screen::Login,
            Screen::ModeSelect,
            Screen::Board,
        ];
        for pair in path.windows(2) {
            assert!(is_valid_screen_transition(pair[0], pair[1]), "{pair:?}");
        }
    }

    #[test]
    fn test_login_register_both_ways() {
        assert!(is_valid_screen_transition(Screen::Login, Screen::Register));
        assert!(is_valid_screen_transition(Screen::Register, Screen::Login));
    }

    #[test]
    fn test_shortcuts_are_invalid() {
        assert!(!is_valid_screen_transition(Screen::Splash, Screen::Board));
        assert!(!is_valid_screen_transition(Screen::Start, Screen::ModeSelect));
        assert!(!is_valid_screen_transition(Screen::Register, Screen::ModeSelect));
        assert!(!is_valid_screen_transition(Screen::Board, Screen::Login));
    }

    #[test]
    fn test_every_screen_but_splash_is_reachable() {
        for screen in Screen::ALL.into_iter().filter(|s| *s != Screen::Splash) {
            let reachable = Screen::ALL
                .into_iter()
                .any(|from| from != screen && is_valid_screen_transition(from, screen));
            assert!(reachable, "{screen:?} has no way in");
        }
    }
}
