//! Screen flow controller
//!
//! [`next_screen`] is the whole navigation graph as a pure function. Screens
//! write [`FlowTrigger`] messages and [`apply_flow_triggers`] turns the first
//! one that fits the current screen into a `NextState` request.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::states::Screen;

/// Something that happened on a screen and may move the app elsewhere
#[derive(Message, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FlowTrigger {
    SplashElapsed,
    Play,
    OpenRegister,
    OpenLogin,
    SignedIn,
    Registered,
    ChooseOnline,
    ChooseBots,
    ChooseBoard,
    Back,
}

impl FlowTrigger {
    pub const ALL: [FlowTrigger; 10] = [
        FlowTrigger::SplashElapsed,
        FlowTrigger::Play,
        FlowTrigger::OpenRegister,
        FlowTrigger::OpenLogin,
        FlowTrigger::SignedIn,
        FlowTrigger::Registered,
        FlowTrigger::ChooseOnline,
        FlowTrigger::ChooseBots,
        FlowTrigger::ChooseBoard,
        FlowTrigger::Back,
    ];
}

/// Destination for `trigger` fired on `screen`, `None` if it does not apply
pub fn next_screen(screen: Screen, trigger: FlowTrigger) -> Option<Screen> {
    use FlowTrigger::*;

    match (screen, trigger) {
        (Screen::Splash, SplashElapsed) => Some(Screen::Start),
        (Screen::Start, Play) => Some(Screen::Login),
        (Screen::Login, SignedIn) => Some(Screen::ModeSelect),
        (Screen::Login, OpenRegister) => Some(Screen::Register),
        (Screen::Register, OpenLogin | Registered | Back) => Some(Screen::Login),
        (Screen::ModeSelect, ChooseOnline) => Some(Screen::OnlineStub),
        (Screen::ModeSelect, ChooseBots) => Some(Screen::BotsStub),
        (Screen::ModeSelect, ChooseBoard) => Some(Screen::Board),
        (Screen::OnlineStub | Screen::BotsStub | Screen::Board, Back) => Some(Screen::ModeSelect),
        _ => None,
    }
}

/// Apply the first trigger that fits the current screen; log the rest
pub fn apply_flow_triggers(
    mut triggers: MessageReader<FlowTrigger>,
    screen: Res<State<Screen>>,
    mut next: ResMut<NextState<Screen>>,
) {
    let current = *screen.get();
    let mut chosen: Option<Screen> = None;

    for &trigger in triggers.read() {
        match (chosen, next_screen(current, trigger)) {
            (None, Some(target)) => {
                debug!("[FLOW] {:?} on {:?} -> {:?}", trigger, current, target);
                chosen = Some(target);
            }
            (Some(_), Some(_)) => {
                debug!("[FLOW] {:?} dropped, transition already pending", trigger);
            }
            (_, None) => {
                warn!("[FLOW] {:?} ignored on {:?}", trigger, current);
            }
        }
    }

    if let Some(target) = chosen {
        next.set(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_returns_to_login() {
        assert_eq!(
            next_screen(Screen::Register, FlowTrigger::Registered),
            Some(Screen::Login)
        );
        assert_eq!(
            next_screen(Screen::Register, FlowTrigger::OpenLogin),
            Some(Screen::Login)
        );
    }

    #[test]
    fn test_modes_and_back() {
        for (trigger, screen) in [
            (FlowTrigger::ChooseOnline, Screen::OnlineStub),
            (FlowTrigger::ChooseBots, Screen::BotsStub),
            (FlowTrigger::ChooseBoard, Screen::Board),
        ] {
            assert_eq!(next_screen(Screen::ModeSelect, trigger), Some(screen));
            assert_eq!(next_screen(screen, FlowTrigger::Back), Some(Screen::ModeSelect));
        }
    }

    #[test]
    fn test_triggers_out_of_place_do_nothing() {
        assert_eq!(next_screen(Screen::Splash, FlowTrigger::Play), None);
        assert_eq!(next_screen(Screen::Start, FlowTrigger::SignedIn), None);
        assert_eq!(next_screen(Screen::Login, FlowTrigger::Back), None);
        assert_eq!(next_screen(Screen::Board, FlowTrigger::ChooseBoard), None);
        assert_eq!(next_screen(Screen::ModeSelect, FlowTrigger::Back), None);
    }
}
