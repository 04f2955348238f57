//! Menu scenes and the transitions between them
//!
//! The scene graph is small and fixed, so it is a plain enum plus a pure
//! transition function. [`Navigator`] layers the vehicle carousel on top.

use crate::consts::VEHICLE_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    MainMenu,
    VehicleSelect,
    About,
    Race,
}

impl SceneId {
    pub fn title(self) -> &'static str {
        match self {
            SceneId::MainMenu => "Road Blaster",
            SceneId::VehicleSelect => "Choose your car",
            SceneId::About => "About",
            SceneId::Race => "Race",
        }
    }

    /// Buttons shown in this scene, in display order
    pub fn options(self) -> &'static [SceneEvent] {
        match self {
            SceneId::MainMenu => &[SceneEvent::Start, SceneEvent::About, SceneEvent::Exit],
            SceneId::VehicleSelect => &[
                SceneEvent::Prev,
                SceneEvent::Next,
                SceneEvent::Play,
                SceneEvent::Back,
            ],
            SceneId::About => &[SceneEvent::Back],
            SceneId::Race => &[],
        }
    }
}

/// Something the user did in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    Start,
    About,
    Exit,
    Prev,
    Next,
    Play,
    Back,
    /// The race session quit from its game-over screen
    RaceTerminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition {
    Stay,
    Goto(SceneId),
    Exit,
}

/// Where `event` leads from `scene`. Events a scene doesn't offer are ignored.
pub fn transition(scene: SceneId, event: SceneEvent) -> SceneTransition {
    use SceneEvent as E;
    use SceneId as S;
    use SceneTransition::{Exit, Goto, Stay};

    match (scene, event) {
        (S::MainMenu, E::Start) => Goto(S::VehicleSelect),
        (S::MainMenu, E::About) => Goto(S::About),
        (S::MainMenu, E::Exit) => Exit,
        (S::VehicleSelect, E::Play) => Goto(S::Race),
        (S::VehicleSelect | S::About | S::Race, E::Back) => Goto(S::MainMenu),
        (S::Race, E::RaceTerminated) => Exit,
        _ => Stay,
    }
}

/// Wrap-around vehicle picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VehicleCarousel {
    index: u8,
}

impl VehicleCarousel {
    pub fn new(index: u8) -> Self {
        Self {
            index: index % VEHICLE_COUNT,
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn next(&mut self) -> u8 {
        self.index = (self.index + 1) % VEHICLE_COUNT;
        self.index
    }

    pub fn prev(&mut self) -> u8 {
        self.index = (self.index + VEHICLE_COUNT - 1) % VEHICLE_COUNT;
        self.index
    }
}

/// Current scene plus the vehicle being picked
#[derive(Debug, Clone)]
pub struct Navigator {
    current: SceneId,
    carousel: VehicleCarousel,
}

impl Navigator {
    pub fn new(vehicle: u8) -> Self {
        Self {
            current: SceneId::MainMenu,
            carousel: VehicleCarousel::new(vehicle),
        }
    }

    pub fn current(&self) -> SceneId {
        self.current
    }

    pub fn vehicle(&self) -> u8 {
        self.carousel.index()
    }

    pub fn handle(&mut self, event: SceneEvent) -> SceneTransition {
        if self.current == SceneId::VehicleSelect {
            match event {
                SceneEvent::Prev => {
                    self.carousel.prev();
                }
                SceneEvent::Next => {
                    self.carousel.next();
                }
                _ => {}
            }
        }

        let result = transition(self.current, event);
        if let SceneTransition::Goto(next) = result {
            log::info!("Scene {} -> {}", self.current.title(), next.title());
            self.current = next;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_graph() {
        assert_eq!(
            transition(SceneId::MainMenu, SceneEvent::Start),
            SceneTransition::Goto(SceneId::VehicleSelect)
        );
        assert_eq!(
            transition(SceneId::About, SceneEvent::Back),
            SceneTransition::Goto(SceneId::MainMenu)
        );
        assert_eq!(
            transition(SceneId::MainMenu, SceneEvent::Exit),
            SceneTransition::Exit
        );
        assert_eq!(
            transition(SceneId::Race, SceneEvent::RaceTerminated),
            SceneTransition::Exit
        );
        // Not offered in the main menu
        assert_eq!(
            transition(SceneId::MainMenu, SceneEvent::Play),
            SceneTransition::Stay
        );
    }

    #[test]
    fn test_every_option_leads_somewhere() {
        for scene in [SceneId::MainMenu, SceneId::VehicleSelect, SceneId::About] {
            for &event in scene.options() {
                let moves = transition(scene, event) != SceneTransition::Stay;
                let cycles = matches!(event, SceneEvent::Prev | SceneEvent::Next);
                assert!(moves || cycles, "{scene:?} {event:?}");
            }
        }
    }

    #[test]
    fn test_carousel_wraps() {
        let mut carousel = VehicleCarousel::new(0);
        assert_eq!(carousel.prev(), 4);
        assert_eq!(carousel.next(), 0);
        assert_eq!(VehicleCarousel::new(7).index(), 2);
    }

    #[test]
    fn test_navigator_picks_vehicle_then_races() {
        let mut nav = Navigator::new(0);
        // Cycling outside vehicle select does nothing
        nav.handle(SceneEvent::Next);
        assert_eq!(nav.vehicle(), 0);

        nav.handle(SceneEvent::Start);
        nav.handle(SceneEvent::Next);
        nav.handle(SceneEvent::Next);
        nav.handle(SceneEvent::Prev);
        assert_eq!(nav.current(), SceneId::VehicleSelect);
        assert_eq!(nav.vehicle(), 1);

        assert_eq!(
            nav.handle(SceneEvent::Play),
            SceneTransition::Goto(SceneId::Race)
        );
        assert_eq!(nav.current(), SceneId::Race);
        assert_eq!(nav.current().title(), "Race");
        assert_eq!(nav.handle(SceneEvent::RaceTerminated), SceneTransition::Exit);
    }
}
