extern crate gym_arcade;

use gym_arcade::input::InputMapper;
use gym_arcade::session::SessionConfig;
use gym_arcade::ui::{ArcadeApp, ArcadeFlags};

fn main() -> gym_arcade::ui::Result {
    ArcadeApp::run(ArcadeFlags {
        title: "Lunar Lander".to_string(),
        api_url: "http://localhost:8001".to_string(),
        config: SessionConfig::lunar_lander(),
        mapper: InputMapper::lunar_lander(),
    })
}
