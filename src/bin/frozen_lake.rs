extern crate gym_arcade;

use gym_arcade::input::InputMapper;
use gym_arcade::session::SessionConfig;
use gym_arcade::ui::{ArcadeApp, ArcadeFlags};

fn main() -> gym_arcade::ui::Result {
    ArcadeApp::run(ArcadeFlags {
        title: "Frozen Lake".to_string(),
        api_url: "http://localhost:8000".to_string(),
        config: SessionConfig::frozen_lake(),
        mapper: InputMapper::frozen_lake(),
    })
}
