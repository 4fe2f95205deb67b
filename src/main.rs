use ringclock::config;
use ringclock::gui::app::AppModel;
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_or_default();
    config.validate()?;

    let app = RelmApp::new("org.ringclock.RingClock");

    app.run::<AppModel>(config);
    Ok(())
}
