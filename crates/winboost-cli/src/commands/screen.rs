use winboost_core::{validation, Action, Config, TaskFilter};

use crate::screens::{self, Tab};
use crate::session::Session;

/// Render one screen of a fresh session.
pub fn run(
    config: Config,
    tab: Tab,
    filter: TaskFilter,
    energy: Option<i64>,
    color: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(config).with_color(color);
    if let Some(level) = energy {
        session.store.dispatch(Action::UpdateEnergy(validation::energy_level(level)?));
    }
    session.tab = tab;
    session.filter = filter;
    print!("{}", screens::render(&session)?);
    Ok(())
}
