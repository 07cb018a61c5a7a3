use std::fmt::{self, Write};

use crate::components::{heading, reward_item};
use crate::session::Session;

pub fn render(out: &mut impl Write, session: &Session) -> fmt::Result {
    let state = session.store.state();
    let points = state.user.points;

    writeln!(out, "★ Your Points: {points}\n")?;
    writeln!(out, "{}", heading("Available Rewards"))?;
    if state.rewards.is_empty() {
        writeln!(out, "No rewards yet. Add one with `reward-add`.")?;
    }
    for reward in &state.rewards {
        writeln!(out, "{}", reward_item(reward, points))?;
    }
    writeln!(out, "\n`redeem <id>` spends points. Rewards can be redeemed again.")
}
