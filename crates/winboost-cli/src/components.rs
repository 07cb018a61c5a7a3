//! Single-record renderers shared by several screens.

use winboost_core::theme::{border_radius, hex_to_rgb, spacing};
use winboost_core::views::{energy_fill_percent, EnergyBand};
use winboost_core::{Reward, Task};

const BAR_WIDTH: usize = 10;

/// Layout units per terminal column.
const UNITS_PER_COLUMN: u16 = spacing::XS;

/// Blank run `units` layout units wide.
pub fn gap(units: u16) -> String {
    " ".repeat(usize::from(units / UNITS_PER_COLUMN))
}

/// `[x] Take a 10-minute walk  easy · ~10min · 5 pts · ⚡2  (#3)`
pub fn task_item(task: &Task) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let quick = if task.is_quick_win() { " ★ quick win" } else { "" };
    let sep = gap(spacing::SM);
    format!(
        "{check} {}{sep}{} · {} · {} pts · ⚡{}{quick}{sep}(#{})",
        task.name,
        task.boost_level,
        task.time_display(),
        task.point_value,
        task.energy_required,
        task.id
    )
}

/// `📱 15-minute social media break  15 minute break · 15 pts  [redeem]  (#1)`
pub fn reward_item(reward: &Reward, points: u32) -> String {
    let action = if reward.can_afford(points) {
        "[redeem]"
    } else {
        "[locked]"
    };
    let sep = gap(spacing::SM);
    format!(
        "{} {}{sep}{} · {} pts{sep}{action}{sep}(#{})",
        reward.icon,
        reward.name,
        reward.reward_type.label(),
        reward.point_cost,
        reward.id
    )
}

/// `Energy: 6/10 [██████░░░░]`, optionally tinted with the band color.
pub fn energy_bar(level: u8, color: bool) -> String {
    let filled = (energy_fill_percent(level) as usize * BAR_WIDTH) / 100;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    let bar = match hex_to_rgb(EnergyBand::of(level).color()) {
        Some((r, g, b)) if color => format!("\x1b[38;2;{r};{g};{b}m{bar}\x1b[0m"),
        _ => bar,
    };
    format!("Energy: {level}/10 [{bar}]")
}

/// Frame `lines` in a box. Any nonzero `radius` rounds the corners.
pub fn card(lines: &[&str], radius: u16) -> String {
    let (tl, tr, bl, br) = if radius > 0 {
        ('╭', '╮', '╰', '╯')
    } else {
        ('┌', '┐', '└', '┘')
    };
    let pad = gap(spacing::XS);
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2 * pad.len();
    let rule = "─".repeat(width);

    let mut out = format!("{tl}{rule}{tr}\n");
    for line in lines {
        let fill = " ".repeat(width - 2 * pad.len() - line.chars().count());
        out.push_str(&format!("│{pad}{line}{fill}{pad}│\n"));
    }
    out.push_str(&format!("{bl}{rule}{br}"));
    out
}

/// Card with the theme's default corner radius.
pub fn rounded_card(lines: &[&str]) -> String {
    card(lines, border_radius::MD)
}

/// Section heading underlined to its width.
pub fn heading(title: &str) -> String {
    format!("{title}\n{}", "─".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use winboost_core::AppState;

    #[test]
    fn task_item_marks_completion_and_quick_wins() {
        let state = AppState::seed(Utc::now());
        let walk = task_item(&state.tasks[2]);
        assert!(walk.starts_with("[x] Take a 10-minute walk"));
        assert!(walk.contains("quick win"));
        assert!(walk.contains("(#3)"));

        let proposal = task_item(&state.tasks[1]);
        assert!(proposal.starts_with("[ ]"));
        assert!(proposal.contains("~1h 30m"));
        assert!(!proposal.contains("quick win"));
    }

    #[test]
    fn reward_item_shows_affordability() {
        let state = AppState::seed(Utc::now());
        assert!(reward_item(&state.rewards[2], 120).contains("[redeem]"));
        assert!(reward_item(&state.rewards[2], 10).contains("[locked]"));
        assert!(reward_item(&state.rewards[0], 0).contains("15 minute break"));
    }

    #[test]
    fn gap_converts_layout_units_to_columns() {
        assert_eq!(gap(spacing::SM), "  ");
        assert_eq!(gap(spacing::MD), "    ");
        assert_eq!(gap(spacing::XS - 1), "");
    }

    #[test]
    fn card_frames_lines_to_the_widest() {
        assert_eq!(card(&["hi", "there"], 0), "┌───────┐\n│ hi    │\n│ there │\n└───────┘");
        assert!(rounded_card(&["x"]).starts_with('╭'));
        assert!(rounded_card(&["x"]).ends_with('╯'));
    }

    #[test]
    fn energy_bar_fills_by_level() {
        assert_eq!(energy_bar(6, false), "Energy: 6/10 [██████░░░░]");
        assert_eq!(energy_bar(10, false), "Energy: 10/10 [██████████]");
        assert!(energy_bar(2, true).contains("\x1b[38;2;255;107;107m"));
    }
}
