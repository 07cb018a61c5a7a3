//! Apply a script of JSON actions to a fresh session.

use std::io::BufRead;

use winboost_core::{Action, Config, CoreError};

use crate::session::Session;

/// Read one action per line (blank lines and `#` comments skipped), dispatch
/// each, then print the final state as JSON.
pub fn run(config: Config, input: impl BufRead) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(config);
    let mut applied = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(CoreError::from)?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let action: Action = serde_json::from_str(line)
            .map_err(|e| CoreError::Custom(format!("line {}: {e}", index + 1)))?;
        tracing::debug!(line = index + 1, action = action.kind(), "replaying");
        if session.store.dispatch(action) {
            applied += 1;
        }
    }

    tracing::info!(applied, "replay finished");
    println!("{}", serde_json::to_string_pretty(session.store.state())?);
    Ok(())
}
