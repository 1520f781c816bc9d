//! `check` command: load a fixture and list what it registers.

use std::fmt::Write as _;
use std::path::Path;

/// Run the `check` command.
///
/// # Errors
///
/// Returns an error string if the history depth in the environment is
/// invalid, or the fixture cannot be loaded or registers a duplicate response.
pub fn run(fixture: &Path) -> Result<(), String> {
    print!("{}", report(fixture)?);
    Ok(())
}

/// Builds the listing printed by [`run`].
fn report(fixture: &Path) -> Result<String, String> {
    let mut mocker = super::mocker_from_env()?;
    let count = mocker
        .load_fixture(fixture)
        .map_err(|e| format!("{}: {e}", fixture.display()))?;

    let mut out = format!("{count} response(s) registered from {}\n", fixture.display());
    match mocker.request_q_depth() {
        0 => out.push_str("history depth: unbounded\n"),
        depth => {
            let _ = writeln!(out, "history depth: {depth}");
        }
    }
    for spec in mocker.responses() {
        let _ = writeln!(out, "  {spec}");
    }
    Ok(out)
}
