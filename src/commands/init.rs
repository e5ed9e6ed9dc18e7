//! Init command - write a starter rowpush.yaml into the current directory

use std::path::Path;

use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_init(cwd: &Path, ui: &UiContext) -> Result<()> {
    let (path, content) = rowpush::config::write_starter(cwd)?;

    if ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    eprintln!(
        "{} Wrote to {}",
        Icon::Success.colored(ui.color, ui.unicode),
        path.display()
    );
    print!("{}", content);
    eprintln!(
        "{} Next: fill in the credentials, then run `rowpush sync <targets...>`",
        Icon::Arrow.colored(ui.color, ui.unicode)
    );

    Ok(())
}
