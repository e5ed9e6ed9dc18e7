use rowpush::RowpushError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// One-line hint for errors the user can fix in the configuration.
fn hint(err: &RowpushError) -> Option<&'static str> {
    match err {
        RowpushError::ConfigNotFound { .. } => Some("run 'rowpush init' to create one"),
        RowpushError::MissingCredential { .. } => {
            Some("set it in rowpush.yaml or via ROWPUSH_DB_PASSWORD / ROWPUSH_SSH_PASSWORD")
        }
        RowpushError::NoTargetSpecified => Some("usage: rowpush sync <targets...>"),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    let icon = Icon::Error.colored(ui.color, ui.unicode);
    let mut out = format!("{} {:#}\n", icon, err);

    if let Some(hint) = err.downcast_ref::<RowpushError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(ui.color, ui.unicode),
            hint
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui));
}
