//! Render del formulario en terminal y diálogos por stdin

use colored::*;
use std::io::{self, BufRead, Write};

use super::{FormView, LABEL_CARGANDO, LABEL_ELIMINAR};
use crate::services::room_form::Prompt;

/// Pintar el formulario completo
pub fn render_view(view: &FormView) -> String {
    let disabled = if view.disabled { " (deshabilitado)" } else { "" };
    let mut out = String::new();

    out.push_str(&format!("{}\n", "🏨 Buscar Habitación por ID (GET)".bright_blue().bold()));
    out.push_str(&format!(
        "ID: [{}]  [Buscar]{}\n",
        view.search_id, disabled
    ));

    if let Some(error) = &view.error {
        out.push_str(&format!("{}\n", format!("Error: {}", error).red()));
    }
    if let Some(message) = &view.message {
        out.push_str(&format!("{}\n", message.green()));
    }
    if let Some(aviso) = &view.field_error {
        out.push_str(&format!("{}\n", format!("⚠️ {}", aviso).bright_yellow()));
    }

    out.push_str(&format!("{}\n", "=====================================".bright_blue()));
    for row in &view.rows {
        let marker = if row.read_only { " (solo lectura)" } else { "" };
        out.push_str(&format!("{}: [{}]{}\n", row.label, row.value, marker));
    }

    out.push_str(&format!("[{}]{}", view.submit_label, disabled));
    if view.show_delete {
        out.push_str(&format!("  {}{}", format!("[{}]", LABEL_ELIMINAR).white().on_red(), disabled));
    }
    out.push('\n');

    if view.disabled {
        out.push_str(&format!("{}\n", LABEL_CARGANDO.bright_yellow()));
    }
    out
}

/// Interpretar la respuesta a una confirmación
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

/// Diálogos bloqueantes sobre stdin/stdout
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn read_line() -> String {
        let mut line = String::new();
        if let Err(e) = io::stdin().lock().read_line(&mut line) {
            tracing::warn!("⚠️ Error leyendo stdin: {}", e);
        }
        line
    }
}

impl Prompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        print!("{} {}", format!("⚠️ {}", message).bright_yellow(), "[Enter]".dimmed());
        let _ = io::stdout().flush();
        Self::read_line();
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{} {}", message.bright_yellow(), "(s/n): ".dimmed());
        let _ = io::stdout().flush();
        is_affirmative(&Self::read_line())
    }
}
