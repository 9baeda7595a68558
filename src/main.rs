use anyhow::Result;
use colored::*;
use dotenvy::dotenv;
use std::io::{self, Write};
use tracing::info;

use habitaciones_client::view::terminal::{render_view, TerminalPrompt};
use habitaciones_client::{
    Action, EnvironmentConfig, FormView, HabitacionesClient, RoomField, RoomForm,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging (stderr, para no mezclarlo con el formulario)
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    info!("🏨 Formulario de habitaciones");
    info!("🌐 API: {}", config.api_url);

    let client = HabitacionesClient::from_config(&config)?;
    let mut form = RoomForm::new(client, TerminalPrompt);

    loop {
        let view = FormView::from_state(form.state());
        println!();
        print!("{}", render_view(&view));
        println!();
        println!("{}", "📋 MENÚ".bright_green().bold());
        println!("1. 🔍 Buscar por ID");
        println!("2. ✏️  Editar campo");
        println!("3. 💾 {}", view.submit_label);
        if view.show_delete {
            println!("4. 🗑️  Eliminar");
        }
        println!("0. 🚪 Salir");

        let choice = ask("Selecciona una opción: ")?;
        match choice.trim() {
            "1" => {
                let id = ask("ID: ")?;
                form.dispatch(Action::SetSearchId(id)).await;
                form.dispatch(Action::Buscar).await;
            }
            "2" => {
                let nombres: Vec<&str> = RoomField::ALL.iter().map(|f| f.name()).collect();
                let campo = ask(&format!("Campo ({}): ", nombres.join(", ")))?;
                match campo.parse::<RoomField>() {
                    Ok(field) => {
                        let valor = ask(&format!("{}: ", field.label()))?;
                        form.dispatch(Action::Edit(field, valor)).await;
                    }
                    Err(e) => println!("{}", format!("❌ {}", e).bright_red()),
                }
            }
            "3" => form.dispatch(Action::Submit).await,
            "4" if view.show_delete => form.dispatch(Action::Eliminar).await,
            "0" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red()),
        }
    }

    Ok(())
}

fn ask(prompt: &str) -> Result<String> {
    print!("{}", prompt.bright_yellow());
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("stdin cerrado");
    }
    Ok(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
}
