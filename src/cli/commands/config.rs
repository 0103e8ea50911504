use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        if *edit_config {
            edit_config_file(&path, editor.as_deref());
        }
    }

    Ok(())
}

/// Open the config file in an editor, falling back to the platform
/// default when the requested one is unavailable.
fn edit_config_file(path: &Path, requested: Option<&str>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let chosen = requested.unwrap_or(&default_editor).to_string();

    if run_editor(&chosen, path) {
        println!("✅ Configuration file edited successfully using '{chosen}'");
        return;
    }

    eprintln!("⚠️  Editor '{chosen}' not available, falling back to '{default_editor}'");

    if run_editor(&default_editor, path) {
        println!("✅ Configuration file edited successfully using fallback '{default_editor}'");
    } else {
        eprintln!("❌ Failed to edit configuration file using fallback '{default_editor}'");
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
