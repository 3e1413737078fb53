//! Student Service
//!
//! Loads students from the configuration file into an in-memory
//! repository through `StudentService`, then prints the requested view.
//!
//! ```sh
//! # Run with default config (~/.config/student-service/config.toml)
//! student-service
//!
//! # Custom config path, single student
//! student-service --config ./students.toml get 3
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use student_service::{
    default_config_path, init_tracing, AppConfig, InMemoryStudentRepository, StudentService,
};

#[derive(Parser, Debug)]
#[command(
    name = "student-service",
    version,
    about = "Validate and list student records"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "STUDENT_SERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every stored student.
    List,
    /// Print a single student by id.
    Get { id: i32 },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config.logging);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Seed repository ────────────────────────────────────────
    let service = StudentService::new(Arc::new(InMemoryStudentRepository::new()));

    let mut rejected = 0usize;
    for student in config.students {
        let id = student.id();
        if let Err(e) = service.add_student(Some(student)) {
            warn!(student_id = id, "Skipping student: {}", e);
            rejected += 1;
        }
    }
    info!(rejected, "Repository seeded");

    // ── Output ─────────────────────────────────────────────────
    let output = match cli.command.unwrap_or(Command::List) {
        Command::List => serde_json::to_string_pretty(&service.get_all_students()?)?,
        Command::Get { id } => match service.get_student(id)? {
            Some(student) => serde_json::to_string_pretty(&student)?,
            None => {
                warn!(student_id = id, "Student not found");
                "null".to_string()
            }
        },
    };
    println!("{}", output);

    Ok(())
}
