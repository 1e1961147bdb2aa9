use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use portal_core::Curriculum;
use portal_core::model::{ModuleId, RoleId};
use services::{AppServices, DashboardSummary};
use storage::repository::Storage;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, LaunchTarget, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://portal.sqlite3";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    EmptyValue { flag: &'static str },
    ModuleWithoutRole,
    RoleRequired { command: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
            ArgsError::ModuleWithoutRole => write!(f, "--module needs --role"),
            ArgsError::RoleRequired { command } => write!(f, "{command} requires --role"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

struct DesktopApp {
    services: AppServices,
    launch_target: Option<LaunchTarget>,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn launch_target(&self) -> Option<LaunchTarget> {
        self.launch_target.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    role: Option<RoleId>,
    module: Option<ModuleId>,
}

impl Args {
    fn launch_target(&self) -> Result<Option<LaunchTarget>, ArgsError> {
        match (&self.role, &self.module) {
            (None, Some(_)) => Err(ArgsError::ModuleWithoutRole),
            (None, None) => Ok(None),
            (Some(role), module) => Ok(Some(LaunchTarget {
                role: role.clone(),
                module: module.clone(),
            })),
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui       [--db <sqlite_url>] [--role <id>] [--module <id>]");
    eprintln!("  cargo run -p app -- progress [--db <sqlite_url>] [--role <id>]");
    eprintln!("  cargo run -p app -- reset     --role <id> [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PORTAL_DB_URL, PORTAL_ROLE, PORTAL_MODULE, PORTAL_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Progress,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "progress" => Some(Self::Progress),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());
        let mut db_url = non_empty("PORTAL_DB_URL")
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut role = non_empty("PORTAL_ROLE").map(RoleId::new);
        let mut module = non_empty("PORTAL_MODULE").map(ModuleId::new);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = args.next().ok_or(ArgsError::MissingValue { flag: "--db" })?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--role" => role = Some(RoleId::new(require_value(args, "--role")?)),
                "--module" => module = Some(ModuleId::new(require_value(args, "--module")?)),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            role,
            module,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PORTAL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_summary(summary: &DashboardSummary) {
    println!(
        "{} [{}] {}%",
        summary.role.title, summary.role.id, summary.overall_percentage
    );
    if summary.modules.is_empty() {
        println!("  (no modules)");
    }
    for module in &summary.modules {
        println!(
            "  {:>3}%  {}/{}  {}",
            module.percentage, module.completed_count, module.unit_count, module.title
        );
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    let services = AppServices::from_storage(Curriculum::builtin()?, &storage);
    tracing::info!(db = %parsed.db_url, ?cmd, "storage ready");

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                launch_target: parsed.launch_target()?,
                services,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            // Explicitly disable it so the app doesn't behave like a modal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Learning Portal")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Progress => {
            let dashboard = services.dashboard();
            let roles: Vec<RoleId> = match parsed.role {
                Some(role) => vec![role],
                None => dashboard.roles().into_iter().map(|role| role.id).collect(),
            };
            for role in &roles {
                print_summary(&dashboard.summary(role).await?);
            }
            Ok(())
        }
        Command::Reset => {
            let role = parsed
                .role
                .ok_or(ArgsError::RoleRequired { command: "reset" })?;
            if services.curriculum().role(&role).is_none() {
                return Err(services::PortalError::UnknownRole(role).into());
            }
            services.progress().clear(&role).await?;
            println!("progress cleared for {role}");
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        let mut iter = args.iter().map(|arg| (*arg).to_owned());
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--role", "developer", "--module", "top-lwc"],
            &[("PORTAL_ROLE", "qa"), ("PORTAL_DB_URL", "sqlite://x.db")],
        )
        .unwrap();
        assert_eq!(args.role, Some(RoleId::new("developer")));
        assert_eq!(args.module, Some(ModuleId::new("top-lwc")));
        assert_eq!(args.db_url, "sqlite://x.db");
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let args = parse(&[], &[("PORTAL_ROLE", "  ")]).unwrap();
        assert_eq!(args.db_url, DEFAULT_DB_URL);
        assert_eq!(args.role, None);
        assert_eq!(args.launch_target().unwrap(), None);
    }

    #[test]
    fn bad_flags_are_reported() {
        assert_eq!(
            parse(&["--role"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--role" }
        );
        assert_eq!(
            parse(&["--bogus"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--bogus".into())
        );
        assert_eq!(
            parse(&["--db", " "], &[]).unwrap_err(),
            ArgsError::InvalidDbUrl { raw: " ".into() }
        );
    }

    #[test]
    fn module_alone_is_not_a_launch_target() {
        let args = parse(&["--module", "top-lwc"], &[]).unwrap();
        assert_eq!(args.launch_target(), Err(ArgsError::ModuleWithoutRole));
    }

    #[test]
    fn relative_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("sqlite:data/portal.sqlite3".into());
        assert!(url.starts_with("sqlite://"), "{url}");
        assert!(url.ends_with("data/portal.sqlite3"));
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
    }
}
