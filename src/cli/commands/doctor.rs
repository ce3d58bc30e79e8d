//! Doctor command - verify configuration and requirements.

use crate::cli::Output;
use crate::config::Settings;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Gala Doctor");
    println!();
    println!("Checking configuration...\n");

    let mut checks = Vec::new();

    println!("{}", style("API Configuration").bold());
    let api_check = check_api_token(settings);
    api_check.print();
    checks.push(api_check);
    let base_check = check_api_base(settings);
    base_check.print();
    checks.push(base_check);

    println!();

    println!("{}", style("Guest Source").bold());
    let source_check = check_guest_source(settings);
    source_check.print();
    checks.push(source_check);

    println!();

    println!("{}", style("Configuration").bold());
    let config_check = check_config_file();
    config_check.print();
    checks.push(config_check);

    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before using Gala.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Gala is ready to use.");
    }

    Ok(())
}

/// Check that the configured API token is set.
fn check_api_token(settings: &Settings) -> CheckResult {
    let env_var = &settings.model.api_key_env;

    match std::env::var(env_var) {
        Ok(token) if !token.is_empty() => {
            CheckResult::ok(env_var, &format!("set ({} chars)", token.len()))
        }
        Ok(_) => CheckResult::error(
            env_var,
            "set but empty",
            &format!("export {}='hf_...'", env_var),
        ),
        Err(_) => CheckResult::error(
            env_var,
            "not set",
            &format!(
                "export {}='hf_...' or add it to a .env file in the working directory",
                env_var
            ),
        ),
    }
}

/// Check that the API base parses as an HTTP(S) URL.
fn check_api_base(settings: &Settings) -> CheckResult {
    match url::Url::parse(&settings.model.api_base) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            CheckResult::ok("api_base", &settings.model.api_base)
        }
        _ => CheckResult::error(
            "api_base",
            &format!("{} is not a valid HTTP(S) URL", settings.model.api_base),
            "fix [model].api_base in the config file",
        ),
    }
}

/// Check the guest source: local file existence, or the dataset id shape.
fn check_guest_source(settings: &Settings) -> CheckResult {
    if let Some(path) = settings.guest_local_path() {
        if path.exists() {
            return CheckResult::ok("guests", &format!("local file {}", path.display()));
        }
        return CheckResult::error(
            "guests",
            &format!("local file {} does not exist", path.display()),
            "fix [guests].local_path or remove it to use the Hub dataset",
        );
    }

    if settings.guests.dataset.contains('/') {
        CheckResult::ok(
            "guests",
            &format!("Hub dataset {} (fetched at startup)", settings.guests.dataset),
        )
    } else {
        CheckResult::warning(
            "guests",
            &format!("dataset id {:?} has no namespace", settings.guests.dataset),
            "expected something like 'agents-course/unit3-invitees'",
        )
    }
}

/// Check whether a config file exists.
fn check_config_file() -> CheckResult {
    let path = Settings::default_config_path();

    if path.exists() {
        CheckResult::ok("config", &format!("{}", path.display()))
    } else {
        CheckResult::warning(
            "config",
            "no config file (using defaults)",
            "run 'gala init' to create one",
        )
    }
}
