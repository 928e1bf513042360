use crate::configuration::Configuration;
use crate::schedule::Schedule;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cabinet_portal", about = "Client portal backend for a legal practice")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on.
    #[arg(long, default_value = "3000")]
    port: String,

    /// PostgreSQL connection URL. Falls back to DATABASE_URL; without either
    /// the portal runs on impersistent in-memory storage.
    #[arg(long)]
    database_url: Option<String>,

    /// Password for the admin endpoints. Falls back to ADMIN_PASSWORD.
    #[arg(long)]
    admin_password: Option<String>,

    /// HTML file served at /frontend.
    #[arg(long, default_value = "../frontend/index.html")]
    frontend_path: PathBuf,

    /// Comma-separated time labels overriding the default grid,
    /// e.g. "08:00,08:30,09:00".
    #[arg(long)]
    heures: Option<String>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn password(&self) -> String {
        self.admin_password
            .clone()
            .or_else(|| std::env::var("ADMIN_PASSWORD").ok())
            .unwrap_or_else(|| "123".into())
    }

    fn frontend_path(&self) -> PathBuf {
        self.frontend_path.clone()
    }

    fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
    }

    fn port(&self) -> String {
        self.port.clone()
    }

    fn schedule(&self) -> Schedule {
        match &self.heures {
            Some(heures) => Schedule::new(
                heures
                    .split(',')
                    .map(|heure| heure.trim().to_string())
                    .filter(|heure| !heure.is_empty())
                    .collect(),
            ),
            None => Schedule::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_schedule_without_override() {
        let configuration = ConfigurationHandler::parse_from(["cabinet_portal"]);
        assert_eq!(configuration.schedule(), Schedule::default());
        assert_eq!(configuration.port(), "3000");
    }

    #[test]
    fn heures_override_is_split_and_trimmed() {
        let configuration = ConfigurationHandler::parse_from([
            "cabinet_portal",
            "--heures",
            "08:00, 08:30 ,09:00",
        ]);
        let schedule = configuration.schedule();
        assert_eq!(
            schedule.heures(),
            &["08:00".to_string(), "08:30".to_string(), "09:00".to_string()]
        );
    }

    #[test]
    fn explicit_password_wins_over_default() {
        let configuration =
            ConfigurationHandler::parse_from(["cabinet_portal", "--admin-password", "secret"]);
        assert_eq!(configuration.password(), "secret");
    }
}
