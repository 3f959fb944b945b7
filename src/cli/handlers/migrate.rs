//! `migrate`: apply, preview or revert the embedded migrations.

use crate::config::Settings;
use crate::db::migrate;
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// # Errors
    ///
    /// Configuration, connection and migration failures, or a rollback
    /// larger than the number of applied migrations.
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;
        let url = self.config.database.url.as_str();

        if dry_run {
            let pending = migrate::pending_migrations(url).await?;
            if pending.is_empty() {
                println!("✓ No pending migrations - database is up to date");
            } else {
                println!("Found {} pending migration(s):", pending.len());
                for name in &pending {
                    println!("  - {}", name);
                }
                println!("\nRun without --dry-run to apply these migrations");
            }
            return Ok(());
        }

        if let Some(steps) = rollback {
            println!("Rolling back {} migration(s)...", steps);
            let reverted = migrate::revert_migrations(url, steps).await?;
            for version in &reverted {
                println!("  - reverted {}", version);
            }
            println!("✓ Rolled back {} migration(s)", reverted.len());
            return Ok(());
        }

        println!("Running database migrations...");
        let applied = migrate::run_pending_migrations(url).await?;
        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for version in &applied {
                println!("  - {}", version);
            }
        }

        Ok(())
    }
}
