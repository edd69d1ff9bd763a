use std::process::{Child, Command, Stdio};
use std::time::Duration;

use log::{info, warn};

use crate::errors::AuditError;

const DEBUG_PORT: u16 = 9222;

/// The one shared headless browser behind all audit runs. Exclusively owned
/// by the run loop for its whole duration; the process is killed in `Drop`,
/// so release happens whether the loop finished, bailed early, or errored.
pub struct BrowserSession {
    child: Child,
    port: u16,
}

impl BrowserSession {
    /// Spawn a headless browser exposing a remote-debugging port. The
    /// binary comes from `CHROME_PATH` when set, `chromium` otherwise.
    pub async fn launch() -> Result<Self, AuditError> {
        let binary = std::env::var("CHROME_PATH").unwrap_or_else(|_| "chromium".to_string());
        let child = Command::new(&binary)
            .arg("--headless")
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg(format!("--remote-debugging-port={}", DEBUG_PORT))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AuditError::BrowserLaunch {
                binary: binary.clone(),
                source,
            })?;

        // Give the debugger endpoint a moment to come up before the first
        // audit connects to it.
        tokio::time::sleep(Duration::from_secs(2)).await;
        info!(
            "browser session up on port {} (pid {})",
            DEBUG_PORT,
            child.id()
        );

        Ok(BrowserSession {
            child,
            port: DEBUG_PORT,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Err(err) = self.child.kill() {
            warn!("failed to kill browser process: {}", err);
        }
        let _ = self.child.wait();
        info!("browser session closed");
    }
}
