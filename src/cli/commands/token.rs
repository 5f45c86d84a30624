use serde_json::json;

use crate::auth::{Claims, JwtAuthenticator};
use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub fn handle(config: &AppConfig, subject: &str, hours: Option<u64>, output_format: OutputFormat) -> anyhow::Result<()> {
    let hours = hours.unwrap_or(config.security.jwt_expiry_hours);
    let auth = JwtAuthenticator::new(&config.security.jwt_secret, hours)?;
    let claims = Claims::new(subject, hours);
    let token = auth.sign(&claims)?;

    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "token": token,
                "subject": claims.sub,
                "expires_at": claims.exp,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        // Bare token so it can be captured with $(posts token)
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
