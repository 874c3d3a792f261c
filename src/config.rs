use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub newsletter_unique_index: bool,
    pub email: EmailConfig,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Address notifications are sent from.
    pub sender: String,
    /// Address notifications are delivered to. Defaults to the sender.
    pub notify: String,
    pub transport: Option<EmailTransport>,
}

#[derive(Debug, Clone)]
pub enum EmailTransport {
    Resend(ResendConfig),
    Smtp(SmtpConfig),
}

#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| format!("Missing required environment variable: {key}"))
        };
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mongo_url = env_required("MONGO_URL")?;
        let db_name = env_or("DB_NAME", "makemydukaan");

        let host: IpAddr = env_or("DUKAAN_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid DUKAAN_HOST: {e}"))?;

        let port: u16 = env_or("DUKAAN_PORT", "8001")
            .parse()
            .map_err(|e| format!("Invalid DUKAAN_PORT: {e}"))?;

        let max_body_size: usize = env_or("DUKAAN_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid DUKAAN_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("DUKAAN_LOG_LEVEL", "info");

        let newsletter_unique_index = parse_bool(
            "DUKAAN_NEWSLETTER_UNIQUE_INDEX",
            &env_or("DUKAAN_NEWSLETTER_UNIQUE_INDEX", "true"),
        )?;

        let sender = env_or("SENDER_EMAIL", "onboarding@resend.dev");
        let notify = lookup("DUKAAN_NOTIFY_EMAIL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| sender.clone());

        let smtp = match (
            lookup("DUKAAN_SMTP_HOST"),
            lookup("DUKAAN_SMTP_PORT"),
            lookup("DUKAAN_SMTP_USER"),
            lookup("DUKAAN_SMTP_PASS"),
        ) {
            (Some(host), Some(port), Some(user), Some(pass)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid DUKAAN_SMTP_PORT: {e}"))?,
                user,
                pass,
            }),
            _ => None,
        };

        let transport = if let Some(smtp) = smtp {
            Some(EmailTransport::Smtp(smtp))
        } else if let Some(api_key) = lookup("RESEND_API_KEY").filter(|k| !k.is_empty()) {
            let timeout_secs: u64 = env_or("DUKAAN_EMAIL_TIMEOUT_SECS", "10")
                .parse()
                .map_err(|e| format!("Invalid DUKAAN_EMAIL_TIMEOUT_SECS: {e}"))?;
            Some(EmailTransport::Resend(ResendConfig {
                api_key,
                base_url: env_or("DUKAAN_RESEND_API_URL", "https://api.resend.com"),
                timeout: Duration::from_secs(timeout_secs),
            }))
        } else {
            None
        };

        Ok(Config {
            mongo_url,
            db_name,
            host,
            port,
            max_body_size,
            log_level,
            newsletter_unique_index,
            email: EmailConfig {
                sender,
                notify,
                transport,
            },
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("Invalid {key}: expected a boolean, got '{other}'")),
    }
}
