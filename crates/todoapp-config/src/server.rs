use std::env;

/// Listen configuration for the two HTTP services.
///
/// The auth and todo services run as separate processes on separate ports,
/// sharing one database and one signing secret.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub auth_service_port: u16,
    pub todo_service_port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            auth_service_port: env::var("AUTH_SERVICE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4000),
            todo_service_port: env::var("TODO_SERVICE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4001),
        }
    }

    pub fn auth_service_addr(&self) -> String {
        format!("{}:{}", self.host, self.auth_service_port)
    }

    pub fn todo_service_addr(&self) -> String {
        format!("{}:{}", self.host, self.todo_service_port)
    }
}
