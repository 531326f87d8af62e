//! Domain models

use serde::Serialize;

/// Fixed description of one deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    /// Lowercase label reported by health checks
    pub label: &'static str,
    /// Display name
    pub name: &'static str,
    pub version: &'static str,
    pub message: &'static str,
    pub description: &'static str,
}

impl Environment {
    pub const fn blue() -> Self {
        Self {
            label: "blue",
            name: "Blue",
            version: "1.0.0",
            message: "Blue environment is active!",
            description: "Blue version of the application for blue-green deployment demo",
        }
    }

    pub const fn green() -> Self {
        Self {
            label: "green",
            name: "Green",
            version: "2.0.0",
            message: "Green environment is active!",
            description: "Green version of the application for blue-green deployment demo",
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HomeResponse {
    pub environment: &'static str,
    pub message: &'static str,
    pub hostname: String,
    pub version: &'static str,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: &'static str,
    pub hostname: String,
}

/// Body of `GET /info`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InfoResponse {
    pub environment: &'static str,
    pub version: &'static str,
    pub hostname: String,
    pub port: u16,
    pub description: &'static str,
}

impl Environment {
    pub fn home(&self, hostname: &str) -> HomeResponse {
        HomeResponse {
            environment: self.name,
            message: self.message,
            hostname: hostname.to_string(),
            version: self.version,
        }
    }

    pub fn health(&self, hostname: &str) -> HealthResponse {
        HealthResponse {
            status: "healthy",
            environment: self.label,
            hostname: hostname.to_string(),
        }
    }

    pub fn info(&self, hostname: &str, port: u16) -> InfoResponse {
        InfoResponse {
            environment: self.name,
            version: self.version,
            hostname: hostname.to_string(),
            port,
            description: self.description,
        }
    }
}
