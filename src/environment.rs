use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The statistics API the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The public disease.sh mirror serving per-country statistics.
    #[default]
    Production,
    /// A custom API base URL, e.g. a local fixture server.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the statistics API for this environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Production => "https://corona.lmao.ninja".to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Returns the full URL of the per-country statistics endpoint.
    pub fn countries_url(&self) -> String {
        format!("{}/v2/countries", self.api_url().trim_end_matches('/'))
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "production" => Ok(Environment::Production),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: s.to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { api_url } => write!(f, "Custom ({})", api_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.countries_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_countries_url() {
        let env = Environment::Production;
        assert_eq!(env.countries_url(), "https://corona.lmao.ninja/v2/countries");
    }

    #[test]
    fn custom_url_trailing_slash_is_trimmed() {
        let env = Environment::Custom {
            api_url: "http://localhost:8080/".to_string(),
        };
        assert_eq!(env.countries_url(), "http://localhost:8080/v2/countries");
    }

    #[test]
    fn parse_environment() {
        assert_eq!("production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(
            "http://localhost:9000".parse::<Environment>(),
            Ok(Environment::Custom {
                api_url: "http://localhost:9000".to_string()
            })
        );
        assert!("nonsense".parse::<Environment>().is_err());
    }
}
