use {
    anyhow::Result,
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    std::fs,
};

mod server;

// `Options` is a structup definition to provide clean command-line args for the auction server.
#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction server service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub config: ConfigOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Config Options")]
#[group(id = "Config")]
pub struct ConfigOptions {
    /// Path to a configuration file containing the accepted secret keys and allowed origins
    #[arg(long = "config")]
    #[arg(env = "AUCTION_CONFIG")]
    #[arg(default_value = "config.yaml")]
    pub config: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Bearer tokens accepted for creating, reading, updating and deleting auctions.
    #[serde(default)]
    pub secret_keys:     Vec<String>,
    /// Origins allowed by the CORS layer. All origins are allowed when empty.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        let yaml_content = fs::read_to_string(path)?;
        Self::parse(&yaml_content)
    }

    fn parse(yaml_content: &str) -> Result<Config> {
        let config: Config = serde_yaml::from_str(yaml_content)?;
        if config.secret_keys.iter().all(|key| key.is_empty()) {
            tracing::warn!("No secret keys configured, every guarded request will be rejected");
        }
        Ok(config)
    }
}
