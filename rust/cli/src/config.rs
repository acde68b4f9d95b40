use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use twentyone_engine::engine::EngineConfig;
use twentyone_engine::player::STARTING_BALANCE;
use twentyone_engine::rules::DEFAULT_BET_STEP;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u32,
    pub bet_step: u32,
    pub restart_delay_ms: u64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub bet_step: ValueSource,
    pub restart_delay_ms: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            bet_step: ValueSource::Default,
            restart_delay_ms: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            bet_step: DEFAULT_BET_STEP,
            restart_delay_ms: 3_000,
            seed: None,
        }
    }
}

impl Config {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            starting_balance: self.starting_balance,
            bet_step: self.bet_step,
            restart_delay: Duration::from_millis(self.restart_delay_ms),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("TWENTYONE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.bet_step {
            cfg.bet_step = v;
            sources.bet_step = ValueSource::File;
        }
        if let Some(v) = f.restart_delay_ms {
            cfg.restart_delay_ms = v;
            sources.restart_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("TWENTYONE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(balance) = std::env::var("TWENTYONE_BALANCE")
        && !balance.is_empty()
    {
        cfg.starting_balance = balance
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Ok(step) = std::env::var("TWENTYONE_BET_STEP")
        && !step.is_empty()
    {
        cfg.bet_step = step
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet step".into()))?;
        sources.bet_step = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var("TWENTYONE_RESTART_DELAY_MS")
        && !delay.is_empty()
    {
        cfg.restart_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid restart delay".into()))?;
        sources.restart_delay_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<u32>,
    #[serde(default)]
    bet_step: Option<u32>,
    #[serde(default)]
    restart_delay_ms: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_balance == 0 {
        return Err(ConfigError::Invalid("starting_balance must be >0".into()));
    }
    if cfg.bet_step == 0 {
        return Err(ConfigError::Invalid("bet_step must be >0".into()));
    }
    Ok(())
}
