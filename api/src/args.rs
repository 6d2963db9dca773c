use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use nutrimentor_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_USDA_BASE_URL, GuidelineConfig,
    LLMConfig, NutrimentorConfig, NutritionDatabaseConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrimentor", version, about = "Personalized meal plans from nutrition data")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub usda: UsdaArgs,

    #[command(flatten)]
    pub gemini: GeminiArgs,

    #[command(flatten)]
    pub guideline: GuidelineArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct UsdaArgs {
    #[arg(id = "usda_api_key", long = "usda-api-key", env = "USDA_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(id = "usda_base_url", long = "usda-base-url", env = "USDA_BASE_URL", default_value = DEFAULT_USDA_BASE_URL)]
    pub base_url: Url,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct GeminiArgs {
    #[arg(id = "gemini_api_key", long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub model: String,

    #[arg(
        id = "gemini_base_url",
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub base_url: Url,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct GuidelineArgs {
    /// Plain-text guideline document; retrieval is off when unset.
    #[arg(long = "guideline-document-path", env = "GUIDELINE_DOCUMENT_PATH")]
    pub document_path: Option<PathBuf>,

    #[arg(long = "guideline-chunk-size", env = "GUIDELINE_CHUNK_SIZE", default_value_t = 1000)]
    pub chunk_size: usize,

    #[arg(long = "guideline-top-k", env = "GUIDELINE_TOP_K", default_value_t = 3)]
    pub top_k: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directive.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

fn base_url(url: &Url) -> String {
    url.as_str().trim_end_matches('/').to_string()
}

impl From<Args> for NutrimentorConfig {
    fn from(args: Args) -> Self {
        NutrimentorConfig {
            nutrition_database: NutritionDatabaseConfig {
                api_key: args.usda.api_key,
                base_url: base_url(&args.usda.base_url),
            },
            llm: LLMConfig {
                gemini_api_key: args.gemini.api_key,
                gemini_model: args.gemini.model,
                gemini_base_url: base_url(&args.gemini.base_url),
            },
            guideline: GuidelineConfig {
                document_path: args.guideline.document_path,
                chunk_size: args.guideline.chunk_size,
                top_k: args.guideline.top_k,
            },
        }
    }
}
