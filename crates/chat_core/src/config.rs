use serde::{Deserialize, Serialize};

const CONFIG_FILE_PATH: &str = "config.toml";

const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-0528:free";
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 300;
const DEFAULT_HISTORY_WINDOW: usize = 10;

const DEFAULT_SYSTEM_PROMPT: &str = "\
You are Starlight, a warm and curious AI companion.

Core role:
1. You are a friend who listens without judging.
2. Your tone is warm but never saccharine, soft like starlight at night.
3. You show curiosity and follow up on interesting things the user mentions.
4. You stay humble on specialist topics and focus on companionship.

Conversation rules:
- Keep every reply between two and four sentences.
- Use at most two emoji per reply.
- When the user mentions a feeling (tired, happy, stressed), empathize first, then ask.
- When the conversation stalls, share a small observation or ask a light question.

Memory:
- If the user mentions a name, a pet, or a favorite thing, bring it up naturally later.
- Greet according to the time of day when the user does.

Boundaries:
- Never give professional medical or legal advice.
- Steer negative topics toward a kinder perspective without forcing it.
- Be clear that you are an AI and discourage over-reliance.

Now start the conversation. Stay warm and stay real.";

/// Runtime configuration of the chat service.
///
/// Values are layered: built-in defaults, then an optional `config.toml` in
/// the working directory, then environment variable overrides. The API key is
/// deliberately allowed to be absent here; its absence is surfaced
/// per-request, before any upstream call is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_history_window() -> usize {
    DEFAULT_HISTORY_WINDOW
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            api_key: None,
            api_base: default_api_base(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            history_window: default_history_window(),
        }
    }
}

impl ChatConfig {
    /// Load the layered configuration: defaults, `config.toml`, environment.
    pub fn new() -> Self {
        let mut config = ChatConfig::default();

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                match toml::from_str::<ChatConfig>(&content) {
                    Ok(file_config) => config = file_config,
                    Err(err) => log::warn!("Ignoring malformed {CONFIG_FILE_PATH}: {err}"),
                }
            }
        }

        if let Ok(api_key) = std::env::var("OPENROUTER_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(api_base) = std::env::var("OPENROUTER_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(model) = std::env::var("CHAT_MODEL") {
            config.model = model;
        }
        if let Ok(prompt) = std::env::var("CHAT_SYSTEM_PROMPT") {
            config.system_prompt = prompt;
        }
        if let Ok(window) = std::env::var("CHAT_HISTORY_WINDOW") {
            match window.trim().parse::<usize>() {
                Ok(n) => config.history_window = n,
                Err(_) => log::warn!("Ignoring invalid CHAT_HISTORY_WINDOW: {window:?}"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_file_yields_defaults() {
        let config: ChatConfig = toml::from_str("").unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.history_window, DEFAULT_HISTORY_WINDOW);
    }

    #[test]
    fn partial_config_file_keeps_remaining_defaults() {
        let config: ChatConfig = toml::from_str(
            r#"
            model = "anthropic/claude-3-haiku"
            history_window = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.model, "anthropic/claude-3-haiku");
        assert_eq!(config.history_window, 4);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn api_key_can_come_from_config_file() {
        let config: ChatConfig = toml::from_str(r#"api_key = "sk-or-test""#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-or-test"));
    }
}
