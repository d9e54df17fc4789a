use crate::config::MessengerConfig;
use crate::utils::error::MessengerError;
use regex::{Captures, Regex};
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

const NEED_MESSAGE_CONFIG: &str = "need_message_config";
const MESSAGE_KEY_NOT_FOUND: &str = "message_key_not_found";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is a valid regex"));

/// A message key plus the values for its `{placeholders}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRequest {
    pub msg: String,
    pub params: BTreeMap<String, String>,
}

impl MessageRequest {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }
}

/// Renders message templates from configuration.
#[derive(Debug, Clone)]
pub struct Messenger {
    messages: HashMap<String, String>,
}

impl Messenger {
    pub fn new(config: &MessengerConfig) -> Self {
        Self {
            messages: config.messages.clone(),
        }
    }

    /// 依照 `msg` 取出模板並代入參數
    ///
    /// A missing request or an unknown key is an error whose text is itself
    /// rendered from the `need_message_config` / `message_key_not_found`
    /// templates.
    pub fn get_message(&self, request: Option<&MessageRequest>) -> Result<String, MessengerError> {
        let request = match request {
            Some(request) => request,
            None => {
                return Err(MessengerError::ConfigRequired {
                    message: self.render_internal(NEED_MESSAGE_CONFIG, &BTreeMap::new()),
                })
            }
        };

        match self.messages.get(&request.msg) {
            Some(template) => Ok(substitute(template, &request.params)),
            None => {
                tracing::warn!("Message key '{}' is not configured", request.msg);
                let params = BTreeMap::from([("key".to_string(), request.msg.clone())]);
                Err(MessengerError::KeyNotFound {
                    key: request.msg.clone(),
                    message: self.render_internal(MESSAGE_KEY_NOT_FOUND, &params),
                })
            }
        }
    }

    /// Like `get_message`, but lookup failures render as their own text.
    pub fn render_with(&self, request: &MessageRequest) -> String {
        self.get_message(Some(request))
            .unwrap_or_else(|e| e.to_string())
    }

    pub fn render(&self, key: &str) -> String {
        self.render_with(&MessageRequest::new(key))
    }

    fn render_internal(&self, key: &str, params: &BTreeMap<String, String>) -> String {
        match self.messages.get(key) {
            Some(template) => substitute(template, params),
            None if key == NEED_MESSAGE_CONFIG => "A message configuration is required".to_string(),
            None => format!(
                "Message key '{}' was not found",
                params.get("key").map(String::as_str).unwrap_or_default()
            ),
        }
    }
}

/// 單次掃描替換 `{name}`，沒有提供值的保留原樣
///
/// Substituted values are never scanned again.
fn substitute(template: &str, params: &BTreeMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
