use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{into_reply, Command};
use crate::strings::domain::StringService;

pub(crate) struct UppercaseCommand {
    string_service: Arc<dyn StringService>,
}

impl UppercaseCommand {
    pub(crate) fn new(string_service: Arc<dyn StringService>) -> Self {
        Self {
            string_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UppercaseCommandRequest {
    pub(crate) s: String,
}

impl UppercaseCommandRequest {
    pub fn new(s: &str) -> Self {
        Self {
            s: s.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct UppercaseCommandResponse {
    pub v: String,
    pub err: String,
}

impl UppercaseCommandResponse {
    pub fn new(v: String, err: String) -> Self {
        Self {
            v,
            err,
        }
    }
}

#[async_trait]
impl Command<UppercaseCommandRequest, UppercaseCommandResponse> for UppercaseCommand {
    async fn execute(&self, req: UppercaseCommandRequest) -> UppercaseCommandResponse {
        let (v, err) = into_reply(self.string_service.uppercase(req.s.as_str()).await);
        UppercaseCommandResponse::new(v, err)
    }
}
