use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::Command;
use crate::strings::domain::StringService;

pub(crate) struct CountCommand {
    string_service: Arc<dyn StringService>,
}

impl CountCommand {
    pub(crate) fn new(string_service: Arc<dyn StringService>) -> Self {
        Self {
            string_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CountCommandRequest {
    pub(crate) s: String,
}

impl CountCommandRequest {
    pub fn new(s: &str) -> Self {
        Self {
            s: s.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct CountCommandResponse {
    pub v: usize,
}

#[async_trait]
impl Command<CountCommandRequest, CountCommandResponse> for CountCommand {
    async fn execute(&self, req: CountCommandRequest) -> CountCommandResponse {
        CountCommandResponse { v: self.string_service.count(req.s.as_str()).await }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::strings::command::count_cmd::{CountCommand, CountCommandRequest, CountCommandResponse};
    use crate::strings::factory;

    #[tokio::test]
    async fn test_should_run_count() {
        let cmd = CountCommand::new(factory::create_string_service());
        assert_eq!(CountCommandResponse { v: 5 }, cmd.execute(CountCommandRequest::new("hello")).await);
        assert_eq!(CountCommandResponse { v: 0 }, cmd.execute(CountCommandRequest::new("")).await);
    }
}
