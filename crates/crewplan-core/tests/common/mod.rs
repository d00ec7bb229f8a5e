use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crewplan_core::{
    Generator, GeneratorBuilder, GeneratorError,
    client::{CompletionRequest, ModelClient},
    models::{MemberAnswer, TeamMember},
};

/// Model double that replays one reply, or fails when it has none.
pub struct ScriptedClient {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> crewplan_core::Result<String> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(request.prompt.clone());
        self.reply.clone().ok_or_else(|| GeneratorError::Api {
            status: 500,
            message: "forced failure".to_string(),
        })
    }
}

/// Helper function to create a generator backed by a scripted client
pub fn create_test_generator(client: Arc<ScriptedClient>) -> Generator {
    GeneratorBuilder::new()
        .with_client(client)
        .build()
        .expect("Failed to create generator")
}

/// Helper function to create an offline generator
pub fn create_offline_generator() -> Generator {
    GeneratorBuilder::new()
        .with_api_key(None::<String>)
        .build()
        .expect("Failed to create generator")
}

pub fn member(id: &str, name: &str, skills: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        skills: skills.to_string(),
        answers: vec![MemberAnswer {
            question: "How much time can you commit weekly?".to_string(),
            answer: "5-15 hours".to_string(),
        }],
        match_score: None,
    }
}
