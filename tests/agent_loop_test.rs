// Integration tests for the debate loop
//
// Drives DebateAgent end-to-end against a scripted generator. Per attempt
// the loop consumes perspective_count + 3 responses (perspectives, debate,
// synthesis, evaluation), plus one criteria response at the start of a run.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use mockingbird::agent::{DebateAgent, DebateConfig};
use mockingbird::cli::Narrator;
use mockingbird::generators::Generator;
use mockingbird::memory::AttemptMemory;
use mockingbird::tools::{Tool, ToolCatalog, ToolRegistry};

/// Generator that replays a fixed response script and records every prompt.
struct ScriptedGenerator {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

/// Response that simulates a transport failure when reached.
const FAIL: &str = "<transport-failure>";

impl ScriptedGenerator {
    fn new(responses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("response script exhausted"))?;

        if next == FAIL {
            anyhow::bail!("connection refused");
        }

        Ok(next)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Test capability: upper-cases its single argument.
struct Shout;

#[async_trait]
impl Tool for Shout {
    fn name(&self) -> &'static str {
        "shout"
    }

    fn description(&self) -> &'static str {
        "Upper-cases its input"
    }

    fn module(&self) -> &'static str {
        "test"
    }

    fn params(&self) -> &'static [&'static str] {
        &["text"]
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        Ok(args.join(" ").to_uppercase())
    }
}

struct Harness {
    agent: DebateAgent,
    generator: Arc<ScriptedGenerator>,
    memory_path: PathBuf,
    _dir: tempfile::TempDir,
}

fn harness(responses: &[&str], max_attempts: usize) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let memory_path = dir.path().join("q_memory.json");

    let generator = ScriptedGenerator::new(responses);

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(Shout));

    let config = DebateConfig {
        max_attempts,
        model: "scripted".to_string(),
        ..Default::default()
    };

    let agent = DebateAgent::new(
        generator.clone(),
        Arc::new(registry),
        ToolCatalog::new(),
        AttemptMemory::load(&memory_path).unwrap(),
        Narrator::silent(),
        config,
    );

    Harness {
        agent,
        generator,
        memory_path,
        _dir: dir,
    }
}

#[tokio::test]
async fn test_single_attempt_runs_full_pipeline_once() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "perspective one",
            "perspective two",
            "perspective three",
            "debate analysis",
            "the solution",
            "0.2",
        ],
        1,
    );

    let result = h.agent.solve("problem").await.unwrap();

    // Low score, but with max_attempts = 1 this attempt is still "best"
    assert_eq!(result.solution, "the solution");
    assert!((result.score - 0.2).abs() < 1e-12);
    assert!(!result.early_exit);
    assert_eq!(result.attempts.len(), 1);
    assert_eq!(h.generator.remaining(), 0);
}

#[tokio::test]
async fn test_high_score_exits_after_one_attempt() {
    // Script covers exactly one attempt; a second round would exhaust it
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "p1",
            "p2",
            "p3",
            "debate",
            "winning solution",
            "0.9",
        ],
        3,
    );

    let result = h.agent.solve("problem").await.unwrap();

    assert!(result.early_exit);
    assert_eq!(result.solution, "winning solution");
    assert_eq!(result.attempts.len(), 1);
    // No second round of perspective generation was started
    assert_eq!(h.generator.remaining(), 0);
}

#[tokio::test]
async fn test_exhaustion_returns_best_scoring_solution() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "p1", "p2", "p3", "debate", "solution A", "0.5",
            "p1", "p2", "p3", "debate", "solution B", "0.65",
            "p1", "p2", "p3", "debate", "solution C", "0.4",
        ],
        3,
    );

    let result = h.agent.solve("problem").await.unwrap();

    assert!(!result.early_exit);
    assert_eq!(result.solution, "solution B");
    assert!((result.score - 0.65).abs() < 1e-12);
    assert_eq!(result.attempts.len(), 3);
}

#[tokio::test]
async fn test_tied_scores_keep_first_solution() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "p1", "p2", "p3", "debate", "solution A", "0.5",
            "p1", "p2", "p3", "debate", "solution B", "0.5",
        ],
        2,
    );

    let result = h.agent.solve("problem").await.unwrap();

    // Strict > comparison: the later equal score does not displace the first
    assert_eq!(result.solution, "solution A");
}

#[tokio::test]
async fn test_unparseable_score_defaults_to_half() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "p1",
            "p2",
            "p3",
            "debate",
            "solution",
            "couldn't decide on a rating",
        ],
        1,
    );

    let result = h.agent.solve("problem").await.unwrap();
    assert!((result.score - 0.5).abs() < 1e-12);
}

#[tokio::test]
async fn test_out_of_range_score_is_clamped() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "p1",
            "p2",
            "p3",
            "debate",
            "solution",
            "1.5",
        ],
        1,
    );

    let result = h.agent.solve("problem").await.unwrap();
    // 1.5 clamps to 1.0, which also clears the threshold
    assert!((result.score - 1.0).abs() < 1e-12);
    assert!(result.early_exit);
}

#[tokio::test]
async fn test_value_table_flushed_with_recurrence_applied() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "p1", "p2", "p3", "debate", "solution A", "0.5",
            "p1", "p2", "p3", "debate", "solution B", "0.5",
        ],
        2,
    );

    h.agent.solve("problem").await.unwrap();

    // Reload from disk as a fresh process would
    let reloaded = AttemptMemory::load(&h.memory_path).unwrap();

    // attempt_0: 0 + 0.7 * (0.5 + 0.9 * 0 - 0) = 0.35
    let v0 = reloaded.get("attempt_0").unwrap();
    assert!((v0 - 0.35).abs() < 1e-12);

    // attempt_1: 0 + 0.7 * (0.5 + 0.9 * 0.35 - 0) = 0.5705
    let v1 = reloaded.get("attempt_1").unwrap();
    assert!((v1 - 0.5705).abs() < 1e-12);
}

#[tokio::test]
async fn test_perspective_directive_substitutes_capability_result() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "CALL_TOOL: shout(hello world)",
            "p2",
            "p3",
            "debate",
            "solution",
            "0.3",
        ],
        1,
    );

    h.agent.solve("problem").await.unwrap();

    // The debate prompt sees the capability result, not the directive
    let prompts = h.generator.prompts();
    let debate_prompt = &prompts[4];
    assert!(debate_prompt.contains("Perspective 1:\nHELLO WORLD"));
    assert!(!debate_prompt.contains("CALL_TOOL"));
}

#[tokio::test]
async fn test_synthesis_directive_result_becomes_solution() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "p1",
            "p2",
            "p3",
            "debate",
            "CALL_TOOL: shout(final answer)",
            "0.9",
        ],
        1,
    );

    let result = h.agent.solve("problem").await.unwrap();

    assert_eq!(result.solution, "FINAL ANSWER");
    // The evaluator was asked to rate the substituted text
    let prompts = h.generator.prompts();
    assert!(prompts[6].contains("FINAL ANSWER"));
}

#[tokio::test]
async fn test_unknown_capability_failure_text_flows_through() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "CALL_TOOL: telepathy(now)",
            "p2",
            "p3",
            "debate",
            "solution",
            "0.3",
        ],
        1,
    );

    h.agent.solve("problem").await.unwrap();

    let prompts = h.generator.prompts();
    assert!(prompts[4].contains("Tool 'telepathy' not found in registry."));
}

#[tokio::test]
async fn test_transport_failure_degrades_to_text_and_run_continues() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            FAIL, // perspective 1 fails at the transport level
            "p2",
            "p3",
            "debate",
            "solution",
            "0.3",
        ],
        1,
    );

    let result = h.agent.solve("problem").await.unwrap();

    assert_eq!(result.solution, "solution");
    let prompts = h.generator.prompts();
    assert!(prompts[4].contains("Generation failed"));
}

#[tokio::test]
async fn test_evaluation_transport_failure_defaults_to_half() {
    let mut h = harness(
        &[
            "relevance, rigor, clarity",
            "p1",
            "p2",
            "p3",
            "debate",
            "solution",
            FAIL,
        ],
        1,
    );

    let result = h.agent.solve("problem").await.unwrap();
    assert!((result.score - 0.5).abs() < 1e-12);
}
