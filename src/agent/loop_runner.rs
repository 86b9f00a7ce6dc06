// Debate loop runner — perspectives, adversarial synthesis, scoring

use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::cli::Narrator;
use crate::generators::Generator;
use crate::memory::AttemptMemory;
use crate::metrics::{AttemptMetric, MetricsLogger};
use crate::tools::{parse_directive, ToolCatalog, ToolInvoker};

use super::criteria::extract_criteria;
use super::prompts;
use super::types::{AttemptOutcome, DebateConfig, SolveResult};
use super::SCORE_THRESHOLD;

/// The debate loop.
///
/// Drives the full attempt pipeline until one of the following holds:
/// - An attempt's quality score clears the threshold (early exit, that
///   attempt's solution wins even if an earlier one scored higher)
/// - The attempt cap is reached (the best-scoring solution wins)
///
/// Every collaborator failure along the way degrades to text that flows
/// through the pipeline and gets scored; nothing aborts a started run.
pub struct DebateAgent {
    generator: Arc<dyn Generator>,
    invoker: Arc<dyn ToolInvoker>,
    catalog: ToolCatalog,
    memory: AttemptMemory,
    narrator: Narrator,
    config: DebateConfig,
    metrics: Option<MetricsLogger>,
}

impl DebateAgent {
    pub fn new(
        generator: Arc<dyn Generator>,
        invoker: Arc<dyn ToolInvoker>,
        catalog: ToolCatalog,
        memory: AttemptMemory,
        narrator: Narrator,
        config: DebateConfig,
    ) -> Self {
        Self {
            generator,
            invoker,
            catalog,
            memory,
            narrator,
            config,
            metrics: None,
        }
    }

    /// Attach an attempt metrics logger.
    pub fn with_metrics(mut self, metrics: MetricsLogger) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run the full debate loop for one problem statement.
    pub async fn solve(&mut self, problem: &str) -> Result<SolveResult> {
        let criteria = extract_criteria(self.generator.as_ref(), problem).await;
        self.narrator.criteria(&criteria);

        let listing = self.catalog.render_listing();

        let mut best_solution = String::new();
        let mut best_score = -1.0_f64;
        let mut attempts: Vec<AttemptOutcome> = Vec::new();

        for attempt in 0..self.config.max_attempts {
            self.narrator
                .attempt_header(attempt + 1, self.config.max_attempts);

            // ── 1. Independent perspectives, strictly sequential ───────────
            let perspectives = self.generate_perspectives(problem, &listing).await;

            // ── 2. Debate them into one critical analysis ──────────────────
            self.narrator.stage("Debating different approaches...");
            let debate_result = self
                .generate_text(&prompts::debate_prompt(problem, &perspectives))
                .await;

            // ── 3. Synthesize the candidate solution ───────────────────────
            self.narrator.stage("Synthesizing final solution...");
            let solution = self
                .generate_with_capabilities(&prompts::synthesis_prompt(problem, &debate_result))
                .await;

            // ── 4. Score and record the attempt ────────────────────────────
            let score = self.evaluate(&solution, &criteria).await;
            let value = self.memory.update(
                attempt,
                score,
                self.config.learning_rate,
                self.config.discount_factor,
            );
            // Flush before the decision so a restart loses at most the
            // in-flight attempt.
            self.memory
                .save()
                .context("Failed to persist attempt values")?;

            let early_exit = score > SCORE_THRESHOLD;
            self.log_metric(problem, attempt, score, value, early_exit);
            attempts.push(AttemptOutcome {
                attempt,
                score,
                value,
            });

            if score > best_score {
                best_score = score;
                best_solution = solution.clone();
            }

            // ── 5. Decide ──────────────────────────────────────────────────
            if early_exit {
                self.narrator.success(score);
                return Ok(SolveResult {
                    solution,
                    score,
                    early_exit: true,
                    attempts,
                });
            }

            self.narrator.below_threshold(score, SCORE_THRESHOLD);
        }

        self.narrator.exhausted();
        Ok(SolveResult {
            solution: best_solution,
            score: best_score,
            early_exit: false,
            attempts,
        })
    }

    // ── Private helpers ────────────────────────────────────────────────────────

    /// Generate the attempt's independent perspectives, in ordinal order.
    async fn generate_perspectives(&self, problem: &str, listing: &str) -> Vec<String> {
        let count = self.config.perspective_count;
        let mut perspectives = Vec::with_capacity(count);

        for ordinal in 1..=count {
            let prompt = prompts::perspective_prompt(problem, listing, ordinal, count);
            perspectives.push(self.generate_with_capabilities(&prompt).await);
        }

        perspectives
    }

    /// One generation call with a capability escape hatch: a response that
    /// carries a well-formed directive is replaced by the capability result.
    async fn generate_with_capabilities(&self, prompt: &str) -> String {
        let text = self.generate_text(prompt).await;

        match parse_directive(&text) {
            Some(directive) => {
                self.narrator.tool_call(&directive.name);
                self.invoker.invoke(&directive.name, &directive.args).await
            }
            None => text,
        }
    }

    /// One generation call. Transport failures degrade to a descriptive
    /// string that continues through the pipeline in place of real content.
    async fn generate_text(&self, prompt: &str) -> String {
        match self.generator.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Generation failed; continuing with failure text: {e:#}");
                format!("Generation failed: {e:#}")
            }
        }
    }

    /// Score the solution against the criteria, clamped to [0.0, 1.0].
    ///
    /// The only locally-recovering scorer in the system: extraction or
    /// transport failure yields 0.5 rather than an error.
    async fn evaluate(&self, solution: &str, criteria: &[String]) -> f64 {
        let prompt = prompts::evaluation_prompt(solution, criteria);

        match self.generator.generate(&prompt).await {
            Ok(text) => parse_score(&text).unwrap_or_else(|| {
                tracing::warn!("No score found in evaluator response; defaulting to 0.5");
                0.5
            }),
            Err(e) => {
                tracing::warn!("Evaluation call failed ({e:#}); defaulting to 0.5");
                0.5
            }
        }
    }

    fn log_metric(&self, problem: &str, attempt: usize, score: f64, value: f64, early_exit: bool) {
        let Some(metrics) = &self.metrics else {
            return;
        };

        let metric = AttemptMetric {
            timestamp: Utc::now(),
            problem_hash: MetricsLogger::hash_problem(problem),
            attempt,
            score,
            value,
            model: self.config.model.clone(),
            early_exit,
        };

        if let Err(e) = metrics.log(&metric) {
            tracing::warn!("Failed to log attempt metric: {e:#}");
        }
    }
}

// ── Score parsing ──────────────────────────────────────────────────────────────

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+(?:\.\d+)?").unwrap());

/// Extract the first floating-point-looking token and clamp it to [0.0, 1.0].
///
/// Returns `None` when no numeric token is present.
fn parse_score(text: &str) -> Option<f64> {
    let raw = SCORE_RE.find(text)?.as_str();
    let score: f64 = raw.parse().ok()?;
    Some(score.clamp(0.0, 1.0))
}
