// Run narration
//
// Human-readable progress for the attempt loop: attempt headers, stage
// markers, scores, decisions. Presentation only; the loop's contract does
// not depend on it, and `silent` turns it off wholesale (tests, scripting).

use crossterm::style::Stylize;

#[derive(Debug, Clone, Default)]
pub struct Narrator {
    silent: bool,
}

impl Narrator {
    pub fn new() -> Self {
        Self { silent: false }
    }

    pub fn silent() -> Self {
        Self { silent: true }
    }

    pub fn attempt_header(&self, attempt: usize, max_attempts: usize) {
        if self.silent {
            return;
        }
        println!(
            "\n{} Attempt {}/{}: generating perspectives...",
            "▸".cyan().bold(),
            attempt,
            max_attempts
        );
    }

    pub fn stage(&self, message: &str) {
        if self.silent {
            return;
        }
        println!("  {message}");
    }

    pub fn criteria(&self, criteria: &[String]) {
        if self.silent {
            return;
        }
        println!("Evaluation criteria: {}", criteria.join(", ").dark_grey());
    }

    pub fn tool_call(&self, name: &str) {
        if self.silent {
            return;
        }
        println!("  {} capability call: {}", "◈".blue(), name.to_string().blue());
    }

    pub fn success(&self, score: f64) {
        if self.silent {
            return;
        }
        println!(
            "{} High-quality solution found (score: {:.2})",
            "✓".green().bold(),
            score
        );
    }

    pub fn below_threshold(&self, score: f64, threshold: f64) {
        if self.silent {
            return;
        }
        println!(
            "{} Solution quality score: {:.2}, below threshold ({:.1})",
            "⚠".yellow().bold(),
            score,
            threshold
        );
    }

    pub fn exhausted(&self) {
        if self.silent {
            return;
        }
        println!(
            "{} Max attempts reached. Returning best solution found.",
            "⚠".yellow().bold()
        );
    }

    pub fn catalog_missing(&self, path: &std::path::Path) {
        if self.silent {
            return;
        }
        println!(
            "{} Capability registry {} not found. Run {} first to enable capabilities.",
            "⚠".yellow().bold(),
            path.display(),
            "mockingbird tools".cyan()
        );
    }
}
