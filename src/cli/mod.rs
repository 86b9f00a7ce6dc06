// CLI output

mod narrator;

pub use narrator::Narrator;
