// Prompt construction for the debate loop
//
// Every stage's prompt is built here so the loop stays readable and the
// wording is testable. All prompts are single-shot: no conversation state.

/// Ask the backend for a comma-separated criteria line.
pub fn criteria_prompt(problem: &str) -> String {
    format!(
        "You are preparing to judge solutions to a problem.\n\
         Problem: {problem}\n\n\
         List 3 to 5 short evaluation criteria for judging a solution to this problem.\n\
         Answer with a single comma-separated line. No numbering, no explanations."
    )
}

/// Ask for one of `count` independent perspectives on the problem.
///
/// The prompt embeds the capability listing and the directive grammar; a
/// response consisting of a directive is executed instead of being treated
/// as prose.
pub fn perspective_prompt(problem: &str, catalog_listing: &str, ordinal: usize, count: usize) -> String {
    format!(
        "You are solving the following problem:\n\
         {problem}\n\n\
         Available capabilities:\n\
         {catalog_listing}\n\n\
         You are perspective {ordinal} of {count}. Propose one distinct approach to the \
         problem, different from what the other perspectives are likely to suggest.\n\
         If a listed capability would materially help, respond with a single directive of \
         the form CALL_TOOL: capability_name(arg1, arg2) and nothing else. Otherwise \
         describe your approach in plain text."
    )
}

/// Ask for a critical synthesis of all perspectives of one attempt.
pub fn debate_prompt(problem: &str, perspectives: &[String]) -> String {
    let labeled = perspectives
        .iter()
        .enumerate()
        .map(|(i, text)| format!("Perspective {}:\n{}", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Problem:\n\
         {problem}\n\n\
         {labeled}\n\n\
         Evaluate each perspective above on effectiveness, creativity, practicality, \
         capability usage, and limitations. Then synthesize the strongest combined \
         approach, stating which elements you kept and why."
    )
}

/// Ask for the final implementable solution from the debate analysis.
pub fn synthesis_prompt(problem: &str, debate_result: &str) -> String {
    format!(
        "Problem:\n\
         {problem}\n\n\
         Debate analysis:\n\
         {debate_result}\n\n\
         Produce the final solution: comprehensive, concrete, and implementable as \
         stated. Do not describe the debate; give the answer itself.\n\
         If executing a capability is the answer, respond with a single directive of \
         the form CALL_TOOL: capability_name(arg1, arg2) and nothing else."
    )
}

/// Ask for a bare 0.0-1.0 rating of the solution against the criteria.
pub fn evaluation_prompt(solution: &str, criteria: &[String]) -> String {
    format!(
        "Rate the following solution against these criteria: {criteria}.\n\n\
         Solution:\n\
         {solution}\n\n\
         Answer with a bare number between 0.0 and 1.0. No explanation.",
        criteria = criteria.join(", "),
        solution = solution,
    )
}
