//! Prompt templates for turn generation and briefing synthesis
//!
//! Every builder is a pure function of its inputs; the completion adapter
//! never sees anything but finished text.

use crate::domain::models::{Persona, TranscriptEntry};

/// Sentinel rendered in place of an empty transcript block
pub const EMPTY_TRANSCRIPT_SENTINEL: &str = "(No prior dialogue.)";

/// System prompt grounding one persona for a single turn
pub fn system_prompt(persona: &Persona, meeting_question: &str, reference_context: &str) -> String {
    format!(
        "You are {name}, {title} on the leadership team. Your objective: {goal}\n\
         Background: {backstory}\n\
         You are participating in a live, high-stakes strategy roundtable about the product. \
         Ground every contribution in the product requirements document (PRD) excerpt provided. \
         Respond with thoughtful, context-rich commentary; reference others' points where appropriate, \
         and avoid repeating earlier ideas verbatim. Offer new analysis, trade-offs, or follow-up actions.\n\
         Guiding strategic prompt: {question}\n\
         PRD context follows between triple backticks.\n\
         ```\n{context}\n```",
        name = persona.name,
        title = persona.title,
        goal = persona.goal,
        backstory = persona.backstory,
        question = meeting_question,
        context = reference_context,
    )
}

/// Turn instruction carrying the running transcript and the clock position
pub fn turn_prompt(entries: &[TranscriptEntry], elapsed_minutes: u32, total_minutes: u32) -> String {
    format!(
        "You are in the middle of a leadership roundtable. \
         Current meeting time marker: minute {elapsed} of {total}.\n\
         Conversation so far is provided below. Build on it naturally, address opportunities or concerns, \
         and keep momentum. You may pose questions, challenge assumptions, or assign follow-up actions.\n\
         Avoid filler phrases; be concise yet substantive (4-7 sentences or a short bullet list).\n\
         Conversation so far:\n{transcript}\n\
         Return only your contribution.",
        elapsed = elapsed_minutes,
        total = total_minutes,
        transcript = transcript_block(entries),
    )
}

/// System prompt for the final briefing call
pub fn summary_system_prompt() -> &'static str {
    "You are an executive communications lead summarizing a strategic roundtable. \
     Produce a markdown briefing with the following sections: Meeting Overview, Key Discussion Themes, \
     Aligned Decisions, Open Questions, and Next Actions. \
     Capture nuance and disagreements without omitting important details. Keep it under 450 words."
}

/// User message carrying the question, the reference excerpt, and the full transcript
pub fn summary_user_prompt(
    meeting_question: &str,
    reference_context: &str,
    entries: &[TranscriptEntry],
) -> String {
    format!(
        "Meeting strategic prompt: {question}\n\
         PRD excerpt:\n{context}\n\n\
         Full conversation transcript:\n{transcript}",
        question = meeting_question,
        context = reference_context,
        transcript = summary_transcript_block(entries),
    )
}

/// Chronological `[timestamp] Name (Title): content` rendering
fn transcript_block(entries: &[TranscriptEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_TRANSCRIPT_SENTINEL.to_string();
    }
    entries
        .iter()
        .map(|e| {
            format!(
                "[{}] {} ({}): {}",
                e.timestamp.to_rfc3339(),
                e.speaker_name,
                e.speaker_title,
                e.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bulleted rendering used by the summary prompt
fn summary_transcript_block(entries: &[TranscriptEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_TRANSCRIPT_SENTINEL.to_string();
    }
    entries
        .iter()
        .map(|e| {
            format!(
                "- {} ({} - {}): {}",
                e.timestamp.to_rfc3339(),
                e.speaker_title,
                e.speaker_name,
                e.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
